use thaliwada::infra::logging;
use thaliwada::CatalogService;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin catalog_admin -- <command>\n\
         \n\
         Commands:\n\
           create-schema   create the items/orders tables if absent\n\
           drop-schema     drop both tables (destructive, requires --yes)\n\
           items           print all items as JSON\n\
         \n\
         Requires env vars:\n\
           DATABASE_URL (or STORE_BACKEND=memory)\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }
    let confirmed = args.iter().any(|a| a == "--yes");

    let catalog = CatalogService::from_env().await?;

    match args[0].as_str() {
        "create-schema" => {
            catalog.create_schema().await?;
            println!("> Tables created.");
        }
        "drop-schema" => {
            if !confirmed {
                return Err(anyhow::anyhow!(
                    "drop-schema deletes every item and order. Re-run with --yes"
                ));
            }
            catalog.drop_schema().await?;
            println!("> Tables dropped.");
        }
        "items" => {
            let items = catalog.fetch_items().await?;
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        other => {
            eprintln!("Unknown command '{}'", other);
            usage_and_exit();
        }
    }

    Ok(())
}
