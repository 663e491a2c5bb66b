use crate::domain::model::{Item, Order};
use crate::transport::http::handlers::{health, items, orders};
use crate::transport::http::types::{
    AppState, CreateItemRequest, CreateOrderRequest, ErrorResponse, HealthResponse,
    ItemCreatedResponse, ItemsResponse, MessageResponse, OrderCreatedResponse, OrdersResponse,
};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::root_handler,
        health::healthcheck_handler,
        items::list_items_handler,
        items::create_item_handler,
        orders::list_orders_handler,
        orders::create_order_handler
    ),
    components(schemas(
        Item,
        Order,
        MessageResponse,
        ErrorResponse,
        HealthResponse,
        CreateItemRequest,
        ItemCreatedResponse,
        ItemsResponse,
        CreateOrderRequest,
        OrderCreatedResponse,
        OrdersResponse
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/items",
            get(items::list_items_handler).post(items::create_item_handler),
        )
        .route(
            "/orders",
            get(orders::list_orders_handler).post(orders::create_order_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// The full application: API routes, Swagger UI and a permissive CORS layer.
pub fn create_app(app_state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
}
