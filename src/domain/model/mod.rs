//! Domain model definitions for the catalog: menu items and customer orders.

pub mod item;
pub mod order;

pub use item::{Item, NewItem};
pub use order::{NewOrder, Order, OrderFilter};

/// Name of the table holding menu items.
pub const ITEMS_TABLE: &str = "items";

/// Name of the table holding customer orders.
pub const ORDERS_TABLE: &str = "orders";
