use crate::app::catalog_service::CatalogService;
use crate::domain::model::{Item, Order, OrderFilter};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

pub const WELCOME_MESSAGE: &str = "Welcome to the Thaliwada API";

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
}

impl AppState {
    pub fn new(catalog: CatalogService) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct CreateItemRequest {
    /// Must not be blank.
    pub name: String,
    /// Must not be blank.
    pub description: String,
    /// Price in minor currency units. Fractional values are rejected.
    pub price: i32,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ItemCreatedResponse {
    pub message: String,
    pub item: Item,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ItemsResponse {
    pub items: Vec<Item>,
}

#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct CreateOrderRequest {
    /// Calendar date, `YYYY-MM-DD`.
    #[schema(value_type = String, format = Date, example = "2023-10-01")]
    pub date: NaiveDate,
    pub status: String,
    pub customer_name: String,
    pub customer_contact: String,
    /// Free-form item references; stored as-is.
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<JsonValue>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct OrderCreatedResponse {
    pub message: String,
    pub order: Order,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
}

/// Optional exact-match filter for `GET /orders`. At most one may be given.
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrdersQuery {
    /// Orders placed on this date (`YYYY-MM-DD`).
    #[param(value_type = Option<String>, format = Date)]
    pub date: Option<NaiveDate>,
    pub status: Option<String>,
    pub customer_name: Option<String>,
}

impl OrdersQuery {
    pub fn into_filter(self) -> Result<OrderFilter, String> {
        match (self.date, self.status, self.customer_name) {
            (None, None, None) => Ok(OrderFilter::All),
            (Some(date), None, None) => Ok(OrderFilter::Date(date)),
            (None, Some(status), None) => Ok(OrderFilter::Status(status)),
            (None, None, Some(name)) => Ok(OrderFilter::Customer(name)),
            _ => Err("at most one of 'date', 'status', 'customer_name' may be given".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_lists_everything() {
        assert_eq!(OrdersQuery::default().into_filter(), Ok(OrderFilter::All));
    }

    #[test]
    fn single_filter_is_accepted() {
        let q = OrdersQuery {
            status: Some("pending".to_string()),
            ..Default::default()
        };
        assert_eq!(q.into_filter(), Ok(OrderFilter::Status("pending".to_string())));
    }

    #[test]
    fn combined_filters_are_rejected() {
        let q = OrdersQuery {
            status: Some("pending".to_string()),
            customer_name: Some("asha".to_string()),
            ..Default::default()
        };
        assert!(q.into_filter().is_err());
    }
}
