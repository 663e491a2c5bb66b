use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

/// A stored customer order.
///
/// `items` is an opaque JSON document (normally a list of item references).
/// Nothing ties it to rows of the `items` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub order_id: i32,
    #[schema(value_type = String, format = Date)]
    pub order_date: NaiveDate,
    pub order_status: String,
    pub customer_name: String,
    pub customer_contact: String,
    #[schema(value_type = Vec<Object>)]
    pub items: JsonValue,
}

/// Values for a new order; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub date: NaiveDate,
    pub status: String,
    pub customer_name: String,
    pub customer_contact: String,
    pub items: JsonValue,
}

impl NewOrder {
    pub fn into_order(self, order_id: i32) -> Order {
        Order {
            order_id,
            order_date: self.date,
            order_status: self.status,
            customer_name: self.customer_name,
            customer_contact: self.customer_contact,
            items: self.items,
        }
    }
}

/// Exact-match predicate for order reads.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OrderFilter {
    #[default]
    All,
    Date(NaiveDate),
    Status(String),
    Customer(String),
}

impl OrderFilter {
    /// Returns true if `order` satisfies the predicate.
    pub fn matches(&self, order: &Order) -> bool {
        match self {
            OrderFilter::All => true,
            OrderFilter::Date(d) => order.order_date == *d,
            OrderFilter::Status(s) => order.order_status == *s,
            OrderFilter::Customer(c) => order.customer_name == *c,
        }
    }

    /// Column the predicate applies to, if any.
    pub fn column(&self) -> Option<&'static str> {
        match self {
            OrderFilter::All => None,
            OrderFilter::Date(_) => Some("order_date"),
            OrderFilter::Status(_) => Some("order_status"),
            OrderFilter::Customer(_) => Some("customer_name"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order(status: &str, customer: &str, date: (i32, u32, u32)) -> Order {
        Order {
            order_id: 1,
            order_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            order_status: status.to_string(),
            customer_name: customer.to_string(),
            customer_contact: format!("{}@example.com", customer),
            items: json!([1, 2]),
        }
    }

    #[test]
    fn filter_matches_only_its_column() {
        let o = order("pending", "asha", (2023, 10, 1));
        assert!(OrderFilter::All.matches(&o));
        assert!(OrderFilter::Status("pending".into()).matches(&o));
        assert!(!OrderFilter::Status("Pending".into()).matches(&o));
        assert!(OrderFilter::Customer("asha".into()).matches(&o));
        assert!(!OrderFilter::Customer("pending".into()).matches(&o));
        assert!(OrderFilter::Date(NaiveDate::from_ymd_opt(2023, 10, 1).unwrap()).matches(&o));
        assert!(!OrderFilter::Date(NaiveDate::from_ymd_opt(2023, 10, 2).unwrap()).matches(&o));
    }

    #[test]
    fn filter_columns() {
        assert_eq!(OrderFilter::All.column(), None);
        assert_eq!(OrderFilter::Status("x".into()).column(), Some("order_status"));
        assert_eq!(OrderFilter::Customer("x".into()).column(), Some("customer_name"));
    }
}
