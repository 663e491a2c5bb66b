use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored catalog entry.
///
/// `item_price` is kept in minor currency units (e.g. paise), matching the
/// `INTEGER` column it is stored in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    pub item_id: i32,
    pub item_name: String,
    pub item_description: String,
    pub item_price: i32,
}

/// Values for a new catalog entry; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub price: i32,
}

impl NewItem {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: i32) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
        }
    }

    /// Builds the stored row once the store has assigned an id.
    pub fn into_item(self, item_id: i32) -> Item {
        Item {
            item_id,
            item_name: self.name,
            item_description: self.description,
            item_price: self.price,
        }
    }
}
