use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An inventory item as stored in the `items` table.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow, ToSchema)]
pub struct Item {
    /// Assigned by storage on insert; immutable afterwards.
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub quantity: i64,
}

/// Payload for creating an item. `name`, `price` and `quantity` are
/// required; a client-supplied `id` is ignored and storage assigns one.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateItem {
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub quantity: i64,
}

/// Partial update payload. Only fields present in the request body
/// overwrite the stored record; absent fields keep their current values.
#[derive(Debug, Serialize, Deserialize, Clone, Default, ToSchema)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub quantity: Option<i64>,
}

impl ItemPatch {
    /// Overwrites the supplied fields on `item`, leaving the rest untouched.
    pub fn apply(self, item: &mut Item) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(description) = self.description {
            item.description = Some(description);
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
    }
}

/// Human-readable message body, used for delete confirmations and errors.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct Detail {
    pub detail: String,
}

impl Detail {
    pub fn new(detail: impl Into<String>) -> Self {
        Detail {
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_item() -> Item {
        Item {
            id: 1,
            name: "A".to_string(),
            description: None,
            price: 10,
            quantity: 5,
        }
    }

    #[test]
    fn test_patch_overwrites_only_supplied_fields() {
        let mut item = stored_item();
        let patch = ItemPatch {
            price: Some(20),
            ..Default::default()
        };
        patch.apply(&mut item);
        assert_eq!(item.price, 20);
        assert_eq!(item.name, "A");
        assert_eq!(item.quantity, 5);
        assert!(item.description.is_none());
    }

    #[test]
    fn test_empty_patch_is_a_no_op() {
        let mut item = stored_item();
        ItemPatch::default().apply(&mut item);
        assert_eq!(item, stored_item());
    }

    #[test]
    fn test_patch_sets_optional_description() {
        let mut item = stored_item();
        let patch = ItemPatch {
            description: Some("restocked".to_string()),
            ..Default::default()
        };
        patch.apply(&mut item);
        assert_eq!(item.description.as_deref(), Some("restocked"));
        assert_eq!(item.name, "A");
    }

    #[test]
    fn test_full_patch_replaces_everything_but_id() {
        let mut item = stored_item();
        let patch = ItemPatch {
            name: Some("B".to_string()),
            description: Some("fresh".to_string()),
            price: Some(99),
            quantity: Some(1),
        };
        patch.apply(&mut item);
        assert_eq!(
            item,
            Item {
                id: 1,
                name: "B".to_string(),
                description: Some("fresh".to_string()),
                price: 99,
                quantity: 1,
            }
        );
    }
}
