use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::data::DataMap;

// Host-owned entities. Providers only read them; fields the host adds
// beyond these land in `extra` and survive a round trip.

/// One product entry within a cart or order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Minor currency units
    #[serde(default)]
    pub unit_price: i64,
    #[serde(default)]
    pub metadata: Value,
}

fn default_quantity() -> u32 { 1 }

impl LineItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, quantity: u32, unit_price: i64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            quantity,
            unit_price,
            metadata: Value::Null,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Cart {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_items(mut self, items: Vec<LineItem>) -> Self {
        self.items = items;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_id: Option<i64>,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Order {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// Shipment record the host keeps for an order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FulfillmentRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    #[serde(default)]
    pub data: DataMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FulfillmentRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// Return the host asks a provider to arrange
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnOrder {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub shipping_data: DataMap,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cart_keeps_unknown_fields() {
        let raw = json!({
            "id": "cart_01",
            "items": [{ "id": "item_1", "title": "Mug", "quantity": 2, "unit_price": 1500 }],
            "email": "someone@example.com",
        });

        let cart: Cart = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.extra.get("email"), Some(&json!("someone@example.com")));
        assert_eq!(cart.region_id, None);

        let back = serde_json::to_value(&cart).unwrap();
        assert_eq!(back["email"], raw["email"]);
    }

    #[test]
    fn test_line_item_defaults() {
        let item: LineItem = serde_json::from_value(json!({ "id": "item_1" })).unwrap();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.unit_price, 0);
        assert!(item.title.is_empty());
    }

    #[test]
    fn test_fulfillment_record_data() {
        let record: FulfillmentRecord = serde_json::from_value(json!({
            "id": "ful_1",
            "provider_id": "custom-fulfillment",
            "data": { "id": "custom-fulfillment" },
            "created_at": "2024-05-01T10:00:00Z",
        }))
        .unwrap();

        assert_eq!(record.data.id(), Some("custom-fulfillment"));
        assert!(record.created_at.is_some());
    }
}
