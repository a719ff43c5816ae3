//! Order wire types

use crate::core::draft::DraftOrderInput;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Line items handed in by the caller
///
/// The workflow never looks inside; the value is forwarded verbatim as the
/// `items` member of the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderLineItems(Value);

impl OrderLineItems {
    pub fn new(items: Value) -> Self {
        Self(items)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<Value> for OrderLineItems {
    fn from(items: Value) -> Self {
        Self(items)
    }
}

/// Body of `POST /api/orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub items: OrderLineItems,
}

impl OrderPayload {
    pub fn new(draft: &DraftOrderInput, items: &OrderLineItems) -> Self {
        Self {
            name: draft.name.clone(),
            phone: draft.phone.clone(),
            address: draft.address.clone(),
            items: items.clone(),
        }
    }
}

/// Identifier assigned to a created order by the backend
///
/// Accepts either a JSON string or a JSON number; numbers keep their decimal
/// text form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawOrderId", into = "String")]
pub struct OrderId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOrderId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawOrderId> for OrderId {
    fn from(raw: RawOrderId) -> Self {
        match raw {
            RawOrderId::Text(s) => OrderId(s),
            RawOrderId::Number(n) => OrderId(n.to_string()),
        }
    }
}

impl From<OrderId> for String {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Successful response body of `POST /api/orders`
///
/// Only `id` is read; any other member is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubmittedOrder {
    pub id: OrderId,
}

/// Path of the confirmation view for a created order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderConfirmationTarget(String);

impl OrderConfirmationTarget {
    /// Default confirmation route prefix
    pub const DEFAULT_PREFIX: &'static str = "/order-confirmation";

    /// Build `{prefix}/{id}`
    pub fn new(prefix: &str, id: &OrderId) -> Self {
        Self(format!("{}/{}", prefix.trim_end_matches('/'), id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderConfirmationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_serializes_expected_shape() {
        let draft = DraftOrderInput::new("Jane Doe", "5551234567", "1 Main St");
        let items = OrderLineItems::new(json!([{ "sku": "PIZZA-L", "qty": 2 }]));
        let payload = OrderPayload::new(&draft, &items);

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "name": "Jane Doe",
                "phone": "5551234567",
                "address": "1 Main St",
                "items": [{ "sku": "PIZZA-L", "qty": 2 }]
            })
        );
    }

    #[test]
    fn test_items_forwarded_verbatim() {
        let raw = json!({ "cart": { "lines": [1, 2, 3] }, "note": null });
        let items = OrderLineItems::new(raw.clone());
        let payload = OrderPayload::new(&DraftOrderInput::default(), &items);

        assert_eq!(serde_json::to_value(&payload).unwrap()["items"], raw);
    }

    #[test]
    fn test_submitted_order_string_id() {
        let order: SubmittedOrder = serde_json::from_value(json!({ "id": "ord_42" })).unwrap();
        assert_eq!(order.id.as_str(), "ord_42");
    }

    #[test]
    fn test_submitted_order_numeric_id() {
        let order: SubmittedOrder = serde_json::from_value(json!({ "id": 1017 })).unwrap();
        assert_eq!(order.id.as_str(), "1017");
    }

    #[test]
    fn test_submitted_order_ignores_extra_members() {
        let order: SubmittedOrder =
            serde_json::from_value(json!({ "id": "ord_1", "total": 12.5 })).unwrap();
        assert_eq!(order.id, OrderId::new("ord_1"));
    }

    #[test]
    fn test_submitted_order_without_id_is_error() {
        assert!(serde_json::from_value::<SubmittedOrder>(json!({ "ok": true })).is_err());
    }

    #[test]
    fn test_submitted_order_rejects_object_id() {
        assert!(serde_json::from_value::<SubmittedOrder>(json!({ "id": { "v": 1 } })).is_err());
    }

    #[test]
    fn test_confirmation_target_path() {
        let target = OrderConfirmationTarget::new(
            OrderConfirmationTarget::DEFAULT_PREFIX,
            &OrderId::new("ord_42"),
        );
        assert_eq!(target.as_str(), "/order-confirmation/ord_42");
    }

    #[test]
    fn test_confirmation_target_trims_trailing_slash() {
        let target = OrderConfirmationTarget::new("/thanks/", &OrderId::new("7"));
        assert_eq!(target.to_string(), "/thanks/7");
    }
}
