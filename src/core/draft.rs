//! Draft order fields

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three customer fields of the order form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderField {
    Name,
    Phone,
    Address,
}

impl OrderField {
    /// Every field, in the order used for validation and error messages
    pub const ALL: [OrderField; 3] = [OrderField::Name, OrderField::Phone, OrderField::Address];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderField::Name => "name",
            OrderField::Phone => "phone",
            OrderField::Address => "address",
        }
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(OrderField::Name),
            "phone" => Ok(OrderField::Phone),
            "address" => Ok(OrderField::Address),
            other => Err(ValidationError::UnknownField {
                field: other.to_string(),
            }),
        }
    }
}

/// The in-progress values typed by the customer
///
/// Lives only as long as the modal is visible. Values are stored exactly as
/// entered; validation happens on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftOrderInput {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl DraftOrderInput {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }

    /// Replace the value of one field
    pub fn set(&mut self, field: OrderField, value: impl Into<String>) {
        let value = value.into();
        match field {
            OrderField::Name => self.name = value,
            OrderField::Phone => self.phone = value,
            OrderField::Address => self.address = value,
        }
    }

    pub fn get(&self, field: OrderField) -> &str {
        match field {
            OrderField::Name => &self.name,
            OrderField::Phone => &self.phone,
            OrderField::Address => &self.address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_is_name_phone_address() {
        let names: Vec<&str> = OrderField::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(names, vec!["name", "phone", "address"]);
    }

    #[test]
    fn test_field_from_str_known() {
        assert_eq!("phone".parse::<OrderField>().unwrap(), OrderField::Phone);
        assert_eq!("address".parse::<OrderField>().unwrap(), OrderField::Address);
    }

    #[test]
    fn test_field_from_str_unknown_is_error() {
        let err = "email".parse::<OrderField>().unwrap_err();
        assert!(matches!(err, ValidationError::UnknownField { ref field } if field == "email"));
    }

    #[test]
    fn test_field_from_str_is_case_sensitive() {
        assert!("Name".parse::<OrderField>().is_err());
    }

    #[test]
    fn test_draft_set_and_get() {
        let mut draft = DraftOrderInput::default();
        draft.set(OrderField::Name, "Jane Doe");
        draft.set(OrderField::Address, "1 Main St");

        assert_eq!(draft.get(OrderField::Name), "Jane Doe");
        assert_eq!(draft.get(OrderField::Phone), "");
        assert_eq!(draft.get(OrderField::Address), "1 Main St");
    }

    #[test]
    fn test_draft_keeps_raw_value() {
        let mut draft = DraftOrderInput::default();
        draft.set(OrderField::Name, "  Jane  ");
        assert_eq!(draft.name, "  Jane  ");
    }

    #[test]
    fn test_field_serializes_lowercase() {
        let json = serde_json::to_string(&OrderField::Address).unwrap();
        assert_eq!(json, "\"address\"");
    }
}
