//! Per-field error flags and the aggregated error message

use super::validators;
use crate::core::draft::{DraftOrderInput, OrderField};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix of the aggregated validation message
pub const INCOMPLETE_PREFIX: &str = "Please complete these sections: ";

/// Which fields failed the most recent validation pass
///
/// The key set is fixed to `name`, `phone` and `address`; serializing keeps
/// that order so a UI can render straight from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrorState {
    pub name: bool,
    pub phone: bool,
    pub address: bool,
}

impl FieldErrorState {
    /// Run a complete, non-short-circuiting pass over a draft
    pub fn evaluate(draft: &DraftOrderInput) -> Self {
        let mut pass = Self::default();
        pass.check_required(OrderField::Name, &draft.name);
        pass.check_phone(&draft.phone);
        pass.check_required(OrderField::Address, &draft.address);
        pass
    }

    /// Flag `field` when `value` is empty or whitespace-only
    ///
    /// Returns true when the field is invalid.
    pub fn check_required(&mut self, field: OrderField, value: &str) -> bool {
        let invalid = validators::required()(field.as_str(), value).is_err();
        self.set(field, invalid);
        invalid
    }

    /// Flag the phone field when it is empty or has characters outside the
    /// allowed set
    ///
    /// Returns true when the phone is invalid.
    pub fn check_phone(&mut self, value: &str) -> bool {
        let invalid = validators::phone()(OrderField::Phone.as_str(), value).is_err();
        self.set(OrderField::Phone, invalid);
        invalid
    }

    pub fn is_invalid(&self, field: OrderField) -> bool {
        match field {
            OrderField::Name => self.name,
            OrderField::Phone => self.phone,
            OrderField::Address => self.address,
        }
    }

    pub fn set(&mut self, field: OrderField, invalid: bool) {
        match field {
            OrderField::Name => self.name = invalid,
            OrderField::Phone => self.phone = invalid,
            OrderField::Address => self.address = invalid,
        }
    }

    /// True when at least one field is flagged
    pub fn has_error(&self) -> bool {
        self.name || self.phone || self.address
    }

    /// Flagged fields in name, phone, address order
    pub fn invalid_fields(&self) -> Vec<OrderField> {
        OrderField::ALL
            .into_iter()
            .filter(|field| self.is_invalid(*field))
            .collect()
    }

    /// The user-facing sentence listing every flagged field
    ///
    /// `None` when nothing is flagged.
    pub fn message(&self) -> Option<String> {
        if !self.has_error() {
            return None;
        }

        let names: Vec<&str> = self
            .invalid_fields()
            .into_iter()
            .map(|field| field.as_str())
            .collect();

        Some(format!("{}{}", INCOMPLETE_PREFIX, names.join(", ")))
    }

    /// Summarize this pass as a failure, if anything is flagged
    pub fn failure(&self) -> Option<ValidationFailure> {
        self.message().map(|message| ValidationFailure {
            fields: self.invalid_fields(),
            message,
        })
    }
}

/// Outcome of a submit attempt blocked by invalid fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    /// Invalid fields, in name, phone, address order
    pub fields: Vec<OrderField>,
    /// Aggregated message shown to the customer
    pub message: String,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
