//! Reusable field validators
//!
//! Each validator takes the field name and its raw value and returns the
//! reason the value is rejected, if any.

use regex::Regex;
use std::sync::OnceLock;

/// Validator: field must contain something other than whitespace
pub fn required() -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &str| {
        if value.trim().is_empty() {
            Err(format!("'{}' is required", field))
        } else {
            Ok(())
        }
    }
}

/// Validator: phone number made only of digits, parentheses, dashes and spaces
///
/// Spaces are tolerated as separators so that `(555) 123-4567` passes, but a
/// value made only of spaces counts as empty.
pub fn phone() -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &str| {
        if value.trim().is_empty() {
            return Err(format!("'{}' is required", field));
        }

        if is_phone_charset(value) {
            Ok(())
        } else {
            Err(format!(
                "'{}' may only contain digits, parentheses and dashes (value: {})",
                field, value
            ))
        }
    }
}

fn is_phone_charset(value: &str) -> bool {
    static PHONE_CHARS: OnceLock<Regex> = OnceLock::new();
    let regex = PHONE_CHARS.get_or_init(|| Regex::new(r"^[0-9() -]+$").unwrap());
    regex.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    // === required() ===

    #[test]
    fn test_required_empty_returns_error() {
        let v = required();
        let result = v("name", "");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("required"));
    }

    #[test]
    fn test_required_whitespace_only_returns_error() {
        let v = required();
        assert!(v("address", "   \t\n").is_err());
    }

    #[test]
    fn test_required_value_returns_ok() {
        let v = required();
        assert!(v("name", "Jane Doe").is_ok());
    }

    #[test]
    fn test_required_padded_value_returns_ok() {
        let v = required();
        assert!(v("name", "  J  ").is_ok());
    }

    #[test]
    fn test_required_error_names_the_field() {
        let v = required();
        assert!(v("address", "").unwrap_err().contains("'address'"));
    }

    // === phone() ===

    #[test]
    fn test_phone_empty_returns_error() {
        let v = phone();
        assert!(v("phone", "").is_err());
    }

    #[test]
    fn test_phone_spaces_only_returns_error() {
        let v = phone();
        assert!(v("phone", "   ").is_err());
    }

    #[test]
    fn test_phone_digits_returns_ok() {
        let v = phone();
        assert!(v("phone", "5551234567").is_ok());
    }

    #[test]
    fn test_phone_formatted_returns_ok() {
        let v = phone();
        assert!(v("phone", "(555) 123-4567").is_ok());
        assert!(v("phone", "555-123-4567").is_ok());
    }

    #[test]
    fn test_phone_letters_return_error() {
        let v = phone();
        let result = v("phone", "555-CALL-NOW");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("digits"));
    }

    #[test]
    fn test_phone_plus_sign_returns_error() {
        let v = phone();
        assert!(v("phone", "+15551234567").is_err());
    }

    #[test]
    fn test_phone_dots_return_error() {
        let v = phone();
        assert!(v("phone", "555.123.4567").is_err());
    }

    #[test]
    fn test_phone_tab_separator_returns_error() {
        let v = phone();
        assert!(v("phone", "555\t1234").is_err());
    }

    #[test]
    fn test_phone_punctuation_only_returns_ok() {
        // Only the character set is checked, not the digit count
        let v = phone();
        assert!(v("phone", "()-").is_ok());
    }
}
