//! Shipping details and their validation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::CommerceError;

/// Minimum length of a full name.
const MIN_NAME_LEN: usize = 2;
/// Allowed phone number lengths, in digits.
const PHONE_LEN: std::ops::RangeInclusive<usize> = 7..=15;
/// Minimum length of a delivery address.
const MIN_ADDRESS_LEN: usize = 5;

/// Where and to whom an order is delivered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ShippingInfo {
    /// Recipient full name.
    pub name: String,
    /// Contact number, digits only.
    pub phone: String,
    /// Delivery address.
    pub address: String,
    /// Optional delivery note.
    #[serde(default)]
    pub note: String,
}

impl ShippingInfo {
    /// Create shipping details. All fields are trimmed.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into().trim().to_string(),
            phone: phone.into().trim().to_string(),
            address: address.into().trim().to_string(),
            note: String::new(),
        }
    }

    /// Attach a delivery note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into().trim().to_string();
        self
    }

    /// The same details with every field trimmed.
    pub fn normalized(self) -> Self {
        Self::new(self.name, self.phone, self.address).with_note(self.note)
    }

    /// Every field that fails validation, in form order.
    pub fn errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError::new(ShippingField::Name, "Full name is required"));
        } else if name.chars().count() < MIN_NAME_LEN {
            errors.push(FieldError::new(
                ShippingField::Name,
                "Name must be at least 2 characters",
            ));
        }

        let phone = self.phone.trim();
        if phone.is_empty() {
            errors.push(FieldError::new(ShippingField::Phone, "Phone number is required"));
        } else if !phone.chars().all(|c| c.is_ascii_digit()) {
            errors.push(FieldError::new(
                ShippingField::Phone,
                "Phone number must contain only digits",
            ));
        } else if !PHONE_LEN.contains(&phone.len()) {
            errors.push(FieldError::new(
                ShippingField::Phone,
                "Please enter a valid phone number",
            ));
        }

        let address = self.address.trim();
        if address.is_empty() {
            errors.push(FieldError::new(ShippingField::Address, "Address is required"));
        } else if address.chars().count() < MIN_ADDRESS_LEN {
            errors.push(FieldError::new(
                ShippingField::Address,
                "Please enter a complete address",
            ));
        }

        errors
    }

    /// Check the details, returning all field errors on failure.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let errors = self.errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(CommerceError::InvalidShipping(errors))
        }
    }

    /// Check if the details pass validation.
    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }
}

/// A validated shipping field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShippingField {
    Name,
    Phone,
    Address,
}

impl ShippingField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingField::Name => "name",
            ShippingField::Phone => "phone",
            ShippingField::Address => "address",
        }
    }
}

impl fmt::Display for ShippingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One failed field and the message to show next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The offending field.
    pub field: ShippingField,
    /// Human-readable message.
    pub message: &'static str,
}

impl FieldError {
    fn new(field: ShippingField, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(info: &ShippingInfo) -> Vec<ShippingField> {
        info.errors().into_iter().map(|e| e.field).collect()
    }

    #[test]
    fn test_valid_shipping() {
        let info = ShippingInfo::new("Juan Dela Cruz", "09171234567", "123 Rizal Ave, Manila");
        assert!(info.is_valid());
        assert!(info.validate().is_ok());
    }

    #[test]
    fn test_fields_are_trimmed() {
        let info = ShippingInfo::new("  Ana  ", " 1234567 ", " 12 Elm ").with_note("  ring twice ");
        assert_eq!(info.name, "Ana");
        assert_eq!(info.phone, "1234567");
        assert_eq!(info.address, "12 Elm");
        assert_eq!(info.note, "ring twice");
    }

    #[test]
    fn test_normalized_trims_literal_fields() {
        let info = ShippingInfo {
            name: " Ana Cruz ".to_string(),
            phone: "\t1234567".to_string(),
            address: "12 Elm St \n".to_string(),
            note: "  ".to_string(),
        }
        .normalized();
        assert_eq!(info, ShippingInfo::new("Ana Cruz", "1234567", "12 Elm St"));
    }

    #[test]
    fn test_missing_fields() {
        let info = ShippingInfo::new("", "", "");
        assert_eq!(
            fields(&info),
            vec![ShippingField::Name, ShippingField::Phone, ShippingField::Address]
        );
        assert_eq!(info.errors()[0].message, "Full name is required");
    }

    #[test]
    fn test_short_name() {
        let info = ShippingInfo::new("J", "1234567", "12 Elm St");
        assert_eq!(fields(&info), vec![ShippingField::Name]);
    }

    #[test]
    fn test_phone_rules() {
        let letters = ShippingInfo::new("Ana", "0917-123", "12 Elm St");
        assert_eq!(letters.errors()[0].message, "Phone number must contain only digits");

        let short = ShippingInfo::new("Ana", "123456", "12 Elm St");
        assert_eq!(short.errors()[0].message, "Please enter a valid phone number");

        let long = ShippingInfo::new("Ana", "1234567890123456", "12 Elm St");
        assert!(!long.is_valid());

        let bounds = [
            ShippingInfo::new("Ana", "1234567", "12 Elm St"),
            ShippingInfo::new("Ana", "123456789012345", "12 Elm St"),
        ];
        assert!(bounds.iter().all(ShippingInfo::is_valid));
    }

    #[test]
    fn test_short_address() {
        let info = ShippingInfo::new("Ana", "1234567", "Elm");
        assert_eq!(info.errors()[0].message, "Please enter a complete address");
    }

    #[test]
    fn test_validate_error_lists_fields() {
        let err = ShippingInfo::new("A", "abc", "x").validate().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("name: Name must be at least 2 characters"));
        assert!(message.contains("phone: Phone number must contain only digits"));
        assert!(message.contains("address: Please enter a complete address"));
    }

    #[test]
    fn test_note_is_optional_in_storage() {
        let json = r#"{"name":"Ana","phone":"1234567","address":"12 Elm St"}"#;
        let info: ShippingInfo = serde_json::from_str(json).unwrap();
        assert!(info.note.is_empty());
        assert!(info.is_valid());
    }
}
