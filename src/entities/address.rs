// Address Value Type
// One-line and postal-label formatting for address records
//
// An address is a snapshot: built from a raw record, formatted, discarded.
// It carries no identity beyond its fields.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::format::AddressFormat;
use crate::record::{self, RecordError};

/// Address data.
///
/// `street`, `house_number`, `zip_code` and `city` are always present as
/// text (possibly empty); `po_box` replaces street and house number on
/// postal-box addresses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    #[serde(deserialize_with = "record::lenient_string")]
    pub street: String,
    #[serde(alias = "house_number", deserialize_with = "record::lenient_string")]
    pub house_number: String,
    #[serde(alias = "zip_code", deserialize_with = "record::lenient_string")]
    pub zip_code: String,
    #[serde(deserialize_with = "record::lenient_string")]
    pub city: String,
    #[serde(
        alias = "po_box",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "record::lenient_opt_string"
    )]
    pub po_box: Option<String>,
}

impl Address {
    /// Create a new street address.
    pub fn new(
        street: impl Into<String>,
        house_number: impl Into<String>,
        zip_code: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Address {
            street: street.into(),
            house_number: house_number.into(),
            zip_code: zip_code.into(),
            city: city.into(),
            po_box: None,
        }
    }

    /// Builder pattern: set the PO box number.
    pub fn with_po_box(mut self, po_box: impl Into<String>) -> Self {
        self.po_box = Some(po_box.into());
        self
    }

    /// Build an address from an untyped record, substituting the empty
    /// string for missing or non-scalar fields. Never fails.
    pub fn from_record(record: &Value) -> Self {
        Address {
            street: record::text_field(record, &["street"]),
            house_number: record::text_field(record, &["houseNumber", "house_number"]),
            zip_code: record::text_field(record, &["zipCode", "zip_code"]),
            city: record::text_field(record, &["city"]),
            po_box: record::opt_text_field(record, &["poBox", "po_box"]),
        }
    }

    /// Build an address from an untyped record, reporting the first missing
    /// or mistyped required field. `po_box` stays optional.
    pub fn try_from_record(record: &Value) -> Result<Self, RecordError> {
        Ok(Address {
            street: record::require_text(record, "Address", &["street"])?,
            house_number: record::require_text(record, "Address", &["houseNumber", "house_number"])?,
            zip_code: record::require_text(record, "Address", &["zipCode", "zip_code"])?,
            city: record::require_text(record, "Address", &["city"])?,
            po_box: record::opt_text_field(record, &["poBox", "po_box"]),
        })
    }

    /// Street and house number joined with a single space.
    pub fn street_house_number(&self) -> String {
        [self.street.as_str(), self.house_number.as_str()].join(" ")
    }

    /// Zip code and city joined with a single space.
    pub fn zip_code_city(&self) -> String {
        [self.zip_code.as_str(), self.city.as_str()].join(" ")
    }

    /// One-line rendering with configurable separators. The street group
    /// always precedes the zip group; fields render as-is, empty or not.
    pub fn format(&self, format: &AddressFormat) -> String {
        let street_group =
            [self.street.as_str(), self.house_number.as_str()].join(&format.street_house_separator);
        let zip_group =
            [self.zip_code.as_str(), self.city.as_str()].join(&format.zip_city_separator);
        [street_group, zip_group].join(&format.separator)
    }

    /// One-line rendering that degrades gracefully: a PO box wins over the
    /// street, empty groups are skipped instead of leaving stray separators.
    pub fn compact(&self) -> String {
        if let Some(po_box) = self.po_box.as_deref().filter(|p| !p.is_empty()) {
            return format!("{} {}", po_box, self.city);
        }

        let street_group = if self.street.is_empty() {
            None
        } else if self.house_number.is_empty() {
            Some(self.street.clone())
        } else {
            Some(self.street_house_number())
        };

        let zip_group = if self.zip_code.is_empty() {
            self.city.clone()
        } else {
            self.zip_code_city()
        };

        match street_group {
            Some(street_group) if zip_group.is_empty() => street_group,
            Some(street_group) => format!("{}, {}", street_group, zip_group),
            None => zip_group,
        }
    }

    /// Multi-line postal label. PO box addresses render as a "Postfach"
    /// line; the zip line is omitted when no zip code is known.
    pub fn label(&self) -> String {
        let mut result = String::new();

        if let Some(po_box) = self.po_box.as_deref().filter(|p| !p.is_empty()) {
            result.push_str(&format!("Postfach {}\n", po_box));
        } else if !self.street.is_empty() {
            if self.house_number.is_empty() {
                result.push_str(&format!("{}\n", self.street));
            } else {
                result.push_str(&format!("{} {}\n", self.street, self.house_number));
            }
        }

        if !self.zip_code.is_empty() {
            result.push_str(&format!("{} {}\n", self.zip_code, self.city));
        }

        result
    }

    /// Case-insensitive substring search over all address fields.
    pub fn matches(&self, pattern: &str) -> bool {
        let pattern = pattern.to_lowercase();

        self.street.to_lowercase().contains(&pattern)
            || self.house_number.to_lowercase().contains(&pattern)
            || self.zip_code.to_lowercase().contains(&pattern)
            || self
                .po_box
                .as_deref()
                .is_some_and(|po_box| po_box.to_lowercase().contains(&pattern))
            || self.city.to_lowercase().contains(&pattern)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format(&AddressFormat::default()))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn main_street() -> Address {
        Address::new("Main St", "12", "90210", "Springfield")
    }

    #[test]
    fn test_default_format() {
        assert_eq!(main_street().to_string(), "Main St 12, 90210 Springfield");
    }

    #[test]
    fn test_derived_getters() {
        let address = main_street();
        assert_eq!(address.street_house_number(), "Main St 12");
        assert_eq!(address.zip_code_city(), "90210 Springfield");
    }

    #[test]
    fn test_separator_override_is_substitutive() {
        let address = main_street();

        let format = AddressFormat::default().with_separator(" / ");
        assert_eq!(address.format(&format), "Main St 12 / 90210 Springfield");

        let format = AddressFormat::default().with_street_house_separator(" ~ ");
        assert_eq!(address.format(&format), "Main St ~ 12, 90210 Springfield");

        let format = AddressFormat::default().with_zip_city_separator("-");
        assert_eq!(address.format(&format), "Main St 12, 90210-Springfield");
    }

    #[test]
    fn test_from_record() {
        let record = json!({
            "street": "Main St",
            "houseNumber": "12",
            "zipCode": "90210",
            "city": "Springfield"
        });

        assert_eq!(Address::from_record(&record), main_street());
    }

    #[test]
    fn test_from_record_accepts_snake_case_and_numbers() {
        let record = json!({
            "street": "Main St",
            "house_number": 12,
            "zip_code": 90210,
            "city": "Springfield"
        });

        assert_eq!(Address::from_record(&record), main_street());
    }

    #[test]
    fn test_from_record_missing_fields_become_empty() {
        let record = json!({"city": "Springfield"});
        let address = Address::from_record(&record);

        assert_eq!(address.street, "");
        assert_eq!(address.house_number, "");
        assert_eq!(address.zip_code, "");
        assert_eq!(address.city, "Springfield");
        assert_eq!(address.po_box, None);
        // The fixed-shape formatter keeps the separators even for empty fields
        assert_eq!(address.to_string(), " ,  Springfield");
    }

    #[test]
    fn test_try_from_record_reports_missing_field() {
        let record = json!({"street": "Main St", "city": "Springfield"});
        let err = Address::try_from_record(&record).unwrap_err();

        assert_eq!(err.entity, "Address");
        assert_eq!(err.field, "houseNumber");
    }

    #[test]
    fn test_try_from_record_allows_absent_po_box() {
        let record = json!({
            "street": "Main St",
            "houseNumber": "12",
            "zipCode": "90210",
            "city": "Springfield"
        });

        let address = Address::try_from_record(&record).unwrap();
        assert_eq!(address.po_box, None);
    }

    #[test]
    fn test_compact_with_po_box() {
        let address = Address::new("", "", "90210", "Springfield").with_po_box("120 345");
        assert_eq!(address.compact(), "120 345 Springfield");
    }

    #[test]
    fn test_compact_degrades_gracefully() {
        assert_eq!(main_street().compact(), "Main St 12, 90210 Springfield");

        let no_house = Address::new("Main St", "", "90210", "Springfield");
        assert_eq!(no_house.compact(), "Main St, 90210 Springfield");

        let no_street = Address::new("", "", "90210", "Springfield");
        assert_eq!(no_street.compact(), "90210 Springfield");

        let city_only = Address::new("", "", "", "Springfield");
        assert_eq!(city_only.compact(), "Springfield");

        let no_zip = Address::new("Main St", "12", "", "Springfield");
        assert_eq!(no_zip.compact(), "Main St 12, Springfield");
    }

    #[test]
    fn test_label_street_address() {
        assert_eq!(main_street().label(), "Main St 12\n90210 Springfield\n");

        let no_house = Address::new("Main St", "", "90210", "Springfield");
        assert_eq!(no_house.label(), "Main St\n90210 Springfield\n");
    }

    #[test]
    fn test_label_po_box_address() {
        let address = Address::new("Main St", "12", "90210", "Springfield").with_po_box("120 345");
        assert_eq!(address.label(), "Postfach 120 345\n90210 Springfield\n");
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let address = main_street().with_po_box("120 345");

        assert!(address.matches("main"));
        assert!(address.matches("SPRING"));
        assert!(address.matches("902"));
        assert!(address.matches("120 345"));
        assert!(!address.matches("Elm St"));
    }

    #[test]
    fn test_deserialize_lenient() {
        let address: Address = serde_json::from_value(json!({
            "street": "Main St",
            "houseNumber": 12,
            "zipCode": "90210",
            "city": "Springfield",
            "poBox": 1701
        }))
        .unwrap();

        assert_eq!(address.house_number, "12");
        assert_eq!(address.po_box, Some("1701".to_string()));

        let sparse: Address = serde_json::from_value(json!({"city": "Springfield"})).unwrap();
        assert_eq!(sparse.street, "");
        assert_eq!(sparse.po_box, None);
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let value = serde_json::to_value(main_street()).unwrap();
        assert_eq!(
            value,
            json!({
                "street": "Main St",
                "houseNumber": "12",
                "zipCode": "90210",
                "city": "Springfield"
            })
        );
    }
}
