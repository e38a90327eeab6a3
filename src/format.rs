// Formatting Options & Record-Level Entry Points
// One-line rendering of address and customer records
//
// Two entry points exist for each entity: a free function taking an
// untyped record (for callers holding JSON-like data) and the `format`
// method on the constructed value type. Both produce identical output
// for the same logical data and options.

use anyhow::{Context, Result};
use serde_json::Value;

use crate::entities::{Address, Company, Customer, Employee};

// ============================================================================
// OPTIONS
// ============================================================================

/// Separator configuration for one-line address rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressFormat {
    /// Joins the street group and the zip group.
    pub separator: String,
    /// Joins street and house number.
    pub street_house_separator: String,
    /// Joins zip code and city.
    pub zip_city_separator: String,
}

impl Default for AddressFormat {
    fn default() -> Self {
        AddressFormat {
            separator: ", ".to_string(),
            street_house_separator: " ".to_string(),
            zip_city_separator: " ".to_string(),
        }
    }
}

impl AddressFormat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: set the top-level separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Builder pattern: set the street / house number separator.
    pub fn with_street_house_separator(mut self, separator: impl Into<String>) -> Self {
        self.street_house_separator = separator.into();
        self
    }

    /// Builder pattern: set the zip code / city separator.
    pub fn with_zip_city_separator(mut self, separator: impl Into<String>) -> Self {
        self.zip_city_separator = separator.into();
        self
    }
}

/// Display configuration for one-line customer rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerFormat {
    /// Prefer the company abbreviation over the full name when present.
    pub prefer_abbreviation: bool,
    /// Append the customer identifier after the display name.
    pub with_id: bool,
    /// Marker before the identifier. An empty marker renders as nothing.
    pub id_prefix: String,
    /// Marker after the identifier. An empty marker renders as nothing.
    pub id_suffix: String,
}

impl Default for CustomerFormat {
    fn default() -> Self {
        CustomerFormat {
            prefer_abbreviation: false,
            with_id: true,
            id_prefix: "(".to_string(),
            id_suffix: ")".to_string(),
        }
    }
}

impl CustomerFormat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: prefer the abbreviation over the full name.
    pub fn with_abbreviation_preference(mut self, prefer_abbreviation: bool) -> Self {
        self.prefer_abbreviation = prefer_abbreviation;
        self
    }

    /// Builder pattern: include or drop the identifier.
    pub fn with_id(mut self, with_id: bool) -> Self {
        self.with_id = with_id;
        self
    }

    /// Builder pattern: set the marker before the identifier.
    pub fn with_id_prefix(mut self, id_prefix: impl Into<String>) -> Self {
        self.id_prefix = id_prefix.into();
        self
    }

    /// Builder pattern: set the marker after the identifier.
    pub fn with_id_suffix(mut self, id_suffix: impl Into<String>) -> Self {
        self.id_suffix = id_suffix.into();
        self
    }
}

// ============================================================================
// RECORD-LEVEL FORMATTING
// ============================================================================

/// Converts a JSON record representing an address into a one-line string.
pub fn address_to_string(record: &Value) -> String {
    Address::from_record(record).to_string()
}

/// Like `address_to_string`, with explicit separators.
pub fn address_to_string_with(record: &Value, format: &AddressFormat) -> String {
    Address::from_record(record).format(format)
}

/// Converts a JSON record representing a customer into a one-line string.
pub fn customer_to_string(record: &Value) -> String {
    Customer::from_record(record).to_string()
}

/// Like `customer_to_string`, with explicit display options.
pub fn customer_to_string_with(record: &Value, format: &CustomerFormat) -> String {
    Customer::from_record(record).format(format)
}

// ============================================================================
// JSON TEXT ENTRY POINTS
// ============================================================================

/// Parses JSON text into an `Address`. Missing fields default to empty.
pub fn address_from_json_str(json: &str) -> Result<Address> {
    serde_json::from_str(json).context("failed to parse address record")
}

/// Parses JSON text into a `Company`. Missing fields default to empty.
pub fn company_from_json_str(json: &str) -> Result<Company> {
    serde_json::from_str(json).context("failed to parse company record")
}

/// Parses JSON text into a `Customer`. Missing fields default to empty.
pub fn customer_from_json_str(json: &str) -> Result<Customer> {
    serde_json::from_str(json).context("failed to parse customer record")
}

/// Parses JSON text into an `Employee`. Missing fields default to empty.
pub fn employee_from_json_str(json: &str) -> Result<Employee> {
    serde_json::from_str(json).context("failed to parse employee record")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn address_record() -> Value {
        json!({
            "street": "Main St",
            "houseNumber": "12",
            "zipCode": "90210",
            "city": "Springfield"
        })
    }

    fn customer_record() -> Value {
        json!({
            "id": 7,
            "company": {
                "id": 3,
                "name": "Acme Corp",
                "abbreviation": "ACME",
                "address": address_record()
            }
        })
    }

    #[test]
    fn test_address_to_string_defaults() {
        assert_eq!(
            address_to_string(&address_record()),
            "Main St 12, 90210 Springfield"
        );
    }

    #[test]
    fn test_address_to_string_with_separator() {
        let format = AddressFormat::new().with_separator(" / ");
        assert_eq!(
            address_to_string_with(&address_record(), &format),
            "Main St 12 / 90210 Springfield"
        );
    }

    #[test]
    fn test_customer_to_string_defaults() {
        assert_eq!(customer_to_string(&customer_record()), "Acme Corp (7)");
    }

    #[test]
    fn test_customer_to_string_with_options() {
        let record = customer_record();

        let format = CustomerFormat::new().with_abbreviation_preference(true);
        assert_eq!(customer_to_string_with(&record, &format), "ACME (7)");

        let format = CustomerFormat::new().with_id(false);
        assert_eq!(customer_to_string_with(&record, &format), "Acme Corp");

        let format = CustomerFormat::new()
            .with_id_prefix("#")
            .with_id_suffix("");
        assert_eq!(customer_to_string_with(&record, &format), "Acme Corp #7");
    }

    #[test]
    fn test_free_function_equals_typed_method() {
        let record = customer_record();
        let customer = Customer::from_record(&record);
        let format = CustomerFormat::new().with_abbreviation_preference(true);

        assert_eq!(customer_to_string(&record), customer.to_string());
        assert_eq!(
            customer_to_string_with(&record, &format),
            customer.format(&format)
        );

        let address_record = address_record();
        let address = Address::from_record(&address_record);
        assert_eq!(address_to_string(&address_record), address.to_string());
    }

    #[test]
    fn test_from_json_str() {
        let address = address_from_json_str(r#"{"street": "Main St", "houseNumber": 12, "zipCode": "90210", "city": "Springfield"}"#).unwrap();
        assert_eq!(address.to_string(), "Main St 12, 90210 Springfield");

        let customer = customer_from_json_str(
            r#"{"id": 7, "company": {"id": 3, "name": "Acme Corp", "address": {}}}"#,
        )
        .unwrap();
        assert_eq!(customer.to_string(), "Acme Corp (7)");

        assert!(address_from_json_str("not json").is_err());
    }

    #[test]
    fn test_from_json_str_company_and_employee() {
        let company =
            company_from_json_str(r#"{"id": 3, "name": "Acme Corp", "address": {}}"#).unwrap();
        assert_eq!(company.to_string(), "Acme Corp");

        let employee =
            employee_from_json_str(r#"{"firstName": "Richard", "surname": "Neumann"}"#).unwrap();
        assert_eq!(employee.to_string(), "Richard Neumann");
    }
}
