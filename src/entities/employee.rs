// Employee Value Type
// Contact data for a person working at a company

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entities::Address;
use crate::record::{self, RecordError};

/// An employee record. Only the surname is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Employee {
    #[serde(
        alias = "first_name",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "record::lenient_opt_string"
    )]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "record::lenient_string")]
    pub surname: String,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "record::lenient_opt_string"
    )]
    pub phone: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "record::lenient_opt_string"
    )]
    pub cellphone: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "record::lenient_opt_string"
    )]
    pub email: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "record::lenient_opt_string"
    )]
    pub fax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

impl Employee {
    /// Create a new employee with the required surname.
    pub fn new(surname: impl Into<String>) -> Self {
        Employee {
            surname: surname.into(),
            ..Employee::default()
        }
    }

    /// Builder pattern: set the first name.
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Builder pattern: set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Builder pattern: set the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Builder pattern: set the postal address.
    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    /// Build an employee from an untyped record, substituting defaults for
    /// missing fields. Never fails.
    pub fn from_record(record: &Value) -> Self {
        Employee {
            first_name: record::opt_text_field(record, &["firstName", "first_name"]),
            surname: record::text_field(record, &["surname"]),
            phone: record::opt_text_field(record, &["phone"]),
            cellphone: record::opt_text_field(record, &["cellphone"]),
            email: record::opt_text_field(record, &["email"]),
            fax: record::opt_text_field(record, &["fax"]),
            address: record::get(record, &["address"]).map(Address::from_record),
        }
    }

    /// Build an employee from an untyped record, reporting a missing or
    /// mistyped surname. An address record, when present, is validated too.
    pub fn try_from_record(record: &Value) -> Result<Self, RecordError> {
        let address = match record::get(record, &["address"]) {
            None => None,
            Some(value) if value.is_object() => Some(Address::try_from_record(value)?),
            Some(_) => {
                return Err(RecordError::invalid("Employee", "address", "a nested record"))
            }
        };

        Ok(Employee {
            first_name: record::opt_text_field(record, &["firstName", "first_name"]),
            surname: record::require_text(record, "Employee", &["surname"])?,
            phone: record::opt_text_field(record, &["phone"]),
            cellphone: record::opt_text_field(record, &["cellphone"]),
            email: record::opt_text_field(record, &["email"]),
            fax: record::opt_text_field(record, &["fax"]),
            address,
        })
    }

    /// "First Surname" when a first name is present, else the surname alone.
    pub fn display_name(&self) -> String {
        match self.first_name.as_deref().filter(|f| !f.is_empty()) {
            Some(first_name) => [first_name, self.surname.as_str()].join(" "),
            None => self.surname.clone(),
        }
    }

    /// Case-insensitive substring search over surname and first name.
    pub fn matches(&self, pattern: &str) -> bool {
        let pattern = pattern.to_lowercase();

        self.surname.to_lowercase().contains(&pattern)
            || self
                .first_name
                .as_deref()
                .is_some_and(|first_name| first_name.to_lowercase().contains(&pattern))
    }
}

impl std::fmt::Display for Employee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_name())
    }
}

// ============================================================================
// TESTS
// ============================================================================
