// Company Value Type
// A named company with an optional abbreviation and an owned address

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entities::Address;
use crate::record::{self, RecordError};

/// A company record.
///
/// The abbreviation may be absent or empty; display code treats both the
/// same (see `Customer::display_name`). The annotation is free-form text
/// such as "bank" or "realtor".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Company {
    #[serde(deserialize_with = "record::lenient_i64")]
    pub id: i64,
    #[serde(deserialize_with = "record::lenient_string")]
    pub name: String,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "record::lenient_opt_string"
    )]
    pub abbreviation: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "record::lenient_opt_string"
    )]
    pub annotation: Option<String>,
    pub address: Address,
}

impl Company {
    /// Create a new company.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        abbreviation: Option<String>,
        address: Address,
    ) -> Self {
        Company {
            id,
            name: name.into(),
            abbreviation,
            annotation: None,
            address,
        }
    }

    /// Builder pattern: set the annotation.
    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// Build a company from an untyped record, substituting defaults for
    /// missing fields. The nested address record is built the same way.
    pub fn from_record(record: &Value) -> Self {
        let address = record::get(record, &["address"])
            .map(Address::from_record)
            .unwrap_or_default();

        Company {
            id: record::int_field(record, &["id"]),
            name: record::text_field(record, &["name"]),
            abbreviation: record::opt_text_field(record, &["abbreviation"]),
            annotation: record::opt_text_field(record, &["annotation"]),
            address,
        }
    }

    /// Build a company from an untyped record, reporting the first missing
    /// or mistyped required field, recursing into the address record.
    pub fn try_from_record(record: &Value) -> Result<Self, RecordError> {
        let address = record::require_object(record, "Company", &["address"])?;

        Ok(Company {
            id: record::require_int(record, "Company", &["id"])?,
            name: record::require_text(record, "Company", &["name"])?,
            abbreviation: record::opt_text_field(record, &["abbreviation"]),
            annotation: record::opt_text_field(record, &["annotation"]),
            address: Address::try_from_record(address)?,
        })
    }

    /// Case-insensitive match against name, abbreviation and annotation.
    ///
    /// The name and annotation match on substrings; the abbreviation only
    /// matches whole, since abbreviations are short codes.
    pub fn matches(&self, pattern: &str) -> bool {
        let lowered = pattern.to_lowercase();

        self.name.to_lowercase().contains(&lowered)
            || self
                .abbreviation
                .as_deref()
                .is_some_and(|abbreviation| abbreviation.eq_ignore_ascii_case(pattern))
            || self
                .annotation
                .as_deref()
                .is_some_and(|annotation| annotation.to_lowercase().contains(&lowered))
    }
}

impl std::fmt::Display for Company {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

// ============================================================================
// TESTS
// ============================================================================
