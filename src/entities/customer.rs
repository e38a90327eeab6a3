// Customer Value Type
// A customer is an identifier attached to a company record

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entities::{Address, Company};
use crate::format::CustomerFormat;
use crate::record::{self, RecordError};

/// A customer record.
///
/// Name, abbreviation and address all proxy to the held company; the
/// customer itself only contributes the identifier (and an optional
/// free-form annotation).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    #[serde(deserialize_with = "record::lenient_i64")]
    pub id: i64,
    pub company: Company,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "record::lenient_opt_string"
    )]
    pub annotation: Option<String>,
}

impl Customer {
    /// Create a new customer.
    pub fn new(id: i64, company: Company) -> Self {
        Customer {
            id,
            company,
            annotation: None,
        }
    }

    /// Builder pattern: set the annotation.
    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// Build a customer from an untyped record, substituting defaults for
    /// missing fields. The nested company record is built the same way.
    pub fn from_record(record: &Value) -> Self {
        let company = record::get(record, &["company"])
            .map(Company::from_record)
            .unwrap_or_default();

        Customer {
            id: record::int_field(record, &["id"]),
            company,
            annotation: record::opt_text_field(record, &["annotation"]),
        }
    }

    /// Build a customer from an untyped record, reporting the first missing
    /// or mistyped required field, recursing into the company record.
    pub fn try_from_record(record: &Value) -> Result<Self, RecordError> {
        let company = record::require_object(record, "Customer", &["company"])?;

        Ok(Customer {
            id: record::require_int(record, "Customer", &["id"])?,
            company: Company::try_from_record(company)?,
            annotation: record::opt_text_field(record, &["annotation"]),
        })
    }

    /// The company's full name.
    pub fn name(&self) -> &str {
        &self.company.name
    }

    /// The company's abbreviation, if any.
    pub fn abbreviation(&self) -> Option<&str> {
        self.company.abbreviation.as_deref()
    }

    /// The company's address.
    pub fn address(&self) -> &Address {
        &self.company.address
    }

    /// The name to display for this customer: the company abbreviation when
    /// preferred, present and non-empty, otherwise the full company name.
    pub fn display_name(&self, prefer_abbreviation: bool) -> &str {
        if prefer_abbreviation {
            match self.abbreviation() {
                Some(abbreviation) if !abbreviation.is_empty() => abbreviation,
                _ => self.name(),
            }
        } else {
            self.name()
        }
    }

    /// One-line rendering: display name, optionally followed by the
    /// identifier wrapped in the configured markers.
    pub fn format(&self, format: &CustomerFormat) -> String {
        let name = self.display_name(format.prefer_abbreviation);

        if format.with_id {
            format!(
                "{} {}{}{}",
                name, format.id_prefix, self.id, format.id_suffix
            )
        } else {
            name.to_string()
        }
    }

    /// Match a search pattern against this customer.
    ///
    /// A numeric pattern matches the identifier exactly; any pattern also
    /// matches the company name (substring) and abbreviation (whole), both
    /// case-insensitively.
    pub fn matches(&self, pattern: &str) -> bool {
        if let Ok(id) = pattern.trim().parse::<i64>() {
            if id == self.id {
                return true;
            }
        }

        self.company.matches(pattern)
            || self
                .annotation
                .as_deref()
                .is_some_and(|annotation| annotation.to_lowercase().contains(&pattern.to_lowercase()))
    }
}

impl std::fmt::Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format(&CustomerFormat::default()))
    }
}

// ============================================================================
// TESTS
// ============================================================================
