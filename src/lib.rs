// CRM Records - Core Library
// Value types and one-line formatting for address, company, customer
// and employee records

pub mod entities;
pub mod format;
pub mod record;

// Re-export commonly used types
pub use entities::{Address, Company, Customer, Employee};
pub use format::{
    address_from_json_str, address_to_string, address_to_string_with, company_from_json_str,
    customer_from_json_str, customer_to_string, customer_to_string_with, employee_from_json_str,
    AddressFormat, CustomerFormat,
};
pub use record::RecordError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
