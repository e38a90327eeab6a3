// Entity Value Types
//
// Each entity is an immutable snapshot built from a raw record: construct,
// format, discard. Construction comes in a lenient form (`from_record`,
// missing fields default) and a strict form (`try_from_record`, missing
// fields error).

pub mod address;
pub mod company;
pub mod customer;
pub mod employee;

pub use address::Address;
pub use company::Company;
pub use customer::Customer;
pub use employee::Employee;
