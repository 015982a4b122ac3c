//! Provider record types
//!
//! Every record keeps the fields this client does not model in an `extra`
//! map so downstream collectors see the provider payload unchanged.

pub mod employee;
pub mod file;
pub mod user;

pub use employee::{DirectoryResponse, Employee, EmployeeDetails, EmployeeDirectory};
pub use file::{File, FileCategory, FilesResponse};
pub use user::{User, UserListing, UserWithDetails};
