//! Domain vocabulary shared by the database and API crates.
//!
//! Nothing in here performs I/O: identifiers, resource kinds, the domain error
//! type, request-body validation rules and the free-text sanitizer.

pub mod error;
pub mod resource;
pub mod sanitize;
pub mod types;
pub mod validation;
