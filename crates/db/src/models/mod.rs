//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO holding already-validated required fields
//! - An update DTO (all `Option` fields) for patches

pub mod folder;
pub mod note;
