//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//!
//! Samples and activity entries are write-once, so no update DTOs exist.

pub mod activity;
pub mod sample;
