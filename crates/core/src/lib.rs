//! Biotrack domain core.
//!
//! Pure domain logic with no I/O: the sample record schema and registration
//! validation, the lifecycle/alert evaluator, the query/filter engine with
//! its aggregations, CSV serialization, and label payload building. The
//! store adapter and HTTP surface live in `biotrack-db` and `biotrack-api`.

pub mod activity;
pub mod alert;
pub mod error;
pub mod export;
pub mod filter;
pub mod label;
pub mod registration;
pub mod sample;
pub mod types;
