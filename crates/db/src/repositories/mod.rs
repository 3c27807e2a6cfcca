//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod activity_repo;
pub mod sample_repo;

pub use activity_repo::ActivityLogRepo;
pub use sample_repo::SampleRepo;
