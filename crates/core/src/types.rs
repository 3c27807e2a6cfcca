/// Sample identifiers are short random tokens assigned at registration,
/// not database serials.
pub type SampleId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
