//! Activity log action constants and detail text builders.
//!
//! Lives in `core` so the API layer and any future tooling record the same
//! action labels.

/// Known action types for activity log entries.
pub mod action_types {
    pub const REGISTER_SAMPLE: &str = "register_sample";
}

/// Detail text recorded alongside a registration.
pub fn registration_details(volume_ul: f64, location: &str) -> String {
    format!("Sample registered with volume {volume_ul} µL at {location}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_details_mention_volume_and_location() {
        let details = registration_details(25.0, "Freezer A / Rack 1 / Shelf 2 / Box 6");
        assert_eq!(
            details,
            "Sample registered with volume 25 µL at Freezer A / Rack 1 / Shelf 2 / Box 6."
        );
    }
}
