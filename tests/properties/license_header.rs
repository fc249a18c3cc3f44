//! Property tests for license header maintenance.

use proptest::prelude::*;

use iconforge::domain::services::{HeaderChange, LicenseHeader};

fn svg_body() -> impl Strategy<Value = String> {
    proptest::string::string_regex("(<\\?xml version=\"1.0\"\\?>\n)?<svg>[a-z0-9 =\"/<>\n]{0,60}</svg>\n?")
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Applying the header twice equals applying it once.
    #[test]
    fn property_header_is_idempotent(body in svg_body()) {
        let header = LicenseHeader::new(2023, 2026);

        let once = header.apply(&body);
        let twice = header.apply(&once.content);

        prop_assert_eq!(once.change, HeaderChange::Inserted);
        prop_assert_eq!(twice.change, HeaderChange::Unchanged);
        prop_assert_eq!(twice.content, once.content);
    }

    /// PROPERTY: A newer year range replaces the old header exactly once.
    #[test]
    fn property_header_refresh_keeps_one_header(
        body in svg_body(),
        old_year in 2023i32..2030,
        bump in 1i32..5,
    ) {
        let old = LicenseHeader::new(2023, old_year);
        let new = LicenseHeader::new(2023, old_year + bump);

        let stamped = old.apply(&body).content;
        let refreshed = new.apply(&stamped);

        prop_assert_eq!(refreshed.change, HeaderChange::Replaced);
        prop_assert_eq!(refreshed.content.matches("<!--").count(), 1);
        prop_assert!(refreshed.content.contains(new.text()));
    }
}
