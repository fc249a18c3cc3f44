//! Property tests for identifier and component name derivation.

use std::path::PathBuf;

use proptest::prelude::*;

use iconforge::domain::value_objects::{pascal_case, ComponentName, IconPath};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_-]{0,12}").unwrap()
}

fn size() -> impl Strategy<Value = u16> {
    1u16..=512
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Well-shaped paths always parse, and the derived strings
    /// are built from the path segments.
    #[test]
    fn property_icon_path_parses_well_shaped_paths(
        category in segment(),
        px in size(),
        name in segment(),
    ) {
        let path = PathBuf::from(format!("{category}/{px}px/{name}.svg"));
        let icon = IconPath::parse(&path).unwrap();

        prop_assert_eq!(icon.identifier(), format!("{name}_{px}"));
        prop_assert_eq!(icon.qualified_value(), format!("{category}_{px}px_{name}"));
    }

    /// PROPERTY: Paths with the wrong depth are rejected, never mis-parsed.
    #[test]
    fn property_icon_path_rejects_wrong_depth(
        segments in proptest::collection::vec(segment(), 0..=5)
            .prop_filter("not three segments", |s| s.len() != 2),
        name in segment(),
    ) {
        let mut path = PathBuf::new();
        for s in &segments {
            path.push(s);
        }
        path.push(format!("{name}.svg"));

        prop_assert!(IconPath::parse(&path).is_err());
    }

    /// PROPERTY: Component names are deterministic identifiers ending in
    /// `Icon` with a leading capital.
    #[test]
    fn property_component_name_is_an_identifier(
        dirs in proptest::collection::vec(segment(), 0..=3),
        px in size(),
        name in segment(),
    ) {
        let mut path = PathBuf::new();
        for d in &dirs {
            path.push(d);
        }
        path.push(format!("{px}px"));
        path.push(format!("{name}.svg"));

        let first = ComponentName::derive(&path).unwrap();
        let second = ComponentName::derive(&path).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert!(first.as_str().ends_with("Icon"));
        prop_assert!(first.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
        prop_assert!(first.as_str().starts_with(|c: char| c.is_ascii_uppercase()));
    }

    /// PROPERTY: pascal_case never panics and never emits separators.
    #[test]
    fn property_pascal_case_strips_separators(input in "\\PC{0,40}") {
        let out = pascal_case(&input);
        prop_assert!(!out.contains(['-', '_', '.', ' ']));
    }
}
