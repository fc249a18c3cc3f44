//! Property tests for enum manifest rendering.

use std::collections::BTreeSet;
use std::path::PathBuf;

use proptest::prelude::*;

use iconforge::domain::entities::IconManifest;
use iconforge::domain::value_objects::IconPath;

fn icon_paths() -> impl Strategy<Value = BTreeSet<(String, u16)>> {
    proptest::collection::btree_set(
        (
            proptest::string::string_regex("[a-z][a-z0-9_]{0,10}").unwrap(),
            1u16..=64,
        ),
        0..=20,
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: N distinct assets give N sorted entries regardless of
    /// insertion order.
    #[test]
    fn property_manifest_is_order_independent(icons in icon_paths()) {
        let paths: Vec<PathBuf> = icons
            .iter()
            .map(|(name, px)| PathBuf::from(format!("icons/{px}px/{name}.svg")))
            .collect();

        let mut forward = IconManifest::new();
        for path in &paths {
            forward.insert(&IconPath::parse(path).unwrap()).unwrap();
        }
        let mut backward = IconManifest::new();
        for path in paths.iter().rev() {
            backward.insert(&IconPath::parse(path).unwrap()).unwrap();
        }

        prop_assert_eq!(forward.len(), icons.len());
        prop_assert_eq!(forward.render(), backward.render());

        let lines = forward.lines();
        let mut sorted = lines.clone();
        sorted.sort();
        prop_assert_eq!(lines, sorted);
    }
}
