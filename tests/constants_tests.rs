// Host-side tests for page wiring constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use std::collections::HashSet;

#[test]
fn element_ids_are_distinct() {
    let ids: HashSet<&str> = [CANVAS_ID, TOOLTIP_ID, TOOLTIP_LABEL_ID, TOOLTIP_VALUE_ID]
        .into_iter()
        .collect();
    assert_eq!(ids.len(), 4);
}

#[test]
fn override_attributes_are_data_attributes() {
    assert!(VARIANT_ATTR.starts_with("data-"));
    for (attr, key) in OVERRIDE_ATTRS {
        assert!(attr.starts_with("data-"), "{attr}");
        assert!(!key.is_empty());
        assert_ne!(attr, VARIANT_ATTR);
    }
}

#[test]
fn override_keys_are_accepted_by_config() {
    // every attribute must map onto a key the config understands
    let mut config = globe_core::ViewerConfig::default();
    let samples = [
        ("mode", "orbit"),
        ("starfield", "full"),
        ("stars", "10"),
        ("sensitivity", "0.5"),
        ("dataset", "none"),
        ("texture", "none"),
        ("spin", "0.01"),
        ("pulse", "on"),
    ];
    for (_, key) in OVERRIDE_ATTRS {
        let value = samples
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .expect("sample value for key");
        assert!(config.apply(key, value).is_ok(), "{key}");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tooltip_placement_constants_are_positive() {
    assert!(TOOLTIP_OFFSET_X > 0.0);
    assert!(TOOLTIP_OFFSET_Y > 0.0);
    assert!(TOOLTIP_EDGE_MARGIN >= 0.0);
}
