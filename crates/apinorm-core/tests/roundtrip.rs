//! Property tests for the round-trip law
//!
//! With no registered value normalizers, denormalize(normalize(m)) must
//! reproduce every non-private key of `m` unchanged, with or without a
//! well-formed key normalizer chain.
//!
//! Copyright (c) 2025 Apinorm Team
//! Licensed under the Apache-2.0 license

use apinorm_core::{ApiNormalizer, KeyNormalizer, TypeDescriptor};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

struct AppendSuffix(char);

impl KeyNormalizer for AppendSuffix {
    fn normalize(&self, key: &str) -> String {
        format!("{key}{}", self.0)
    }

    fn denormalize(&self, key: &str) -> String {
        key.strip_suffix(self.0).unwrap_or(key).to_owned()
    }
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(|b| json!(b)),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-zA-Z0-9 ]{0,12}".prop_map(|s| json!(s)),
    ]
}

fn domain_map() -> impl Strategy<Value = Map<String, Value>> {
    // Keys never start with an underscore, so the default filter passes
    // every entry.
    proptest::collection::vec(("[a-z][a-zA-Z0-9]{0,8}", scalar()), 0..8).prop_map(|entries| {
        let mut map = Map::new();
        for (key, value) in entries {
            map.insert(key, value);
        }
        map
    })
}

proptest! {
    #[test]
    fn round_trip_without_chain(input in domain_map()) {
        let engine = ApiNormalizer::new();
        let ty = TypeDescriptor::builder("Any").build();

        let wire = engine.normalize_map(&input, &ty).unwrap();
        let back = engine.denormalize_map(&wire, &ty).unwrap();
        prop_assert_eq!(back, input);
    }

    #[test]
    fn round_trip_with_suffix_chain(input in domain_map()) {
        let engine = ApiNormalizer::new()
            .add_key_normalizer(AppendSuffix('1'))
            .add_key_normalizer(AppendSuffix('2'));
        let ty = TypeDescriptor::builder("Any").build();

        let wire = engine.normalize_map(&input, &ty).unwrap();
        for key in wire.keys() {
            prop_assert!(key.ends_with("12"));
        }
        let back = engine.denormalize_map(&wire, &ty).unwrap();
        prop_assert_eq!(back, input);
    }
}
