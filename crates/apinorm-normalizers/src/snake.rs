//! Snake-case key normalizer
//!
//! Copyright (c) 2025 Apinorm Team
//! Licensed under the Apache-2.0 license

use apinorm_core::KeyNormalizer;

/// Key normalizer stage mapping camelCase domain names to snake_case wire
/// names
///
/// `normalize` turns `"zipCode"` into `"zip_code"`; `denormalize` turns it
/// back. The round trip is stable for conventional camelCase identifiers
/// (lowercase start, no consecutive capitals, no digits adjoining a case
/// change); keys outside that shape are the chain author's contract to
/// avoid.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnakeCaseKeyNormalizer;

impl KeyNormalizer for SnakeCaseKeyNormalizer {
    fn normalize(&self, key: &str) -> String {
        let mut out = String::with_capacity(key.len() + 4);
        for ch in key.chars() {
            if ch.is_ascii_uppercase() {
                out.push('_');
                out.push(ch.to_ascii_lowercase());
            } else {
                out.push(ch);
            }
        }
        out
    }

    fn denormalize(&self, key: &str) -> String {
        let mut out = String::with_capacity(key.len());
        let mut upper_next = false;
        for ch in key.chars() {
            if ch == '_' {
                upper_next = true;
            } else if upper_next {
                out.push(ch.to_ascii_uppercase());
                upper_next = false;
            } else {
                out.push(ch);
            }
        }
        out
    }
}
