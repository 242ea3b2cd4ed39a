//! Scalar passthrough value normalizer
//!
//! Copyright (c) 2025 Apinorm Team
//! Licensed under the Apache-2.0 license

use apinorm_core::{ApiNormalizer, Result, ValueNormalizer};
use serde_json::Value;

/// The identity value normalizer
///
/// Returns the value unchanged in both directions. Unregistered properties
/// already behave this way; the explicit variant exists for spots that
/// require a normalizer instance, such as an
/// [`ArrayNormalizer`](crate::ArrayNormalizer) element normalizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughNormalizer;

impl ValueNormalizer for PassthroughNormalizer {
    fn normalize(&self, _engine: &ApiNormalizer, value: &Value) -> Result<Value> {
        Ok(value.clone())
    }

    fn denormalize(&self, _engine: &ApiNormalizer, value: &Value) -> Result<Value> {
        Ok(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identity_in_both_directions() {
        let engine = ApiNormalizer::new();
        let value = json!({"deep": [1, "two", null]});

        assert_eq!(
            PassthroughNormalizer.normalize(&engine, &value).unwrap(),
            value
        );
        assert_eq!(
            PassthroughNormalizer.denormalize(&engine, &value).unwrap(),
            value
        );
    }
}
