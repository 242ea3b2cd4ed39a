//! Array value normalizer
//!
//! Copyright (c) 2025 Apinorm Team
//! Licensed under the Apache-2.0 license

use apinorm_core::{json_kind, ApiNormalizer, Error, Result, ValueNormalizer};
use serde_json::Value;

/// Value normalizer for a property holding an ordered sequence
///
/// Applies the wrapped element normalizer to every element with the engine
/// forwarded unchanged, preserving order and length; an empty sequence
/// maps to an empty sequence. The element normalizer may itself be an
/// [`ObjectNormalizer`](crate::ObjectNormalizer) or another
/// `ArrayNormalizer`, supporting arbitrary nesting depth. A non-array
/// input is a shape mismatch.
pub struct ArrayNormalizer {
    item: Box<dyn ValueNormalizer>,
}

impl ArrayNormalizer {
    pub fn new(item: impl ValueNormalizer + 'static) -> Self {
        Self {
            item: Box::new(item),
        }
    }
}

impl ValueNormalizer for ArrayNormalizer {
    fn normalize(&self, engine: &ApiNormalizer, value: &Value) -> Result<Value> {
        let items = value.as_array().ok_or(Error::ShapeMismatch {
            expected: "array",
            found: json_kind(value),
        })?;
        items
            .iter()
            .map(|item| self.item.normalize(engine, item))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array)
    }

    fn denormalize(&self, engine: &ApiNormalizer, value: &Value) -> Result<Value> {
        let items = value.as_array().ok_or(Error::ShapeMismatch {
            expected: "array",
            found: json_kind(value),
        })?;
        items
            .iter()
            .map(|item| self.item.denormalize(engine, item))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array)
    }
}
