//! Nested-object value normalizer
//!
//! Copyright (c) 2025 Apinorm Team
//! Licensed under the Apache-2.0 license

use apinorm_core::{json_kind, ApiModel, ApiNormalizer, Error, Result, TypeDescriptor, ValueNormalizer};
use serde_json::Value;

/// Value normalizer for a property holding a nested model
///
/// Delegates both directions back into the engine with the wrapped type's
/// descriptor, which is the recursion point that lets arbitrarily deep
/// model graphs normalize: the nested level gets the engine's full
/// treatment (key filter, key chain, its own registrations) without the
/// engine knowing about nesting.
pub struct ObjectNormalizer {
    ty: &'static TypeDescriptor,
}

impl ObjectNormalizer {
    /// Wrap an explicit descriptor
    pub fn new(ty: &'static TypeDescriptor) -> Self {
        Self { ty }
    }

    /// Wrap a model type's registered descriptor
    pub fn of<T: ApiModel>() -> Self {
        Self::new(T::descriptor())
    }
}

impl ValueNormalizer for ObjectNormalizer {
    fn normalize(&self, engine: &ApiNormalizer, value: &Value) -> Result<Value> {
        let obj = value.as_object().ok_or(Error::ShapeMismatch {
            expected: "object",
            found: json_kind(value),
        })?;
        engine.normalize_map(obj, self.ty).map(Value::Object)
    }

    fn denormalize(&self, engine: &ApiNormalizer, value: &Value) -> Result<Value> {
        let obj = value.as_object().ok_or(Error::ShapeMismatch {
            expected: "object",
            found: json_kind(value),
        })?;
        engine.denormalize_map(obj, self.ty).map(Value::Object)
    }
}
