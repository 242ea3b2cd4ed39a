//! Value normalization contract
//!
//! A value normalizer converts a single property's value between its
//! domain representation and its wire representation. Instances are
//! registered on a [`TypeDescriptor`](crate::TypeDescriptor) at
//! type-definition time and shared by every instance of that type.
//!
//! Copyright (c) 2025 Apinorm Team
//! Licensed under the Apache-2.0 license

use crate::engine::ApiNormalizer;
use crate::Result;
use serde_json::Value;

/// Converts one property's value in both directions
///
/// The engine is passed on every call so that composite normalizers
/// (nested objects, arrays) can recurse into it without holding a
/// reference. Implementations are stateless with respect to any
/// particular call and must be safe to share across threads.
///
/// A normalizer that receives a value of an unexpected shape must fail
/// with [`Error::ShapeMismatch`](crate::Error::ShapeMismatch) rather than
/// silently coerce.
pub trait ValueNormalizer: Send + Sync {
    /// Convert a domain value to its wire form
    fn normalize(&self, engine: &ApiNormalizer, value: &Value) -> Result<Value>;

    /// Convert a wire value back to its domain form
    fn denormalize(&self, engine: &ApiNormalizer, value: &Value) -> Result<Value>;
}
