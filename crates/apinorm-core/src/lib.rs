//! Apinorm Core - Bidirectional model/API-object normalization engine
//!
//! This crate converts typed domain objects ("models") into plain
//! string-keyed maps suitable for a wire protocol ("API objects") and
//! back. Two independent, composable rules drive the conversion:
//!
//! - **Key normalization**: an ordered chain of [`KeyNormalizer`] stages
//!   renames every property name on the way out and is reversed, stage by
//!   stage, on the way back in. A [`KeyFilter`] (underscore-prefixed names
//!   excluded by default) decides which properties cross the wire at all.
//! - **Value normalization**: a [`ValueNormalizer`] registered per
//!   property on the type's [`TypeDescriptor`] converts that property's
//!   value in both directions. Registrations on ancestor descriptors are
//!   visible through descendants. Composite normalizers recurse through
//!   the engine, so arbitrarily nested model graphs normalize without the
//!   engine knowing about nesting.
//!
//! # Example
//!
//! ```
//! use apinorm_core::{ApiNormalizer, KeyNormalizer};
//! use serde_json::{json, Map};
//!
//! struct Prefixed;
//!
//! impl KeyNormalizer for Prefixed {
//!     fn normalize(&self, key: &str) -> String {
//!         format!("api_{key}")
//!     }
//!
//!     fn denormalize(&self, key: &str) -> String {
//!         key.strip_prefix("api_").unwrap_or(key).to_owned()
//!     }
//! }
//!
//! let engine = ApiNormalizer::new().add_key_normalizer(Prefixed);
//! let ty = apinorm_core::TypeDescriptor::builder("Ping").property("seq").build();
//!
//! let mut domain = Map::new();
//! domain.insert("seq".to_owned(), json!(3));
//! let wire = engine.normalize_map(&domain, &ty).unwrap();
//! assert_eq!(wire.get("api_seq"), Some(&json!(3)));
//!
//! let back = engine.denormalize_map(&wire, &ty).unwrap();
//! assert_eq!(back, domain);
//! ```
//!
//! Copyright (c) 2025 Apinorm Team
//! Licensed under the Apache-2.0 license

pub mod descriptor;
pub mod engine;
pub mod error;
pub mod key;
pub mod model;
pub mod value;

// Re-export main types for convenience
pub use descriptor::{TypeDescriptor, TypeDescriptorBuilder};
pub use engine::ApiNormalizer;
pub use error::{json_kind, Error, Result};
pub use key::{KeyFilter, KeyNormalizer, UnderscoreKeyFilter};
pub use model::ApiModel;
pub use value::ValueNormalizer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }
}
