//! Key normalization and filtering contracts
//!
//! Key normalizers rename property names on their way to the wire and
//! recover them on the way back. They are composed into an ordered chain
//! by the engine: forward order during normalization, reverse order (each
//! stage's inverse) during denormalization. A key filter decides which
//! properties participate in normalization at all.
//!
//! Copyright (c) 2025 Apinorm Team
//! Licensed under the Apache-2.0 license

/// One stage of the key renaming chain
///
/// Implementations must be pure functions of the key string. A stage's
/// `denormalize` must undo its `normalize` for every key the chain can
/// produce; the engine composes and reverses the chain but does not verify
/// round-trip stability.
pub trait KeyNormalizer: Send + Sync {
    /// Map a domain property name one step toward its wire form
    fn normalize(&self, key: &str) -> String;

    /// Undo this stage's `normalize`
    fn denormalize(&self, key: &str) -> String;
}

/// Decides whether a property participates in normalization
///
/// Consulted once per property during `normalize`, before any renaming,
/// and never during `denormalize` (incoming wire data is not expected to
/// carry the private-name convention). Must be a pure function of the key.
pub trait KeyFilter: Send + Sync {
    fn should_normalize(&self, key: &str) -> bool;
}

/// Default key filter: excludes underscore-prefixed property names
///
/// Properties whose name starts with `_` mark computed or internal state
/// that must never cross the wire.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnderscoreKeyFilter;

impl KeyFilter for UnderscoreKeyFilter {
    fn should_normalize(&self, key: &str) -> bool {
        !key.starts_with('_')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underscore_filter_excludes_private_keys() {
        let filter = UnderscoreKeyFilter;
        assert!(!filter.should_normalize("_internal"));
        assert!(!filter.should_normalize("__cache"));
    }

    #[test]
    fn test_underscore_filter_accepts_public_keys() {
        let filter = UnderscoreKeyFilter;
        assert!(filter.should_normalize("name"));
        assert!(filter.should_normalize("snake_case_key"));
        assert!(filter.should_normalize("camelCaseKey"));
    }
}
