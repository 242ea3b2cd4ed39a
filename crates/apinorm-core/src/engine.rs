//! The normalization engine
//!
//! [`ApiNormalizer`] converts models into API-friendly plain maps and
//! plain maps back into models. Property names are renamed through the
//! configured key normalizer chain (forward order out, reverse order with
//! each stage's inverse back in) and property values are converted through
//! the value normalizer registered for them on the type's descriptor,
//! identity when none is registered.
//!
//! The engine owns no mutable state beyond its configured policies, so one
//! instance can serve unsynchronized concurrent callers; it is
//! conventionally a process-wide singleton but can be instantiated with
//! distinct policies for isolated use.
//!
//! Copyright (c) 2025 Apinorm Team
//! Licensed under the Apache-2.0 license

use crate::descriptor::TypeDescriptor;
use crate::key::{KeyFilter, KeyNormalizer, UnderscoreKeyFilter};
use crate::model::ApiModel;
use crate::Result;
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// Normalizes models into API objects and denormalizes API objects into
/// models
pub struct ApiNormalizer {
    key_normalizers: Vec<Box<dyn KeyNormalizer>>,
    key_filter: Box<dyn KeyFilter>,
}

impl ApiNormalizer {
    /// Create an engine with an empty key normalizer chain and the
    /// default underscore key filter
    pub fn new() -> Self {
        Self {
            key_normalizers: Vec::new(),
            key_filter: Box::new(UnderscoreKeyFilter),
        }
    }

    /// Append a stage to the key normalizer chain
    ///
    /// Stages apply in the order they were added during normalization and
    /// in reverse order during denormalization.
    pub fn add_key_normalizer(mut self, normalizer: impl KeyNormalizer + 'static) -> Self {
        self.key_normalizers.push(Box::new(normalizer));
        self
    }

    /// Replace the key filter
    pub fn with_key_filter(mut self, filter: impl KeyFilter + 'static) -> Self {
        self.key_filter = Box::new(filter);
        self
    }

    /// Normalize a model into a plain map
    ///
    /// Walks the model's set properties (unset properties are skipped
    /// entirely, not emitted as nulls), filters each key, renames it
    /// through the chain, and converts its value through the normalizer
    /// registered under the original pre-rename name, including
    /// registrations inherited from ancestor descriptors. The input model
    /// is never mutated.
    pub fn normalize<T: ApiModel>(&self, model: &T) -> Result<Map<String, Value>> {
        let ty = T::descriptor();
        debug!(model = ty.name(), "normalizing model");
        self.normalize_map(&model.to_domain(), ty)
    }

    /// Normalize a domain-shaped map against a descriptor
    ///
    /// The map-level half of [`normalize`](ApiNormalizer::normalize);
    /// composite value normalizers recurse through it for nested models.
    pub fn normalize_map(
        &self,
        obj: &Map<String, Value>,
        ty: &TypeDescriptor,
    ) -> Result<Map<String, Value>> {
        let mut result = Map::new();

        for (key, value) in obj {
            if !self.key_filter.should_normalize(key) {
                trace!(model = ty.name(), %key, "key excluded by filter");
                continue;
            }

            let normalized = match ty.normalizer(key) {
                Some(normalizer) => normalizer.normalize(self, value)?,
                None => value.clone(),
            };
            result.insert(self.normalize_key(key), normalized);
        }

        Ok(result)
    }

    /// Denormalize a plain map into a fresh model instance
    ///
    /// Constructs the default instance first, then for each key of `obj`
    /// recovers the domain property name through the chain's inverses,
    /// converts the value through the normalizer registered under the
    /// recovered name, and assigns it. The key filter is deliberately not
    /// applied here: incoming wire data is not expected to carry the
    /// private-name convention. Keys that match no declared property are
    /// still handed to the model's `set` (see [`ApiModel::set`]).
    pub fn denormalize<T: ApiModel>(&self, obj: &Map<String, Value>) -> Result<T> {
        let ty = T::descriptor();
        debug!(model = ty.name(), "denormalizing into model");

        let mut model = T::default();
        for (property, value) in self.denormalize_map(obj, ty)? {
            model.set(&property, value)?;
        }
        Ok(model)
    }

    /// Denormalize a plain map into a domain-shaped map
    ///
    /// The map-level half of [`denormalize`](ApiNormalizer::denormalize).
    /// Recovered keys with no registration are carried into the output
    /// verbatim; the engine does not validate keys against the
    /// descriptor's declarations.
    pub fn denormalize_map(
        &self,
        obj: &Map<String, Value>,
        ty: &TypeDescriptor,
    ) -> Result<Map<String, Value>> {
        let mut result = Map::new();

        for (key, value) in obj {
            let property = self.denormalize_key(key);
            trace!(model = ty.name(), %key, %property, "recovered domain key");

            let denormalized = match ty.normalizer(&property) {
                Some(normalizer) => normalizer.denormalize(self, value)?,
                None => value.clone(),
            };
            result.insert(property, denormalized);
        }

        Ok(result)
    }

    fn normalize_key(&self, key: &str) -> String {
        let mut normalized = key.to_owned();
        for key_normalizer in &self.key_normalizers {
            normalized = key_normalizer.normalize(&normalized);
        }
        normalized
    }

    fn denormalize_key(&self, key: &str) -> String {
        let mut denormalized = key.to_owned();
        for key_normalizer in self.key_normalizers.iter().rev() {
            denormalized = key_normalizer.denormalize(&denormalized);
        }
        denormalized
    }
}

impl Default for ApiNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
