//! Type descriptors and static value-normalizer registration
//!
//! A [`TypeDescriptor`] is the per-type metadata the engine consults when
//! normalizing or denormalizing: the type's declared property names, an
//! optional parent descriptor, and the value normalizers registered for
//! individual properties. Descriptors are built once per type with
//! [`TypeDescriptorBuilder`] and stored in a static (typically a
//! `once_cell::sync::Lazy`), which is this library's rendition of
//! declaration-time registration: fixed when the type is defined, shared
//! by all instances, never mutated afterwards.
//!
//! Registration lookup walks the descriptor's ancestor chain, so a
//! normalizer registered on a base type is visible through every
//! descendant without re-registration. A descendant that registers its own
//! normalizer for the same property name shadows the ancestor's.
//!
//! Copyright (c) 2025 Apinorm Team
//! Licensed under the Apache-2.0 license

use crate::value::ValueNormalizer;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Per-type metadata: declared properties, parent link, and value
/// normalizer registrations
pub struct TypeDescriptor {
    name: &'static str,
    parent: Option<&'static TypeDescriptor>,
    properties: Vec<&'static str>,
    normalizers: HashMap<&'static str, Arc<dyn ValueNormalizer>>,
}

impl TypeDescriptor {
    /// Start building a descriptor for the named type
    pub fn builder(name: &'static str) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder {
            name,
            parent: None,
            properties: Vec::new(),
            normalizers: HashMap::new(),
        }
    }

    /// The type's name, used in diagnostics
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The parent descriptor, if this type extends another
    pub fn parent(&self) -> Option<&'static TypeDescriptor> {
        self.parent
    }

    /// The union of own and inherited property names
    ///
    /// Ancestors come first and every name appears once, even when a
    /// descendant re-declares an inherited property.
    pub fn properties(&self) -> Vec<&'static str> {
        let mut chain = Vec::new();
        let mut current = Some(self);
        while let Some(ty) = current {
            chain.push(ty);
            current = ty.parent;
        }

        let mut names = Vec::new();
        for ty in chain.iter().rev() {
            for &prop in &ty.properties {
                if !names.contains(&prop) {
                    names.push(prop);
                }
            }
        }
        names
    }

    /// Look up the value normalizer registered for a property
    ///
    /// Checks this descriptor's own registrations first, then walks the
    /// ancestor chain until a registration is found or the chain is
    /// exhausted. At most one normalizer ever applies to a property.
    pub fn normalizer(&self, property: &str) -> Option<&dyn ValueNormalizer> {
        let mut current = Some(self);
        while let Some(ty) = current {
            if let Some(normalizer) = ty.normalizers.get(property) {
                return Some(normalizer.as_ref());
            }
            current = ty.parent;
        }
        None
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field("parent", &self.parent.map(TypeDescriptor::name))
            .field("properties", &self.properties)
            .field(
                "normalizers",
                &self.normalizers.keys().collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Fluent builder for [`TypeDescriptor`]
pub struct TypeDescriptorBuilder {
    name: &'static str,
    parent: Option<&'static TypeDescriptor>,
    properties: Vec<&'static str>,
    normalizers: HashMap<&'static str, Arc<dyn ValueNormalizer>>,
}

impl TypeDescriptorBuilder {
    /// Link the parent descriptor, making its declarations and
    /// registrations visible through this type
    pub fn parent(mut self, parent: &'static TypeDescriptor) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Declare a property with no value normalizer (identity passthrough)
    pub fn property(mut self, name: &'static str) -> Self {
        self.properties.push(name);
        self
    }

    /// Declare a property and register its value normalizer
    ///
    /// Registering twice for the same name on one builder keeps the last
    /// registration.
    pub fn normalizer(
        mut self,
        name: &'static str,
        normalizer: Arc<dyn ValueNormalizer>,
    ) -> Self {
        if !self.properties.contains(&name) {
            self.properties.push(name);
        }
        self.normalizers.insert(name, normalizer);
        self
    }

    /// Build the descriptor
    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor {
            name: self.name,
            parent: self.parent,
            properties: self.properties,
            normalizers: self.normalizers,
        }
    }
}
