//! The model contract
//!
//! An [`ApiModel`] is a typed domain object the engine can walk: it names
//! its [`TypeDescriptor`], reads properties by name (distinguishing "never
//! set" from any set value), and accepts property assignments by name.
//! Inheritance is expressed as struct composition on the instance side and
//! parent links on the descriptor side; the engine only ever performs
//! additive metadata lookup, never behavioral dispatch.
//!
//! Copyright (c) 2025 Apinorm Team
//! Licensed under the Apache-2.0 license

use crate::descriptor::TypeDescriptor;
use crate::error::{json_kind, Error};
use crate::Result;
use serde_json::{Map, Value};

/// A typed domain object that can cross the normalization boundary
///
/// The `Default` bound is the zero-argument constructor `denormalize`
/// builds the fresh instance with; a type that cannot be
/// default-constructed cannot implement this trait, so the construction
/// failure of a dynamic system is a compile error here.
///
/// # Property semantics
///
/// `get` returns the property's *domain-shaped* value: domain property
/// names, untransformed values, nested models rendered via
/// [`to_domain`](ApiModel::to_domain). It returns `None` for a property
/// that was never set (`Option` fields model this), and such properties
/// are skipped entirely during normalization rather than emitted as
/// nulls.
///
/// `set` is permissive: the engine hands it every key recovered from the
/// wire, declared or not, and never fails the call for an unknown name.
/// Whether a model retains unknown keys (e.g. in an extras map) or drops
/// them is the implementation's choice. `set` should only error when a
/// *declared* property is given a value it cannot hold.
///
/// # Example
///
/// ```
/// use apinorm_core::{ApiModel, ApiNormalizer, Result, TypeDescriptor};
/// use once_cell::sync::Lazy;
/// use serde_json::{json, Value};
///
/// #[derive(Default)]
/// struct Device {
///     name: Option<String>,
///     firmware: Option<String>,
/// }
///
/// impl ApiModel for Device {
///     fn descriptor() -> &'static TypeDescriptor {
///         static DESCRIPTOR: Lazy<TypeDescriptor> = Lazy::new(|| {
///             TypeDescriptor::builder("Device")
///                 .property("name")
///                 .property("firmware")
///                 .build()
///         });
///         &DESCRIPTOR
///     }
///
///     fn get(&self, property: &str) -> Option<Value> {
///         match property {
///             "name" => self.name.clone().map(Value::String),
///             "firmware" => self.firmware.clone().map(Value::String),
///             _ => None,
///         }
///     }
///
///     fn set(&mut self, property: &str, value: Value) -> Result<()> {
///         match property {
///             "name" => self.name = value.as_str().map(str::to_owned),
///             "firmware" => self.firmware = value.as_str().map(str::to_owned),
///             _ => {}
///         }
///         Ok(())
///     }
/// }
///
/// let engine = ApiNormalizer::new();
/// let device = Device {
///     name: Some("edge-7".to_owned()),
///     firmware: None,
/// };
/// let wire = engine.normalize(&device).unwrap();
/// assert_eq!(wire.get("name"), Some(&json!("edge-7")));
/// assert!(!wire.contains_key("firmware")); // unset properties are omitted
/// ```
pub trait ApiModel: Default {
    /// The static descriptor registered for this type
    fn descriptor() -> &'static TypeDescriptor
    where
        Self: Sized;

    /// Read a property by its domain name; `None` means "never set"
    fn get(&self, property: &str) -> Option<Value>;

    /// Assign a property by its domain name
    fn set(&mut self, property: &str, value: Value) -> Result<()>;

    /// Render the model's set properties as a domain-shaped map
    ///
    /// Domain property names, untransformed values. This is the substrate
    /// composite value normalizers recurse on.
    fn to_domain(&self) -> Map<String, Value>
    where
        Self: Sized,
    {
        let mut obj = Map::new();
        for property in Self::descriptor().properties() {
            if let Some(value) = self.get(property) {
                obj.insert(property.to_owned(), value);
            }
        }
        obj
    }

    /// Build a fresh instance from a domain-shaped value
    ///
    /// Constructs the default instance first, then assigns each key of the
    /// object one by one via [`set`](ApiModel::set).
    fn from_domain(value: &Value) -> Result<Self>
    where
        Self: Sized,
    {
        let obj = value.as_object().ok_or_else(|| Error::Construction {
            type_name: Self::descriptor().name(),
            message: format!("expected a domain object, found {}", json_kind(value)),
        })?;

        let mut model = Self::default();
        for (key, value) in obj {
            model.set(key, value.clone())?;
        }
        Ok(model)
    }
}
