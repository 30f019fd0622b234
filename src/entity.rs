//! Observable entity wrapper.
//!
//! [`ObservableEntity`] wraps an already-constructed value and makes every
//! top-level property write observable. Reads and method calls pass through
//! untouched via `Deref`; writes route through [`set`](ObservableEntity::set),
//! which snapshots the previous value, broadcasts a [`PropertyEvent`] on the
//! modify channel, and only then commits the write.
//!
//! Properties are addressed by name through the serde data model: the
//! wrapped type must serialize to a keyed object, and each field's value
//! travels as a `serde_json::Value`. There is no `DerefMut`; every write
//! goes through [`set`](ObservableEntity::set).
//!
//! # Example
//!
//! ```
//! use observable_entities::{ObservableEntity, PropertyEvent};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Default, Serialize, Deserialize)]
//! struct Product {
//!     product_name: String,
//!     unit_price: f64,
//! }
//!
//! let mut product = ObservableEntity::<Product>::create();
//! product.on_modify().listen(|event: &PropertyEvent| {
//!     println!("{:?} changed", event.key());
//! });
//!
//! product.set("product_name", "Peas")?;
//! assert_eq!(product.product_name, "Peas");
//! # Ok::<(), observable_entities::EntityError>(())
//! ```

use std::collections::HashSet;
use std::ops::Deref;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::trace;

use crate::broadcast::Broadcast;
use crate::error::{EntityError, Result};
use crate::events::{ChangeEvent, PropertyEvent};

/// Wraps a value so that every named property write is broadcast on a
/// per-instance modify channel before it takes effect.
///
/// Clones share the modify channel and exclusion set with the original and
/// carry their own copy of the value, so an entity stored in an observable
/// collection keeps notifying the listeners registered on the handle the
/// caller retained.
#[derive(Clone, Debug)]
pub struct ObservableEntity<T> {
    inner: T,
    excluded: Arc<RwLock<HashSet<String>>>,
    modify: Broadcast<PropertyEvent>,
}

impl<T> ObservableEntity<T> {
    /// Wrap an already-constructed value.
    pub fn wrap(inner: T) -> Self {
        Self {
            inner,
            excluded: Arc::new(RwLock::new(HashSet::new())),
            modify: Broadcast::new(),
        }
    }

    /// Wrap a freshly default-constructed value.
    pub fn create() -> Self
    where
        T: Default,
    {
        Self::wrap(T::default())
    }

    /// The modify channel. Register listeners here to observe writes.
    pub fn on_modify(&self) -> &Broadcast<PropertyEvent> {
        &self.modify
    }

    /// Exempt property names from notification. Writes to an excluded
    /// property still apply; they just never broadcast. Notifications
    /// already delivered are unaffected.
    pub fn exclude_properties<I, S>(&mut self, properties: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut excluded = self.excluded.write();
        for property in properties {
            excluded.insert(property.into());
        }
    }

    /// Unwrap, discarding the channel and exclusion set.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> ObservableEntity<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Read a property by name as its serialized value.
    pub fn get(&self, property: &str) -> Result<Option<Value>> {
        Ok(self.fields()?.get(property).cloned())
    }

    /// Write a property by name.
    ///
    /// In order: the current value is snapshotted as `previous`, the
    /// post-write value is validated and built, the event is broadcast
    /// (unless the property is excluded), and the write commits. Every
    /// successful write notifies, even when the new value equals the old
    /// one. A failed write broadcasts nothing and leaves the value
    /// unchanged.
    pub fn set(&mut self, property: &str, value: impl Serialize) -> Result<()> {
        let mut fields = self.fields()?;
        if !fields.contains_key(property) {
            return Err(EntityError::UnknownProperty(property.to_string()));
        }

        let current = serde_json::to_value(value)?;
        let previous = fields.insert(property.to_string(), current.clone());
        let updated: T =
            serde_json::from_value(Value::Object(fields)).map_err(|e| EntityError::InvalidValue {
                property: property.to_string(),
                message: e.to_string(),
            })?;

        if !self.excluded.read().contains(property) {
            trace!(property, "observed property write");
            self.modify
                .emit(&ChangeEvent::property(property.to_string(), previous, current));
        }

        self.inner = updated;
        Ok(())
    }

    fn fields(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(&self.inner)? {
            Value::Object(fields) => Ok(fields),
            other => Err(EntityError::NotAnObject(json_kind(&other))),
        }
    }
}

impl<T> Deref for ObservableEntity<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
