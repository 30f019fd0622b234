//! Change event payloads broadcast by observable containers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single observed mutation.
///
/// Events are immutable snapshots: fields are private and a fresh event is
/// built for every mutation. Which fields are populated depends on the
/// mutation shape:
///
/// - entity property write: `key` (property name), `previous`, `current`
/// - map add/remove: `key` (entry key), `current` (absent when removing a
///   missing key)
/// - set add/remove: `current` only
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChangeEvent<K, V> {
    key: Option<K>,
    previous: Option<V>,
    current: Option<V>,
}

/// Event emitted for property writes on an
/// [`ObservableEntity`](crate::entity::ObservableEntity).
pub type PropertyEvent = ChangeEvent<String, Value>;

impl<K, V> ChangeEvent<K, V> {
    /// Event for a property write: the value before assignment and the
    /// value being written.
    pub fn property(key: K, previous: Option<V>, current: V) -> Self {
        Self {
            key: Some(key),
            previous,
            current: Some(current),
        }
    }

    /// Event for a keyed-collection add or remove.
    pub fn entry(key: K, current: Option<V>) -> Self {
        Self {
            key: Some(key),
            previous: None,
            current,
        }
    }

    /// Event for a set-membership add or remove.
    pub fn member(current: V) -> Self {
        Self {
            key: None,
            previous: None,
            current: Some(current),
        }
    }

    /// Property name or entry key, if this event is keyed.
    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    /// Value before the mutation (entity writes only).
    pub fn previous(&self) -> Option<&V> {
        self.previous.as_ref()
    }

    /// Value written, added, or removed.
    pub fn current(&self) -> Option<&V> {
        self.current.as_ref()
    }
}
