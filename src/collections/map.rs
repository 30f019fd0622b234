//! Observable keyed collection.

use std::collections::hash_map;
use std::collections::HashMap;
use std::hash::Hash;

use crate::broadcast::Broadcast;
use crate::collections::ObservableCollection;
use crate::events::ChangeEvent;

/// A key-unique collection that broadcasts every insertion and removal.
///
/// Entries live in an internal `HashMap`; iteration order is unspecified.
/// Inserting an existing key overwrites its value and counts as an
/// addition; there is no separate update event.
#[derive(Debug)]
pub struct ObservableMap<K, V> {
    entries: HashMap<K, V>,
    added: Broadcast<ChangeEvent<K, V>>,
    removed: Broadcast<ChangeEvent<K, V>>,
}

impl<K, V> ObservableMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            added: Broadcast::new(),
            removed: Broadcast::new(),
        }
    }

    /// Channel broadcasting one event per added entry.
    pub fn on_add(&self) -> &Broadcast<ChangeEvent<K, V>> {
        &self.added
    }

    /// Channel broadcasting one event per removed entry.
    pub fn on_remove(&self) -> &Broadcast<ChangeEvent<K, V>> {
        &self.removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.entries.iter()
    }

    pub fn keys(&self) -> hash_map::Keys<'_, K, V> {
        self.entries.keys()
    }

    pub fn values(&self) -> hash_map::Values<'_, K, V> {
        self.entries.values()
    }

    /// Remove all entries without notifying.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K, V> ObservableMap<K, V>
where
    K: Eq + Hash,
{
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }
}

impl<K, V> ObservableMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Insert or overwrite an entry, then broadcast it on the add channel.
    pub fn add(&mut self, key: K, value: V) -> &mut Self {
        self.entries.insert(key.clone(), value.clone());
        self.added.emit(&ChangeEvent::entry(key, Some(value)));
        self
    }

    /// Insert entries one at a time, broadcasting each in the order given.
    pub fn add_range<I>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in entries {
            self.add(key, value);
        }
        self
    }

    /// Broadcast the entry currently held for `key` on the remove channel,
    /// then remove it. Returns whether the key existed.
    ///
    /// The broadcast happens whether or not the key exists; for a missing
    /// key the event carries no value.
    pub fn delete(&mut self, key: &K) -> bool {
        let value = self.entries.get(key).cloned();
        self.removed.emit(&ChangeEvent::entry(key.clone(), value));
        self.entries.remove(key).is_some()
    }

    /// Delete keys one at a time, broadcasting each in the order given.
    /// Returns `true` regardless of how many keys existed.
    pub fn delete_range<I>(&mut self, keys: I) -> bool
    where
        I: IntoIterator<Item = K>,
    {
        for key in keys {
            self.delete(&key);
        }
        true
    }
}

impl<K, V> Default for ObservableMap<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            added: Broadcast::new(),
            removed: Broadcast::new(),
        }
    }
}

impl<K, V> ObservableCollection for ObservableMap<K, V> {
    type Event = ChangeEvent<K, V>;

    fn on_add(&self) -> &Broadcast<Self::Event> {
        &self.added
    }

    fn on_remove(&self) -> &Broadcast<Self::Event> {
        &self.removed
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Seeding from an iterator never notifies; no listener can be registered
/// before construction completes.
impl<K, V> FromIterator<(K, V)> for ObservableMap<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
            added: Broadcast::new(),
            removed: Broadcast::new(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a ObservableMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
