//! Observable set collection.

use std::collections::hash_set;
use std::collections::HashSet;
use std::hash::Hash;

use crate::broadcast::Broadcast;
use crate::collections::ObservableCollection;
use crate::events::ChangeEvent;

/// A uniqueness-enforcing collection that broadcasts every add and remove.
///
/// Events are identified by value alone; `key` is never populated. The
/// channels report operations, not membership diffs: re-adding a value that
/// is already present broadcasts again even though membership is unchanged.
#[derive(Debug)]
pub struct ObservableSet<T> {
    entries: HashSet<T>,
    added: Broadcast<ChangeEvent<T, T>>,
    removed: Broadcast<ChangeEvent<T, T>>,
}

impl<T> ObservableSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashSet::with_capacity(capacity),
            added: Broadcast::new(),
            removed: Broadcast::new(),
        }
    }

    /// Channel broadcasting one event per added value.
    pub fn on_add(&self) -> &Broadcast<ChangeEvent<T, T>> {
        &self.added
    }

    /// Channel broadcasting one event per removed value.
    pub fn on_remove(&self) -> &Broadcast<ChangeEvent<T, T>> {
        &self.removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.entries.iter()
    }

    /// Remove all values without notifying.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T> ObservableSet<T>
where
    T: Eq + Hash,
{
    pub fn contains(&self, value: &T) -> bool {
        self.entries.contains(value)
    }
}

impl<T> ObservableSet<T>
where
    T: Eq + Hash + Clone,
{
    /// Insert a value, then broadcast it on the add channel. Membership is
    /// unchanged when the value was already present, but the broadcast
    /// happens either way.
    pub fn add(&mut self, value: T) -> &mut Self {
        self.entries.insert(value.clone());
        self.added.emit(&ChangeEvent::member(value));
        self
    }

    /// Insert values one at a time, broadcasting each in the order given.
    pub fn add_range<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.add(value);
        }
        self
    }

    /// Broadcast `value` on the remove channel, then remove it. Returns
    /// whether the value was present. The broadcast happens whether or not
    /// the value was a member.
    pub fn delete(&mut self, value: &T) -> bool {
        self.removed.emit(&ChangeEvent::member(value.clone()));
        self.entries.remove(value)
    }

    /// Delete values one at a time, broadcasting each in the order given.
    /// Returns `true` regardless of how many were present.
    pub fn delete_range<I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.delete(&value);
        }
        true
    }
}

impl<T> Default for ObservableSet<T> {
    fn default() -> Self {
        Self {
            entries: HashSet::new(),
            added: Broadcast::new(),
            removed: Broadcast::new(),
        }
    }
}

impl<T> ObservableCollection for ObservableSet<T> {
    type Event = ChangeEvent<T, T>;

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
impl<T> FromIterator<T> for ObservableSet<T>
where
    T: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
            added: Broadcast::new(),
            removed: Broadcast::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ObservableSet<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
