//! Observable collections.
//!
//! Both collections compose a standard container behind a narrowed API and
//! broadcast a [`ChangeEvent`](crate::events::ChangeEvent) for every add and
//! remove:
//! - [`ObservableMap`]: key-unique entries, events keyed by entry key
//! - [`ObservableSet`]: unique values, events identified by value alone
//!
//! Non-mutating operations (lookup, size, iteration) and `clear` never
//! notify. Bulk operations notify once per element in the order supplied
//! and are never coalesced.
//!
//! # Example
//!
//! ```
//! use observable_entities::{ChangeEvent, ObservableMap};
//!
//! let mut inventory = ObservableMap::new();
//! inventory.on_add().listen(|event: &ChangeEvent<&str, i32>| {
//!     println!("added {:?}", event.key());
//! });
//!
//! inventory.add("Bacon", 1).add("Lettuce", 2);
//! assert_eq!(inventory.len(), 2);
//! ```

mod map;
mod set;

pub use map::ObservableMap;
pub use set::ObservableSet;

use crate::broadcast::Broadcast;

/// Common surface of collections that broadcast add/remove events.
pub trait ObservableCollection {
    /// Event payload carried on both channels.
    type Event;

    /// Channel broadcasting one event per added element.
    fn on_add(&self) -> &Broadcast<Self::Event>;

    /// Channel broadcasting one event per removed element.
    fn on_remove(&self) -> &Broadcast<Self::Event>;

    /// Number of elements currently held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
