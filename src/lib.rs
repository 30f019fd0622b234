//! # Observable Entities
//!
//! In-memory entities and collections that broadcast structured change
//! events when they mutate, so application layers (UI bindings,
//! derived-state caches, audit logs) can react to writes without polling
//! or hand-written setters.
//!
//! ## Core Concepts
//!
//! - **Entities**: wrap any serde-serializable value; property writes are
//!   intercepted and broadcast before they apply
//! - **Collections**: a keyed map and a set that broadcast every add and
//!   remove, one event per element
//! - **Broadcasts**: synchronous, ordered, multi-listener channels carrying
//!   immutable change events
//!
//! ## Example
//!
//! ```
//! use observable_entities::ObservableMap;
//!
//! let mut inventory = ObservableMap::new();
//!
//! let (tx, rx) = crossbeam_channel::unbounded();
//! inventory.on_add().listen(tx);
//!
//! inventory.add_range([("Bacon", 1), ("Lettuce", 2), ("Tomatoes", 3)]);
//!
//! assert_eq!(inventory.len(), 3);
//! let added: Vec<_> = rx.try_iter().collect();
//! assert_eq!(added.len(), 3);
//! assert_eq!(added[0].key(), Some(&"Bacon"));
//! ```

pub mod broadcast;
pub mod collections;
pub mod entity;
pub mod error;
pub mod events;

// Re-exports
pub use broadcast::{Broadcast, IntoListener, Listener};
pub use collections::{ObservableCollection, ObservableMap, ObservableSet};
pub use entity::ObservableEntity;
pub use error::{EntityError, Result};
pub use events::{ChangeEvent, PropertyEvent};
