//! Synchronous multi-listener broadcast channels.
//!
//! Every observable container owns one `Broadcast` per mutation kind and
//! pushes each change event to all registered listeners before the mutating
//! call returns. Listeners are invoked in registration order; a listener
//! registered while a broadcast is in progress does not receive the
//! in-flight event.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::trace;

/// A registered listener endpoint.
pub type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Conversion into a listener endpoint.
///
/// Implemented for plain closures and for `crossbeam_channel` senders, so a
/// consumer can either react inline or drain events from a channel receiver.
pub trait IntoListener<T> {
    fn into_listener(self) -> Listener<T>;
}

/// An ordered, synchronous, multi-listener push channel.
///
/// Cloning a `Broadcast` yields another handle to the same listener list.
/// There is no unsubscribe: listeners live as long as the channel.
pub struct Broadcast<T> {
    inner: Arc<Inner<T>>,
}

struct Inner<T> {
    listeners: RwLock<Vec<Listener<T>>>,
}

impl<T> Broadcast<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                listeners: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Register a listener. Listeners may be added at any time, including
    /// from inside another listener's callback.
    pub fn listen<L: IntoListener<T>>(&self, listener: L) {
        self.inner.listeners.write().push(listener.into_listener());
    }

    /// Deliver `event` to every listener registered at the start of the
    /// call, in registration order, before returning.
    ///
    /// The listener list is snapshotted up front and the lock released, so
    /// callbacks may register further listeners without deadlocking; those
    /// late listeners only see subsequent events. A panicking listener
    /// propagates to the caller and aborts delivery to the rest.
    pub fn emit(&self, event: &T) {
        let snapshot: Vec<Listener<T>> = self.inner.listeners.read().clone();
        if snapshot.is_empty() {
            return;
        }
        trace!(listeners = snapshot.len(), "broadcasting change event");
        for listener in &snapshot {
            listener(event);
        }
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.read().len()
    }
}

impl<T> Clone for Broadcast<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for Broadcast<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Broadcast<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Broadcast")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl<T, F> IntoListener<T> for F
where
    F: Fn(&T) + Send + Sync + 'static,
{
    fn into_listener(self) -> Listener<T> {
        Arc::new(self)
    }
}

/// Events are cloned into the channel; a disconnected receiver is ignored.
impl<T> IntoListener<T> for crossbeam_channel::Sender<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn into_listener(self) -> Listener<T> {
        Arc::new(move |event: &T| {
            let _ = self.send(event.clone());
        })
    }
}
