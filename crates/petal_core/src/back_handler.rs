//! Hardware back-button dispatch
//!
//! Mirrors the mobile platform contract: listeners are stacked, the most
//! recently registered listener receives the press first. A listener is a
//! [`BackSubscription`] guard; dropping the guard deregisters it, so a
//! component that is dropped can never leak a global handler.

use std::sync::{Arc, Mutex, MutexGuard};

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Identifier of one registered back listener
    pub struct BackListenerId;
}

#[derive(Default)]
struct Registry {
    owners: SlotMap<BackListenerId, &'static str>,
    /// Registration order, last = top of stack
    stack: Vec<BackListenerId>,
}

/// Shared registry of hardware-back listeners.
///
/// Cloning yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct BackHandler {
    inner: Arc<Mutex<Registry>>,
}

impl BackHandler {
    pub fn new() -> Self {
        Self::default()
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Register a listener on top of the stack
    pub fn subscribe(&self, owner: &'static str) -> BackSubscription {
        let mut registry = self.registry();
        let id = registry.owners.insert(owner);
        registry.stack.push(id);
        tracing::debug!(owner, listeners = registry.stack.len(), "back listener added");

        BackSubscription {
            id,
            handler: self.clone(),
        }
    }

    fn remove(&self, id: BackListenerId) {
        let mut registry = self.registry();
        if let Some(owner) = registry.owners.remove(id) {
            registry.stack.retain(|entry| *entry != id);
            tracing::debug!(owner, listeners = registry.stack.len(), "back listener removed");
        }
    }

    /// The listener that would receive a back press right now
    pub fn top(&self) -> Option<BackListenerId> {
        self.registry().stack.last().copied()
    }

    pub fn contains(&self, id: BackListenerId) -> bool {
        self.registry().owners.contains_key(id)
    }

    /// Number of currently registered listeners
    pub fn listener_count(&self) -> usize {
        self.registry().stack.len()
    }
}

/// RAII registration of a back listener
pub struct BackSubscription {
    id: BackListenerId,
    handler: BackHandler,
}

impl BackSubscription {
    pub fn id(&self) -> BackListenerId {
        self.id
    }

    /// Whether this listener is the one a back press is routed to
    pub fn is_top(&self) -> bool {
        self.handler.top() == Some(self.id)
    }
}

impl Drop for BackSubscription {
    fn drop(&mut self) {
        self.handler.remove(self.id);
    }
}

impl std::fmt::Debug for BackSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackSubscription").field("id", &self.id).finish()
    }
}
