use crate::domain::models::{CurrentUser, TokenPair};
use std::sync::Arc;
use tokio::sync::watch;

/// A single named piece of process-wide state.
///
/// Readers subscribe to changes; each slot has exactly one writer path in
/// the application. Writes that do not change the value notify nobody.
#[derive(Debug)]
pub struct Slot<T> {
    tx: Arc<watch::Sender<T>>,
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T: Clone + PartialEq> Slot<T> {
    #[must_use]
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    #[must_use]
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Returns whether the stored value changed.
    pub fn set(&self, value: T) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        })
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

#[derive(Debug, Clone)]
pub struct SharedState {
    /// Written only by the command-menu reducer.
    pub overlay_open: Slot<bool>,
    /// Written only by the user provider.
    pub current_user: Slot<Option<CurrentUser>>,
    /// Written only by the host; read by the user fetch.
    pub token_pair: Slot<Option<TokenPair>>,
}

impl SharedState {
    #[must_use]
    pub fn new(token_pair: Option<TokenPair>) -> Self {
        Self {
            overlay_open: Slot::new(false),
            current_user: Slot::new(None),
            token_pair: Slot::new(token_pair),
        }
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_reports_changes_only() {
        let slot = Slot::new(false);
        assert!(slot.set(true));
        assert!(!slot.set(true));
        assert!(slot.get());
    }

    #[tokio::test]
    async fn test_subscribers_observe_writes() {
        let slot = Slot::new(0u32);
        let mut rx = slot.subscribe();
        let writer = slot.clone();

        writer.set(7);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), 7);

        writer.set(7);
        assert!(!rx.has_changed().unwrap());
    }
}
