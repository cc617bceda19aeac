pub mod scoreboard;

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::dao::state_store::StateStore;

pub use self::scoreboard::ScoreboardState;

pub type SharedState = Arc<AppState>;

/// Central application state owning the persisted scoreboard document.
///
/// The store sits behind a mutex so every read-modify-write sequence, whether
/// it comes from an API request or a sync cycle, observes and replaces the
/// document atomically.
pub struct AppState {
    store: Mutex<StateStore>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(store: StateStore) -> SharedState {
        Arc::new(Self {
            store: Mutex::new(store),
        })
    }

    /// Exclusive access to the state store for one read-modify-write sequence.
    pub async fn store(&self) -> MutexGuard<'_, StateStore> {
        self.store.lock().await
    }
}
