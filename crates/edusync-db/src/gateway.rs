//! One-time initialization of the process-wide store handle.

use std::future::Future;

use tokio::sync::OnceCell;
use tracing::debug;

use crate::store::{Store, StoreError, StoreResult};

/// Holds the store handle once it has been connected.
///
/// `initialize` runs the connect future at most once; later calls return the
/// handle that is already there. `handle` fails until initialization has
/// completed.
#[derive(Debug, Default)]
pub struct StoreGateway {
    store: OnceCell<Store>,
}

impl StoreGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn initialize<F, Fut>(&self, connect: F) -> StoreResult<Store>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = StoreResult<Store>>,
    {
        if self.store.initialized() {
            debug!("Document store is already initialized");
        }

        self.store.get_or_try_init(connect).await.cloned()
    }

    pub fn handle(&self) -> StoreResult<Store> {
        self.store.get().cloned().ok_or(StoreError::NotInitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.store.initialized()
    }
}
