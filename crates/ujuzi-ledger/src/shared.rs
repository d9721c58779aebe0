// crates/ujuzi-ledger/src/shared.rs
//
// SharedLedger: a cloneable handle for submitting calls from many tokio
// tasks. The mutex is the single serialization point; calls are applied one
// at a time in the order the lock is acquired.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::ledger::Ledger;
use crate::log::Receipt;
use crate::transaction::Call;
use ujuzi_core::error::UjuziError;

#[derive(Clone)]
pub struct SharedLedger {
    inner: Arc<Mutex<Ledger>>,
}

impl SharedLedger {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Apply `call` atomically, waiting for any call in progress.
    pub async fn submit(&self, call: Call) -> Result<Receipt, UjuziError> {
        let mut ledger = self.inner.lock().await;
        ledger.execute(&call)
    }

    /// Run a read-only closure against the current state.
    pub async fn read<T>(&self, f: impl FnOnce(&Ledger) -> T) -> T {
        let ledger = self.inner.lock().await;
        f(&ledger)
    }

    /// Copy of the current ledger, e.g. for reporting or export.
    pub async fn current(&self) -> Ledger {
        self.inner.lock().await.clone()
    }
}
