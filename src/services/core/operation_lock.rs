//! Session-wide lock so only one build or extraction runs at a time.
//!
//! Progress for a single operation stays monotonic and package writes stay
//! sequential. Contention is reported to the caller instead of queueing.

use crate::types::errors::{PackError, PackResult};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Acquired at the command layer to keep services reusable.
pub struct OperationLock {
    lock: Arc<Mutex<()>>,
}

impl OperationLock {
    pub fn new() -> Self {
        Self {
            lock: Arc::new(Mutex::new(())),
        }
    }
}

impl Default for OperationLock {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationLock {
    /// Try to acquire the lock, giving up after a short wait.
    pub async fn acquire(&self) -> PackResult<OwnedMutexGuard<()>> {
        match tokio::time::timeout(Duration::from_millis(50), self.lock.clone().lock_owned()).await
        {
            Ok(guard) => Ok(guard),
            Err(_) => Err(PackError::Busy),
        }
    }
}

#[cfg(test)]
#[path = "tests/operation_lock_tests.rs"]
mod tests;
