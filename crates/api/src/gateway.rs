//! Admission control for balance-mutating requests.
//!
//! A fixed pool of slots bounds how many wallet operations run against the
//! ledger at once. A request past capacity waits for a slot instead of being
//! rejected; the optional acquire timeout turns an over-long wait into a
//! `503`. Slots are RAII permits, released on every exit path when dropped.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use walletd_shared::GatewayConfig;

/// Reasons a request could not be admitted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// No slot freed up within the configured timeout.
    #[error("No admission slot became free within {0:?}")]
    Timeout(Duration),

    /// The gate was closed and admits nothing further.
    #[error("Admission gate is closed")]
    Closed,
}

/// Bounded pool of admission slots.
#[derive(Debug)]
pub struct AdmissionGate {
    semaphore: Arc<Semaphore>,
    capacity: usize,
    acquire_timeout: Option<Duration>,
}

/// A held admission slot. Dropping it frees the slot.
#[derive(Debug)]
pub struct AdmissionPermit {
    _permit: OwnedSemaphorePermit,
}

impl AdmissionGate {
    /// Creates a gate with `capacity` slots and no acquire timeout.
    ///
    /// A capacity of zero is raised to one so the gate can never deadlock.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            semaphore: Arc::new(Semaphore::new(capacity)),
            capacity,
            acquire_timeout: None,
        }
    }

    /// Sets how long `admit` may wait for a slot.
    #[must_use]
    pub fn with_acquire_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    /// Builds a gate from configuration.
    #[must_use]
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::new(config.max_in_flight).with_acquire_timeout(config.acquire_timeout())
    }

    /// Waits for a free slot.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Timeout` if a timeout is configured and elapses,
    /// or `GatewayError::Closed` once the gate has been closed.
    pub async fn admit(&self) -> Result<AdmissionPermit, GatewayError> {
        let acquire = Arc::clone(&self.semaphore).acquire_owned();

        let permit = match self.acquire_timeout {
            Some(limit) => tokio::time::timeout(limit, acquire)
                .await
                .map_err(|_| GatewayError::Timeout(limit))?,
            None => acquire.await,
        }
        .map_err(|_| GatewayError::Closed)?;

        Ok(AdmissionPermit { _permit: permit })
    }

    /// Stops admitting; pending and future `admit` calls fail with `Closed`.
    pub fn close(&self) {
        self.semaphore.close();
    }

    /// Total number of slots.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots currently free.
    #[must_use]
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }

    /// Slots currently held.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.capacity.saturating_sub(self.available())
    }
}
