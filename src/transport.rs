//! Submission transport boundary.
//!
//! The engine hands a validated snapshot to a [`Transport`]; the shipped
//! [`FakeTransport`] simulates the network with a fixed delay and a random
//! success probability. A real system replaces it behind the same trait.

use crate::draft::FormSnapshot;
use crate::error::SubmitError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

/// Receipt for an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub accepted_at: DateTime<Utc>,
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn submit(&self, snapshot: &FormSnapshot) -> Result<SubmitReceipt, SubmitError>;
}

/// Simulated transport: waits 1.5 s, then succeeds with 80 % probability.
/// Both knobs are adjustable, which the tests rely on.
#[derive(Debug, Clone)]
pub struct FakeTransport {
    success_rate: f64,
    latency: Duration,
}

impl Default for FakeTransport {
    fn default() -> Self {
        Self {
            success_rate: 0.8,
            latency: Duration::from_millis(1500),
        }
    }
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_success_rate(mut self, rate: f64) -> Self {
        self.success_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn submit(&self, snapshot: &FormSnapshot) -> Result<SubmitReceipt, SubmitError> {
        sleep(self.latency).await;

        let accepted = rand::rng().random_bool(self.success_rate);
        if accepted {
            debug!(fields = snapshot.values.len(), "simulated submission accepted");
            Ok(SubmitReceipt {
                accepted_at: Utc::now(),
            })
        } else {
            debug!("simulated submission rejected");
            Err(SubmitError::Rejected)
        }
    }
}
