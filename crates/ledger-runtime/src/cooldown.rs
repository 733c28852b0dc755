//! Post-transaction cooldown.
//!
//! Pacing for the viewer, not a correctness rule of the ledger: while the
//! cooldown runs, new selection commands wait. Queries go straight through.

use std::time::Duration;

use tokio::time::Instant;

#[derive(Debug, Clone)]
pub struct Cooldown {
    duration: Duration,
    until: Option<Instant>,
}

impl Cooldown {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            until: None,
        }
    }

    /// Start (or restart) the cooldown from now.
    pub fn engage(&mut self) {
        if !self.duration.is_zero() {
            self.until = Some(Instant::now() + self.duration);
        }
    }

    pub fn is_active(&self) -> bool {
        self.until.is_some_and(|until| Instant::now() < until)
    }

    pub fn remaining(&self) -> Duration {
        self.until
            .map(|until| until.saturating_duration_since(Instant::now()))
            .unwrap_or(Duration::ZERO)
    }

    /// Sleep until the cooldown is over, then clear it.
    pub async fn wait(&mut self) {
        if let Some(until) = self.until.take() {
            tokio::time::sleep_until(until).await;
        }
    }
}
