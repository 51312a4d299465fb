use std::time::Duration;

use rand::Rng;
use tokio::time::sleep;

pub const LIST_DELAY_MS: u64 = 100;
pub const LOOKUP_DELAY_MS: u64 = 50;
pub const QUERY_DELAY_MS: u64 = 300;
pub const STORAGE_DELAY_MS: u64 = 50;

/// Artificial service delay in front of catalog and playlist operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Latency {
    #[default]
    None,
    Simulated,
}

impl Latency {
    pub fn from_flag(enabled: bool) -> Self {
        if enabled {
            Latency::Simulated
        } else {
            Latency::None
        }
    }

    pub fn is_simulated(&self) -> bool {
        *self == Latency::Simulated
    }

    pub async fn pause(&self, millis: u64) {
        if self.is_simulated() {
            sleep(Duration::from_millis(millis)).await;
        }
    }

    /// Sleeps for a random duration in `[min_ms, max_ms)`.
    pub async fn pause_between(&self, min_ms: u64, max_ms: u64) {
        if !self.is_simulated() {
            return;
        }

        let millis = if max_ms > min_ms {
            rand::rng().random_range(min_ms..max_ms)
        } else {
            min_ms
        };
        sleep(Duration::from_millis(millis)).await;
    }
}
