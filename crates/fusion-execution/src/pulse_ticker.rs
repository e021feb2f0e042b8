use std::time::Duration;

use fusion_application::DashboardService;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;

/// Periodically recalibrates the newest pulse.
///
/// The first tick fires one full interval after start.
#[derive(Clone)]
pub struct PulseTicker {
    service: DashboardService,
    interval: Duration,
}

impl PulseTicker {
    pub fn new(service: DashboardService, interval: Duration) -> Self {
        Self { service, interval }
    }

    /// Ticks until `cancel` fires. Returns the number of ticks that ran.
    pub async fn run(&self, cancel: CancellationToken) -> u64 {
        let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut ticks = 0;

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!("[PulseTicker] Stopped after {} ticks", ticks);
                    return ticks;
                }
                _ = ticker.tick() => {
                    ticks += 1;
                    if self.service.tick().await.is_none() {
                        tracing::debug!("[PulseTicker] Feed empty, nothing to recalibrate");
                    }
                }
            }
        }
    }
}
