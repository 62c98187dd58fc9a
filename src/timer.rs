//! Owned one-second ticker for the round clock.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Duration;
use tracing::{debug, instrument};

use crate::game::GameEvent;

/// Tick period of the round clock.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Repeating ticker bound to one round. Aborts its task on drop.
#[derive(Debug)]
pub struct TickTimer {
    round: u64,
    handle: JoinHandle<()>,
}

impl TickTimer {
    /// Spawns a ticker sending [`GameEvent::Tick`] for `round` every `period`.
    ///
    /// The first tick arrives one full period after start.
    #[instrument(skip(events))]
    pub fn start(round: u64, period: Duration, events: mpsc::UnboundedSender<GameEvent>) -> Self {
        debug!("Starting round timer");
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                if events.send(GameEvent::Tick { round }).is_err() {
                    debug!(round, "Event channel closed, timer exiting");
                    break;
                }
            }
        });
        Self { round, handle }
    }

    /// Round this timer counts for.
    pub fn round(&self) -> u64 {
        self.round
    }
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        debug!(round = self.round, "Stopping round timer");
        self.handle.abort();
    }
}
