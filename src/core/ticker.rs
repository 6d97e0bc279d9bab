/// Cancellable timer tasks that feed transition requests back into the engine
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::trace;

use crate::core::game::Action;

/// An action stamped with the round it was scheduled for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub round: u64,
    pub action: Action,
}

/// Uniform hole selection; consecutive picks may repeat
pub struct HolePicker {
    rng: StdRng,
    hole_count: usize,
}

impl HolePicker {
    pub fn new(hole_count: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self { rng, hole_count }
    }

    pub fn pick(&mut self) -> usize {
        self.rng.random_range(0..self.hole_count)
    }
}

/// Handle to a spawned periodic task; aborted on cancel or drop
pub struct Ticker {
    name: &'static str,
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Submits `ActivateHole` with a freshly picked hole every `period`.
    pub fn activation(
        tx: UnboundedSender<Request>,
        round: u64,
        period: Duration,
        mut picker: HolePicker,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let action = Action::ActivateHole(picker.pick());
                if tx.send(Request { round, action }).is_err() {
                    break;
                }
            }
        });
        Self { name: "activation", handle }
    }

    /// Submits `TickCountdown` after each `period`, rearming itself after every send.
    pub fn countdown(tx: UnboundedSender<Request>, round: u64, period: Duration) -> Self {
        let handle = tokio::spawn(async move {
            loop {
                tokio::time::sleep(period).await;
                let request = Request { round, action: Action::TickCountdown };
                if tx.send(request).is_err() {
                    break;
                }
            }
        });
        Self { name: "countdown", handle }
    }

    pub fn is_live(&self) -> bool {
        !self.handle.is_finished()
    }

    pub fn cancel(&self) {
        trace!(ticker = self.name, "cancelling ticker");
        self.handle.abort();
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// The pair of tickers armed for one round
pub struct Tickers {
    pub activation: Ticker,
    pub countdown: Ticker,
}

impl Tickers {
    pub fn cancel(&self) {
        self.activation.cancel();
        self.countdown.cancel();
    }
}
