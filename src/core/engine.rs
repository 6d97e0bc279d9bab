use anyhow::{Context as _, Result};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

use crate::core::config::GameConfig;
use crate::core::game::{reduce, Action, GameState};
use crate::core::ticker::{HolePicker, Request, Ticker, Tickers};

/// Owns the round state and the two tickers that drive it.
///
/// Every mutation goes through [`reduce`]; the engine only adds ticker
/// bookkeeping around it. Requests from tickers are stamped with the round
/// that armed them so a late callback can never touch a newer round.
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    round: u64,
    tickers: Option<Tickers>,
    tx: UnboundedSender<Request>,
    rx: UnboundedReceiver<Request>,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate().context("invalid game configuration")?;
        let (tx, rx) = mpsc::unbounded_channel();
        let state = GameState::new(config.round_duration);
        Ok(Self {
            config,
            state,
            round: 0,
            tickers: None,
            tx,
            rx,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Identifier of the current round; bumped by every [`GameEngine::start_game`]
    pub fn round(&self) -> u64 {
        self.round
    }

    /// True while a ticker pair is armed for the current round
    pub fn tickers_live(&self) -> bool {
        self.tickers
            .as_ref()
            .is_some_and(|t| t.activation.is_live() && t.countdown.is_live())
    }

    /// Resets the state and replaces both tickers. Must run inside a tokio runtime.
    pub fn start_game(&mut self) {
        self.cancel_tickers();
        self.round += 1;
        self.state = reduce(&self.state, &Action::StartGame, self.config.round_duration);

        // Seeded configs still draw a different sequence each round
        let seed = self.config.seed.map(|s| s.wrapping_add(self.round));
        let picker = HolePicker::new(self.config.hole_count, seed);
        self.tickers = Some(Tickers {
            activation: Ticker::activation(
                self.tx.clone(),
                self.round,
                self.config.activation_interval,
                picker,
            ),
            countdown: Ticker::countdown(
                self.tx.clone(),
                self.round,
                self.config.countdown_interval,
            ),
        });

        info!(
            round = self.round,
            holes = self.config.hole_count,
            seconds = self.config.round_duration,
            "round started"
        );
    }

    /// Applies one transition. Returns whether the state changed.
    ///
    /// # Panics
    /// On `ActivateHole` with an index outside the grid.
    pub fn dispatch(&mut self, action: Action) -> bool {
        if action == Action::StartGame {
            self.start_game();
            return true;
        }
        if let Action::ActivateHole(index) = action {
            assert!(
                index < self.config.hole_count,
                "hole {index} outside a grid of {}",
                self.config.hole_count
            );
        }

        let next = reduce(&self.state, &action, self.config.round_duration);
        if next == self.state {
            if let Action::Whack(hole) = action {
                debug!(round = self.round, hole, "miss");
            }
            return false;
        }

        let was_over = self.state.is_game_over;
        self.state = next;
        match action {
            Action::ActivateHole(hole) => debug!(round = self.round, hole, "mole up"),
            Action::Whack(hole) => debug!(round = self.round, hole, score = self.state.score, "hit"),
            _ => {}
        }

        if self.state.is_game_over && !was_over {
            self.cancel_tickers();
            info!(round = self.round, score = self.state.score, "round over");
        }
        true
    }

    pub fn whack(&mut self, index: usize) -> bool {
        self.dispatch(Action::Whack(index))
    }

    pub fn end_game(&mut self) -> bool {
        self.dispatch(Action::EndGame)
    }

    /// Applies a ticker request unless it belongs to a superseded round.
    pub fn handle_request(&mut self, request: Request) -> bool {
        if request.round != self.round {
            debug!(stale = request.round, current = self.round, "dropping stale ticker request");
            return false;
        }
        self.dispatch(request.action)
    }

    /// Waits for the next ticker request. The engine keeps a sender alive, so this
    /// only returns `None` if the channel is closed from outside.
    pub async fn next_request(&mut self) -> Option<Request> {
        self.rx.recv().await
    }

    fn cancel_tickers(&mut self) {
        if let Some(tickers) = self.tickers.take() {
            tickers.cancel();
        }
    }
}
