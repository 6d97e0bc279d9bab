/// Game state and the transition function that drives it
use serde::{Deserialize, Serialize};

/// The single record describing a round in progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Hole currently showing a mole, if any
    pub active_hole: Option<usize>,
    pub score: u32,
    /// Seconds left in the round
    pub time_remaining: u32,
    pub is_game_over: bool,
}

/// Transition requests accepted by [`reduce`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Action {
    StartGame,
    ActivateHole(usize),
    Whack(usize),
    TickCountdown,
    EndGame,
}

impl GameState {
    pub fn new(round_duration: u32) -> Self {
        Self {
            active_hole: None,
            score: 0,
            time_remaining: round_duration,
            is_game_over: false,
        }
    }

    fn game_over(&self) -> Self {
        Self {
            active_hole: None,
            is_game_over: true,
            ..self.clone()
        }
    }
}

/// Pure transition: `(state, action) -> state`.
///
/// Once the round is over only [`Action::StartGame`] produces a different state.
pub fn reduce(state: &GameState, action: &Action, round_duration: u32) -> GameState {
    match *action {
        Action::StartGame => GameState::new(round_duration),
        Action::EndGame => state.game_over(),
        _ if state.is_game_over => state.clone(),
        Action::ActivateHole(index) => GameState {
            active_hole: Some(index),
            ..state.clone()
        },
        Action::Whack(index) => {
            if state.active_hole == Some(index) {
                GameState {
                    active_hole: None,
                    score: state.score + 1,
                    ..state.clone()
                }
            } else {
                state.clone()
            }
        }
        Action::TickCountdown => {
            let time_remaining = state.time_remaining.saturating_sub(1);
            let next = GameState {
                time_remaining,
                ..state.clone()
            };
            if time_remaining == 0 {
                next.game_over()
            } else {
                next
            }
        }
    }
}
