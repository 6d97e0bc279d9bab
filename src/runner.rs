/// Event loop that wires the engine, the tickers, terminal input and the renderer together
use anyhow::{anyhow, Context as _, Result};
use crossterm::event::Event;
use futures_util::{Stream, StreamExt};
use ratatui::backend::Backend;
use ratatui::Terminal;
use serde::Serialize;
use std::io;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::core::engine::GameEngine;
use crate::core::renderer::{GameRenderer, UiCommand};
use crate::ui::input::map_event;

const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Logged once per finished round
#[derive(Debug, Serialize)]
struct RoundSummary {
    round: u64,
    score: u32,
    holes: usize,
    seconds: u32,
}

/// Runs rounds until the player quits or the event stream ends.
///
/// Starts the first round itself; restarts happen through [`UiCommand::Restart`].
pub async fn run<B, R, S>(
    terminal: &mut Terminal<B>,
    engine: &mut GameEngine,
    renderer: &R,
    mut events: S,
) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    R: GameRenderer,
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    let mut redraw = tokio::time::interval(FRAME_INTERVAL);
    redraw.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut reported_round = 0;

    engine.start_game();

    loop {
        let area = terminal
            .draw(|frame| renderer.render(frame, engine.state()))
            .context("failed to draw frame")?
            .area;

        tokio::select! {
            Some(request) = engine.next_request() => {
                engine.handle_request(request);
            }

            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => {
                    match map_event(&event, renderer, area, engine.state()) {
                        Some(UiCommand::Quit) => break,
                        Some(UiCommand::Restart) => engine.start_game(),
                        Some(UiCommand::Whack(hole)) => {
                            engine.whack(hole);
                        }
                        None => {}
                    }
                }
                Some(Err(e)) => return Err(anyhow!(e).context("terminal event stream failed")),
                None => {
                    debug!("event stream closed");
                    break;
                }
            },

            _ = redraw.tick() => {}
        }

        let state = engine.state();
        if state.is_game_over && reported_round != engine.round() {
            reported_round = engine.round();
            let summary = RoundSummary {
                round: engine.round(),
                score: state.score,
                holes: engine.config().hole_count,
                seconds: engine.config().round_duration,
            };
            info!(summary = %serde_json::to_string(&summary)?, "round summary");
        }
    }

    Ok(())
}
