use anyhow::{Context as _, Result};
use crossterm::event::EventStream;
use std::fs::File;
use std::sync::Mutex;
use tracing::{error, info, Level};

use whackterm::core::renderer::GameRenderer;
use whackterm::core::terminal::TerminalSession;
use whackterm::runner;
use whackterm::ui::BoardRenderer;
use whackterm::{GameConfig, GameEngine};

const LOG_FILE: &str = "whackterm.log";

fn init_logging() -> Result<()> {
    // The TUI owns stdout/stderr, so logs go to a file
    let path = std::env::temp_dir().join(LOG_FILE);
    let file = File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
    let level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logging()?;

    let mut engine = GameEngine::new(GameConfig::default())?;
    let renderer = BoardRenderer::new(engine.config().hole_count);
    info!(holes = renderer.hole_count(), "starting whackterm");

    // Session drops (restoring the terminal) before any error reaches main's caller
    let result = {
        let mut session = TerminalSession::enter()?;
        runner::run(session.terminal_mut(), &mut engine, &renderer, EventStream::new()).await
    };

    if let Err(e) = &result {
        error!(error = ?e, "whackterm exited with an error");
    }
    info!(score = engine.state().score, "bye");
    result
}
