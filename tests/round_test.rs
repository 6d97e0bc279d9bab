use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use futures_util::stream::{self, Stream};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::io;
use std::time::Duration;
use tokio::time::{timeout_at, Instant};

use whackterm::runner;
use whackterm::ui::BoardRenderer;
use whackterm::{Action, GameConfig, GameEngine, GameState};

fn engine() -> GameEngine {
    GameEngine::new(GameConfig::default().with_seed(3)).unwrap()
}

fn key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

/// Replays `(delay, event)` pairs, sleeping before each one
fn scripted(steps: Vec<(Duration, Event)>) -> impl Stream<Item = io::Result<Event>> + Unpin {
    Box::pin(stream::unfold(steps.into_iter(), |mut steps| async move {
        let (delay, event) = steps.next()?;
        tokio::time::sleep(delay).await;
        Some((Ok(event), steps))
    }))
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[tokio::test(start_paused = true)]
async fn round_ends_after_its_duration() {
    let mut engine = engine();
    engine.start_game();
    let start = Instant::now();
    let mut activations = Vec::new();

    while !engine.state().is_game_over {
        let request = engine.next_request().await.expect("ticker channel open");
        if let Action::ActivateHole(_) = request.action {
            activations.push(start.elapsed().as_secs());
        }
        engine.handle_request(request);
    }

    assert_eq!(start.elapsed().as_secs(), 15);
    assert_eq!(activations, vec![2, 4, 6, 8, 10, 12, 14]);
    assert_eq!(engine.state().time_remaining, 0);
    assert_eq!(engine.state().active_hole, None);
    assert!(!engine.tickers_live());
}

#[tokio::test(start_paused = true)]
async fn restarts_leave_exactly_one_ticker_pair() {
    let mut engine = engine();
    engine.start_game();
    // Each superseded round gets to queue one countdown tick before it is replaced
    for _ in 0..3 {
        tokio::time::sleep(Duration::from_millis(1200)).await;
        engine.start_game();
    }
    let round = engine.round();
    assert_eq!(round, 4);
    assert_eq!(engine.state(), &GameState::new(15));

    let deadline = Instant::now() + Duration::from_millis(5500);
    let (mut current, mut stale) = (0, 0);
    while let Ok(Some(request)) = timeout_at(deadline, engine.next_request()).await {
        let applied = engine.handle_request(request);
        if request.round == round {
            if request.action == Action::TickCountdown {
                current += 1;
            }
        } else {
            assert!(!applied, "stale request {request:?} was applied");
            stale += 1;
        }
    }

    assert_eq!(stale, 3);
    assert_eq!(current, 5);
    assert_eq!(engine.state().time_remaining, 10);
}

#[tokio::test(start_paused = true)]
async fn quitting_right_away() {
    let mut engine = engine();
    let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
    let renderer = BoardRenderer::new(9);

    runner::run(&mut terminal, &mut engine, &renderer, scripted(vec![(Duration::ZERO, key('q'))]))
        .await
        .unwrap();

    assert_eq!(engine.round(), 1);
    assert_eq!(engine.state(), &GameState::new(15));
    assert!(screen_text(&terminal).contains("Time Remaining: 15s"));
}

#[tokio::test(start_paused = true)]
async fn full_round_shows_game_over() {
    let mut engine = engine();
    let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
    let renderer = BoardRenderer::new(9);

    let script = scripted(vec![(Duration::from_secs(16), key('q'))]);
    runner::run(&mut terminal, &mut engine, &renderer, script).await.unwrap();

    assert!(engine.state().is_game_over);
    let text = screen_text(&terminal);
    assert!(text.contains("Game Over! Your Score: 0"));
    assert!(text.contains("Restart Game"));
}

#[tokio::test(start_paused = true)]
async fn restart_key_starts_a_new_round() {
    let mut engine = engine();
    let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
    let renderer = BoardRenderer::new(9);

    let script = scripted(vec![
        (Duration::from_secs(16), key('r')),
        (Duration::from_millis(1500), key('q')),
    ]);
    runner::run(&mut terminal, &mut engine, &renderer, script).await.unwrap();

    assert_eq!(engine.round(), 2);
    assert!(!engine.state().is_game_over);
    assert_eq!(engine.state().time_remaining, 14);
    assert!(screen_text(&terminal).contains("Time Remaining: 14s"));
}

#[tokio::test(start_paused = true)]
async fn hammering_every_hole_scores_the_mole_once() {
    let mut engine = engine();
    let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
    let renderer = BoardRenderer::new(9);

    let mut steps = vec![(Duration::from_millis(2500), key('1'))];
    steps.extend(('2'..='9').map(|c| (Duration::ZERO, key(c))));
    steps.push((Duration::ZERO, key('q')));
    runner::run(&mut terminal, &mut engine, &renderer, scripted(steps)).await.unwrap();

    assert_eq!(engine.state().score, 1);
    assert_eq!(engine.state().active_hole, None);
    assert!(screen_text(&terminal).contains("Score: 1"));
}
