/// Maps raw terminal events onto game commands
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::core::game::GameState;
use crate::core::renderer::{GameRenderer, UiCommand};

pub fn map_event<R: GameRenderer>(
    event: &Event,
    renderer: &R,
    area: Rect,
    state: &GameState,
) -> Option<UiCommand> {
    match event {
        Event::Key(key) => map_key(key, renderer.hole_count(), state),
        Event::Mouse(mouse) => map_mouse(mouse, renderer, area, state),
        _ => None,
    }
}

fn map_key(key: &KeyEvent, hole_count: usize, state: &GameState) -> Option<UiCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(UiCommand::Quit),
        KeyCode::Esc | KeyCode::Char('q') => Some(UiCommand::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter if state.is_game_over => {
            Some(UiCommand::Restart)
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            (index < hole_count).then_some(UiCommand::Whack(index))
        }
        _ => None,
    }
}

fn map_mouse<R: GameRenderer>(
    mouse: &MouseEvent,
    renderer: &R,
    area: Rect,
    state: &GameState,
) -> Option<UiCommand> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            renderer.hit_test(area, state, mouse.column, mouse.row)
        }
        _ => None,
    }
}
