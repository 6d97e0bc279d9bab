/// Presentation seam between the engine and whatever draws it
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::core::game::GameState;

/// What the player asked for, already resolved against the drawn layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    Whack(usize),
    Restart,
    Quit,
}

/// Stateless projection of a [`GameState`] snapshot.
///
/// Implementations must not hold game logic: they draw the snapshot and map
/// screen positions back to holes, nothing more.
pub trait GameRenderer {
    fn render(&self, frame: &mut Frame, state: &GameState);

    /// Resolves a click at (`column`, `row`) inside `area` against the layout
    /// that [`GameRenderer::render`] would draw for `state`.
    fn hit_test(&self, area: Rect, state: &GameState, column: u16, row: u16) -> Option<UiCommand>;

    fn hole_count(&self) -> usize;
}
