/// Whack-a-mole board renderer - pure projection of the game state
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::core::game::GameState;
use crate::core::renderer::{GameRenderer, UiCommand};

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 5;
const GAP_X: u16 = 2;
const GAP_Y: u16 = 1;
const RESTART_WIDTH: u16 = 20;
const RESTART_LABEL: &str = "Restart Game";
const MOLE: &str = "🐹";

pub const HOLE_COLOR: Color = Color::Green;
pub const MOLE_COLOR: Color = Color::Rgb(139, 69, 19);

/// Screen regions for one frame. Drawing and hit-testing both derive from
/// this so a click always lands on the cell that was drawn there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    pub title: Rect,
    pub score: Rect,
    pub time: Rect,
    pub holes: Vec<Rect>,
    pub game_over: Option<Rect>,
    pub restart: Option<Rect>,
    pub help: Rect,
}

/// Square-ish grid: 3 columns for the classic 9 holes
pub fn grid_columns(hole_count: usize) -> usize {
    let mut columns = 1;
    while columns * columns < hole_count {
        columns += 1;
    }
    columns
}

impl BoardLayout {
    pub fn compute(area: Rect, hole_count: usize, is_game_over: bool) -> Self {
        let columns = grid_columns(hole_count);
        let rows = hole_count.div_ceil(columns);
        let grid_height = (rows as u16) * CELL_HEIGHT + (rows as u16).saturating_sub(1) * GAP_Y;
        let grid_width = (columns as u16) * CELL_WIDTH + (columns as u16).saturating_sub(1) * GAP_X;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(grid_height),
                Constraint::Length(if is_game_over { 5 } else { 0 }),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .split(area);

        let header = chunks[0];
        let line = |offset: u16| Rect::new(header.x, header.y + offset, header.width, 1).intersection(header);

        let grid = chunks[1];
        let left = grid.x + grid.width.saturating_sub(grid_width) / 2;
        let holes = (0..hole_count)
            .map(|i| {
                let (row, col) = ((i / columns) as u16, (i % columns) as u16);
                let x = left.saturating_add(col * (CELL_WIDTH + GAP_X));
                let y = grid.y.saturating_add(row * (CELL_HEIGHT + GAP_Y));
                Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(grid)
            })
            .collect();

        let (game_over, restart) = if is_game_over {
            let footer = chunks[2];
            let banner = Rect::new(footer.x, footer.y + 1, footer.width, 1).intersection(footer);
            let button = Rect::new(
                footer.x + footer.width.saturating_sub(RESTART_WIDTH) / 2,
                footer.y + 2,
                RESTART_WIDTH,
                3,
            )
            .intersection(footer);
            (Some(banner), Some(button))
        } else {
            (None, None)
        };

        Self {
            title: line(0),
            score: line(1),
            time: line(2),
            holes,
            game_over,
            restart,
            help: chunks[4],
        }
    }

    pub fn hole_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.holes.iter().position(|cell| cell.contains(position))
    }

    pub fn restart_at(&self, column: u16, row: u16) -> bool {
        self.restart
            .is_some_and(|button| button.contains(Position::new(column, row)))
    }
}

pub struct BoardRenderer {
    hole_count: usize,
}

impl BoardRenderer {
    pub fn new(hole_count: usize) -> Self {
        Self { hole_count }
    }

    fn help_text(&self) -> String {
        let keys = match self.hole_count {
            1 => "1".to_string(),
            n => format!("1-{}", n.min(9)),
        };
        format!("click or {keys}: whack  |  r: restart  |  q/Esc: quit")
    }
}

impl GameRenderer for BoardRenderer {
    fn render(&self, frame: &mut Frame, state: &GameState) {
        let layout = BoardLayout::compute(frame.area(), self.hole_count, state.is_game_over);

        frame.render_widget(
            Paragraph::new("Whack-a-Mole")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            layout.title,
        );
        frame.render_widget(
            Paragraph::new(format!("Score: {}", state.score)).alignment(Alignment::Center),
            layout.score,
        );
        frame.render_widget(
            Paragraph::new(format!("Time Remaining: {}s", state.time_remaining))
                .alignment(Alignment::Center),
            layout.time,
        );

        for (index, cell) in layout.holes.iter().enumerate() {
            let active = state.active_hole == Some(index);
            let color = if active { MOLE_COLOR } else { HOLE_COLOR };
            let block = Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", index + 1))
                .style(Style::default().bg(color).fg(Color::Black));
            let body = if active { MOLE } else { "" };
            // Vertically centre the mole inside the border
            let text = vec![Line::default(), Line::from(body)];
            frame.render_widget(
                Paragraph::new(text).alignment(Alignment::Center).block(block),
                *cell,
            );
        }

        if let (Some(banner), Some(button)) = (layout.game_over, layout.restart) {
            frame.render_widget(
                Paragraph::new(format!("Game Over! Your Score: {}", state.score))
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                banner,
            );
            frame.render_widget(
                Paragraph::new(RESTART_LABEL)
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL)),
                button,
            );
        }

        frame.render_widget(
            Paragraph::new(self.help_text())
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray)),
            layout.help,
        );
    }

    fn hit_test(&self, area: Rect, state: &GameState, column: u16, row: u16) -> Option<UiCommand> {
        let layout = BoardLayout::compute(area, self.hole_count, state.is_game_over);
        if let Some(index) = layout.hole_at(column, row) {
            return Some(UiCommand::Whack(index));
        }
        if layout.restart_at(column, row) {
            return Some(UiCommand::Restart);
        }
        None
    }

    fn hole_count(&self) -> usize {
        self.hole_count
    }
}
