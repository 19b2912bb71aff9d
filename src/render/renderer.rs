use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::frame_buffer::{Cell, FrameBuffer};
use crate::game::{GameState, Paint};
use crate::metrics::SessionStats;

const BOARD_BACKGROUND: Color = Color::White;
const SNAKE_COLOR: Color = Color::LightGreen;
const SNAKE_BORDER: Color = Color::Black;
const FOOD_COLOR: Color = Color::Red;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        board: &FrameBuffer,
        state: &GameState,
        stats: &SessionStats,
        status: Option<&str>,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let header = self.render_stats(board, state, stats);
        frame.render_widget(header, chunks[0]);

        let grid = self.render_grid(board);
        frame.render_widget(grid, chunks[1]);

        let recap = stats.format_last_game().filter(|_| state.game_over);
        let footer = match (status, recap) {
            (Some(message), _) => self.render_status(message),
            (None, Some(recap)) => self.render_recap(recap),
            (None, None) => self.render_controls(),
        };
        frame.render_widget(footer, chunks[2]);
    }

    fn render_grid(&self, board: &FrameBuffer) -> Paragraph<'_> {
        let mut lines = Vec::with_capacity(board.rows());

        for y in 0..board.rows() {
            let spans: Vec<Span> = (0..board.columns())
                .filter_map(|x| board.cell(x, y))
                .map(Self::cell_span)
                .collect();
            lines.push(Line::from(spans));
        }

        if let Some(text) = board.banner() {
            let middle = board.rows() / 2;
            if let Some(line) = lines.get_mut(middle) {
                *line = Line::from(Span::styled(
                    text.to_string(),
                    Style::default()
                        .fg(Color::Black)
                        .bg(BOARD_BACKGROUND)
                        .add_modifier(Modifier::BOLD),
                ));
            }
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn cell_span(cell: Cell) -> Span<'static> {
        match (cell.paint, cell.outlined) {
            (Some(Paint::Snake), true) => {
                Span::styled("[]", Style::default().fg(SNAKE_BORDER).bg(SNAKE_COLOR))
            }
            (Some(Paint::Snake), false) => Span::styled("  ", Style::default().bg(SNAKE_COLOR)),
            (Some(Paint::Food), _) => Span::styled("  ", Style::default().bg(FOOD_COLOR)),
            (None, _) => Span::styled("  ", Style::default().bg(BOARD_BACKGROUND)),
        }
    }

    fn render_stats(
        &self,
        board: &FrameBuffer,
        state: &GameState,
        stats: &SessionStats,
    ) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                board.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled(board.lives().to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Level: ", Style::default().fg(Color::Yellow)),
            Span::styled(state.level.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Food: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                stats.current().food_eaten.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Games: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                stats.games_finished().to_string(),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_status(&self, message: &str) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled(
                message.to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_recap(&self, recap: String) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled(recap, Style::default().fg(Color::Yellow)),
            Span::raw(" | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to play again | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to reset | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
