use crate::game::{surface::lives_label, GameConfig, Paint, Position, Surface};

/// Contents of one board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub paint: Option<Paint>,
    pub outlined: bool,
}

/// In-memory board the engine draws into between terminal frames
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    columns: usize,
    rows: usize,
    unit: i32,
    cells: Vec<Cell>,
    banner: Option<String>,
    score: u32,
    lives: String,
}

impl FrameBuffer {
    pub fn new(config: &GameConfig) -> Self {
        let columns = config.columns().max(0) as usize;
        let rows = config.rows().max(0) as usize;

        Self {
            columns,
            rows,
            unit: config.unit_size,
            cells: vec![Cell::default(); columns * rows],
            banner: None,
            score: 0,
            lives: lives_label(config.initial_lives),
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Cell at grid coordinates, if on the board
    pub fn cell(&self, column: usize, row: usize) -> Option<Cell> {
        if column < self.columns && row < self.rows {
            Some(self.cells[row * self.columns + column])
        } else {
            None
        }
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> &str {
        &self.lives
    }

    fn index_of(&self, pos: Position) -> Option<usize> {
        if self.unit <= 0 || pos.x < 0 || pos.y < 0 {
            return None;
        }
        let column = (pos.x / self.unit) as usize;
        let row = (pos.y / self.unit) as usize;
        (column < self.columns && row < self.rows).then(|| row * self.columns + column)
    }
}

impl Surface for FrameBuffer {
    fn clear(&mut self) {
        self.cells.fill(Cell::default());
        self.banner = None;
    }

    fn fill_cell(&mut self, pos: Position, paint: Paint) {
        if let Some(i) = self.index_of(pos) {
            self.cells[i] = Cell {
                paint: Some(paint),
                outlined: false,
            };
        }
    }

    fn stroke_cell(&mut self, pos: Position) {
        if let Some(i) = self.index_of(pos) {
            self.cells[i].outlined = true;
        }
    }

    fn draw_centered_text(&mut self, text: &str) {
        self.banner = Some(text.to_string());
    }

    fn show_score(&mut self, score: u32) {
        self.score = score;
    }

    fn show_lives(&mut self, lives: u32) {
        self.lives = lives_label(lives);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cells_map_from_pixels() {
        let mut buffer = FrameBuffer::new(&GameConfig::default());
        assert_eq!((buffer.columns(), buffer.rows()), (20, 20));

        buffer.fill_cell(Position::new(50, 25), Paint::Snake);
        buffer.stroke_cell(Position::new(50, 25));

        assert_eq!(
            buffer.cell(2, 1),
            Some(Cell {
                paint: Some(Paint::Snake),
                outlined: true,
            })
        );
        assert_eq!(buffer.cell(0, 0), Some(Cell::default()));
        assert_eq!(buffer.cell(20, 0), None);
    }

    #[test]
    fn test_off_board_positions_are_ignored() {
        let mut buffer = FrameBuffer::new(&GameConfig::default());

        buffer.fill_cell(Position::new(-25, 0), Paint::Snake);
        buffer.fill_cell(Position::new(500, 0), Paint::Snake);
        buffer.stroke_cell(Position::new(0, 500));

        assert!((0..20).all(|x| (0..20).all(|y| buffer.cell(x, y) == Some(Cell::default()))));
    }

    #[test]
    fn test_zero_unit_board_has_no_cells() {
        let config = GameConfig {
            unit_size: 0,
            ..Default::default()
        };
        let mut buffer = FrameBuffer::new(&config);

        buffer.fill_cell(Position::new(0, 0), Paint::Food);

        assert_eq!((buffer.columns(), buffer.rows()), (0, 0));
        assert_eq!(buffer.cell(0, 0), None);
    }

    #[test]
    fn test_clear_removes_cells_and_banner() {
        let mut buffer = FrameBuffer::new(&GameConfig::default());
        buffer.fill_cell(Position::new(0, 0), Paint::Food);
        buffer.draw_centered_text("GAME OVER!");

        buffer.clear();

        assert_eq!(buffer.cell(0, 0), Some(Cell::default()));
        assert_eq!(buffer.banner(), None);
    }

    #[test]
    fn test_readouts() {
        let mut buffer = FrameBuffer::new(&GameConfig::default());
        assert_eq!(buffer.lives(), "Lives: 3");

        buffer.show_score(7);
        buffer.show_lives(1);

        assert_eq!(buffer.score(), 7);
        assert_eq!(buffer.lives(), "Lives: 1");
    }
}
