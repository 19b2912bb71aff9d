use super::state::Position;

/// Paint used for a filled board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Food,
    Snake,
}

/// Drawing target and readouts the engine writes to during a tick
///
/// Positions are board pixels aligned to the unit size. A surface must
/// tolerate positions outside the board, since the head is drawn before
/// the collision check runs.
pub trait Surface {
    /// Fill the whole board with the background
    fn clear(&mut self);

    /// Fill one unit square
    fn fill_cell(&mut self, pos: Position, paint: Paint);

    /// Draw the border of one unit square
    fn stroke_cell(&mut self, pos: Position);

    /// Render text centered on the board
    fn draw_centered_text(&mut self, text: &str);

    fn show_score(&mut self, score: u32);

    fn show_lives(&mut self, lives: u32);
}

/// Text shown when the last life is lost
pub const GAME_OVER_TEXT: &str = "GAME OVER!";

/// Formats the lives readout
pub fn lives_label(lives: u32) -> String {
    format!("Lives: {}", lives)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lives_label() {
        assert_eq!(lives_label(3), "Lives: 3");
        assert_eq!(lives_label(0), "Lives: 0");
    }
}
