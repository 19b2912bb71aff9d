//! Per-game statistics gathered from tick outcomes
//!
//! Kept in memory for the current terminal session only.

use crate::game::{GameState, TickOutcome};

/// Counters for one game, from start (or reset) to game over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub score: u32,
    pub food_eaten: u32,
    pub lives_lost: u32,
    /// Highest level number reached, including levels gained by losing lives
    pub highest_level: usize,
}

impl Default for GameSummary {
    fn default() -> Self {
        Self {
            score: 0,
            food_eaten: 0,
            lives_lost: 0,
            highest_level: 1,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionStats {
    current: GameSummary,
    last_finished: Option<GameSummary>,
    games_finished: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin counting a fresh game
    pub fn on_game_start(&mut self) {
        self.current = GameSummary::default();
    }

    /// Fold one tick into the current game
    pub fn record_tick(&mut self, outcome: &TickOutcome, state: &GameState) {
        if outcome.ate_food {
            self.current.food_eaten += 1;
        }
        if outcome.life_lost {
            self.current.lives_lost += 1;
        }
        self.current.score = state.score;
        self.current.highest_level = self.current.highest_level.max(state.level);

        if outcome.game_over {
            self.last_finished = Some(self.current);
            self.games_finished += 1;
        }
    }

    pub fn current(&self) -> &GameSummary {
        &self.current
    }

    pub fn last_finished(&self) -> Option<&GameSummary> {
        self.last_finished.as_ref()
    }

    pub fn games_finished(&self) -> u32 {
        self.games_finished
    }

    /// One-line recap of the last finished game
    pub fn format_last_game(&self) -> Option<String> {
        self.last_finished.map(|game| {
            format!(
                "Last game: {} points, {} food, reached level {}",
                game.score, game.food_eaten, game.highest_level
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{CollisionType, Position, Snake, Velocity};
    use pretty_assertions::assert_eq;

    fn state(score: u32, level: usize) -> GameState {
        let mut state = GameState::new(
            Snake::starting(4, 25),
            Velocity::rightward(25),
            Position::new(0, 0),
            500,
            500,
            3,
        );
        state.score = score;
        state.level = level;
        state
    }

    fn crash() -> TickOutcome {
        TickOutcome {
            collision: Some(CollisionType::Wall),
            life_lost: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_counts_food_and_lives() {
        let mut stats = SessionStats::new();
        let eat = TickOutcome {
            ate_food: true,
            ..Default::default()
        };

        stats.record_tick(&eat, &state(1, 1));
        stats.record_tick(&eat, &state(2, 1));
        stats.record_tick(&crash(), &state(2, 2));

        assert_eq!(
            *stats.current(),
            GameSummary {
                score: 2,
                food_eaten: 2,
                lives_lost: 1,
                highest_level: 2,
            }
        );
        assert_eq!(stats.games_finished(), 0);
        assert_eq!(stats.format_last_game(), None);
    }

    #[test]
    fn test_highest_level_survives_reset_of_level() {
        let mut stats = SessionStats::new();

        stats.record_tick(&TickOutcome::default(), &state(0, 3));
        stats.record_tick(&TickOutcome::default(), &state(0, 1));

        assert_eq!(stats.current().highest_level, 3);
    }

    #[test]
    fn test_game_over_closes_the_game() {
        let mut stats = SessionStats::new();
        let last = TickOutcome {
            game_over: true,
            ..crash()
        };

        stats.record_tick(&crash(), &state(4, 2));
        stats.record_tick(&last, &state(4, 3));

        assert_eq!(stats.games_finished(), 1);
        assert_eq!(stats.last_finished().map(|g| g.lives_lost), Some(2));
        assert_eq!(
            stats.format_last_game().as_deref(),
            Some("Last game: 4 points, 0 food, reached level 3")
        );

        stats.on_game_start();
        assert_eq!(*stats.current(), GameSummary::default());
        assert_eq!(stats.games_finished(), 1);
    }
}
