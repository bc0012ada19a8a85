use super::{
    board::{Board, DEFAULT_COLUMNS, DEFAULT_ROWS},
    console::Console,
    error::{ConfigError, GameResult},
};

/// Setup of a match, fixed once the game is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Name of the first player.
    pub player1: String,
    /// Name of the second player.
    pub player2: String,
    /// Number of board rows.
    pub rows: usize,
    /// Number of board columns.
    pub columns: usize,
    /// Number of games in the series.
    pub total_games: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player1: String::from("Player 1"),
            player2: String::from("Player 2"),
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            total_games: 1,
        }
    }
}

impl GameConfig {
    /// Ask the console for names, board size and number of games.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails, or hands back values that do not
    /// validate.
    pub fn collect(console: &mut impl Console) -> GameResult<Self> {
        let (player1, player2) = console.player_names()?;
        let (rows, columns) = console.board_dimensions()?;
        let total_games = console.game_count()?;

        let config = Self {
            player1,
            player2,
            rows,
            columns,
            total_games,
        };
        config.validate()?;
        log::debug!("collected config: {config:?}");
        Ok(config)
    }

    /// Check all values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player1.trim().is_empty() || self.player2.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }
        Board::new(self.rows, self.columns)?;
        if self.total_games == 0 {
            return Err(ConfigError::InvalidGameCount);
        }
        Ok(())
    }

    /// More than one game is scheduled.
    pub fn is_series(&self) -> bool {
        self.total_games > 1
    }
}
