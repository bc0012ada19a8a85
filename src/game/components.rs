/// The type of tiles that can be on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileType {
    /// No piece.
    #[default]
    Empty,
    /// A piece of the first player.
    Player1,
    /// A piece of the second player.
    Player2,
}

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    /// The first player.
    Player1,
    /// The second player.
    Player2,
}

impl Player {
    /// Get the opposing player.
    pub fn other(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// The tile this player leaves on the board.
    pub fn tile(self) -> TileType {
        match self {
            Player::Player1 => TileType::Player1,
            Player::Player2 => TileType::Player2,
        }
    }
}

/// What a player asked for on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Drop a piece in this column. The column is 1 indexed.
    Column(usize),
    /// Stop the game and the rest of the series.
    Quit,
}

/// How a single game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The player connected four.
    Won(Player),
    /// The board filled up without a winner.
    Draw,
    /// A player asked to stop.
    Terminated,
}

/// How a call to [`Game::start`](crate::Game::start) ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Every scheduled game was played.
    Completed,
    /// A player stopped the series early.
    Terminated,
    /// The session had already been started; nothing was played.
    AlreadyRunning,
}

/// Accumulated points of both players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scores {
    /// Points of the first player.
    pub player1: u32,
    /// Points of the second player.
    pub player2: u32,
}

impl Scores {
    /// Add points to one player.
    pub(super) fn award(&mut self, player: Player, points: u32) {
        match player {
            Player::Player1 => self.player1 += points,
            Player::Player2 => self.player2 += points,
        }
    }

    /// Points of the given player.
    pub fn of(&self, player: Player) -> u32 {
        match player {
            Player::Player1 => self.player1,
            Player::Player2 => self.player2,
        }
    }
}
