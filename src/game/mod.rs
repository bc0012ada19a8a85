pub(crate) mod board;
pub(crate) mod components;
pub(crate) mod config;
pub(crate) mod console;
pub(crate) mod error;
mod game;
mod input;

pub use board::{Board, DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_DIMENSION, MIN_DIMENSION};
pub use components::{Move, Player, RoundOutcome, Scores, SessionOutcome, TileType};
pub use config::GameConfig;
pub use console::{Console, Event, Terminal};
pub use error::{ConfigError, Dimension, Error, GameResult, MoveError};
pub use game::Game;
pub use input::{Dimensions, GameCount, QUIT_TOKEN};
