use std::{io::BufRead, str::FromStr};

use super::{
    board::{Board, DEFAULT_COLUMNS, DEFAULT_ROWS},
    components::Move,
    error::{ConfigError, MoveError},
};

/// Token that ends the game instead of naming a column.
pub const QUIT_TOKEN: &str = "end";

/// Board size as typed by the user, e.g. `6x7` or `6 X 7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
        }
    }
}

impl FromStr for Dimensions {
    type Err = ConfigError;

    /// Whitespace is ignored. An empty string gives the default size.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Ok(Self::default());
        }

        let (rows, columns) = compact
            .split_once(['x', 'X'])
            .ok_or(ConfigError::InvalidInput)?;
        let dimensions = Self {
            rows: parse_digits(rows).ok_or(ConfigError::InvalidInput)?,
            columns: parse_digits(columns).ok_or(ConfigError::InvalidInput)?,
        };

        // range check with the same rules the board applies
        Board::new(dimensions.rows, dimensions.columns)?;
        Ok(dimensions)
    }
}

/// Number of games in a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameCount(pub usize);

impl Default for GameCount {
    fn default() -> Self {
        Self(1)
    }
}

impl FromStr for GameCount {
    type Err = ConfigError;

    /// An empty string means a single game. Otherwise a positive number
    /// without leading zeros is expected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::default());
        }
        if s.starts_with('0') {
            return Err(ConfigError::InvalidInput);
        }
        match parse_digits(s) {
            Some(count) => Ok(Self(count)),
            None => Err(ConfigError::InvalidInput),
        }
    }
}

impl FromStr for Move {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            QUIT_TOKEN => Ok(Self::Quit),
            // numbers too large for usize are still numbers; the board rejects them
            col if is_digits(col) => {
                Ok(Self::Column(parse_digits(col).unwrap_or(usize::MAX)))
            }
            _ => Err(MoveError::InvalidInput),
        }
    }
}

/// Validate a player name. Surrounding whitespace is dropped.
pub fn parse_name(s: &str) -> Result<String, ConfigError> {
    match s.trim() {
        "" => Err(ConfigError::EmptyName),
        name => Ok(name.to_string()),
    }
}

/// Read one line from the reader, without the line ending.
///
/// Returns `None` at the end of the input.
pub(super) fn read_line(reader: &mut impl BufRead) -> std::io::Result<Option<String>> {
    let mut buf = String::new();
    if reader.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    let len = buf.trim_end_matches(['\n', '\r']).len();
    buf.truncate(len);
    Ok(Some(buf))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_digits(s: &str) -> Option<usize> {
    if is_digits(s) {
        s.parse().ok()
    } else {
        None
    }
}
