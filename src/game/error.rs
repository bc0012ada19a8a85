use super::board::{MAX_DIMENSION, MIN_DIMENSION};

/// Side of the board a dimension error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Number of rows.
    Rows,
    /// Number of columns.
    Columns,
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::Rows => write!(f, "rows"),
            Dimension::Columns => write!(f, "columns"),
        }
    }
}

/// Problems with the match setup. The console asks again when it sees one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Input that does not have the expected shape.
    #[error("Invalid input")]
    InvalidInput,
    /// A board side outside of the allowed range.
    #[error("Board {0} should be from {} to {}", MIN_DIMENSION, MAX_DIMENSION)]
    InvalidDimension(Dimension),
    /// Zero games requested.
    #[error("The number of games should be at least 1")]
    InvalidGameCount,
    /// A blank player name.
    #[error("Player name should not be empty")]
    EmptyName,
}

/// Problems with a single move. The same player is asked again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Neither a number nor the quit token.
    #[error("Incorrect column number")]
    InvalidInput,
    /// The column does not exist on a board this wide.
    #[error("The column number is out of range (1 - {columns})")]
    ColumnOutOfRange {
        /// Width of the board.
        columns: usize,
    },
    /// The column has no empty cell left. `column` is zero indexed.
    #[error("Column {} is full", .column + 1)]
    ColumnFull {
        /// The column that was tried.
        column: usize,
    },
}

/// All the errors produced by the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bad match setup.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The console failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type making use of custom errors.
pub type GameResult<T> = Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        assert_eq!(ConfigError::InvalidInput.to_string(), "Invalid input");
        assert_eq!(
            ConfigError::InvalidDimension(Dimension::Rows).to_string(),
            "Board rows should be from 5 to 9"
        );
        assert_eq!(
            ConfigError::InvalidDimension(Dimension::Columns).to_string(),
            "Board columns should be from 5 to 9"
        );
    }

    #[test]
    fn move_error_display() {
        assert_eq!(MoveError::InvalidInput.to_string(), "Incorrect column number");
        assert_eq!(
            MoveError::ColumnOutOfRange { columns: 7 }.to_string(),
            "The column number is out of range (1 - 7)"
        );
        assert_eq!(
            MoveError::ColumnFull { column: 0 }.to_string(),
            "Column 1 is full"
        );
    }

    #[test]
    fn crate_error_wraps_sources() {
        let err: Error = ConfigError::EmptyName.into();
        assert_eq!(err.to_string(), "Player name should not be empty");

        let err: Error = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof").into();
        assert_eq!(err.to_string(), "I/O error: eof");
    }
}
