use super::{
    components::{Player, TileType},
    error::{ConfigError, Dimension, MoveError},
};

/// Smallest allowed board side.
pub const MIN_DIMENSION: usize = 5;
/// Largest allowed board side.
pub const MAX_DIMENSION: usize = 9;
/// Rows used when none are given.
pub const DEFAULT_ROWS: usize = 6;
/// Columns used when none are given.
pub const DEFAULT_COLUMNS: usize = 7;

/// Number of connected tiles needed to win.
const RUN: usize = 4;

/// The playing grid. Row 0 is the top row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    board: Vec<Vec<TileType>>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidDimension` if either side is outside
    /// `MIN_DIMENSION..=MAX_DIMENSION`. Rows are checked first.
    pub fn new(rows: usize, columns: usize) -> Result<Self, ConfigError> {
        check_dimension(rows, Dimension::Rows)?;
        check_dimension(columns, Dimension::Columns)?;
        Ok(Self {
            rows,
            columns,
            board: vec![vec![TileType::Empty; columns]; rows],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Get the tile at (row, col), or `None` outside the board.
    pub fn get(&self, row: usize, col: usize) -> Option<TileType> {
        self.board.get(row)?.get(col).copied()
    }

    /// Drop a tile of the given player in a column. The column is zero indexed.
    ///
    /// The tile lands in the lowest empty cell of the column.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::ColumnOutOfRange` if the column is outside the board.
    ///
    /// Returns `MoveError::ColumnFull` if there is no empty cell left in the column.
    /// The board is left untouched in both cases.
    pub fn drop(&mut self, col: usize, player: Player) -> Result<(), MoveError> {
        if col >= self.columns {
            return Err(MoveError::ColumnOutOfRange {
                columns: self.columns,
            });
        }
        for row in self.board.iter_mut().rev() {
            if row[col] == TileType::Empty {
                row[col] = player.tile();
                return Ok(());
            }
        }
        Err(MoveError::ColumnFull { column: col })
    }

    /// Check if the player has at least 4 connected tiles in any direction.
    pub fn has_winner(&self, player: Player) -> bool {
        self.winning_line(player).is_some()
    }

    /// Find 4 connected tiles of the player.
    ///
    /// Checks right, down, down & right and down & left, starting only from cells
    /// where the whole line stays on the board. Returns the first line found as
    /// (row, col) pairs.
    pub fn winning_line(&self, player: Player) -> Option<[(usize, usize); RUN]> {
        log::trace!("looking for a line of {player:?}");
        let tile = player.tile();
        let last = RUN - 1;
        for y in 0..self.rows {
            for x in 0..self.columns {
                if self.board[y][x] != tile {
                    continue;
                }

                // check right
                if x + last < self.columns && self.line(tile, |i| (y, x + i)) {
                    return Some(line_at(|i| (y, x + i)));
                }

                if y + last < self.rows {
                    // check down
                    if self.line(tile, |i| (y + i, x)) {
                        return Some(line_at(|i| (y + i, x)));
                    }

                    // check down & right
                    if x + last < self.columns && self.line(tile, |i| (y + i, x + i)) {
                        return Some(line_at(|i| (y + i, x + i)));
                    }

                    // check down & left
                    if x >= last && self.line(tile, |i| (y + i, x - i)) {
                        return Some(line_at(|i| (y + i, x - i)));
                    }
                }
            }
        }
        None
    }

    /// `true` if the cells picked by `at(1..RUN)` all hold `tile`.
    fn line(&self, tile: TileType, at: impl Fn(usize) -> (usize, usize)) -> bool {
        (1..RUN).all(|i| {
            let (y, x) = at(i);
            self.board[y][x] == tile
        })
    }

    /// Check if no empty cell is left.
    pub fn is_full(&self) -> bool {
        self.board
            .iter()
            .all(|row| row.iter().all(|tile| *tile != TileType::Empty))
    }

    /// Reset the board to its original state. Dimensions are kept.
    pub fn reset(&mut self) {
        for row in self.board.iter_mut() {
            row.fill(TileType::Empty);
        }
    }

    /// Snapshot of all rows, top row first.
    pub fn render(&self) -> Vec<Vec<TileType>> {
        self.board.clone()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            board: vec![vec![TileType::Empty; DEFAULT_COLUMNS]; DEFAULT_ROWS],
        }
    }
}

fn check_dimension(value: usize, dimension: Dimension) -> Result<(), ConfigError> {
    if (MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidDimension(dimension))
    }
}

fn line_at(at: impl Fn(usize) -> (usize, usize)) -> [(usize, usize); RUN] {
    std::array::from_fn(at)
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for x in 1..=self.columns {
            write!(f, " {x}")?;
        }
        writeln!(f)?;
        for row in &self.board {
            write!(f, "|")?;
            for tile in row {
                match tile {
                    TileType::Empty => write!(f, " |")?,
                    TileType::Player1 => write!(f, "o|")?,
                    TileType::Player2 => write!(f, "*|")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", "=".repeat(self.columns * 2 + 1))
    }
}
