use std::io::{self, BufRead, Write};

use super::{
    board::Board,
    components::{Move, Scores},
    error::{ConfigError, MoveError},
    input::{self, Dimensions, GameCount, QUIT_TOKEN},
};

/// Something the game wants the players to know.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// Who plays whom, on which board, for how many games.
    Matchup {
        /// Name of the first player.
        player1: &'a str,
        /// Name of the second player.
        player2: &'a str,
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        columns: usize,
        /// Games in the series.
        total_games: usize,
    },
    /// The board after a move, or at the start of a game.
    Board(&'a Board),
    /// A move was rejected; the same player goes again.
    InvalidMove(&'a MoveError),
    /// A player connected four.
    Won(&'a str),
    /// The board is full.
    Draw,
    /// A new game of a series begins. 1 indexed.
    GameNumber(usize),
    /// Score after a game of a series.
    Scores {
        /// Name of the first player.
        player1: &'a str,
        /// Name of the second player.
        player2: &'a str,
        /// Points so far.
        scores: Scores,
    },
    /// `start` was called on a session that already runs.
    AlreadyRunning,
    /// The session is over.
    GameOver,
}

/// Input and output of a game.
///
/// Implementations hand back values that are already validated: they keep
/// asking until the user provides something usable.
pub trait Console {
    /// Names of the first and second player.
    fn player_names(&mut self) -> io::Result<(String, String)>;

    /// Board size as (rows, columns).
    fn board_dimensions(&mut self) -> io::Result<(usize, usize)>;

    /// Number of games to play.
    fn game_count(&mut self) -> io::Result<usize>;

    /// Next move of the named player.
    fn next_move(&mut self, player: &str) -> io::Result<Move>;

    /// Show an event to the players.
    fn report(&mut self, event: Event<'_>) -> io::Result<()>;
}

/// Text console over any reader and writer, usually stdin and stdout.
#[derive(Debug)]
pub struct Terminal<R, W> {
    reader: R,
    writer: W,
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    /// Terminal on the process stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Create a new terminal.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer, e.g. to inspect what was printed.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Print the prompt and read an answer. End of input is an error here.
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        writeln!(self.writer, "{prompt}")?;
        self.writer.flush()?;
        input::read_line(&mut self.reader)?.ok_or_else(|| {
            log::warn!("input ended while asking: {prompt:?}");
            io::Error::new(io::ErrorKind::UnexpectedEof, "input ended during setup")
        })
    }

    /// Ask until the answer parses.
    fn ask_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, ConfigError>,
    ) -> io::Result<T> {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    log::warn!("rejected {answer:?}: {e}");
                    writeln!(self.writer, "{e}")?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn player_names(&mut self) -> io::Result<(String, String)> {
        writeln!(self.writer, "Connect Four")?;
        let player1 = self.ask_until("First player's name:", input::parse_name)?;
        let player2 = self.ask_until("Second player's name:", input::parse_name)?;
        Ok((player1, player2))
    }

    fn board_dimensions(&mut self) -> io::Result<(usize, usize)> {
        let dimensions = self.ask_until(
            "Set the board dimensions (Rows x Columns)\nPress Enter for default (6 x 7)",
            str::parse::<Dimensions>,
        )?;
        Ok((dimensions.rows, dimensions.columns))
    }

    fn game_count(&mut self) -> io::Result<usize> {
        let GameCount(count) = self.ask_until(
            "Do you want to play single or multiple games?\n\
             For a single game, input 1 or press Enter\n\
             Input a number of games:",
            str::parse::<GameCount>,
        )?;
        Ok(count)
    }

    fn next_move(&mut self, player: &str) -> io::Result<Move> {
        loop {
            writeln!(self.writer, "{player}'s turn:")?;
            self.writer.flush()?;
            let Some(line) = input::read_line(&mut self.reader)? else {
                log::warn!("input ended, treating it as {QUIT_TOKEN:?}");
                return Ok(Move::Quit);
            };
            match line.parse::<Move>() {
                Ok(mv) => return Ok(mv),
                Err(e) => writeln!(self.writer, "{e}")?,
            }
        }
    }

    fn report(&mut self, event: Event<'_>) -> io::Result<()> {
        match event {
            Event::Matchup {
                player1,
                player2,
                rows,
                columns,
                total_games,
            } => {
                writeln!(self.writer, "{player1} VS {player2}")?;
                writeln!(self.writer, "{rows} X {columns} board")?;
                if total_games == 1 {
                    writeln!(self.writer, "Single game")?;
                } else {
                    writeln!(self.writer, "Total {total_games} games")?;
                }
            }
            Event::Board(board) => write!(self.writer, "{board}")?,
            Event::InvalidMove(e) => writeln!(self.writer, "{e}")?,
            Event::Won(name) => writeln!(self.writer, "Player {name} won")?,
            Event::Draw => writeln!(self.writer, "It is a draw")?,
            Event::GameNumber(n) => writeln!(self.writer, "Game #{n}")?,
            Event::Scores {
                player1,
                player2,
                scores,
            } => {
                writeln!(self.writer, "Score")?;
                writeln!(
                    self.writer,
                    "{player1}: {} {player2}: {}",
                    scores.player1, scores.player2
                )?;
            }
            Event::AlreadyRunning => writeln!(self.writer, "Game is already started")?,
            Event::GameOver => writeln!(self.writer, "Game over!")?,
        }
        self.writer.flush()
    }
}
