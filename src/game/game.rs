use std::io;

use crate::game::{
    board::Board,
    components::{Move, Player, RoundOutcome, Scores, SessionOutcome},
    config::GameConfig,
    console::{Console, Event},
    error::{GameResult, MoveError},
};

/// Points for winning a game.
const WIN_POINTS: u32 = 2;
/// Points each player gets for a draw.
const DRAW_POINTS: u32 = 1;

/// Game manager struct.
///
/// Owns the board and runs one or more games between two players, keeping
/// score across the series.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    board: Board,
    scores: Scores,
    current_game: usize,
    /// Whose turn it is.
    active: Player,
    /// Who opens the current game.
    starting: Player,
    running: bool,
}

impl Game {
    /// Create a new game manager instance.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the configuration does not validate.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        config.validate()?;
        let board = Board::new(config.rows, config.columns)?;
        log::debug!(
            "new game: {} vs {} on {}x{}, {} game(s)",
            config.player1,
            config.player2,
            config.rows,
            config.columns,
            config.total_games
        );
        Ok(Self {
            config,
            board,
            scores: Scores::default(),
            current_game: 1,
            active: Player::Player1,
            starting: Player::Player1,
            running: false,
        })
    }

    /// The configuration the game was created with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The board as it is now.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Points of both players so far.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Number of the game being played, starting at 1.
    pub fn current_game(&self) -> usize {
        self.current_game
    }

    /// The player whose turn it is.
    pub fn active_player(&self) -> Player {
        self.active
    }

    /// The player who opens the current game.
    pub fn starting_player(&self) -> Player {
        self.starting
    }

    /// `true` once `start` has been called.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Name of the given player.
    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::Player1 => &self.config.player1,
            Player::Player2 => &self.config.player2,
        }
    }

    /// Play a single game on the current board, starting with the active player.
    ///
    /// Rejected moves are reported and the same player is asked again. Ends when
    /// a player connects four, the board fills up, or a player quits.
    ///
    /// # Errors
    ///
    /// Returns an error only if the console fails.
    pub fn play_round(&mut self, console: &mut impl Console) -> io::Result<RoundOutcome> {
        console.report(Event::Board(&self.board))?;

        loop {
            let col = match console.next_move(self.name(self.active))? {
                Move::Column(col) => col,
                Move::Quit => {
                    log::debug!("{:?} ended the game", self.active);
                    return Ok(RoundOutcome::Terminated);
                }
            };

            // columns arrive 1 indexed
            let placed = match col.checked_sub(1) {
                Some(col) => self.board.drop(col, self.active),
                None => Err(MoveError::ColumnOutOfRange {
                    columns: self.board.columns(),
                }),
            };
            if let Err(e) = placed {
                log::debug!("{:?} move rejected: {e}", self.active);
                console.report(Event::InvalidMove(&e))?;
                continue;
            }
            log::trace!("{:?} placed in column {col}", self.active);

            console.report(Event::Board(&self.board))?;

            if let Some(line) = self.board.winning_line(self.active) {
                log::debug!("{:?} wins with {line:?}", self.active);
                self.scores.award(self.active, WIN_POINTS);
                console.report(Event::Won(self.name(self.active)))?;
                return Ok(RoundOutcome::Won(self.active));
            }

            if self.board.is_full() {
                log::debug!("board full, draw");
                self.scores.award(Player::Player1, DRAW_POINTS);
                self.scores.award(Player::Player2, DRAW_POINTS);
                console.report(Event::Draw)?;
                return Ok(RoundOutcome::Draw);
            }

            self.active = self.active.other();
        }
    }

    /// Start the game.
    ///
    /// Plays every scheduled game. In a series the score is reported after each
    /// game, the board is cleared and the other player opens the next game.
    /// A quitting player stops the whole series.
    ///
    /// A session runs only once; further calls report that it already started.
    ///
    /// # Errors
    ///
    /// Returns an error only if the console fails.
    pub fn start(&mut self, console: &mut impl Console) -> io::Result<SessionOutcome> {
        if self.running {
            log::warn!("start called on a running session");
            console.report(Event::AlreadyRunning)?;
            return Ok(SessionOutcome::AlreadyRunning);
        }
        self.running = true;

        console.report(Event::Matchup {
            player1: &self.config.player1,
            player2: &self.config.player2,
            rows: self.config.rows,
            columns: self.config.columns,
            total_games: self.config.total_games,
        })?;

        let series = self.config.is_series();
        let mut outcome = SessionOutcome::Completed;
        for game in 1..=self.config.total_games {
            self.current_game = game;
            self.active = self.starting;
            log::debug!("game {game} of {}, {:?} opens", self.config.total_games, self.starting);

            if series {
                console.report(Event::GameNumber(game))?;
            }

            if self.play_round(console)? == RoundOutcome::Terminated {
                outcome = SessionOutcome::Terminated;
                break;
            }

            if series {
                console.report(Event::Scores {
                    player1: &self.config.player1,
                    player2: &self.config.player2,
                    scores: self.scores,
                })?;
                self.starting = self.starting.other();
                self.board.reset();
            }
        }

        console.report(Event::GameOver)?;
        log::debug!("session over: {outcome:?}, scores {:?}", self.scores);
        Ok(outcome)
    }
}
