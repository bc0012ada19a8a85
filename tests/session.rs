use std::{collections::VecDeque, io};

use connect_four::{
    Console, Event, Game, GameConfig, Move, MoveError, Player, RoundOutcome, Scores,
    SessionOutcome, Terminal, TileType,
};

/// A move sequence on a 6 x 7 board that fills it without anyone connecting four.
const DRAW: [usize; 42] = [
    6, 4, 3, 4, 2, 6, 4, 2, 1, 2, 5, 2, 3, 6, 1, 6, 7, 7, 3, 1, 7, 1, 5, 3, 4, 1, 4, 5, 3, 4, 3,
    7, 1, 5, 2, 2, 6, 5, 5, 6, 7, 7,
];

/// What the recorder saw, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Seen {
    Matchup(usize),
    Board(Vec<Vec<TileType>>),
    Invalid(MoveError),
    Won(String),
    Draw,
    GameNumber(usize),
    Scores(Scores),
    AlreadyRunning,
    GameOver,
    Asked(String),
}

#[derive(Default)]
struct Recorder {
    moves: VecDeque<Move>,
    seen: Vec<Seen>,
}

impl Recorder {
    fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
            seen: Vec::new(),
        }
    }

    fn asked(&self) -> Vec<&str> {
        self.seen
            .iter()
            .filter_map(|s| match s {
                Seen::Asked(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    fn count(&self, pred: impl Fn(&Seen) -> bool) -> usize {
        self.seen.iter().filter(|s| pred(s)).count()
    }
}

impl Console for Recorder {
    fn player_names(&mut self) -> io::Result<(String, String)> {
        Ok((String::from("Anna"), String::from("Ben")))
    }

    fn board_dimensions(&mut self) -> io::Result<(usize, usize)> {
        Ok((6, 7))
    }

    fn game_count(&mut self) -> io::Result<usize> {
        Ok(1)
    }

    fn next_move(&mut self, player: &str) -> io::Result<Move> {
        self.seen.push(Seen::Asked(player.to_string()));
        Ok(self.moves.pop_front().unwrap_or(Move::Quit))
    }

    fn report(&mut self, event: Event<'_>) -> io::Result<()> {
        let seen = match event {
            Event::Matchup { total_games, .. } => Seen::Matchup(total_games),
            Event::Board(board) => Seen::Board(board.render()),
            Event::InvalidMove(e) => Seen::Invalid(e.clone()),
            Event::Won(name) => Seen::Won(name.to_string()),
            Event::Draw => Seen::Draw,
            Event::GameNumber(n) => Seen::GameNumber(n),
            Event::Scores { scores, .. } => Seen::Scores(scores),
            Event::AlreadyRunning => Seen::AlreadyRunning,
            Event::GameOver => Seen::GameOver,
        };
        self.seen.push(seen);
        Ok(())
    }
}

fn columns(cols: &[usize]) -> Vec<Move> {
    cols.iter().map(|c| Move::Column(*c)).collect()
}

fn game(total_games: usize) -> Game {
    Game::new(GameConfig {
        player1: String::from("Anna"),
        player2: String::from("Ben"),
        total_games,
        ..GameConfig::default()
    })
    .unwrap()
}

fn empty_board() -> Vec<Vec<TileType>> {
    vec![vec![TileType::Empty; 7]; 6]
}

#[test]
fn config_collected_from_console() {
    let mut recorder = Recorder::default();
    let config = GameConfig::collect(&mut recorder).unwrap();
    assert_eq!(config.player1, "Anna");
    assert_eq!(config.player2, "Ben");
    assert_eq!((config.rows, config.columns, config.total_games), (6, 7, 1));
}

#[test]
fn full_board_is_a_draw() {
    let mut game = game(1);
    let mut recorder = Recorder::new(columns(&DRAW));
    assert_eq!(game.start(&mut recorder).unwrap(), SessionOutcome::Completed);
    assert!(game.board().is_full());
    assert!(!game.board().has_winner(Player::Player1));
    assert!(!game.board().has_winner(Player::Player2));
    assert_eq!(game.scores(), Scores { player1: 1, player2: 1 });
    assert_eq!(recorder.count(|s| *s == Seen::Draw), 1);
    assert_eq!(recorder.seen.last(), Some(&Seen::GameOver));
    // single game: no numbering and no score report
    assert_eq!(recorder.count(|s| matches!(s, Seen::GameNumber(_))), 0);
    assert_eq!(recorder.count(|s| matches!(s, Seen::Scores(_))), 0);
}

#[test]
fn full_column_is_retried_by_the_same_player() {
    let mut game = game(1);
    let mut moves = columns(&[3, 3, 3, 3, 3, 3]);
    moves.extend(columns(&[3, 4]));
    let mut recorder = Recorder::new(moves);
    assert_eq!(game.play_round(&mut recorder).unwrap(), RoundOutcome::Terminated);

    let invalid = recorder
        .seen
        .iter()
        .position(|s| *s == Seen::Invalid(MoveError::ColumnFull { column: 2 }))
        .unwrap();
    // the board was not redrawn in between and Anna goes again
    assert_eq!(recorder.seen[invalid - 1], Seen::Asked(String::from("Anna")));
    assert_eq!(recorder.seen[invalid + 1], Seen::Asked(String::from("Anna")));
    assert_eq!(game.board().get(5, 3), Some(TileType::Player1));
    assert_eq!(game.board().get(0, 2), Some(TileType::Player2));
}

#[test]
fn series_keeps_scores_and_resets_board() {
    let mut game = game(2);
    // game 1: Anna wins in column 1; game 2: Ben opens and quits on the second turn
    let mut moves = columns(&[1, 2, 1, 2, 1, 2, 1]);
    moves.extend(columns(&[5, 6]));
    let mut recorder = Recorder::new(moves);
    assert_eq!(game.start(&mut recorder).unwrap(), SessionOutcome::Terminated);

    assert_eq!(game.current_game(), 2);
    assert_eq!(game.scores(), Scores { player1: 2, player2: 0 });
    assert_eq!(game.starting_player(), Player::Player2);

    let second = recorder
        .seen
        .iter()
        .position(|s| *s == Seen::GameNumber(2))
        .unwrap();
    assert_eq!(recorder.seen[0], Seen::Matchup(2));
    assert_eq!(recorder.seen[1], Seen::GameNumber(1));
    assert_eq!(recorder.seen[second - 2], Seen::Won(String::from("Anna")));
    assert_eq!(
        recorder.seen[second - 1],
        Seen::Scores(Scores { player1: 2, player2: 0 })
    );
    assert_eq!(recorder.seen[second + 1], Seen::Board(empty_board()));
    assert_eq!(recorder.seen[second + 2], Seen::Asked(String::from("Ben")));

    // the quit ends the series: no score report after it
    assert_eq!(
        &recorder.seen[recorder.seen.len() - 2..],
        [Seen::Asked(String::from("Ben")), Seen::GameOver]
    );
}

#[test]
fn quit_skips_remaining_games() {
    let mut game = game(3);
    let mut moves = columns(&[4, 4]);
    moves.push(Move::Quit);
    moves.extend(columns(&[1, 2, 3]));
    let mut recorder = Recorder::new(moves);
    assert_eq!(game.start(&mut recorder).unwrap(), SessionOutcome::Terminated);
    assert_eq!(game.scores(), Scores::default());
    assert_eq!(game.current_game(), 1);
    assert_eq!(recorder.moves.len(), 3);
    assert_eq!(recorder.count(|s| matches!(s, Seen::GameNumber(_))), 1);
    assert_eq!(recorder.asked(), ["Anna", "Ben", "Anna"]);
}

#[test]
fn started_session_cannot_start_again() {
    let mut game = game(1);
    let mut recorder = Recorder::new(columns(&[1, 2, 1, 2, 1, 2, 1]));
    assert_eq!(game.start(&mut recorder).unwrap(), SessionOutcome::Completed);
    let before = recorder.seen.len();
    assert_eq!(
        game.start(&mut recorder).unwrap(),
        SessionOutcome::AlreadyRunning
    );
    assert_eq!(&recorder.seen[before..], [Seen::AlreadyRunning]);
    assert_eq!(game.scores(), Scores { player1: 2, player2: 0 });
}

#[test]
fn terminal_transcript() {
    let input = "Anna\nBen\n5 x 5\n2\n1\nfoo\n9\n2\n1\n2\n1\n2\n1\n1\nend\n";
    let mut terminal = Terminal::new(input.as_bytes(), Vec::new());
    let config = GameConfig::collect(&mut terminal).unwrap();
    let mut game = Game::new(config).unwrap();
    assert_eq!(game.start(&mut terminal).unwrap(), SessionOutcome::Terminated);

    let out = String::from_utf8(terminal.into_writer()).unwrap();
    assert!(out.contains("Anna VS Ben\n5 X 5 board\nTotal 2 games\nGame #1\n"));
    assert!(out.contains("Ben's turn:\nIncorrect column number\nBen's turn:\n"));
    assert!(out.contains("The column number is out of range (1 - 5)\n"));
    assert!(out.contains("Player Anna won\nScore\nAnna: 2 Ben: 0\nGame #2\n"));
    // game 2: Ben opens in column 1, Anna quits
    assert!(out.ends_with("|*| | | | |\n===========\nAnna's turn:\nGame over!\n"));
}
