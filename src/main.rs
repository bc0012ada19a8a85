use connect_four::{Game, GameConfig, GameResult, Terminal};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> GameResult<()> {
    let mut terminal = Terminal::stdio();
    let config = GameConfig::collect(&mut terminal)?;
    let mut game = Game::new(config)?;
    game.start(&mut terminal)?;
    Ok(())
}
