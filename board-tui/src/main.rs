//! 快餐取餐看板终端程序
//!
//! Run: cargo run --bin pickup-board

mod app;
mod config;
mod logger;
mod ui;

use app::App;
use board_core::BoardManager;
use config::Config;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::io::{self, Stdout};
use std::time::Duration;

/// UI tick; bounds how long an expired notice can linger
const TICK_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    logger::init_logger(&config)?;

    tracing::info!(board_file = %config.board_file, "Pickup board starting");
    let manager = BoardManager::open(&config.board_file);
    let mut app = App::new(manager, Duration::from_millis(config.notice_ttl_ms));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        if event::poll(TICK_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
        {
            app.on_key(key);
        }

        app.tick();

        if app.should_quit {
            return Ok(());
        }
    }
}
