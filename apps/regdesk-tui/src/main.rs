//! regdesk - terminal board for compliance regulations
//!
//! Sort regulations into Personal, Relevant and Irrelevant columns, track
//! their status and export the result as CSV.

mod app;
mod commands;
mod keybindings;
mod mode;
mod views;
mod widgets;

use std::io;
use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use regdesk_core::{RegdeskConfig, RegulationStore, Tour};

use app::App;

#[derive(Parser)]
#[command(
    name = "regdesk",
    about = "Sort, track and export compliance regulations",
    version
)]
struct Cli {
    /// Path to config.toml (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the board as CSV to this path and exit
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Show the walkthrough even if it was seen before
    #[arg(long)]
    reset_tour: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so they stay out of the alternate screen
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("REGDESK_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = RegdeskConfig::load_or_default(cli.config.as_deref())?;
    let store = RegulationStore::seeded();

    if let Some(path) = cli.export {
        let date = Utc::now().date_naive();
        let (path, rows) = config.export_board(store.regulations(), Some(path), date)?;
        println!("Exported {} regulations to {}", rows, path.display());
        return Ok(());
    }

    let flags = config.flag_store();
    let mut app = App::new(store, config, flags);
    if cli.reset_tour {
        app.tour = Some(Tour::new());
    }

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
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && app.handle_key(key.code, key.modifiers) {
                return Ok(());
            }
        }
    }
}
