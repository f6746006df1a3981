// People Cards - expandable person cards in the terminal
//
// Each person is a card that shows a name until it is opened, then reveals
// age, favorite color and favorite movie. Cards open and close independently.
//
// Architecture:
// - Model: ordered records plus per-row expansion flags, keyed by identity
// - Presentation: maps records and flags to row views, animates the chevron
// - TUI (ratatui): draws row views as cards, routes keys and clicks
// - List: the same row views as plain text or JSON for scripts

mod cli;
mod config;
mod list;
mod logging;
mod model;
mod presentation;
mod tui;
mod util;

use anyhow::{Context, Result};
use cli::Mode;
use config::Config;
use logging::{LogBuffer, LogSink};
use model::{seed, RowListModel};
use presentation::RowPresentationController;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let Some(mode) = cli::handle_cli() else {
        return Ok(());
    };

    // First run writes a commented default config for discoverability
    Config::ensure_config_exists();
    let config = Config::from_env();

    let interactive = mode == Mode::Interactive && config.enable_tui;

    // TUI owns the screen, so logs go to the status bar buffer; otherwise stderr.
    // The guard must outlive the program so file logs flush.
    let log_buffer = LogBuffer::new();
    let sink = if interactive {
        LogSink::Buffer
    } else {
        LogSink::Stderr
    };
    let _file_guard = logging::init(&config.logging, sink, &log_buffer);

    let people = match &config.people_file {
        Some(path) => seed::load_people(path)?,
        None => seed::default_people(),
    };
    let mut model = RowListModel::new(people).context("Failed to build the people list")?;
    let presenter = RowPresentationController::new(config.animation.duration());

    match mode {
        Mode::List { expand, json } => {
            list::apply_expansions(&mut model, &expand);
            if json {
                println!("{}", list::render_json(&model, &presenter)?);
            } else {
                print!("{}", list::render_text(&model, &presenter));
            }
        }
        Mode::Interactive if !interactive => {
            print!("{}", list::render_text(&model, &presenter));
        }
        Mode::Interactive => {
            tui::run_tui(model, presenter, log_buffer, &config).await?;
        }
    }

    Ok(())
}
