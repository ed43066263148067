//! Terminal display adapter for the counter.

pub mod app;
pub mod footer;
pub mod layout;
pub mod render;
pub mod terminal_guard;
pub mod theme;

use crate::config::UiConfig;
use crate::store::Store;
use crate::ui::app::App;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crossterm::event::{self, Event};
use std::time::Duration;

/// Run the interactive counter until the user quits.
pub fn run(store: &Store, config: &UiConfig) -> anyhow::Result<()> {
    let mut app = App::new(store, config)?;
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let (mut terminal, guard) = setup_terminal()?;
    tracing::info!("Terminal UI started");

    while !app.should_quit() {
        terminal.draw(|frame| draw(frame, &app))?;
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                app.on_key(key);
            }
        }
    }

    drop(guard);
    tracing::info!(count = app.count(), "Terminal UI stopped");
    Ok(())
}
