//! fleet-command - A terminal dashboard for a simulated generator fleet
//!
//! This is the main entry point for the fleet-command application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod cli;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::cli::Cli;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::Result;
use clap::Parser;
use crossterm::event::Event;
use std::time::Duration;
use tracing::{error, info};

/// Event poll timeout; also paces the splash screen
const TICK_MS: u64 = 100;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging is optional; the dashboard still runs without a log directory
    let _guard = match logging::init_tracing(&Config::log_dir()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Logging disabled: {:#}", e);
            None
        }
    };
    info!(version = env!("CARGO_PKG_VERSION"), "starting fleet-command");

    let config = cli.apply(Config::load());

    // Setup terminal
    let mut tui = Tui::new(Duration::from_millis(TICK_MS))?;
    tui.enter()?;

    // Create app state
    let mut app = App::new(&config, Config::config_path(), !cli.no_splash);
    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        error!(error = %format!("{:#}", err), "fatal error");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                error!(error = %e, "draw failed");
            }
        })?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Action might produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                current_action = app.update(a)?;
            }
        } else {
            // No event - send a tick for time-based updates
            let mut current_action = Some(Action::Tick);
            while let Some(a) = current_action {
                current_action = app.update(a)?;
            }
        }
    }

    Ok(())
}
