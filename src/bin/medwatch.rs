//! # medwatch
//!
//! Medication reminder with vitals capture. Runs the reminder scheduler in
//! the background and the schedule/log panes in the foreground.
//!
//! Usage: `cargo run --bin medwatch`

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info, warn};
use ratatui::prelude::*;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};

use medwatch::core::{AppContext, Config};
use medwatch::features::reminders::{Confirmation, ReminderScheduler, ReminderService};
use medwatch::tui::app::InputMode;
use medwatch::tui::event::{map_key_event, KeyAction};
use medwatch::tui::{App, Event, EventHandler};

/// TUI refresh rate
const TICK_RATE: Duration = Duration::from_millis(250);

/// How long to wait for the scheduler to stop on exit
const SHUTDOWN_GRACE: Duration = Duration::from_secs(3);

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Log lines would tear the alternate screen, so stay quiet unless asked
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    info!("Starting medwatch...");

    let ctx = Arc::new(AppContext::open(config));
    let service = ReminderService::new(ctx.clone());

    // Start the reminder scheduler
    let (reminder_tx, reminder_rx) = mpsc::unbounded_channel();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let scheduler = ReminderScheduler::new(ctx.clone(), reminder_tx);
    let scheduler_handle = tokio::spawn(scheduler.run(shutdown_rx));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(ctx.vitals.is_online());
    app.refresh(&ctx);
    if !app.device_online {
        app.add_activity("Vitals sensor not connected".to_string());
    }

    let mut events = EventHandler::new(TICK_RATE, reminder_rx);

    // Main loop
    let result = run_app(&mut terminal, &mut app, &mut events, &ctx, &service).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Stop the scheduler
    let _ = shutdown_tx.send(true);
    if tokio::time::timeout(SHUTDOWN_GRACE, scheduler_handle).await.is_err() {
        warn!("Reminder scheduler did not stop within {}s", SHUTDOWN_GRACE.as_secs());
    }

    if let Err(e) = result {
        error!("Application error: {}", e);
        return Err(e);
    }

    info!("medwatch shutdown complete");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
    ctx: &AppContext,
    service: &ReminderService,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            medwatch::tui::ui::render(frame, app);
        })?;

        let Some(event) = events.next().await else {
            break;
        };

        match event {
            Event::Key(key) => {
                let action = map_key_event(
                    key,
                    app.input_mode == InputMode::Editing,
                    app.current_reminder().is_some(),
                );
                handle_action(app, action, ctx, service);
            }
            Event::Reminder(reminder) => {
                app.push_reminder(reminder);
            }
            Event::Tick | Event::Resize(_, _) => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_action(app: &mut App, action: KeyAction, ctx: &AppContext, service: &ReminderService) {
    match action {
        KeyAction::None => {}
        KeyAction::Quit => app.should_quit = true,
        KeyAction::Add => app.start_add(),
        KeyAction::Delete => app.start_delete(ctx),
        KeyAction::Confirm => app.resolve_current(ctx, service, Confirmation::Taken),
        KeyAction::Dismiss => app.resolve_current(ctx, service, Confirmation::Dismissed),
        KeyAction::Refresh => {
            app.refresh(ctx);
            app.status_message = Some("Reloaded".to_string());
        }
        KeyAction::SubmitInput => app.submit_input(ctx),
        KeyAction::CancelInput => app.cancel_input(),
        KeyAction::Char(c) => app.input_buffer.push(c),
        KeyAction::Backspace => {
            app.input_buffer.pop();
        }
    }
}
