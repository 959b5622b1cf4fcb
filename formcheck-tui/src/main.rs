mod app;
mod clock;
mod error;
mod paths;
mod screen;
mod terminal;

use std::fs::{self, File};
use std::path::PathBuf;
use std::time::Instant;

use crossterm::event::{Event, EventStream};
use formcheck::FormConfig;
use futures::StreamExt;
use log::{info, trace};
use simplelog::{Config, LevelFilter, WriteLogger};
use tokio::time::{MissedTickBehavior, sleep_until};

use crate::app::App;
use crate::clock::CLOCK_PERIOD;
use crate::error::TuiError;
use crate::terminal::TerminalGuard;

fn init_logging() -> Result<(), TuiError> {
    paths::rotate_logs();
    let path = paths::log_file().unwrap_or_else(|| PathBuf::from(paths::FALLBACK_LOG_FILE));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let log_file = File::create(&path)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;
    Ok(())
}

/// Sleep until a deadline, or wait forever if None.
async fn sleep_until_optional(deadline: Option<Instant>) {
    match deadline {
        Some(d) => sleep_until(tokio::time::Instant::from_std(d)).await,
        None => std::future::pending::<()>().await,
    }
}

async fn run_event_loop(mut app: App, term: &mut TerminalGuard) -> Result<(), TuiError> {
    let mut events = EventStream::new();
    let mut clock_tick = tokio::time::interval(CLOCK_PERIOD);
    clock_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

    app.content_loaded();

    loop {
        let (cols, _) = term.size()?;
        term.draw(&screen::lines(&app, cols.saturating_sub(2) as usize))?;

        if app.should_quit() {
            break;
        }

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) => app.handle_key(key, Instant::now()),
                Some(Ok(other)) => trace!("Ignored terminal event: {:?}", other),
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            _ = sleep_until_optional(app.next_deadline()) => app.tick(Instant::now()),
            _ = clock_tick.tick() => app.tick_clock(),
        }
    }

    Ok(())
}

async fn run() -> Result<(), TuiError> {
    let mut term = TerminalGuard::new()?;
    let app = App::new(FormConfig::default());
    run_event_loop(app, &mut term).await
}

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Logging disabled: {}", e);
    }
    info!("Starting formcheck-tui");

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
    }
}
