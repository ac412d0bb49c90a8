use crate::catalog::{run_worker, CatalogClient};
use crate::config::Config;
use crate::error::{DashError, Result};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_paste};
use crate::ui::render::draw;
use crate::ui::terminal_guard::{setup_terminal, DashTerminal};
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

const TICK_RATE: Duration = Duration::from_millis(250);
const COMMAND_QUEUE: usize = 32;

/// Runs the dashboard until the user quits.
///
/// The UI loop stays on the calling thread; catalog requests run on
/// `runtime` and come back as [`AppEvent::Catalog`].
pub fn run(config: &Config, runtime: &Handle) -> Result<()> {
    let client = CatalogClient::new(&config.catalog)?;
    tracing::info!(base_url = client.base_url(), "starting dashboard");

    let (mut terminal, guard) =
        setup_terminal().map_err(|source| DashError::Terminal { source })?;
    let events = EventHandler::new(TICK_RATE);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    let worker = runtime.spawn(run_worker(client, command_rx, events.sender()));

    let mut app = App::new(config);
    app.set_command_sender(command_tx);
    app.request_reload();

    let result = event_loop(&mut terminal, &events, &mut app);

    drop(app);
    worker.abort();
    drop(guard);
    result
}

fn event_loop(
    terminal: &mut DashTerminal,
    events: &EventHandler,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal
            .draw(|frame| draw(frame, app))
            .map_err(|source| DashError::Terminal { source })?;
        if app.should_quit() {
            return Ok(());
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Input(key)) => handle_key(app, key),
            Ok(AppEvent::Paste(text)) => handle_paste(app, text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "terminal resized");
            }
            Ok(AppEvent::Catalog(outcome)) => app.on_catalog(outcome),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => return Ok(()),
        }
    }
}
