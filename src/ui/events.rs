use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::catalog::CatalogOutcome;

pub enum AppEvent {
    Input(KeyEvent),
    Paste(String),
    Tick,
    Resize(u16, u16),
    /// Result of a catalog command, posted by the worker.
    Catalog(CatalogOutcome),
}

/// Single queue for terminal input and catalog results; the UI loop handles
/// one event at a time.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());

                match event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(Event::Key(key)) => event_tx.send(AppEvent::Input(key)),
                            Ok(Event::Paste(text)) => event_tx.send(AppEvent::Paste(text)),
                            Ok(Event::Resize(cols, rows)) => {
                                event_tx.send(AppEvent::Resize(cols, rows))
                            }
                            Ok(_) => Ok(()),
                            Err(err) => {
                                tracing::error!(error = %err, "terminal read failed");
                                break;
                            }
                        };
                        if forwarded.is_err() {
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "terminal poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
