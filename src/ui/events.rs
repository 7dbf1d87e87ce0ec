use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::model::{Alert, ConsolidationSuggestion, DashboardData, Material, SubstitutionResult};
use crate::provider::ProviderError;

/// Which provider call a completion belongs to. Routes the result to the
/// right view slot, for successes and failures alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Inventory,
    Dashboard,
    Alerts,
    Report,
    Substitutes,
    TechnicalSheet,
}

/// Payload of a successful provider call.
#[derive(Debug)]
pub enum FetchPayload {
    Inventory(Vec<Material>),
    Dashboard(DashboardData),
    Alerts(Vec<Alert>),
    Report(Vec<ConsolidationSuggestion>),
    Substitutes(SubstitutionResult),
    TechnicalSheet(String),
}

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// Completed provider call, tagged with the generation that issued it.
    /// Stale generations are discarded without touching any state.
    Fetch {
        kind: FetchKind,
        generation: u64,
        result: Result<FetchPayload, ProviderError>,
    },
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
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
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => {
                            if event_tx.send(AppEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            if event_tx.send(AppEvent::Resize(cols, rows)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(_) => break,
                    },
                    Ok(false) => {}
                    Err(_) => break,
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

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}
