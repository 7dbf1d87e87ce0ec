//! Async fetch plumbing between views and the data provider.
//!
//! Views own a [`FetchSlot`] per remote call. Completions come back through
//! the UI event channel tagged with the generation that issued them; a slot
//! only accepts the generation it is waiting for, so a result arriving for
//! a view that was reset meanwhile is dropped on the floor.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use crate::provider::GenerativeClient;
use crate::ui::events::{AppEvent, FetchKind, FetchPayload};

/// A view's private async-result cell.
#[derive(Debug)]
pub enum FetchSlot<T> {
    Idle,
    Loading {
        generation: u64,
    },
    Ready(T),
    Failed(String),
}

// Not derived: the payload type needs no Default of its own.
impl<T> Default for FetchSlot<T> {
    fn default() -> Self {
        FetchSlot::Idle
    }
}

impl<T> FetchSlot<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, FetchSlot::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchSlot::Loading { .. })
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            FetchSlot::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchSlot::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// True when a completion tagged `generation` is the one this slot is
    /// waiting for.
    pub fn accepts(&self, generation: u64) -> bool {
        matches!(self, FetchSlot::Loading { generation: pending } if *pending == generation)
    }
}

/// Spawns provider calls on the runtime and reports completions as events.
pub struct Fetcher {
    client: Arc<GenerativeClient>,
    runtime: tokio::runtime::Handle,
    tx: Sender<AppEvent>,
}

impl Fetcher {
    pub fn new(
        client: Arc<GenerativeClient>,
        runtime: tokio::runtime::Handle,
        tx: Sender<AppEvent>,
    ) -> Self {
        Self {
            client,
            runtime,
            tx,
        }
    }

    fn report(
        tx: &Sender<AppEvent>,
        kind: FetchKind,
        generation: u64,
        result: Result<FetchPayload, crate::provider::ProviderError>,
    ) {
        // The receiver disappears during shutdown; nothing to do then.
        let _ = tx.send(AppEvent::Fetch {
            kind,
            generation,
            result,
        });
    }

    pub fn spawn_inventory(&self, generation: u64) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = client
                .initial_inventory()
                .await
                .map(FetchPayload::Inventory);
            Self::report(&tx, FetchKind::Inventory, generation, result);
        });
    }

    pub fn spawn_dashboard(&self, generation: u64) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = client.dashboard_data().await.map(FetchPayload::Dashboard);
            Self::report(&tx, FetchKind::Dashboard, generation, result);
        });
    }

    pub fn spawn_alerts(&self, generation: u64) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = client.alerts().await.map(FetchPayload::Alerts);
            Self::report(&tx, FetchKind::Alerts, generation, result);
        });
    }

    pub fn spawn_report(&self, generation: u64) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = client
                .consolidation_report()
                .await
                .map(FetchPayload::Report);
            Self::report(&tx, FetchKind::Report, generation, result);
        });
    }

    pub fn spawn_substitutes(&self, generation: u64, query: String) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = client
                .find_substitutes(&query)
                .await
                .map(FetchPayload::Substitutes);
            Self::report(&tx, FetchKind::Substitutes, generation, result);
        });
    }

    pub fn spawn_technical_sheet(&self, generation: u64, description: String) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = client
                .technical_sheet(&description)
                .await
                .map(FetchPayload::TechnicalSheet);
            Self::report(&tx, FetchKind::TechnicalSheet, generation, result);
        });
    }
}
