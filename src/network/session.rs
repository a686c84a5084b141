use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::data::{self, Dataset};
use crate::protocol::{ClientMessage, ServerMessage, ViewInput};
use crate::view::{self, ViewState};

/// The current dataset snapshot, shared by every session and the HTTP API.
/// Readers clone the inner `Arc`; a reload swaps it. Only one reload runs
/// at a time.
#[derive(Clone)]
pub struct SharedDataset {
    current: Arc<RwLock<Arc<Dataset>>>,
    reload_gate: Arc<Mutex<()>>,
}

impl SharedDataset {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(dataset))),
            reload_gate: Arc::new(Mutex::new(())),
        }
    }

    pub async fn snapshot(&self) -> Arc<Dataset> {
        self.current.read().await.clone()
    }

    pub async fn reload(&self, settings: &Settings) -> Arc<Dataset> {
        let seen = self.snapshot().await;
        self.reload_after(seen, settings).await
    }

    /// Loads a fresh dataset unless the snapshot moved past `seen` while
    /// waiting for the gate, in which case the newer snapshot is reused.
    async fn reload_after(&self, seen: Arc<Dataset>, settings: &Settings) -> Arc<Dataset> {
        let _gate = self.reload_gate.lock().await;
        let current = self.snapshot().await;
        if !Arc::ptr_eq(&seen, &current) {
            debug!("Reload already completed by another session");
            return current;
        }
        let fresh = Arc::new(data::load(settings).await);
        *self.current.write().await = fresh.clone();
        fresh
    }
}

/// One connected front-end. Owns its `ViewState`; inputs are handled one
/// at a time in arrival order.
pub struct Session {
    dataset: SharedDataset,
    settings: Arc<Settings>,
    state: ViewState,
}

impl Session {
    pub fn new(dataset: SharedDataset, settings: Arc<Settings>) -> Self {
        Self {
            dataset,
            settings,
            state: ViewState::default(),
        }
    }

    /// Current view, derived from the latest dataset snapshot.
    pub async fn view(&self) -> ServerMessage {
        let dataset = self.dataset.snapshot().await;
        ServerMessage::View(view::derive(&dataset, &self.state))
    }

    pub async fn handle(&mut self, msg: ClientMessage) -> ServerMessage {
        match msg {
            ClientMessage::Input(input) => {
                let dataset = self.dataset.snapshot().await;
                if let ViewInput::ToggleCompare { name } = &input {
                    if !self.state.comparison.contains(name) && !dataset.contains_model(name) {
                        warn!("Ignoring comparison toggle for unknown model {:?}", name);
                        return ServerMessage::View(view::derive(&dataset, &self.state));
                    }
                }
                self.state = self.state.apply(&input);
                ServerMessage::View(view::derive(&dataset, &self.state))
            }
            ClientMessage::Reload => {
                info!("Reload requested, refreshing benchmark data");
                let fresh = self.dataset.reload(&self.settings).await;
                ServerMessage::View(view::derive(&fresh, &self.state))
            }
        }
    }
}
