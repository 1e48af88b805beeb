use crate::api::{CardSource, FetchError};
use crate::domain::StampCardRecord;
use crate::location::CardId;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub const MISSING_ID_MESSAGE: &str = "No card number in location";
pub const INTERRUPTED_MESSAGE: &str = "Request was interrupted";

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Error(String),
    Loaded(StampCardRecord),
}

impl ViewState {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Result of one request, tagged with the generation that issued it.
#[derive(Debug)]
pub struct LoadOutcome {
    pub(crate) generation: u64,
    pub(crate) id: CardId,
    pub(crate) result: Result<StampCardRecord, FetchError>,
}

/// Reports exactly one outcome for its request, whichever way the task ends.
/// Dropping it unsettled (abort, panic) reports an interruption.
struct SettleGuard {
    tx: Option<mpsc::UnboundedSender<LoadOutcome>>,
    generation: u64,
    id: CardId,
}

impl SettleGuard {
    fn settle(mut self, result: Result<StampCardRecord, FetchError>) {
        self.send(result);
    }

    fn send(&mut self, result: Result<StampCardRecord, FetchError>) {
        if let Some(tx) = self.tx.take() {
            // The receiver only goes away with the view itself.
            let _ = tx.send(LoadOutcome {
                generation: self.generation,
                id: self.id.clone(),
                result,
            });
        }
    }
}

impl Drop for SettleGuard {
    fn drop(&mut self) {
        self.send(Err(FetchError::Transport(INTERRUPTED_MESSAGE.to_string())));
    }
}

/// Owns the view state of one card page and the request that feeds it.
///
/// Only the outcome of the most recently issued request is ever applied:
/// each `load` bumps `generation`, aborts the previous task and tags the new
/// one, and `apply` drops anything carrying an older tag.
#[derive(Debug)]
pub struct CardView<S: CardSource> {
    source: Arc<S>,
    detailed_errors: bool,
    location: String,
    identifier: Option<CardId>,
    mounted: bool,
    state: ViewState,
    generation: u64,
    in_flight: Option<JoinHandle<()>>,
    outcome_tx: mpsc::UnboundedSender<LoadOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<LoadOutcome>,
}

impl<S: CardSource> CardView<S> {
    pub fn new(source: Arc<S>, detailed_errors: bool) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            source,
            detailed_errors,
            location: String::new(),
            identifier: None,
            mounted: false,
            state: ViewState::Loading,
            generation: 0,
            in_flight: None,
            outcome_tx,
            outcome_rx,
        }
    }

    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    pub const fn identifier(&self) -> Option<&CardId> {
        self.identifier.as_ref()
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Points the view at a new location. Loads on the first call and
    /// whenever the derived identifier changes; returns whether it did.
    pub fn set_location(&mut self, path: impl Into<String>) -> bool {
        let path = path.into();
        let id = CardId::from_location(&path);
        self.location = path;

        if self.mounted && id == self.identifier {
            return false;
        }
        self.mounted = true;

        match id {
            Some(id) => self.load(id),
            None => self.reject_location(),
        }
        true
    }

    /// Starts a request for `id`, superseding any pending one.
    pub fn load(&mut self, id: CardId) {
        self.mounted = true;
        self.begin_generation();
        self.identifier = Some(id.clone());
        self.state = ViewState::Loading;
        tracing::debug!(card = %id, generation = self.generation, "loading stamp card");

        let guard = SettleGuard {
            tx: Some(self.outcome_tx.clone()),
            generation: self.generation,
            id: id.clone(),
        };
        let source = Arc::clone(&self.source);
        self.in_flight = Some(tokio::spawn(async move {
            let result = source.fetch_card(&id).await;
            guard.settle(result);
        }));
    }

    fn reject_location(&mut self) {
        self.begin_generation();
        self.identifier = None;
        tracing::warn!(location = %self.location, "location has no card number");
        self.state = ViewState::Error(MISSING_ID_MESSAGE.to_string());
    }

    fn begin_generation(&mut self) {
        self.generation += 1;
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }

    /// Applies an outcome if it belongs to the current generation.
    pub fn apply(&mut self, outcome: LoadOutcome) -> bool {
        if outcome.generation != self.generation {
            tracing::debug!(
                card = %outcome.id,
                stale = outcome.generation,
                current = self.generation,
                "discarding stale stamp card response"
            );
            return false;
        }

        self.in_flight = None;
        self.state = match outcome.result {
            Ok(record) => {
                tracing::info!(card = %outcome.id, "stamp card loaded");
                ViewState::Loaded(record)
            }
            Err(error) => {
                tracing::warn!(card = %outcome.id, %error, "stamp card load failed");
                ViewState::Error(error.user_message(self.detailed_errors))
            }
        };
        true
    }

    /// Applies every outcome already delivered. Never blocks.
    pub fn drain(&mut self) -> bool {
        let mut changed = false;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            changed |= self.apply(outcome);
        }
        changed
    }

    /// Waits until the current request settles. Returns at once when no
    /// request is in flight.
    pub async fn settle(&mut self) -> &ViewState {
        while self.state.is_loading() && self.in_flight.is_some() {
            let Some(outcome) = self.outcome_rx.recv().await else {
                break;
            };
            self.apply(outcome);
        }
        &self.state
    }
}

impl<S: CardSource> Drop for CardView<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}
