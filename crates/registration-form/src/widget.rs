//! Address autocomplete field.
//!
//! The widget owns the typed query and the candidate list shown in its
//! dropdown. Every input change and every selection bumps a sequence number;
//! a search response is applied only if its sequence number is still the
//! latest, so a slow response can never overwrite a newer list.

use crate::backend::AddressBackend;
use places_client::{PlaceCandidate, PlaceDetail};
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tracing::{debug, info, warn};

/// Inputs this short clear the dropdown instead of searching.
pub const MAX_SILENT_QUERY_CHARS: usize = 2;

/// Observable dropdown state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetPhase {
    Idle,
    Showing,
}

/// Snapshot of the widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetState {
    pub query_text: String,
    pub candidates: Vec<PlaceCandidate>,
    /// Place id of the last selection, cleared again by typing.
    pub selected_place_id: Option<String>,
    latest_seq: u64,
}

impl WidgetState {
    pub fn phase(&self) -> WidgetPhase {
        if self.candidates.is_empty() {
            WidgetPhase::Idle
        } else {
            WidgetPhase::Showing
        }
    }

    /// Dropdown entries, in candidate order.
    pub fn display_options(&self) -> Vec<&str> {
        self.candidates
            .iter()
            .map(|c| c.display_text.as_str())
            .collect()
    }

    fn next_seq(&mut self) -> u64 {
        self.latest_seq += 1;
        self.latest_seq
    }
}

/// What happened to a single input change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Input too short; candidates cleared without a search.
    Cleared,
    /// Search result applied with this many candidates.
    Applied(usize),
    /// A newer input or selection superseded this search.
    Stale,
    /// Search failed; candidates left as they were.
    Failed,
}

/// Emitted when a background place lookup finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    PlaceResolved { place_id: String, detail: PlaceDetail },
    LookupFailed { place_id: String, reason: String },
}

/// Address field with type-ahead suggestions.
#[derive(Clone)]
pub struct AddressAutocomplete {
    backend: Arc<dyn AddressBackend>,
    state: Arc<RwLock<WidgetState>>,
    events: mpsc::UnboundedSender<WidgetEvent>,
}

impl AddressAutocomplete {
    /// Create a widget and the receiver for its lookup events.
    pub fn new(backend: Arc<dyn AddressBackend>) -> (Self, mpsc::UnboundedReceiver<WidgetEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let widget = Self {
            backend,
            state: Arc::new(RwLock::new(WidgetState::default())),
            events,
        };
        (widget, receiver)
    }

    /// Current state for rendering.
    pub async fn state(&self) -> WidgetState {
        self.state.read().await.clone()
    }

    /// React to the input text changing.
    ///
    /// Several calls may be in flight at once; only the most recent one can
    /// change the candidate list.
    pub async fn handle_input(&self, value: &str) -> SearchOutcome {
        let seq = {
            let mut state = self.state.write().await;
            state.query_text = value.to_string();
            state.selected_place_id = None;
            let seq = state.next_seq();

            if value.trim().is_empty() || value.chars().count() <= MAX_SILENT_QUERY_CHARS {
                state.candidates.clear();
                return SearchOutcome::Cleared;
            }
            seq
        };

        let result = self.backend.fetch_suggestions(value).await;

        let mut state = self.state.write().await;
        if state.latest_seq != seq {
            debug!(seq, latest = state.latest_seq, "Discarding stale suggestions");
            return SearchOutcome::Stale;
        }

        match result {
            Ok(result) => {
                let count = result.candidates.len();
                state.candidates = result.candidates;
                SearchOutcome::Applied(count)
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch suggestions");
                SearchOutcome::Failed
            }
        }
    }

    /// React to the user picking a dropdown entry by its text.
    ///
    /// Returns the matched candidate. When it has a place id, the address is
    /// looked up in the background and reported as a [`WidgetEvent`].
    pub async fn handle_select(&self, display_text: &str) -> Option<PlaceCandidate> {
        let (selected, seq) = {
            let mut state = self.state.write().await;
            let selected = state
                .candidates
                .iter()
                .find(|c| c.display_text == display_text)
                .cloned();

            state.query_text = display_text.to_string();
            state.candidates.clear();
            state.selected_place_id = selected.as_ref().and_then(|c| c.place_id.clone());
            let seq = state.next_seq();
            (selected, seq)
        };

        info!(selected = ?selected, "Selected suggestion");

        if let Some(place_id) = selected.as_ref().and_then(|c| c.place_id.clone()) {
            self.spawn_lookup(place_id, seq);
        }

        selected
    }

    /// Resolve `place_id` in the background. The result is reported only if
    /// no input or selection has happened since selection `seq`.
    fn spawn_lookup(&self, place_id: String, seq: u64) {
        let backend = Arc::clone(&self.backend);
        let state = Arc::clone(&self.state);
        let events = self.events.clone();

        tokio::spawn(async move {
            let event = match backend.fetch_place_details(&place_id).await {
                Ok(detail) => {
                    debug!(%place_id, "Place details resolved");
                    WidgetEvent::PlaceResolved { place_id, detail }
                }
                Err(e) => {
                    warn!(%place_id, error = %e, "Failed to fetch place details");
                    WidgetEvent::LookupFailed {
                        place_id,
                        reason: e.to_string(),
                    }
                }
            };

            // Send under the read lock so a newer selection's event can't overtake this one
            let state = state.read().await;
            if state.latest_seq != seq {
                debug!(seq, latest = state.latest_seq, "Discarding stale place lookup");
                return;
            }
            if events.send(event).is_err() {
                debug!("Lookup event dropped, no listener");
            }
        });
    }
}
