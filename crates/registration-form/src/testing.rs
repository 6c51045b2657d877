//! Test fixtures shared by the widget and form tests.

use crate::backend::AddressBackend;
use crate::error::FormResult;
use async_trait::async_trait;
use places_client::{PlaceCandidate, PlaceDetail, SearchResult, SearchSummary};
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::oneshot;

pub(crate) fn search_result(text: &str, candidates: &[(&str, &str)]) -> SearchResult {
    SearchResult {
        summary: SearchSummary {
            text: text.to_string(),
            max_results: Some(10),
            data_source: "Esri".to_string(),
        },
        candidates: candidates
            .iter()
            .map(|(display, id)| PlaceCandidate::new(*display, *id))
            .collect(),
    }
}

pub(crate) fn main_street() -> SearchResult {
    search_result(
        "123 Main",
        &[
            ("123 Main St, City A", "place-a"),
            ("123 Main St, City B", "place-b"),
        ],
    )
}

pub(crate) fn labelled(place_id: &str) -> PlaceDetail {
    PlaceDetail {
        label: Some(format!("label for {place_id}")),
        ..Default::default()
    }
}

/// Backend whose calls block until the test releases them.
///
/// Ungated searches return no candidates; ungated lookups answer at once
/// with [`labelled`].
#[derive(Default)]
pub(crate) struct GatedBackend {
    pub(crate) gates: Mutex<HashMap<String, oneshot::Receiver<SearchResult>>>,
    place_gates: Mutex<HashMap<String, oneshot::Receiver<PlaceDetail>>>,
}

impl GatedBackend {
    pub(crate) fn gate(&self, text: &str) -> oneshot::Sender<SearchResult> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(text.to_string(), rx);
        tx
    }

    pub(crate) fn gate_place(&self, place_id: &str) -> oneshot::Sender<PlaceDetail> {
        let (tx, rx) = oneshot::channel();
        self.place_gates
            .lock()
            .unwrap()
            .insert(place_id.to_string(), rx);
        tx
    }

    /// Wait until the lookup for `place_id` has started.
    pub(crate) async fn place_requested(&self, place_id: &str) {
        while self.place_gates.lock().unwrap().contains_key(place_id) {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl AddressBackend for GatedBackend {
    async fn fetch_suggestions(&self, text: &str) -> FormResult<SearchResult> {
        let gate = self.gates.lock().unwrap().remove(text);
        match gate {
            Some(rx) => Ok(rx.await.expect("gate dropped")),
            None => Ok(search_result(text, &[])),
        }
    }

    async fn fetch_place_details(&self, place_id: &str) -> FormResult<PlaceDetail> {
        let gate = self.place_gates.lock().unwrap().remove(place_id);
        match gate {
            Some(rx) => Ok(rx.await.expect("gate dropped")),
            None => Ok(labelled(place_id)),
        }
    }
}
