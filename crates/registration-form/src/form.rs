//! Registration form: name, email and the address field.

use crate::backend::AddressBackend;
use crate::widget::{AddressAutocomplete, WidgetEvent};
use places_client::PlaceDetail;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// What the form holds when the user presses "Next".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    /// Text shown in the address field
    pub address_text: String,
    /// Structured address, if the field's selection has been resolved
    pub address: Option<PlaceDetail>,
}

/// Registration form.
///
/// Name and email are taken as typed. The address is filled in from the
/// autocomplete field's lookup events.
pub struct RegistrationForm {
    name: String,
    email: String,
    address_field: AddressAutocomplete,
    events: mpsc::UnboundedReceiver<WidgetEvent>,
    resolved: Option<(String, PlaceDetail)>,
}

impl RegistrationForm {
    pub fn new(backend: Arc<dyn AddressBackend>) -> Self {
        let (address_field, events) = AddressAutocomplete::new(backend);
        Self {
            name: String::new(),
            email: String::new(),
            address_field,
            events,
            resolved: None,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn address_field(&self) -> &AddressAutocomplete {
        &self.address_field
    }

    /// Apply any lookup events that have already arrived.
    pub fn poll_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Wait for the next lookup event and apply it.
    pub async fn next_event(&mut self) -> Option<WidgetEvent> {
        let event = self.events.recv().await?;
        self.apply(event.clone());
        Some(event)
    }

    fn apply(&mut self, event: WidgetEvent) {
        match event {
            WidgetEvent::PlaceResolved { place_id, detail } => {
                debug!(%place_id, "Address resolved");
                self.resolved = Some((place_id, detail));
            }
            WidgetEvent::LookupFailed { place_id, reason } => {
                warn!(%place_id, %reason, "Address could not be resolved");
            }
        }
    }

    /// Structured address matching the field's current selection.
    ///
    /// Lookups for an earlier selection, or a selection the user has since
    /// typed over, are not reported.
    pub async fn address(&self) -> Option<PlaceDetail> {
        let state = self.address_field.state().await;
        match (&self.resolved, state.selected_place_id) {
            (Some((resolved_id, detail)), Some(selected_id)) if *resolved_id == selected_id => {
                Some(detail.clone())
            }
            _ => None,
        }
    }

    /// Collect the form contents. No network call is made.
    pub async fn submit(&mut self) -> Registration {
        self.poll_events();

        let registration = Registration {
            name: self.name.clone(),
            email: self.email.clone(),
            address_text: self.address_field.state().await.query_text,
            address: self.address().await,
        };

        info!(
            name = %registration.name,
            email = %registration.email,
            address = %registration.address_text,
            resolved = registration.address.is_some(),
            "Registered"
        );

        registration
    }
}
