//! Registration form with an address autocomplete field.
//!
//! The address field searches the address proxy once more than two
//! characters are typed and resolves the chosen suggestion to a full
//! address in the background.

pub mod backend;
pub mod config;
pub mod error;
pub mod form;
pub mod widget;

#[cfg(test)]
mod testing;

pub use backend::{AddressBackend, ProxyBackend};
pub use error::{FormError, FormResult};
pub use form::{Registration, RegistrationForm};
pub use widget::{AddressAutocomplete, SearchOutcome, WidgetEvent, WidgetPhase, WidgetState};
