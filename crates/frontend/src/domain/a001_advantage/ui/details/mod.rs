//! Advantage Details UI Module
//!
//! MVVM layout:
//! - model.rs: API gateway (fetch profile, fetch advantage, update)
//! - form.rs: editable form state and submit-time validation
//! - flow.rs: load and submit sequences, independent of the DOM
//! - view_model.rs: ViewModel with signals and commands
//! - view.rs: Leptos component (pure UI)

mod flow;
mod form;
mod model;
mod view;
mod view_model;

pub use flow::{EditAdvantageFlow, LoadOutcome, SubmitError, SubmitOutcome};
pub use form::{AdvantageField, AdvantageForm, FormError};
pub use model::{AdvantageGateway, ApiError, HttpAdvantageGateway};
pub use view::EditAdvantagePage;
pub use view_model::EditAdvantageVm;
