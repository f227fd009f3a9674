//! ViewModel for the advantage edit page
//!
//! Holds the page signals and applies the outcomes of [`EditAdvantageFlow`].

use super::flow::{EditAdvantageFlow, LoadOutcome, SubmitOutcome};
use super::form::{AdvantageField, AdvantageForm};
use super::model::HttpAdvantageGateway;
use crate::shared::navigation::BrowserNavigator;
use crate::shared::notify::ToastNotifier;
use crate::system::auth::LocalStorageTokens;
use contracts::domain::a001_advantage::AdvantageId;
use contracts::domain::a002_company::CompanyProfile;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use serde::Deserialize;
use std::future::Future;
use std::rc::Rc;

/// Shown instead of a photo that failed to load
pub const PHOTO_PLACEHOLDER_URL: &str =
    "https://placehold.co/600x200/e2e8f0/94a3b8?text=Imagem+Invalida";

const LOADING_NAME: &str = "Carregando...";

/// Query parameters of the edit page (`?id=...`)
#[derive(Debug, Default, Deserialize)]
pub struct EditAdvantageQuery {
    #[serde(default)]
    pub id: Option<String>,
}

impl EditAdvantageQuery {
    /// Empty or blank ids count as absent
    pub fn advantage_id(&self) -> Option<AdvantageId> {
        self.id
            .as_deref()
            .and_then(|raw| AdvantageId::from_string(raw).ok())
    }
}

type BrowserFlow =
    EditAdvantageFlow<HttpAdvantageGateway, LocalStorageTokens, BrowserNavigator, ToastNotifier>;

#[derive(Clone, Copy)]
pub struct EditAdvantageVm {
    pub id: StoredValue<Option<AdvantageId>>,
    pub form: RwSignal<AdvantageForm>,
    pub company: RwSignal<Option<CompanyProfile>>,
    /// True until a load finishes; stays true when there is nothing to load
    pub loading: RwSignal<bool>,
    pub submitting: RwSignal<bool>,
    /// Photo URL whose preview failed to load
    pub broken_photo: RwSignal<Option<String>>,
    flow: StoredValue<Rc<BrowserFlow>, LocalStorage>,
}

impl EditAdvantageVm {
    /// Must be created under `ToasterProvider`
    pub fn new(id: Option<AdvantageId>) -> Self {
        let flow = EditAdvantageFlow::new(
            HttpAdvantageGateway::from_config(),
            LocalStorageTokens,
            BrowserNavigator,
            ToastNotifier::from_context(),
        );

        Self {
            id: StoredValue::new(id),
            form: RwSignal::new(AdvantageForm::default()),
            company: RwSignal::new(None),
            loading: RwSignal::new(true),
            submitting: RwSignal::new(false),
            broken_photo: RwSignal::new(None),
            flow: StoredValue::new_local(Rc::new(flow)),
        }
    }

    // === Derived signals ===

    /// The form is hidden until both the load finished and a profile is known
    pub fn is_loading(&self) -> Signal<bool> {
        loading_state(self.loading, self.company)
    }

    pub fn header_name(&self) -> Signal<String> {
        let is_loading = self.is_loading();
        let company = self.company;
        Signal::derive(move || {
            let loading = is_loading.get();
            company.with(|c| header_name(loading, c.as_ref()))
        })
    }

    pub fn submit_label(&self) -> Signal<&'static str> {
        let submitting = self.submitting;
        Signal::derive(move || submit_label(submitting.get()))
    }

    pub fn preview_src(&self) -> Signal<Option<String>> {
        let form = self.form;
        let broken_photo = self.broken_photo;
        Signal::derive(move || {
            let url = form.with(|f| f.photo_url.clone());
            broken_photo.with(|broken| preview_source(&url, broken.as_deref()))
        })
    }

    // === Commands ===

    pub fn field(&self, field: AdvantageField) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.get(field).to_string()))
    }

    pub fn update_field(&self, field: AdvantageField, value: String) {
        self.form.update(|f| f.set(field, value));
    }

    pub fn mark_photo_broken(&self) {
        let url = self.form.with_untracked(|f| f.photo_url.clone());
        self.broken_photo.set(Some(url));
    }

    /// Load profile and advantage once, on mount
    pub fn load(&self) {
        let this = *self;
        let flow = self.flow.get_value();
        let id = self.id.get_value();
        leptos::task::spawn_local(async move {
            let outcome = flow.load(id.as_ref()).await;
            apply_load(outcome, this.loading, this.company, this.form);
        });
    }

    pub fn submit(&self) {
        if self.submitting.get_untracked() {
            return;
        }
        // The form is never rendered without an id
        let Some(id) = self.id.get_value() else {
            return;
        };

        self.submitting.set(true);
        let submitting = self.submitting;
        let form = self.form.get_untracked();
        let flow = self.flow.get_value();
        leptos::task::spawn_local(async move {
            run_submit(submitting, async move { flow.submit(&id, &form).await }).await;
        });
    }

    pub fn cancel(&self) {
        self.flow.with_value(|flow| flow.cancel());
    }
}

fn loading_state(
    loading: RwSignal<bool>,
    company: RwSignal<Option<CompanyProfile>>,
) -> Signal<bool> {
    Signal::derive(move || loading.get() || company.with(|c| c.is_none()))
}

/// Copy a load outcome into the page signals
fn apply_load(
    outcome: LoadOutcome,
    loading: RwSignal<bool>,
    company: RwSignal<Option<CompanyProfile>>,
    form: RwSignal<AdvantageForm>,
) {
    match outcome {
        LoadOutcome::Skipped => {}
        LoadOutcome::Redirected => loading.set(false),
        LoadOutcome::Failed { company: profile } => {
            if profile.is_some() {
                company.set(profile);
            }
            loading.set(false);
        }
        LoadOutcome::Loaded {
            company: profile,
            form: loaded,
        } => {
            company.set(Some(profile));
            form.set(loaded);
            loading.set(false);
        }
    }
}

/// `submitting` is true exactly while `submit` runs
async fn run_submit<F>(submitting: RwSignal<bool>, submit: F) -> SubmitOutcome
where
    F: Future<Output = SubmitOutcome>,
{
    submitting.set(true);
    let outcome = submit.await;
    submitting.set(false);
    outcome
}

fn header_name(is_loading: bool, company: Option<&CompanyProfile>) -> String {
    match company {
        Some(company) if !is_loading => company.display_name().to_string(),
        _ => LOADING_NAME.to_string(),
    }
}

fn submit_label(submitting: bool) -> &'static str {
    if submitting {
        "Salvando..."
    } else {
        "Salvar Alterações"
    }
}

/// Image shown in the preview box, `None` when there is no URL to preview
fn preview_source(url: &str, broken: Option<&str>) -> Option<String> {
    if url.is_empty() {
        None
    } else if broken == Some(url) {
        Some(PHOTO_PLACEHOLDER_URL.to_string())
    } else {
        Some(url.to_string())
    }
}
