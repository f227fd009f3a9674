//! Load and submit sequences of the advantage editor
//!
//! Everything the page does besides rendering lives here: token checks,
//! the profile-then-advantage fetch, validation, the update call, and the
//! resulting notifications and navigation. The browser pieces come in
//! through the gateway, token source, navigator and notifier seams.

use super::form::{AdvantageForm, FormError};
use super::model::{AdvantageGateway, ApiError};
use crate::routes::{ADVANTAGE_LIST_PATH, LOGIN_PATH};
use crate::shared::navigation::Navigator;
use crate::shared::notify::{NoticeLevel, Notifier};
use crate::system::auth::TokenSource;
use contracts::domain::a001_advantage::AdvantageId;
use contracts::domain::a002_company::CompanyProfile;
use thiserror::Error;

pub const TOKEN_MISSING: &str = "Token não encontrado. Faça login novamente.";
pub const LOAD_FAILED: &str = "Erro ao carregar dados da vantagem.";
pub const UPDATE_SUCCEEDED: &str = "Vantagem atualizada com sucesso!";
pub const UPDATE_FAILED_PREFIX: &str = "Erro ao atualizar vantagem.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No id in the URL; nothing was requested
    Skipped,
    /// No token; the user was sent to the login page
    Redirected,
    /// A request failed. Holds the profile if it was fetched before the failure.
    Failed { company: Option<CompanyProfile> },
    Loaded {
        company: CompanyProfile,
        form: AdvantageForm,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved,
    Redirected,
    Failed(SubmitError),
}

pub struct EditAdvantageFlow<G, T, N, M> {
    gateway: G,
    tokens: T,
    navigator: N,
    notifier: M,
}

impl<G, T, N, M> EditAdvantageFlow<G, T, N, M>
where
    G: AdvantageGateway,
    T: TokenSource,
    N: Navigator,
    M: Notifier,
{
    pub fn new(gateway: G, tokens: T, navigator: N, notifier: M) -> Self {
        Self {
            gateway,
            tokens,
            navigator,
            notifier,
        }
    }

    /// Token for the next request, or a redirect to the login page
    fn require_token(&self) -> Option<String> {
        let token = self.tokens.access_token();
        if token.is_none() {
            log::warn!("no access token in storage, redirecting to {}", LOGIN_PATH);
            self.notifier.notify(NoticeLevel::Error, TOKEN_MISSING);
            self.navigator.navigate(LOGIN_PATH);
        }
        token
    }

    fn load_failed(&self, err: &ApiError, company: Option<CompanyProfile>) -> LoadOutcome {
        log::error!("failed to load advantage data: {}", err);
        self.notifier.notify(NoticeLevel::Error, LOAD_FAILED);
        LoadOutcome::Failed { company }
    }

    /// Fetch the company profile and then the advantage `id`.
    ///
    /// Without an id nothing is requested and the page keeps its loading state.
    pub async fn load(&self, id: Option<&AdvantageId>) -> LoadOutcome {
        let Some(id) = id else {
            log::warn!("advantage id missing from query string, nothing to load");
            return LoadOutcome::Skipped;
        };
        let Some(token) = self.require_token() else {
            return LoadOutcome::Redirected;
        };

        let company = match self.gateway.fetch_company_profile(&token).await {
            Ok(company) => company,
            Err(e) => return self.load_failed(&e, None),
        };
        log::debug!("company profile loaded: {}", company.display_name());

        match self.gateway.fetch_advantage(&token, id).await {
            Ok(advantage) => {
                log::debug!("advantage {} loaded", id.value());
                LoadOutcome::Loaded {
                    company,
                    form: AdvantageForm::from_advantage(&advantage),
                }
            }
            Err(e) => self.load_failed(&e, Some(company)),
        }
    }

    /// Validate `form` and send it as the new state of advantage `id`
    pub async fn submit(&self, id: &AdvantageId, form: &AdvantageForm) -> SubmitOutcome {
        let Some(token) = self.require_token() else {
            return SubmitOutcome::Redirected;
        };

        match self.send_update(&token, id, form).await {
            Ok(()) => {
                log::info!("advantage {} updated", id.value());
                self.notifier.notify(NoticeLevel::Success, UPDATE_SUCCEEDED);
                self.navigator.navigate(ADVANTAGE_LIST_PATH);
                SubmitOutcome::Saved
            }
            Err(e) => {
                log::error!("failed to update advantage {}: {}", id.value(), e);
                self.notifier
                    .notify(NoticeLevel::Error, &format!("{} {}", UPDATE_FAILED_PREFIX, e));
                SubmitOutcome::Failed(e)
            }
        }
    }

    async fn send_update(
        &self,
        token: &str,
        id: &AdvantageId,
        form: &AdvantageForm,
    ) -> Result<(), SubmitError> {
        let request = form.to_update_request()?;
        self.gateway.update_advantage(token, id, &request).await?;
        Ok(())
    }

    /// Leave the editor without saving
    pub fn cancel(&self) {
        self.navigator.navigate(ADVANTAGE_LIST_PATH);
    }
}
