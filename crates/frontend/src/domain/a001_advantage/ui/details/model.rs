use crate::shared::api_utils::{bearer, join_url};
use crate::shared::config::PortalConfig;
use async_trait::async_trait;
use contracts::domain::a001_advantage::{Advantage, AdvantageId, AdvantageUpdateRequest};
use contracts::domain::a002_company::CompanyProfile;
use contracts::shared::ApiErrorBody;
use gloo_net::http::Request;
use thiserror::Error;

pub const COMPANY_PROFILE_PATH: &str = "/empresa/perfil";

const PROFILE_FAILED: &str = "Erro ao buscar perfil";
const ADVANTAGE_FAILED: &str = "Erro ao buscar vantagem";
const UPDATE_FAILED: &str = "Erro ao atualizar vantagem";

/// Path of a single advantage; the id is percent-encoded as one segment
pub fn advantage_path(id: &AdvantageId) -> String {
    format!("/empresa/vantagens/{}", urlencoding::encode(id.value()))
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-success HTTP status; `message` is what the user should see
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Falha de comunicação com o servidor: {0}")]
    Network(String),
    #[error("Resposta inválida do servidor: {0}")]
    Decode(String),
    #[error("Falha ao preparar a requisição: {0}")]
    Encode(String),
}

/// Company API as used by the advantage editor
#[async_trait(?Send)]
pub trait AdvantageGateway {
    async fn fetch_company_profile(&self, token: &str) -> Result<CompanyProfile, ApiError>;

    async fn fetch_advantage(&self, token: &str, id: &AdvantageId) -> Result<Advantage, ApiError>;

    async fn update_advantage(
        &self,
        token: &str,
        id: &AdvantageId,
        request: &AdvantageUpdateRequest,
    ) -> Result<(), ApiError>;
}

/// `gloo-net` implementation talking to the real backend
#[derive(Debug, Clone)]
pub struct HttpAdvantageGateway {
    api_base: String,
}

impl HttpAdvantageGateway {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(PortalConfig::get().api_base.clone())
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.api_base, path)
    }

    async fn get_json<T>(&self, path: &str, token: &str, failure: &str) -> Result<T, ApiError>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        let response = Request::get(&self.url(path))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
                message: failure.to_string(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl AdvantageGateway for HttpAdvantageGateway {
    async fn fetch_company_profile(&self, token: &str) -> Result<CompanyProfile, ApiError> {
        self.get_json(COMPANY_PROFILE_PATH, token, PROFILE_FAILED)
            .await
    }

    async fn fetch_advantage(&self, token: &str, id: &AdvantageId) -> Result<Advantage, ApiError> {
        self.get_json(&advantage_path(id), token, ADVANTAGE_FAILED)
            .await
    }

    async fn update_advantage(
        &self,
        token: &str,
        id: &AdvantageId,
        request: &AdvantageUpdateRequest,
    ) -> Result<(), ApiError> {
        let response = Request::put(&self.url(&advantage_path(id)))
            .header("Authorization", &bearer(token))
            .json(request)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = ApiErrorBody::message_from(&body).unwrap_or_else(|| UPDATE_FAILED.to_string());
            log::warn!("update of advantage {} rejected with HTTP {}", id.value(), status);
            return Err(ApiError::Status { status, message });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advantage_path() {
        assert_eq!(advantage_path(&AdvantageId::new("42")), "/empresa/vantagens/42");
        assert_eq!(
            advantage_path(&AdvantageId::new("a/b c")),
            "/empresa/vantagens/a%2Fb%20c"
        );
    }

    #[test]
    fn test_status_error_displays_message() {
        let err = ApiError::Status {
            status: 400,
            message: "Quantidade inválida".into(),
        };
        assert_eq!(err.to_string(), "Quantidade inválida");
    }

    #[test]
    fn test_encode_error_message() {
        let err = ApiError::Encode("key must be a string".into());
        assert_eq!(
            err.to_string(),
            "Falha ao preparar a requisição: key must be a string"
        );
    }

    #[test]
    fn test_gateway_url() {
        let gateway = HttpAdvantageGateway::new("http://localhost:8080/");
        assert_eq!(
            gateway.url(COMPANY_PROFILE_PATH),
            "http://localhost:8080/empresa/perfil"
        );
    }
}
