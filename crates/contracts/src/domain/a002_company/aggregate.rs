use serde::{Deserialize, Serialize};

/// Header name used when the profile carries no usable name
pub const DEFAULT_COMPANY_NAME: &str = "Empresa";

/// Profile of the logged-in company (`GET /empresa/perfil`)
///
/// Only the name is consumed by the portal; other fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    #[serde(rename = "nome", default)]
    pub name: Option<String>,
}

impl CompanyProfile {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_COMPANY_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let profile: CompanyProfile =
            serde_json::from_str(r#"{"id":7,"nome":"Livraria Central","cnpj":"00.000.000/0001-00"}"#)
                .unwrap();
        assert_eq!(profile.display_name(), "Livraria Central");
    }

    #[test]
    fn test_display_name_fallback() {
        let missing: CompanyProfile = serde_json::from_str(r#"{"id":7}"#).unwrap();
        assert_eq!(missing.display_name(), DEFAULT_COMPANY_NAME);

        let empty: CompanyProfile = serde_json::from_str(r#"{"nome":""}"#).unwrap();
        assert_eq!(empty.display_name(), DEFAULT_COMPANY_NAME);

        let null: CompanyProfile = serde_json::from_str(r#"{"nome":null}"#).unwrap();
        assert_eq!(null.display_name(), DEFAULT_COMPANY_NAME);
    }
}
