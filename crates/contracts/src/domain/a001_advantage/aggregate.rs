use crate::domain::common::AggregateId;
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Perk identifier. The API sends it as a JSON number or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AdvantageId(pub String);

impl AdvantageId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for AdvantageId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        })
    }
}

impl AggregateId for AdvantageId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Empty advantage id".into());
        }
        Ok(Self(trimmed.to_string()))
    }
}

// ============================================================================
// Record
// ============================================================================

/// Perk ("vantagem") offered by a company, normalized from the API payload.
///
/// The backend is inconsistent about key casing (`custoMoedas` vs
/// `custo_moedas`, `fotoURL` vs `foto_url`); both spellings land in the same
/// field, the camelCase one taking precedence when both are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "AdvantageWire")]
pub struct Advantage {
    pub id: Option<AdvantageId>,
    pub title: String,
    pub description: String,
    /// Price in platform coins
    pub coin_cost: Option<i64>,
    pub photo_url: String,
    /// Units still available for redemption
    pub quantity: Option<i64>,
}

#[derive(Deserialize)]
struct AdvantageWire {
    #[serde(default)]
    id: Option<AdvantageId>,
    #[serde(default)]
    titulo: Option<String>,
    #[serde(default)]
    descricao: Option<String>,
    #[serde(rename = "custoMoedas", default, deserialize_with = "optional_integer")]
    custo_moedas_camel: Option<i64>,
    #[serde(default, deserialize_with = "optional_integer")]
    custo_moedas: Option<i64>,
    #[serde(rename = "fotoURL", default)]
    foto_url_camel: Option<String>,
    #[serde(default)]
    foto_url: Option<String>,
    #[serde(default, deserialize_with = "optional_integer")]
    quantidade: Option<i64>,
}

impl From<AdvantageWire> for Advantage {
    fn from(wire: AdvantageWire) -> Self {
        Self {
            id: wire.id,
            title: wire.titulo.unwrap_or_default(),
            description: wire.descricao.unwrap_or_default(),
            coin_cost: wire.custo_moedas_camel.or(wire.custo_moedas),
            photo_url: wire.foto_url_camel.or(wire.foto_url).unwrap_or_default(),
            quantity: wire.quantidade,
        }
    }
}

/// Accepts `12`, `12.0` and `"12"`; `null` is treated as absent.
fn optional_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawNumber {
        Integer(i64),
        Float(f64),
        Text(String),
    }

    let raw = Option::<RawNumber>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(RawNumber::Integer(n)) => Ok(Some(n)),
        Some(RawNumber::Float(f)) if f.fract() == 0.0 && f.is_finite() => Ok(Some(f as i64)),
        Some(RawNumber::Float(f)) => Err(serde::de::Error::custom(format!(
            "expected an integer, got {}",
            f
        ))),
        Some(RawNumber::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(RawNumber::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid integer {:?}: {}", s, e))),
    }
}

// ============================================================================
// Update request
// ============================================================================

/// Body of `PUT /empresa/vantagens/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvantageUpdateRequest {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "foto_url")]
    pub photo_url: String,
    #[serde(rename = "custo_moedas")]
    pub coin_cost: i64,
    #[serde(rename = "quantidade")]
    pub quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Advantage {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_snake_and_camel_case_normalize_identically() {
        let camel = parse(
            r#"{"id":3,"titulo":"Café grátis","descricao":"Um café","custoMoedas":150,"fotoURL":"https://img/cafe.png","quantidade":20}"#,
        );
        let snake = parse(
            r#"{"id":3,"titulo":"Café grátis","descricao":"Um café","custo_moedas":150,"foto_url":"https://img/cafe.png","quantidade":20}"#,
        );

        assert_eq!(camel, snake);
        assert_eq!(camel.id, Some(AdvantageId::new("3")));
        assert_eq!(camel.title, "Café grátis");
        assert_eq!(camel.coin_cost, Some(150));
        assert_eq!(camel.photo_url, "https://img/cafe.png");
        assert_eq!(camel.quantity, Some(20));
    }

    #[test]
    fn test_camel_case_takes_precedence() {
        let both = parse(
            r#"{"custoMoedas":10,"custo_moedas":99,"fotoURL":"a.png","foto_url":"b.png"}"#,
        );
        assert_eq!(both.coin_cost, Some(10));
        assert_eq!(both.photo_url, "a.png");

        let camel_null = parse(r#"{"custoMoedas":null,"custo_moedas":99,"fotoURL":null,"foto_url":"b.png"}"#);
        assert_eq!(camel_null.coin_cost, Some(99));
        assert_eq!(camel_null.photo_url, "b.png");
    }

    #[test]
    fn test_missing_fields_default() {
        let empty = parse(r#"{"titulo":null}"#);
        assert_eq!(empty, Advantage::default());
    }

    #[test]
    fn test_lenient_numbers() {
        let advantage = parse(r#"{"id":"abc-1","custo_moedas":"75","quantidade":4.0}"#);
        assert_eq!(advantage.id, Some(AdvantageId::new("abc-1")));
        assert_eq!(advantage.coin_cost, Some(75));
        assert_eq!(advantage.quantity, Some(4));

        assert!(serde_json::from_str::<Advantage>(r#"{"quantidade":4.5}"#).is_err());
    }

    #[test]
    fn test_update_request_wire_keys() {
        let request = AdvantageUpdateRequest {
            title: "Desconto".into(),
            description: "10% off".into(),
            photo_url: "https://img/d.png".into(),
            coin_cost: 30,
            quantity: 5,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "titulo": "Desconto",
                "descricao": "10% off",
                "foto_url": "https://img/d.png",
                "custo_moedas": 30,
                "quantidade": 5
            })
        );
    }

    #[test]
    fn test_advantage_id_from_string() {
        assert_eq!(AdvantageId::from_string(" 12 "), Ok(AdvantageId::new("12")));
        assert!(AdvantageId::from_string("   ").is_err());
        assert_eq!(AdvantageId::new("12").as_string(), "12");
    }
}
