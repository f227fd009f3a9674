//! Editable form state for an advantage
//!
//! Every field is kept as the raw string typed by the user; numbers are only
//! parsed when the form is submitted.

use contracts::domain::a001_advantage::{Advantage, AdvantageUpdateRequest};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Custo em moedas e Quantidade devem ser números válidos.")]
    InvalidNumber,
}

/// Form field, named after its key in the API payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdvantageField {
    Title,
    Description,
    CoinCost,
    PhotoUrl,
    Quantity,
}

impl AdvantageField {
    pub fn name(self) -> &'static str {
        match self {
            AdvantageField::Title => "titulo",
            AdvantageField::Description => "descricao",
            AdvantageField::CoinCost => "custo_moedas",
            AdvantageField::PhotoUrl => "foto_url",
            AdvantageField::Quantity => "quantidade",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvantageForm {
    pub title: String,
    pub description: String,
    pub coin_cost: String,
    pub photo_url: String,
    pub quantity: String,
}

impl AdvantageForm {
    /// Initial form values for a loaded advantage
    pub fn from_advantage(advantage: &Advantage) -> Self {
        Self {
            title: advantage.title.clone(),
            description: advantage.description.clone(),
            coin_cost: advantage
                .coin_cost
                .map(|n| n.to_string())
                .unwrap_or_default(),
            photo_url: advantage.photo_url.clone(),
            quantity: advantage
                .quantity
                .map(|n| n.to_string())
                .unwrap_or_default(),
        }
    }

    pub fn get(&self, field: AdvantageField) -> &str {
        match field {
            AdvantageField::Title => &self.title,
            AdvantageField::Description => &self.description,
            AdvantageField::CoinCost => &self.coin_cost,
            AdvantageField::PhotoUrl => &self.photo_url,
            AdvantageField::Quantity => &self.quantity,
        }
    }

    pub fn set(&mut self, field: AdvantageField, value: String) {
        let slot = match field {
            AdvantageField::Title => &mut self.title,
            AdvantageField::Description => &mut self.description,
            AdvantageField::CoinCost => &mut self.coin_cost,
            AdvantageField::PhotoUrl => &mut self.photo_url,
            AdvantageField::Quantity => &mut self.quantity,
        };
        *slot = value;
    }

    /// Validate the numeric fields and build the update payload
    pub fn to_update_request(&self) -> Result<AdvantageUpdateRequest, FormError> {
        let coin_cost = parse_integer(&self.coin_cost);
        let quantity = parse_integer(&self.quantity);
        let (Some(coin_cost), Some(quantity)) = (coin_cost, quantity) else {
            return Err(FormError::InvalidNumber);
        };

        Ok(AdvantageUpdateRequest {
            title: self.title.clone(),
            description: self.description.clone(),
            photo_url: self.photo_url.clone(),
            coin_cost,
            quantity,
        })
    }
}

/// Parse the leading decimal integer of `input`.
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit, so `"12.5"` and `"12 moedas"` both give 12. Returns `None`
/// when no digit is found or the value does not fit in an `i64`.
pub fn parse_integer(input: &str) -> Option<i64> {
    let rest = input.trim_start();
    let (negative, digits) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let mut value: i64 = 0;
    for b in digits[..end].bytes() {
        let digit = i64::from(b - b'0');
        value = value.checked_mul(10)?;
        value = if negative {
            value.checked_sub(digit)?
        } else {
            value.checked_add(digit)?
        };
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_advantage::AdvantageId;

    fn filled_form() -> AdvantageForm {
        AdvantageForm {
            title: "Café grátis".into(),
            description: "Um café no campus".into(),
            coin_cost: "150".into(),
            photo_url: "https://img/cafe.png".into(),
            quantity: "20".into(),
        }
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("10"), Some(10));
        assert_eq!(parse_integer("  42"), Some(42));
        assert_eq!(parse_integer("-7"), Some(-7));
        assert_eq!(parse_integer("+7"), Some(7));
        assert_eq!(parse_integer("12.5"), Some(12));
        assert_eq!(parse_integer("30 moedas"), Some(30));
    }

    #[test]
    fn test_parse_integer_rejects() {
        assert_eq!(parse_integer("abc"), None);
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("   "), None);
        assert_eq!(parse_integer("-"), None);
        assert_eq!(parse_integer(".5"), None);
        assert_eq!(parse_integer("99999999999999999999"), None);
    }

    #[test]
    fn test_parse_integer_bounds() {
        assert_eq!(parse_integer("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_integer("-9223372036854775808"), Some(i64::MIN));
    }

    #[test]
    fn test_field_names() {
        assert_eq!(AdvantageField::Title.name(), "titulo");
        assert_eq!(AdvantageField::CoinCost.name(), "custo_moedas");
        assert_eq!(AdvantageField::PhotoUrl.name(), "foto_url");
    }

    #[test]
    fn test_set_updates_only_that_field() {
        let mut form = filled_form();
        form.set(AdvantageField::Quantity, "5".into());
        assert_eq!(form.get(AdvantageField::Quantity), "5");
        assert_eq!(form.get(AdvantageField::CoinCost), "150");
        assert_eq!(form.get(AdvantageField::Title), "Café grátis");
    }

    #[test]
    fn test_from_advantage() {
        let advantage = Advantage {
            id: Some(AdvantageId::new("3")),
            title: "Desconto".into(),
            description: "10% na cantina".into(),
            coin_cost: Some(40),
            photo_url: "https://img/d.png".into(),
            quantity: None,
        };
        let form = AdvantageForm::from_advantage(&advantage);
        assert_eq!(form.coin_cost, "40");
        assert_eq!(form.quantity, "");
        assert_eq!(form.photo_url, "https://img/d.png");
    }

    #[test]
    fn test_to_update_request() {
        let request = filled_form().to_update_request().unwrap();
        assert_eq!(request.title, "Café grátis");
        assert_eq!(request.coin_cost, 150);
        assert_eq!(request.quantity, 20);
    }

    #[test]
    fn test_to_update_request_rejects_non_numeric() {
        let mut form = filled_form();
        form.coin_cost = "abc".into();
        form.quantity = "10".into();
        assert_eq!(form.to_update_request(), Err(FormError::InvalidNumber));

        let mut form = filled_form();
        form.quantity = String::new();
        assert_eq!(form.to_update_request(), Err(FormError::InvalidNumber));
    }
}
