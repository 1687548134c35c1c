use chrono::{DateTime, Local};
use serde::Serialize;

/// Shown in place of a phone number the source row left blank.
pub const NO_PHONE: &str = "Sem Telefone";
/// Shown in place of an e-mail the source row left blank.
pub const NO_EMAIL: &str = "Sem Email";
/// Shown in place of an address the source row left blank.
pub const NO_ADDRESS: &str = "Endereço não informado";

/// Brazilian country code prepended to every normalized phone.
pub const COUNTRY_CODE: &str = "55";

/// One prospective customer, normalized at load time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lead {
    pub city: String,
    pub segment: String,
    pub company_name: String,
    pub phone_raw: String,
    pub phone_normalized: Option<String>,
    pub email: String,
    pub full_address: String,
    pub capital_social: f64,
}

impl Lead {
    pub fn has_whatsapp(&self) -> bool {
        self.phone_normalized.is_some()
    }
}

/// Digits of `raw` behind the country code, or `None` when `raw` carries no digit.
///
/// Only ASCII `0-9` count; other Unicode digits such as `³` or `٣` are dropped
/// with the punctuation.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        None
    } else {
        Some(format!("{COUNTRY_CODE}{digits}"))
    }
}

/// Immutable set of leads read from one source.
#[derive(Debug, Clone)]
pub struct LeadTable {
    rows: Vec<Lead>,
    source: String,
    loaded_at: DateTime<Local>,
}

impl LeadTable {
    pub fn new(rows: Vec<Lead>, source: impl Into<String>) -> Self {
        Self {
            rows,
            source: source.into(),
            loaded_at: Local::now(),
        }
    }

    pub fn rows(&self) -> &[Lead] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn loaded_at(&self) -> DateTime<Local> {
        self.loaded_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_keeps_only_digits_behind_country_code() {
        assert_eq!(
            normalize_phone("(33) 99999-8888").as_deref(),
            Some("5533999998888")
        );
        assert_eq!(normalize_phone("+55 33 3521-1000").as_deref(), Some("55553335211000"));
    }

    #[test]
    fn phone_without_digits_is_absent() {
        assert_eq!(normalize_phone(NO_PHONE), None);
        assert_eq!(normalize_phone(""), None);
        assert_eq!(normalize_phone("--- / ---"), None);
    }

    #[test]
    fn non_ascii_digits_are_dropped() {
        assert_eq!(normalize_phone("³3 ٣"), Some("553".to_string()));
        assert_eq!(normalize_phone("²³"), None);
    }
}
