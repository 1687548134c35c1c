use super::domain::{normalize_phone, Lead, LeadTable, NO_ADDRESS, NO_EMAIL, NO_PHONE};
use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum LeadLoadError {
    #[error("lead file not found: place {} next to the dashboard", .path.display())]
    FileNotFound { path: PathBuf },
    #[error("failed to read lead file: {0}")]
    Io(#[from] io::Error),
    #[error("invalid lead CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("lead table was preloaded and has no file to reload from")]
    NoSource,
}

/// Reads and normalizes the lead file at `path`.
pub fn load_leads(path: impl AsRef<Path>) -> Result<LeadTable, LeadLoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => LeadLoadError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => LeadLoadError::Io(err),
    })?;

    let table = LeadTable::from_reader(file, path.display().to_string())?;
    info!(path = %path.display(), rows = table.len(), "lead table loaded");
    Ok(table)
}

impl LeadTable {
    pub fn from_reader<R: Read>(
        reader: R,
        source: impl Into<String>,
    ) -> Result<Self, LeadLoadError> {
        // Rows may stop before their trailing optional columns.
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in csv_reader.deserialize::<LeadRow>() {
            rows.push(record?);
        }

        let leads = rows.into_iter().map(LeadRow::into_lead).collect();
        Ok(LeadTable::new(leads, source))
    }
}

#[derive(Debug, Deserialize)]
struct LeadRow {
    #[serde(rename = "cidade")]
    city: String,
    #[serde(rename = "segmento")]
    segment: String,
    #[serde(rename = "nome_comercial")]
    company_name: String,
    #[serde(rename = "telefone", default, deserialize_with = "missing_as_none")]
    phone: Option<String>,
    #[serde(default, deserialize_with = "missing_as_none")]
    email: Option<String>,
    #[serde(
        rename = "endereco_completo",
        default,
        deserialize_with = "missing_as_none"
    )]
    full_address: Option<String>,
    #[serde(default, deserialize_with = "missing_as_none")]
    capital_social: Option<String>,
}

impl LeadRow {
    // Sentinels go in before the phone is normalized, so a missing phone
    // normalizes to `None` through the same digit rule.
    fn into_lead(self) -> Lead {
        let phone_raw = self.phone.unwrap_or_else(|| NO_PHONE.to_string());
        let phone_normalized = normalize_phone(&phone_raw);
        let capital_social = parse_capital(self.capital_social.as_deref(), &self.company_name);

        Lead {
            city: self.city,
            segment: self.segment,
            company_name: self.company_name.to_uppercase(),
            phone_raw,
            phone_normalized,
            email: self.email.unwrap_or_else(|| NO_EMAIL.to_string()),
            full_address: self.full_address.unwrap_or_else(|| NO_ADDRESS.to_string()),
            capital_social,
        }
    }
}

fn parse_capital(raw: Option<&str>, company: &str) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            warn!(company, value = raw, "capital_social is not numeric, counting as zero");
            0.0
        }
    }
}

/// Cell texts that spreadsheet exports use for "no value".
const MISSING_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn missing_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| {
        let value = value.trim();
        !value.is_empty() && !MISSING_MARKERS.contains(&value)
    }))
}
