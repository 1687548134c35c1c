use super::domain::Lead;
use serde::Serialize;
use std::collections::HashSet;

const ONE_MILLION: f64 = 1_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LeadMetrics {
    pub count: usize,
    pub distinct_cities: usize,
    pub capital_millions: f64,
}

impl LeadMetrics {
    /// Capital in millions with one decimal and `,` thousands separators.
    pub fn capital_display(&self) -> String {
        format_thousands(self.capital_millions, 1)
    }

    /// Capital as shown on the dashboard card, e.g. `R$ 1,234.5 Mi`.
    pub fn capital_card(&self) -> String {
        format!("R$ {} Mi", self.capital_display())
    }
}

pub fn compute_metrics<'a, I>(rows: I) -> LeadMetrics
where
    I: IntoIterator<Item = &'a Lead>,
{
    let mut count = 0;
    let mut cities = HashSet::new();
    let mut capital = 0.0;

    for lead in rows {
        count += 1;
        cities.insert(lead.city.as_str());
        capital += lead.capital_social;
    }

    LeadMetrics {
        count,
        distinct_cities: cities.len(),
        capital_millions: capital / ONE_MILLION,
    }
}

/// `{:,.N}`-style formatting: comma-grouped thousands, `decimals` places.
///
/// A negative value that rounds to zero prints without its sign (`-0.01`
/// becomes `0.0`, not `-0.0`).
fn format_thousands(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(fixed.len() + integer.len() / 3);
    for (position, digit) in integer.chars().enumerate() {
        if position > 0 && (integer.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    let negative = value < 0.0 && grouped.chars().any(|c| c.is_ascii_digit() && c != '0');
    if negative {
        grouped.insert(0, '-');
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(city: &str, capital_social: f64) -> Lead {
        Lead {
            city: city.to_string(),
            segment: "OUTRO".to_string(),
            company_name: "LOJA".to_string(),
            phone_raw: String::new(),
            phone_normalized: None,
            email: String::new(),
            full_address: String::new(),
            capital_social,
        }
    }

    #[test]
    fn empty_input_yields_zeroes() {
        let metrics = compute_metrics(std::iter::empty::<&Lead>());
        assert_eq!(
            metrics,
            LeadMetrics {
                count: 0,
                distinct_cities: 0,
                capital_millions: 0.0,
            }
        );
        assert_eq!(metrics.capital_card(), "R$ 0.0 Mi");
    }

    #[test]
    fn counts_rows_cities_and_capital() {
        let leads = vec![
            lead("Salinas", 1_500_000.0),
            lead("Itaobim", 260_000.0),
            lead("Salinas", 2_000_000.0),
        ];
        let metrics = compute_metrics(&leads);

        assert_eq!(metrics.count, 3);
        assert_eq!(metrics.distinct_cities, 2);
        assert!((metrics.capital_millions - 3.76).abs() < 1e-9);
        assert_eq!(metrics.capital_display(), "3.8");
    }

    #[test]
    fn capital_display_groups_thousands() {
        let leads = vec![lead("Salinas", 1_234_567_890_000.0)];
        let metrics = compute_metrics(&leads);
        assert_eq!(metrics.capital_card(), "R$ 1,234,567.9 Mi");
    }

    #[test]
    fn formatting_handles_small_and_negative_values() {
        assert_eq!(format_thousands(999.94, 1), "999.9");
        assert_eq!(format_thousands(1000.0, 1), "1,000.0");
        assert_eq!(format_thousands(-12345.67, 1), "-12,345.7");
        assert_eq!(format_thousands(-0.01, 1), "0.0");
    }
}
