use super::domain::{Lead, LeadTable};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Leads surviving a facet filter, borrowed from the table in source order.
#[derive(Debug, Clone)]
pub struct LeadView<'a> {
    rows: Vec<&'a Lead>,
}

impl<'a> LeadView<'a> {
    pub fn all(table: &'a LeadTable) -> Self {
        Self {
            rows: table.rows().iter().collect(),
        }
    }

    pub fn rows(&self) -> &[&'a Lead] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&'a Lead> {
        self.rows.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Narrows an existing view with the same membership rule as [`filter_leads`].
    pub fn refine(&self, cities: &HashSet<String>, segments: &HashSet<String>) -> Self {
        Self {
            rows: self
                .rows
                .iter()
                .copied()
                .filter(|lead| is_selected(lead, cities, segments))
                .collect(),
        }
    }
}

fn is_selected(lead: &Lead, cities: &HashSet<String>, segments: &HashSet<String>) -> bool {
    cities.contains(&lead.city) && segments.contains(&lead.segment)
}

/// Rows whose city and segment are both in the allowed sets. An empty set
/// matches nothing.
pub fn filter_leads<'a>(
    table: &'a LeadTable,
    cities: &HashSet<String>,
    segments: &HashSet<String>,
) -> LeadView<'a> {
    LeadView::all(table).refine(cities, segments)
}

/// Distinct cities in order of first appearance.
pub fn distinct_cities(table: &LeadTable) -> Vec<String> {
    distinct_by(table, |lead| &lead.city)
}

/// Distinct segments in order of first appearance.
pub fn distinct_segments(table: &LeadTable) -> Vec<String> {
    distinct_by(table, |lead| &lead.segment)
}

fn distinct_by(table: &LeadTable, field: impl Fn(&Lead) -> &String) -> Vec<String> {
    let mut seen = HashSet::new();
    table
        .rows()
        .iter()
        .map(field)
        .filter(|value| seen.insert(value.as_str()))
        .cloned()
        .collect()
}

/// Values offered by the city and segment selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOptions {
    pub cities: Vec<String>,
    pub segments: Vec<String>,
}

impl FacetOptions {
    pub fn from_table(table: &LeadTable) -> Self {
        Self {
            cities: distinct_cities(table),
            segments: distinct_segments(table),
        }
    }
}

/// User facet choice. `None` means the selector was left at its default,
/// which is every value present in the table; `Some(vec![])` selects nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FacetSelection {
    #[serde(default)]
    pub cities: Option<Vec<String>>,
    #[serde(default)]
    pub segments: Option<Vec<String>>,
}

/// Facet sets after defaults were filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedFacets {
    pub cities: Vec<String>,
    pub segments: Vec<String>,
}

impl AppliedFacets {
    pub fn city_set(&self) -> HashSet<String> {
        self.cities.iter().cloned().collect()
    }

    pub fn segment_set(&self) -> HashSet<String> {
        self.segments.iter().cloned().collect()
    }
}

impl FacetSelection {
    pub fn resolve(&self, options: &FacetOptions) -> AppliedFacets {
        AppliedFacets {
            cities: self
                .cities
                .clone()
                .unwrap_or_else(|| options.cities.clone()),
            segments: self
                .segments
                .clone()
                .unwrap_or_else(|| options.segments.clone()),
        }
    }

    /// Resolves defaults against `table` and filters it.
    pub fn apply<'a>(&self, table: &'a LeadTable) -> (AppliedFacets, LeadView<'a>) {
        let applied = self.resolve(&FacetOptions::from_table(table));
        let view = filter_leads(table, &applied.city_set(), &applied.segment_set());
        (applied, view)
    }
}
