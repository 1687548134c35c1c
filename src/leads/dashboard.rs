use super::domain::{Lead, LeadTable};
use super::filter::{filter_leads, AppliedFacets, FacetOptions, FacetSelection, LeadView};
use super::links::build_links;
use super::metrics::{compute_metrics, LeadMetrics};
use super::pitch::{classify_segment, Segment};
use chrono::{DateTime, Local};
use serde::Serialize;

pub const DASHBOARD_TITLE: &str = "Radar Comercial - Vale do Jequitinhonha";
pub const SELECTION_HINT: &str =
    "Selecione uma empresa na tabela para ver as opções de contato e GPS.";

#[derive(Debug, Clone, Serialize)]
pub struct MetricCards {
    pub clients_label: &'static str,
    pub clients: usize,
    pub cities_label: &'static str,
    pub cities: usize,
    pub capital_total_label: &'static str,
    pub capital_total: String,
    pub capital_millions: f64,
}

impl From<LeadMetrics> for MetricCards {
    fn from(metrics: LeadMetrics) -> Self {
        Self {
            clients_label: "Clientes na Lista",
            clients: metrics.count,
            cities_label: "Cidades",
            cities: metrics.distinct_cities,
            capital_total_label: "Capital Total",
            capital_total: metrics.capital_card(),
            capital_millions: metrics.capital_millions,
        }
    }
}

/// Table row as displayed: the four projected columns plus the position
/// within the filtered view, which is what a selection refers to.
#[derive(Debug, Clone, Serialize)]
pub struct LeadRowView {
    pub row: usize,
    pub cidade: String,
    pub segmento: String,
    pub nome_comercial: String,
    pub endereco_completo: String,
}

impl LeadRowView {
    fn project(row: usize, lead: &Lead) -> Self {
        Self {
            row,
            cidade: lead.city.clone(),
            segmento: lead.segment.clone(),
            nome_comercial: lead.company_name.clone(),
            endereco_completo: lead.full_address.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub title: &'static str,
    pub source: String,
    pub loaded_at: DateTime<Local>,
    pub metrics: MetricCards,
    pub facets: FacetOptions,
    pub selected: AppliedFacets,
    pub rows: Vec<LeadRowView>,
    pub hint: &'static str,
}

/// Everything the action panel needs once one row is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactCard {
    pub row: usize,
    pub company_name: String,
    pub address: String,
    pub segment: String,
    pub segment_kind: Segment,
    pub pitch: String,
    pub whatsapp_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_link: Option<String>,
    pub maps_link: String,
}

impl ContactCard {
    pub fn for_lead(row: usize, lead: &Lead) -> Self {
        let segment_kind = classify_segment(&lead.segment);
        let pitch = segment_kind.pitch(&lead.company_name);
        let links = build_links(lead, &pitch);

        Self {
            row,
            company_name: lead.company_name.clone(),
            address: lead.full_address.clone(),
            segment: lead.segment.clone(),
            segment_kind,
            whatsapp_available: lead.has_whatsapp(),
            whatsapp_link: links.whatsapp_link,
            maps_link: links.maps_link,
            pitch,
        }
    }
}

pub fn build_dashboard(table: &LeadTable, selection: &FacetSelection) -> DashboardView {
    let facets = FacetOptions::from_table(table);
    let selected = selection.resolve(&facets);
    let view = filter_leads(table, &selected.city_set(), &selected.segment_set());
    let metrics = compute_metrics(view.rows().iter().copied());

    let rows = view
        .rows()
        .iter()
        .enumerate()
        .map(|(row, lead)| LeadRowView::project(row, lead))
        .collect();

    DashboardView {
        title: DASHBOARD_TITLE,
        source: table.source().to_string(),
        loaded_at: table.loaded_at(),
        metrics: metrics.into(),
        facets,
        selected,
        rows,
        hint: SELECTION_HINT,
    }
}

/// Contact card for row `row` of `view`; `None` when nothing sits there.
pub fn select_contact(view: &LeadView<'_>, row: usize) -> Option<ContactCard> {
    view.get(row).map(|lead| ContactCard::for_lead(row, lead))
}
