use crate::cli::FacetArgs;
use clap::Args;
use lead_radar::config::AppConfig;
use lead_radar::error::AppError;
use lead_radar::leads::{
    build_dashboard, select_contact, ContactCard, DashboardView, FacetSelection, LeadStore,
};
use lead_radar::telemetry;
use std::io::{self, Write};
use tracing::debug;

#[derive(Args, Debug)]
pub(crate) struct SummaryArgs {
    #[command(flatten)]
    pub(crate) facets: FacetArgs,
    /// Include every filtered row in the output
    #[arg(long)]
    pub(crate) list: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ContactArgs {
    #[command(flatten)]
    pub(crate) facets: FacetArgs,
    /// Row of the filtered list to contact (0-based, as printed by `leads summary --list`)
    #[arg(long)]
    pub(crate) row: usize,
}

impl FacetArgs {
    pub(crate) fn selection(&self) -> FacetSelection {
        let chosen = |values: &Vec<String>| (!values.is_empty()).then(|| values.clone());
        FacetSelection {
            cities: chosen(&self.cities),
            segments: chosen(&self.segments),
        }
    }

    fn store(&self) -> Result<LeadStore, AppError> {
        let config = AppConfig::load()?;
        telemetry::init(&config.telemetry)?;

        let path = self.csv.clone().unwrap_or(config.leads.csv_path);
        Ok(LeadStore::new(path))
    }
}

pub(crate) fn run_summary(args: SummaryArgs) -> Result<(), AppError> {
    let store = args.facets.store()?;
    let table = store.table()?;
    let dashboard = build_dashboard(table, &args.facets.selection());

    render_dashboard(&mut io::stdout().lock(), &dashboard, args.list)?;
    Ok(())
}

pub(crate) fn run_contact(args: ContactArgs) -> Result<(), AppError> {
    let store = args.facets.store()?;
    let table = store.table()?;
    let (_, view) = args.facets.selection().apply(table);

    let card = select_contact(&view, args.row).ok_or_else(|| {
        debug!(row = args.row, available = view.len(), "selection outside filtered list");
        AppError::SelectionNotFound {
            row: args.row,
            available: view.len(),
        }
    })?;

    render_contact(&mut io::stdout().lock(), &card)?;
    Ok(())
}

pub(crate) fn render_dashboard(
    out: &mut impl Write,
    dashboard: &DashboardView,
    list: bool,
) -> io::Result<()> {
    writeln!(out, "{}", dashboard.title)?;
    writeln!(
        out,
        "Source: {} (loaded {})",
        dashboard.source,
        dashboard.loaded_at.format("%Y-%m-%d %H:%M")
    )?;
    writeln!(out, "Cities: {}", dashboard.selected.cities.join(", "))?;
    writeln!(out, "Segments: {}", dashboard.selected.segments.join(", "))?;

    let metrics = &dashboard.metrics;
    writeln!(out)?;
    writeln!(out, "- {}: {}", metrics.clients_label, metrics.clients)?;
    writeln!(out, "- {}: {}", metrics.cities_label, metrics.cities)?;
    writeln!(out, "- {}: {}", metrics.capital_total_label, metrics.capital_total)?;

    if !list {
        return Ok(());
    }

    if dashboard.rows.is_empty() {
        writeln!(out, "\nLista de Clientes: none")?;
        return Ok(());
    }

    writeln!(out, "\nLista de Clientes")?;
    for row in &dashboard.rows {
        writeln!(
            out,
            "[{}] {} | {} | {} | {}",
            row.row, row.cidade, row.segmento, row.nome_comercial, row.endereco_completo
        )?;
    }
    writeln!(out, "\n{}", dashboard.hint)
}

pub(crate) fn render_contact(out: &mut impl Write, card: &ContactCard) -> io::Result<()> {
    writeln!(out, "{}", card.company_name)?;
    writeln!(out, "Endereço: {}", card.address)?;
    writeln!(out, "Segmento: {} ({})", card.segment, card.segment_kind.label())?;
    writeln!(out, "\nScript WhatsApp:\n{}", card.pitch)?;

    writeln!(out, "\nAções")?;
    match &card.whatsapp_link {
        Some(link) => writeln!(out, "- Chamar no WhatsApp: {link}")?,
        None => writeln!(out, "- Sem WhatsApp")?,
    }
    writeln!(out, "- Abrir no GPS: {}", card.maps_link)
}
