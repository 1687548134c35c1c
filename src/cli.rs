use crate::commands::{run_contact, run_summary, ContactArgs, SummaryArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use lead_radar::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Lead Radar",
    about = "Browse commercial leads, filter by city and segment, and build outreach links",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP dashboard service (default command)
    Serve(ServeArgs),
    /// Inspect the lead table from the terminal
    Leads {
        #[command(subcommand)]
        command: LeadsCommand,
    },
}

#[derive(Subcommand, Debug)]
enum LeadsCommand {
    /// Print the summary metrics and the filtered lead list
    Summary(SummaryArgs),
    /// Print the pitch and contact links for one row of the filtered list
    Contact(ContactArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured lead CSV
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

/// City/segment filters shared by the terminal commands. Leaving a facet
/// out keeps every value, as the dashboard selectors do by default.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct FacetArgs {
    /// Lead CSV to read (defaults to APP_LEADS_CSV)
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Keep only these cities (repeatable)
    #[arg(long = "city")]
    pub(crate) cities: Vec<String>,
    /// Keep only these segments (repeatable)
    #[arg(long = "segment")]
    pub(crate) segments: Vec<String>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Leads {
            command: LeadsCommand::Summary(args),
        } => run_summary(args),
        Command::Leads {
            command: LeadsCommand::Contact(args),
        } => run_contact(args),
    }
}
