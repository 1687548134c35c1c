use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::lead_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use lead_radar::config::AppConfig;
use lead_radar::error::AppError;
use lead_radar::leads::LeadStore;
use lead_radar::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(csv) = args.csv.take() {
        config.leads.csv_path = csv;
    }

    telemetry::init(&config.telemetry)?;

    // A missing lead file stops the service before it binds.
    let store = LeadStore::new(config.leads.csv_path.clone());
    let rows = store.table()?.len();

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        leads: Arc::new(store),
    };

    let app = lead_routes()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, rows, "lead dashboard ready");

    axum::serve(listener, app).await?;
    Ok(())
}
