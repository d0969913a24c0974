use anyhow::{Context, Result};
use langboard::constants::SETTINGS_FILE;
use langboard::data::load_dataset;
use langboard::server::{Dashboard, bind, serve};
use langboard::settings::DashboardSettings;
use std::path::Path;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("langboard=info")),
        )
        .init();

    let settings = DashboardSettings::load_or_default(Path::new(SETTINGS_FILE))?;

    // No degraded mode: without the dataset there is nothing to show.
    let dataset = match load_dataset(&settings.data_path) {
        Ok(dataset) => dataset,
        Err(e) if e.is_unavailable() => {
            error!("Dataset unavailable: {}", e);
            return Err(e).with_context(|| {
                format!("Failed to load dataset from {}", settings.data_path.display())
            });
        }
        Err(e) => return Err(e).context("Unexpected error while loading dataset"),
    };
    info!(
        "Loaded {} records, {} languages",
        dataset.len(),
        dataset.languages().len()
    );

    let server = bind(&settings.bind_address)?;
    let url = settings.dashboard_url();
    if settings.open_browser {
        if let Err(e) = open::that(&url) {
            warn!("Failed to open browser at {}: {}", url, e);
        }
    }

    let dashboard = Dashboard::new(dataset, settings);
    serve(server, &dashboard)
}
