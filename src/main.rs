use std::sync::Arc;

use worldcup_dashboard::utils::{logger, validation::Validate};
use worldcup_dashboard::{Dashboard, RecordStore, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();

    logger::init_server_logger(config.debug);

    tracing::info!("Starting worldcup-dashboard");
    if config.debug {
        tracing::debug!("Server config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let store = RecordStore::new();
    tracing::info!("📊 Loaded {} tournament records", store.records().len());

    let dashboard = Arc::new(Dashboard::new(store)?);
    tracing::info!(
        "🏆 Aggregated wins for {} countries",
        dashboard.summaries().len()
    );

    worldcup_dashboard::web::serve(dashboard, &config).await?;

    Ok(())
}
