use eyre::Result;
use tracing_subscriber::EnvFilter;

use folio_web::config::{LogFormat, WebConfig};
use folio_web::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = WebConfig::from_env()?;
    init_tracing(config.log_format);

    if !config.logo_path.is_file() {
        tracing::warn!(
            path = %config.logo_path.display(),
            "logo not found, conversions will fail until it is provided"
        );
    }

    let app = folio_web::app(AppState::new(&config));
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, logo = %config.logo_path.display(), "listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}
