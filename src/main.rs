use instrument_pricer::state::AppState;
use instrument_pricer::{config, errors, models, server};

#[tokio::main]
async fn main() {
    // Structured logging (line-buffered)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("instrument_pricer starting");

    // Load config
    let cfg = match config::AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("config error: {e}");
            std::process::exit(1);
        }
    };

    let addr = cfg.listen_addr();
    tracing::info!(
        static_dir = %cfg.static_dir.display(),
        curve_points = models::CURVE_POINTS,
        "configuration loaded"
    );

    let app = server::router(AppState::new(cfg));

    if let Err(e) = serve(&addr, app).await {
        tracing::error!("server error: {e}");
        std::process::exit(1);
    }
}

async fn serve(addr: &str, app: axum::Router) -> errors::AppResult<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("server listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
