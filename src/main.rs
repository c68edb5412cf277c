use credit_dashboard::config::Config;
use credit_dashboard::handlers::AppState;
use credit_dashboard::reference::ReferenceTable;
use credit_dashboard::routes;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Loads the reference table off the async runtime.
///
/// A missing or unreadable file is not fatal: prefill and comparison plots
/// are disabled and the dashboard keeps scoring.
async fn load_reference(config: &Config) -> Option<ReferenceTable> {
    let path = config.reference_data_path.clone();
    let loaded = tokio::task::spawn_blocking(move || ReferenceTable::load(&path)).await;

    match loaded {
        Ok(Ok(table)) => {
            tracing::info!(
                "✓ Reference data loaded: {} rows from {}",
                table.len(),
                config.reference_data_path.display()
            );
            Some(table)
        }
        Ok(Err(e)) => {
            tracing::warn!(
                "Reference data unavailable, prefill and comparisons disabled: {:#}",
                e
            );
            None
        }
        Err(e) => {
            tracing::error!("Reference data loader panicked: {}", e);
            None
        }
    }
}

/// Main entry point for the application.
///
/// This function initializes the application, including:
/// - Logging and tracing.
/// - Configuration loading.
/// - Reference data and comparison sample.
/// - Scoring API client and session cache.
/// - HTTP routes and middleware (CORS, Rate Limiting).
///
/// It then starts the Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "credit_dashboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let reference = load_reference(&config).await;

    let app_state = Arc::new(AppState::new(config.clone(), reference)?);
    tracing::info!(
        "✓ Scoring client initialized: {} (timeout {}s)",
        app_state.scoring_client.endpoint(),
        config.scoring_timeout_secs
    );
    tracing::info!(
        "Session cache initialized ({}s TTL)",
        config.session_ttl_secs
    );

    // Configure rate limiter: 10 requests/second per IP, burst of 20
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10)
            .burst_size(20)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .ok_or_else(|| anyhow::anyhow!("Invalid rate limiter configuration"))?,
    );

    // Health check bypasses rate limiting
    let api = routes::api_routes().layer(
        ServiceBuilder::new()
            .layer(GovernorLayer {
                config: governor_conf,
            }),
    );
    let app = routes::build_app(app_state, api);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
