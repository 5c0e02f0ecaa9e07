use launchpad::{config, models, web};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    if let Err(e) = dotenvy::dotenv() {
        println!("No .env file found, using environment variables: {}", e);
    }

    let settings = config::get_settings();
    init_tracing(settings.log_format);

    info!("Starting {}...", settings.site_name);

    if settings.uses_placeholder_secret() {
        warn!("SESSION_SECRET is the public placeholder - session tokens can be forged");
    }

    if settings.maintenance_mode {
        warn!("Maintenance mode is ON - all pages redirect to /maintenance");
    }

    // Register the data schema with the real-time backend
    let schema = models::schema();
    info!(
        tables = ?schema.tables.iter().map(|t| t.name).collect::<Vec<_>>(),
        "Schema registered"
    );

    let state = web::AppState::from_settings(settings.clone())?;
    let app = web::router(state);

    let addr: SocketAddr = settings.address().parse()?;

    info!("{} started on http://{}", settings.site_name, addr);

    // Start server with graceful shutdown
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");

    Ok(())
}

fn init_tracing(format: config::LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        config::LogFormat::Json => builder.json().init(),
        config::LogFormat::Pretty => builder.init(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Shutting down...");
        },
        _ = terminate => {
            info!("Shutting down...");
        },
    }
}
