use clap::Parser;

use folder2rss::config::{self, Config, ConfigLayer};
use folder2rss::http::{self, state::AppState};
use folder2rss::identity::ServerIdentity;

/// Resolves on the first Ctrl+C; in-flight requests then drain via graceful shutdown.
async fn wait_for_shutdown() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", message);
    std::process::exit(1);
}

fn init_logging(config: &Config) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::try_new(config.log_directive())
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
            }),
        )
        .init();
}

#[tokio::main]
async fn main() {
    let args = folder2rss::cli::Args::parse();

    // The subscriber needs the resolved log level, so config problems found before it
    // exists are collected and logged right after.
    let mut file_warning = None;
    let file_config = config::find_config_file(args.config.as_deref()).and_then(|path| {
        match config::load_config(&path) {
            Ok(layer) => Some(layer),
            Err(e) => {
                file_warning = Some(format!("Ignoring config file {}: {}", path.display(), e));
                None
            }
        }
    });
    let env_config = ConfigLayer::from_process_env().unwrap_or_else(|e| fail(e));
    let config = Config::resolve(file_config, env_config, &args).unwrap_or_else(|e| fail(e));

    init_logging(&config);
    if let Some(warning) = file_warning {
        tracing::warn!("{}", warning);
    }

    let identity = ServerIdentity::from_config(&config).unwrap_or_else(|e| fail(e));
    tracing::info!("scheme: {}", identity.scheme());
    tracing::info!("host: {}", identity.host());
    tracing::info!("port: {}", identity.port());
    tracing::info!("directory: {}", identity.media_root().path().display());
    tracing::info!("subfolder: {}", identity.subfolder());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| fail(format!("failed to bind {}: {}", addr, e)));

    tracing::info!("Serving on {}", identity.website_root());
    let app = http::build_router(AppState::new(identity));

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown())
        .await
    {
        tracing::error!("HTTP server error: {}", e);
    }

    tracing::info!("Goodbye.");
}
