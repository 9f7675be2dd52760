use std::process::ExitCode;
use std::sync::Arc;

use subway_board::arrivals::RankConfig;
use subway_board::config::AppConfig;
use subway_board::feed::{FeedClient, MockFeed};
use subway_board::service::ArrivalService;
use subway_board::stations::StationDirectory;
use subway_board::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("subway_board=info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // A missing station list only disables search.
    let directory = StationDirectory::load_file_or_empty(&config.stations_file);

    let service = match &config.mock_dir {
        Some(dir) => match MockFeed::from_dir(dir) {
            Ok(mock) => {
                info!(dir = ?dir, "serving feeds from mock data");
                ArrivalService::start(directory, mock, config.poll.clone(), RankConfig::default())
            }
            Err(e) => {
                error!(error = %e, "failed to load mock feeds");
                return ExitCode::FAILURE;
            }
        },
        None => match FeedClient::new(config.feed.clone()) {
            Ok(client) => {
                ArrivalService::start(directory, client, config.poll.clone(), RankConfig::default())
            }
            Err(e) => {
                error!(error = %e, "failed to create feed client");
                return ExitCode::FAILURE;
            }
        },
    };

    let service = Arc::new(service);
    let app = create_router(AppState::new(Arc::clone(&service)));

    let listener = match tokio::net::TcpListener::bind(config.listen_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.listen_addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %config.listen_addr, "subway board listening");
    info!("  GET  /health               - Health check");
    info!("  GET  /api/board            - Current arrivals");
    info!("  GET  /api/stations/search  - Search stations (?q=)");
    info!("  POST /api/station          - Switch station");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await;

    if let Err(e) = served {
        error!(error = %e, "server error");
    }

    match Arc::try_unwrap(service) {
        Ok(service) => service.stop().await,
        Err(_) => info!("service still shared at exit; polling stops with the runtime"),
    }

    ExitCode::SUCCESS
}
