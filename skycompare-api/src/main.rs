use std::net::SocketAddr;
use std::sync::Arc;
use skycompare_api::{app, AppState};
use skycompare_store::{app_config::Config, build_history};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skycompare_api=debug,skycompare_store=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("Failed to load config");
    tracing::info!("Starting SkyCompare API on port {}", config.server.port);

    let history = build_history(&config.history).expect("Failed to open search history store");
    let app_state = AppState::new(&config.search, Arc::new(history));

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
