use std::{net::SocketAddr, process, sync::Arc};

use tokio::{net::TcpListener, sync::broadcast};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spektor_blog::config::ServerConfig;
use spektor_blog::content_loader::load_content;
use spektor_blog::hot_reload::start_content_watcher;
use spektor_blog::routes;
use spektor_blog::state::{AppState, RouterState};

#[tokio::main]
async fn main() {
    let config = ServerConfig::from_env();

    // logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("RUST_ENV is set to development: {}", config.is_development);

    let content = match load_content(&config.content_dir).await {
        Ok(content) => content,
        Err(e) => {
            error!("Failed to load initial content: {}", e);
            process::exit(1);
        }
    };

    let state = Arc::new(AppState::new(
        content,
        config.content_dir.clone(),
        config.is_development,
    ));

    // Hot-reload setup
    let (tx, _rx) = broadcast::channel(1);
    if config.is_development {
        info!("Hot reload enabled. Check logs for file change events.");
        start_content_watcher(tx.clone(), state.clone());
    }

    let router_state = RouterState {
        app_state: state,
        broadcaster: tx,
    };
    let app = routes::router(router_state, &config.content_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, "Failed to bind: {}", e);
            process::exit(1);
        }
    };

    info!(%addr, "listening");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        process::exit(1);
    }
}
