mod config;
mod proxy;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::HostConfig::from_env().expect("invalid configuration");
    let proxy = proxy::BotProxy::new(config.bot_service_url.clone(), config.timeouts).expect("bot proxy init failed");
    let state = state::AppState::new(proxy);

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, bot_service_url = %config.bot_service_url, "campus-assistant listening");
    axum::serve(listener, app).await.expect("server failed");
}
