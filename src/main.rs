//! Recipe Chat API server

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use recipe_chat::config::Config;
use recipe_chat::core::Responder;
use recipe_chat::providers::{OpenAICompatConfig, OpenAICompatProvider};
use recipe_chat::{routes, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recipe_chat=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    let provider = OpenAICompatProvider::new(OpenAICompatConfig::from_app_config(&config))?;
    tracing::info!(
        "Using model {} at {}",
        config.model_name,
        provider.base_url()
    );

    let responder = Arc::new(Responder::new(Arc::new(provider), config.model_name.clone()));

    let state = AppState { responder };

    let app = Router::new()
        .merge(routes::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!("Recipe chat API running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
