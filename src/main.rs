mod catalog;
mod chat;
mod config;
mod forms;
mod models;
mod nav;
mod pages;
mod routes;
mod submit;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::chat::Assistant;
use crate::config::Config;
use crate::models::SiteContent;
use crate::routes::AppState;
use crate::submit::Gateway;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("equilibrate_site=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    let content = SiteContent::load(&config.content_dir)
        .await
        .with_context(|| format!("loading content from {}", config.content_dir.display()))?;
    tracing::info!(
        posts = content.posts.len(),
        products = content.products.len(),
        use_cases = content.use_cases.len(),
        "content loaded"
    );

    let state = AppState::new(
        content,
        Gateway::new(config.submit_delay),
        Assistant::new(config.chat_delay, config.chat_history_cap),
    );
    let app = routes::router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("binding {}", config.addr))?;
    tracing::info!("listening on http://{}", config.addr);
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
