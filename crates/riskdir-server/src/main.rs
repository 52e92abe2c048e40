use riskdir_adapter_pg::PostgresStore;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

mod config;
mod handlers;
mod routes;
mod state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let cfg = config::load_config()?;

    let store =
        PostgresStore::new(&cfg.database.url, cfg.database.max_connections).await?;
    let app_state = state::AppState::new(Arc::new(store));

    let app = routes::create_router(app_state).layer(TraceLayer::new_for_http());

    tracing::info!("riskdir-server listening on {}", cfg.server.bind);

    let listener = tokio::net::TcpListener::bind(&cfg.server.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
