//! Museum site server.
//!
//! Reads settings from the environment (and `.env`): `SECRET_KEY` is required.

use museum_site::{build_router, connect, ensure_tables, AppState, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("museum_site=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let pool = connect(&settings.database_url).await?;
    ensure_tables(&pool).await?;

    let state = AppState::new(pool, &settings.secret_key, settings.static_dir.clone());
    let app = build_router(state);
    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("Museum site listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
