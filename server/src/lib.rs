//! BrandStore HTTP API
//!
//! Routes:
//! - `GET /api/brands`, `POST /api/brands`
//! - `GET|PUT|DELETE /api/brands/:id`
//! - `GET /health`

mod error;
mod extract;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::{brand_location, BRANDS_PATH};
pub use state::AppState;

use axum::routing::get;
use axum::Router;
use brandstore_core::{BrandRepository, BrandStore, Config};

/// Build the router over any brand repository.
pub fn router<R: BrandRepository + 'static>(store: R) -> Router {
    let item_path = format!("{BRANDS_PATH}/:id");

    Router::new()
        .route("/health", get(routes::health))
        .route(
            BRANDS_PATH,
            get(routes::brands::list_brands::<R>).post(routes::brands::create_brand::<R>),
        )
        .route(
            &item_path,
            get(routes::brands::get_brand::<R>)
                .put(routes::brands::update_brand::<R>)
                .delete(routes::brands::delete_brand::<R>),
        )
        .with_state(AppState::new(store))
}

/// Open the configured store and serve until Ctrl-C.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let store = BrandStore::open(&config)?;
    let app = router(store);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "BrandStore listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("BrandStore stopped");
    Ok(())
}

async fn shutdown_signal() {
    wait_for_signal(tokio::signal::ctrl_c()).await
}

/// Resolves when `signal` fires. If the listener itself fails, never resolves.
async fn wait_for_signal<F>(signal: F)
where
    F: std::future::Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler, keep serving until the process is killed
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_signal_stops_server() {
        let signal = async { Ok::<(), std::io::Error>(()) };
        let fired = tokio::time::timeout(Duration::from_millis(100), wait_for_signal(signal)).await;
        assert!(fired.is_ok());
    }

    #[tokio::test]
    async fn test_failed_listener_keeps_serving() {
        let failing = async { Err::<(), _>(std::io::Error::other("no handler")) };
        let fired = tokio::time::timeout(Duration::from_millis(100), wait_for_signal(failing)).await;
        assert!(fired.is_err());
    }
}
