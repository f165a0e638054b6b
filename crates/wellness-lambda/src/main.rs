use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use wellness_lambda::config::{Config, StoreBackend};
use wellness_lambda::router;
use wellness_lambda::state::AppState;
use wellness_storage::{AssessmentStore, MemoryAssessmentStore, S3AssessmentStore};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env()?;

    let store: Arc<dyn AssessmentStore> = match config.store {
        StoreBackend::S3 => {
            let s3 = wellness_storage::client::build_client().await;
            tracing::info!(bucket = %config.bucket, "using S3 assessment store");
            Arc::new(S3AssessmentStore::new(s3, config.bucket.clone()))
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory assessment store; records are lost on exit");
            Arc::new(MemoryAssessmentStore::new())
        }
    };

    let bind = config.bind;
    let app = router(AppState::new(store, config));

    match bind {
        Some(addr) => {
            let listener = TcpListener::bind(addr).await?;
            tracing::info!("listening on {addr}");
            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
            Ok(())
        }
        None => lambda_http::run(app)
            .await
            .map_err(|e| eyre::eyre!("lambda runtime error: {e}")),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install Ctrl+C handler: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("received Ctrl+C, shutting down");
}
