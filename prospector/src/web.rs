pub(crate) mod api;
mod error;
mod state;

use std::net::SocketAddr;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::leptos::create_leptos_app;

pub(crate) use self::error::ApiError;
pub(crate) use self::state::WebState;

pub(crate) fn create_router(state: WebState) -> Router {
    Router::new()
        .merge(api::routes())
        .merge(create_leptos_app(&state))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub(crate) async fn start_web(state: WebState, port: u16) -> Result<()> {
    let app = create_router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("unable to listen for shutdown signal {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
