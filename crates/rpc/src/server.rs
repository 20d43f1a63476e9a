use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{config::RpcServerConfig, provider::AttestationProvider, routes};

#[derive(Clone)]
pub struct RpcState {
    pub provider: Arc<dyn AttestationProvider>,
}

pub fn router(state: RpcState) -> Router {
    Router::new()
        .route(
            routes::validator::GET_ATTESTATION_ROUTE,
            get(routes::validator::get_attestation),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub struct RpcServer {
    state: RpcState,
    config: RpcServerConfig,
}

impl RpcServer {
    pub fn new(provider: Arc<dyn AttestationProvider>, config: RpcServerConfig) -> Self {
        Self {
            state: RpcState { provider },
            config,
        }
    }

    pub async fn start(self) -> anyhow::Result<()> {
        let address = self.config.http_socket_address();
        let listener = TcpListener::bind(address).await?;

        info!("HTTP API listening on {address}");
        axum::serve(listener, router(self.state)).await?;
        Ok(())
    }
}
