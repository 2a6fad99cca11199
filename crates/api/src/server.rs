use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;

use creative_mock_core::config::Settings;
use creative_mock_core::random::{FakerProvider, RandomDataProvider};

use crate::routes::{self, AppState};

/// Bound listener plus router. Built once at startup, consumed by [`MockServer::serve`].
pub struct MockServer {
    listener: TcpListener,
    app: Router,
}

impl MockServer {
    pub async fn bind(settings: &Settings) -> anyhow::Result<Self> {
        let random: Arc<dyn RandomDataProvider> = match settings.random_seed {
            Some(seed) => Arc::new(FakerProvider::seeded(seed)),
            None => Arc::new(FakerProvider::new()),
        };

        let addr = settings.bind_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;

        Ok(Self {
            listener,
            app: routes::router(AppState { random }),
        })
    }

    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        self.listener
            .local_addr()
            .context("listener has no local address")
    }

    /// Serves until `shutdown` resolves, then drains in-flight requests.
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.app)
            .with_graceful_shutdown(shutdown)
            .await
            .context("server error")
    }
}
