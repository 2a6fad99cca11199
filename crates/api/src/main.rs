use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod error;
mod extract;
mod routes;
mod server;

#[derive(Debug, Parser)]
#[command(name = "creative_mock_api", about = "Mock creative strategy analytics API")]
struct Args {
    /// Port to listen on. Overrides PORT.
    #[arg(long)]
    port: Option<u16>,

    /// Interface to bind. Overrides HOST.
    #[arg(long)]
    host: Option<String>,

    /// Seed for generated values, for reproducible payloads. Overrides MOCK_RANDOM_SEED.
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let mut settings = creative_mock_core::config::Settings::from_env()?;
    if let Some(port) = args.port {
        settings.port = port;
    }
    if let Some(host) = args.host {
        settings.host = host;
    }
    if args.seed.is_some() {
        settings.random_seed = args.seed;
    }

    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let server = server::MockServer::bind(&settings).await?;
    let addr = server.local_addr()?;
    tracing::info!(%addr, seed = ?settings.random_seed, "mock api listening");

    server.serve(shutdown_signal()).await?;

    tracing::info!("mock api stopped");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

fn init_sentry(settings: &creative_mock_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
