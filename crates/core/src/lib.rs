pub mod domain;
pub mod payload;
pub mod random;

pub mod config {
    use anyhow::Context;

    const DEFAULT_HOST: &str = "0.0.0.0";
    const DEFAULT_PORT: u16 = 3000;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub host: String,
        pub port: u16,
        pub random_seed: Option<u64>,
        pub sentry_dsn: Option<String>,
    }

    impl Default for Settings {
        fn default() -> Self {
            Self {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
                random_seed: None,
                sentry_dsn: None,
            }
        }
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
            let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

            let port = match var("PORT") {
                Some(v) => v
                    .trim()
                    .parse::<u16>()
                    .with_context(|| format!("PORT must be a valid port number (got {v:?})"))?,
                None => DEFAULT_PORT,
            };

            let random_seed = var("MOCK_RANDOM_SEED")
                .map(|v| {
                    v.trim()
                        .parse::<u64>()
                        .with_context(|| format!("MOCK_RANDOM_SEED must be a u64 (got {v:?})"))
                })
                .transpose()?;

            Ok(Self {
                host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port,
                random_seed,
                sentry_dsn: var("SENTRY_DSN"),
            })
        }

        pub fn bind_addr(&self) -> String {
            format!("{}:{}", self.host, self.port)
        }
    }

}
