use anyhow::{Context, Result};

/// Server-wide configuration, resolved from the environment once at startup.
/// Mutating requests are authorized against `admin_key`; the key is never
/// held in ambient state beyond this struct.
#[derive(Debug, Clone)]
pub struct Config {
    pub admin_key: String,
    pub database_url: Option<String>,
    pub resolver: ResolverConfig,
}

/// Credentials for the host-link resolver pass-through.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub api_base: String,
    pub login: String,
    pub key: String,
}

impl Config {
    /// Read configuration from the environment. `ADMIN_KEY` is mandatory:
    /// without it every mutation would be unauthorized, which is never what
    /// an operator wants silently.
    pub fn from_env() -> Result<Self> {
        let admin_key = std::env::var("ADMIN_KEY")
            .context("ADMIN_KEY must be set to authorize mutating requests")?;
        let database_url = std::env::var("DATABASE_URL").ok();
        let resolver = ResolverConfig {
            api_base: std::env::var("STREAMTAPE_API_BASE")
                .unwrap_or_else(|_| "https://api.streamtape.com".to_string()),
            login: std::env::var("STREAMTAPE_LOGIN").unwrap_or_default(),
            key: std::env::var("STREAMTAPE_KEY").unwrap_or_default(),
        };
        Ok(Self {
            admin_key,
            database_url,
            resolver,
        })
    }
}
