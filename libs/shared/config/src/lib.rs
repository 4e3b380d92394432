use std::env;
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_api_key: String,
    pub port: u16,
    pub environment: String,
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Missing values
    /// fall back to defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let config = Self {
            supabase_url: non_empty("SUPABASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| {
                    warn!("SUPABASE_URL not set, using empty value");
                    String::new()
                }),
            supabase_api_key: non_empty("SUPABASE_SERVICE_ROLE_KEY")
                .or_else(|| non_empty("SUPABASE_ANON_PUBLIC_KEY"))
                .unwrap_or_else(|| {
                    warn!("SUPABASE_SERVICE_ROLE_KEY / SUPABASE_ANON_PUBLIC_KEY not set, using empty value");
                    String::new()
                }),
            port: match non_empty("PORT") {
                Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                    warn!("PORT '{}' is not a valid port, using {}", raw, DEFAULT_PORT);
                    DEFAULT_PORT
                }),
                None => DEFAULT_PORT,
            },
            environment: non_empty("ENVIRONMENT")
                .map(|e| e.trim().to_lowercase())
                .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            cors_allowed_origins: non_empty("CORS_ALLOWED_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(|origin| origin.trim().to_string())
                        .filter(|origin| !origin.is_empty())
                        .collect()
                })
                .unwrap_or_else(|| vec![DEFAULT_CORS_ORIGIN.to_string()]),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.supabase_url.is_empty() && !self.supabase_api_key.is_empty()
    }

    /// Seed routes are only mounted outside production.
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
