// src/config.rs
use axum::http::HeaderValue;
use std::{env, fmt, str::FromStr, time::Duration};
use thiserror::Error;

const REQUIRED_KEYS: [&str; 3] = ["PORT", "CORS_ORIGIN", "CMS_URL"];

/// Where article pages come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CmsMode {
    #[default]
    Live,
    Mock,
}

impl FromStr for CmsMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(Self::Live),
            "mock" => Ok(Self::Mock),
            other => Err(ConfigError::Invalid(format!(
                "CMS_MODE must be `live` or `mock`, got `{other}`"
            ))),
        }
    }
}

impl fmt::Display for CmsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Live => f.write_str("live"),
            Self::Mock => f.write_str("mock"),
        }
    }
}

/// Allowed origin for cross-origin requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CorsOrigin {
    Any,
    Exact(HeaderValue),
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_host: String,
    port: u16,
    cors_origin: CorsOrigin,
    cms_url: String,
    cms_token: Option<String>,
    cms_mode: CmsMode,
    cms_timeout: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_host() -> String {
    "0.0.0.0".into()
}

fn default_cms_timeout_secs() -> u64 {
    30
}

/// Prefix bare hosts with `https://` and drop trailing slashes.
pub fn normalize_cms_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

impl AppConfig {
    /// Build configuration from environment variables. Every required key is
    /// checked before failing so one error names all missing settings.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Empty values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let missing: Vec<&'static str> = REQUIRED_KEYS
            .into_iter()
            .filter(|key| get(*key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let port = get("PORT")
            .unwrap_or_default()
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::Invalid("PORT must be a number between 0 and 65535".into()))?;

        let cors_origin = match get("CORS_ORIGIN").unwrap_or_default().trim() {
            "*" => CorsOrigin::Any,
            origin => HeaderValue::from_str(origin)
                .map(CorsOrigin::Exact)
                .map_err(|_| {
                    ConfigError::Invalid(format!("CORS_ORIGIN is not a valid origin: {origin}"))
                })?,
        };

        let cms_url = normalize_cms_url(&get("CMS_URL").unwrap_or_default());
        let cms_token = get("CMS_TOKEN").map(|token| token.trim().to_string());

        let cms_mode = get("CMS_MODE")
            .map(|value| value.parse::<CmsMode>())
            .transpose()?
            .unwrap_or_default();

        let cms_timeout_secs = match get("CMS_TIMEOUT_SECS") {
            Some(value) => value.trim().parse::<u64>().map_err(|_| {
                ConfigError::Invalid("CMS_TIMEOUT_SECS must be a whole number of seconds".into())
            })?,
            None => default_cms_timeout_secs(),
        };

        let listen_host = get("LISTEN_HOST").unwrap_or_else(default_listen_host);

        Ok(Self {
            listen_host,
            port,
            cors_origin,
            cms_url,
            cms_token,
            cms_mode,
            cms_timeout: Duration::from_secs(cms_timeout_secs),
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.listen_host, self.port)
    }

    pub fn cors_origin(&self) -> &CorsOrigin {
        &self.cors_origin
    }

    /// Normalized CMS base URL, always with a scheme and without a trailing slash.
    pub fn cms_url(&self) -> &str {
        &self.cms_url
    }

    pub fn cms_token(&self) -> Option<&str> {
        self.cms_token.as_deref()
    }

    pub fn cms_mode(&self) -> CmsMode {
        self.cms_mode
    }

    pub fn cms_timeout(&self) -> Duration {
        self.cms_timeout
    }
}
