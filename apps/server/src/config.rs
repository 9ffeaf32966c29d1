use std::{net::SocketAddr, str::FromStr, time::Duration};

use fxdesk_market_data::provider::exchange_rate_api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// Which rate provider backs the conversion service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateSourceKind {
    /// Hard-coded table, built once at startup.
    Static,
    /// One upstream call per request.
    Live,
}

impl RateSourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RateSourceKind::Static => "static",
            RateSourceKind::Live => "live",
        }
    }
}

impl FromStr for RateSourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(RateSourceKind::Static),
            "live" => Ok(RateSourceKind::Live),
            other => Err(format!("unknown rate source '{}'", other)),
        }
    }
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub rate_source: RateSourceKind,
    pub upstream_url: String,
    pub upstream_timeout: Duration,
    pub agent_url: Option<String>,
    pub agent_timeout: Duration,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3003)),
            rate_source: RateSourceKind::Static,
            upstream_url: DEFAULT_BASE_URL.to_string(),
            upstream_timeout: DEFAULT_TIMEOUT,
            agent_url: None,
            agent_timeout: Duration::from_secs(60),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr: SocketAddr = std::env::var("FXD_LISTEN_ADDR")
            .map(|v| v.parse().expect("Invalid FXD_LISTEN_ADDR"))
            .unwrap_or(defaults.listen_addr);
        let rate_source = match std::env::var("FXD_RATE_SOURCE") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{}; falling back to static rates", e);
                RateSourceKind::Static
            }),
            Err(_) => defaults.rate_source,
        };
        let upstream_url = std::env::var("FXD_UPSTREAM_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.upstream_url);
        let agent_url = std::env::var("FXD_AGENT_URL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let cors_allow = std::env::var("FXD_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            listen_addr,
            rate_source,
            upstream_url,
            upstream_timeout: duration_ms("FXD_UPSTREAM_TIMEOUT_MS", defaults.upstream_timeout),
            agent_url,
            agent_timeout: duration_ms("FXD_AGENT_TIMEOUT_MS", defaults.agent_timeout),
            cors_allow,
            request_timeout: duration_ms("FXD_REQUEST_TIMEOUT_MS", defaults.request_timeout),
        }
    }
}

fn duration_ms(key: &str, default: Duration) -> Duration {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(default)
}
