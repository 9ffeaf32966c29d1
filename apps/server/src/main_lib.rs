use std::sync::Arc;

use crate::config::{Config, RateSourceKind};
use fxdesk_core::{
    chat::{AgentClient, ChatService, ChatServiceTrait},
    fx::{FxService, FxServiceTrait},
};
use fxdesk_market_data::{ExchangeRateApiProvider, RateProvider, StaticTableProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub fx_service: Arc<dyn FxServiceTrait + Send + Sync>,
    pub chat_service: Arc<dyn ChatServiceTrait + Send + Sync>,
    pub rate_source: RateSourceKind,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn build_rate_provider(config: &Config) -> anyhow::Result<Arc<dyn RateProvider>> {
    let provider: Arc<dyn RateProvider> = match config.rate_source {
        RateSourceKind::Static => {
            // Built once here and shared read-only for the life of the process.
            let provider = StaticTableProvider::reference();
            tracing::info!(pairs = provider.table().len(), "Using static rate table");
            Arc::new(provider)
        }
        RateSourceKind::Live => {
            tracing::info!(
                upstream = %config.upstream_url,
                timeout_ms = config.upstream_timeout.as_millis() as u64,
                "Using live exchange rates"
            );
            Arc::new(ExchangeRateApiProvider::new(
                config.upstream_url.clone(),
                config.upstream_timeout,
            )?)
        }
    };
    Ok(provider)
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = build_rate_provider(config)?;
    let fx_service = Arc::new(FxService::new(provider));

    let agent = match &config.agent_url {
        Some(url) => {
            tracing::info!(agent = %url, "Relaying chat messages to agent");
            Some(AgentClient::new(url.clone(), config.agent_timeout)?)
        }
        None => {
            tracing::info!("No chat agent configured; answering with guidance text");
            None
        }
    };
    let chat_service = Arc::new(ChatService::new(agent));

    Ok(Arc::new(AppState {
        fx_service,
        chat_service,
        rate_source: config.rate_source,
    }))
}
