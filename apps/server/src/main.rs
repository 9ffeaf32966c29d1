use fxdesk_server::{api::app_router, build_state, config::Config, init_tracing};
use fxdesk_core::chat::ChatServiceTrait;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();
    let config = Config::from_env();
    let state = build_state(&config).await?;
    let agent_configured = state.chat_service.is_agent_configured();

    let router = app_router(state, &config);
    tracing::info!(
        rate_source = config.rate_source.as_str(),
        agent_configured,
        "Listening on {}",
        config.listen_addr
    );
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
