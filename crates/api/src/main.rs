use anyhow::Context;

use books_api::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    books_observability::init();

    let config = ServerConfig::from_env().context("invalid configuration")?;
    if config.access_token.is_none() {
        tracing::warn!("ZOHO_ACCESS_TOKEN not set; upstream calls will fail until it is provided");
    }

    let services = books_api::app::services::build_services(&config)
        .context("failed to build Zoho Books client")?;
    let app = books_api::app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    let local_addr = listener.local_addr()?;
    tracing::info!(
        api_domain = %config.api_domain,
        timeout_secs = config.upstream_timeout.as_secs(),
        "listening on {local_addr}"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
