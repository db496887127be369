use anyhow::Result;
use blog_gateway::{
    application::{ports::time::Clock, services::ApplicationServices},
    config::{AppConfig, CmsMode, CorsOrigin},
    domain::article::ArticleSource,
    infrastructure::{
        cms::{CmsArticleSource, MockArticleSource},
        time::SystemClock,
    },
    presentation::http::{routes::build_router, state::HttpState},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let article_source = build_article_source(&config)?;
    let services = Arc::new(ApplicationServices::new(article_source));
    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state, config.cors_origin());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("API gateway listening on {address}");
    match config.cors_origin() {
        CorsOrigin::Any => tracing::info!("CORS enabled for any origin"),
        CorsOrigin::Exact(origin) => tracing::info!(origin = ?origin, "CORS enabled"),
    }
    tracing::info!(cms_url = %config.cms_url(), mode = %config.cms_mode(), "CMS configured");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn build_article_source(config: &AppConfig) -> Result<Arc<dyn ArticleSource>> {
    let source: Arc<dyn ArticleSource> = match config.cms_mode() {
        CmsMode::Live => Arc::new(CmsArticleSource::with_timeout(
            config.cms_url(),
            config.cms_token().map(str::to_string),
            config.cms_timeout(),
        )?),
        CmsMode::Mock => {
            tracing::warn!("CMS_MODE=mock: serving synthesized articles, the CMS is not contacted");
            let clock: Arc<dyn Clock> = Arc::new(SystemClock);
            Arc::new(MockArticleSource::new(clock))
        }
    };
    Ok(source)
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
