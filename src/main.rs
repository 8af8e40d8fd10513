use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vidtube_core::application::{
    ports::{
        media::MediaStore,
        security::{PasswordHasher, TokenService},
        time::Clock,
    },
    services::ApplicationServices,
};
use vidtube_core::config::AppConfig;
use vidtube_core::domain::{
    channel::{SubscriptionRepository, VideoRepository},
    user::UserRepository,
};
use vidtube_core::infrastructure::{
    database,
    media::CloudinaryMediaStore,
    repositories::{
        PostgresSubscriptionRepository, PostgresUserRepository, PostgresVideoRepository,
    },
    security::{Argon2PasswordHasher, JwtTokenService},
    time::SystemClock,
};
use vidtube_core::presentation::http::{routes::build_router, state::HttpState};

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

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let subscription_repo: Arc<dyn SubscriptionRepository> =
        Arc::new(PostgresSubscriptionRepository::new(pool.clone()));
    let video_repo: Arc<dyn VideoRepository> = Arc::new(PostgresVideoRepository::new(pool.clone()));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(
        config.access_token_secret(),
        config.access_token_ttl(),
        config.refresh_token_secret(),
        config.refresh_token_ttl(),
    ));
    let media_store: Arc<dyn MediaStore> = Arc::new(CloudinaryMediaStore::new(
        config.cloudinary_cloud_name().to_owned(),
        config.cloudinary_api_key().to_owned(),
        config.cloudinary_api_secret().to_owned(),
    ));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        subscription_repo,
        video_repo,
        password_hasher,
        token_service,
        media_store,
        clock,
    ));

    let state = HttpState { services };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

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
