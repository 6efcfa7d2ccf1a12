use std::sync::Arc;

use auth::Authenticator;
use rand::distributions::Alphanumeric;
use rand::Rng;
use social_service::config::Config;
use social_service::domain::post::service::PostService;
use social_service::domain::user::service::UserService;
use social_service::inbound::http::router::create_router;
use social_service::outbound::email::MailgunEmailSender;
use social_service::outbound::repositories::PostgresPostRepository;
use social_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "social_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "social-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        public_url = %config.application.public_url,
        mailgun_domain = %config.email.mailgun_domain,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(signing_secret(&config).as_bytes()));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let post_repository = Arc::new(PostgresPostRepository::new(pg_pool));
    let mailer = Arc::new(MailgunEmailSender::new(&config.email));

    let user_service = Arc::new(UserService::new(
        user_repository,
        mailer,
        authenticator,
        config.application.public_url.clone(),
    ));
    let post_service = Arc::new(PostService::new(post_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, post_service);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}

/// Configured signing secret, or a freshly generated one.
///
/// A generated secret only lives for this process: every restart without a
/// configured secret invalidates all previously issued tokens.
fn signing_secret(config: &Config) -> String {
    match &config.jwt.secret {
        Some(secret) => secret.clone(),
        None => {
            tracing::warn!(
                "No jwt.secret configured; using a generated one. \
                 Previously issued tokens will not be accepted"
            );
            rand::thread_rng()
                .sample_iter(&Alphanumeric)
                .take(64)
                .map(char::from)
                .collect()
        }
    }
}
