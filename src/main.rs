//! Wine With Pete backend entrypoint.
//!
//! Loads configuration, constructs the connection pool and adapters once,
//! and serves the composed router. Dependencies are injected explicitly -
//! no module-scope clients.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wine_with_pete::adapters::auth::JwtSessionValidator;
use wine_with_pete::adapters::convertkit::{ConvertKitClient, ConvertKitConfig};
use wine_with_pete::adapters::http::middleware::AdminCredential;
use wine_with_pete::adapters::http::{
    build_router, CatalogAppState, EventsAppState, MembershipAppState, RouterDeps,
    StorefrontAppState,
};
use wine_with_pete::adapters::postgres::{
    PostgresEssayReader, PostgresEssayRepository, PostgresEventReader, PostgresMembershipReader,
    PostgresPackageReader, PostgresProductReader, PostgresRsvpRepository,
};
use wine_with_pete::adapters::stripe::{StripeCheckoutAdapter, StripeConfig};
use wine_with_pete::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(&config.server.log_level)
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .connect(&config.database.url)
        .await?;

    tracing::info!("database pool ready");

    let membership_reader = Arc::new(PostgresMembershipReader::new(pool.clone()));

    let catalog = CatalogAppState {
        membership_reader: membership_reader.clone(),
        package_reader: Arc::new(PostgresPackageReader::new(pool.clone())),
        essay_reader: Arc::new(PostgresEssayReader::new(pool.clone())),
        essay_repository: Arc::new(PostgresEssayRepository::new(pool.clone())),
        product_reader: Arc::new(PostgresProductReader::new(pool.clone())),
    };

    let membership = MembershipAppState {
        membership_reader: membership_reader.clone(),
    };

    let events = EventsAppState {
        event_reader: Arc::new(PostgresEventReader::new(pool.clone())),
        rsvp_repository: Arc::new(PostgresRsvpRepository::new(pool.clone())),
    };

    let storefront = StorefrontAppState {
        membership_reader,
        product_reader: Arc::new(PostgresProductReader::new(pool.clone())),
        payment_provider: Arc::new(StripeCheckoutAdapter::new(
            StripeConfig::new(config.payment.stripe_api_key.clone())
                .with_base_url(config.payment.api_base_url.clone()),
        )),
        newsletter_client: Arc::new(ConvertKitClient::new(
            ConvertKitConfig::new(
                config.newsletter.convertkit_api_key.clone(),
                config.newsletter.convertkit_form_id.clone(),
            )
            .with_base_url(config.newsletter.api_base_url.clone()),
        )),
    };

    let deps = RouterDeps {
        session_validator: Arc::new(JwtSessionValidator::new(
            &config.auth.jwt_secret,
            config.auth.issuer.clone(),
        )),
        admin_credential: AdminCredential::new(config.auth.admin_token.clone()),
        catalog,
        membership,
        events,
        storefront,
    };

    let cors = if config.server.cors_origins_list().is_empty() {
        CorsLayer::permissive()
    } else {
        let origins: Vec<_> = config
            .server
            .cors_origins_list()
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new().allow_origin(AllowOrigin::list(origins))
    };

    let app = build_router(deps)
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
