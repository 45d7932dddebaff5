use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use enrollpay::config::{Config, StoreBackend};
use enrollpay::core::LedgerStore;
use enrollpay::middleware::RequestId;
use enrollpay::modules::{catalog, enrollments, health, payments, reports, students};
use enrollpay::store::{MemoryStore, MySqlStore};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "enrollpay=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!("Starting EnrollPay enrollment & tuition payment service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Build the ledger store the aggregation layer reads from
    let store: Arc<dyn LedgerStore> = match config.store.backend {
        StoreBackend::Memory => {
            tracing::info!("Using in-memory ledger store seeded with sample data");
            Arc::new(MemoryStore::with_sample_data())
        }
        StoreBackend::MySql => {
            let database = config
                .store
                .database
                .as_ref()
                .context("MySQL backend selected without database configuration")?;
            let pool = database
                .create_pool()
                .await
                .context("Failed to create database pool")?;
            tracing::info!(
                "Using MySQL ledger store ({} connections)",
                database.pool_size
            );
            Arc::new(MySqlStore::new(pool))
        }
    };

    let store_data = web::Data::from(store);
    let bind_address = config.server.bind_address();
    let cors_origin = config.cors.allowed_origin.clone();

    let server = HttpServer::new(move || {
        let cors = match cors_origin.as_deref() {
            Some("*") | None => Cors::permissive(),
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allowed_methods(vec!["GET"])
                .allow_any_header()
                .max_age(3600),
        };

        App::new()
            .app_data(store_data.clone())
            .wrap(TracingLogger::default())
            .wrap(RequestId)
            .wrap(cors)
            .configure(health::controllers::configure)
            .service(
                web::scope("/api")
                    .configure(catalog::controllers::configure)
                    .configure(enrollments::controllers::configure)
                    .configure(payments::controllers::configure)
                    .configure(students::controllers::configure)
                    .configure(reports::controllers::configure),
            )
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server error")
}
