//!
//! Customer-record management REST service.
//! Reads configuration from TOML file (~/.config/customer-service/config.toml).

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use customer_service::domain::{Customer, CustomerRepository, CustomerService};
use customer_service::infrastructure::database::migrator::Migrator;
use customer_service::{
    create_api_router, default_config_path, init_database, AppConfig, DatabaseConfig,
    InMemoryCustomerRepository, SeaOrmCustomerRepository, StorageBackend,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("CUSTOMER_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting Customer Service...");

    // ── Prometheus metrics recorder (must be installed before any metrics calls) ──
    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    info!("Prometheus metrics recorder installed");

    // ── Storage backend, selected once at process start ────────
    let mut db = None;
    let repository: Arc<dyn CustomerRepository> = match app_cfg.storage.backend {
        StorageBackend::Memory => {
            info!("Storage backend: in-memory (seeded fixture rows)");
            Arc::new(InMemoryCustomerRepository::new())
        }
        StorageBackend::Database => {
            let db_config = DatabaseConfig {
                url: app_cfg.database.connection_url(),
            };
            info!("Storage backend: database ({})", db_config.url);

            let connection = match init_database(&db_config).await {
                Ok(connection) => connection,
                Err(e) => {
                    error!("Failed to connect to database: {}", e);
                    return Err(e.into());
                }
            };

            info!("Running database migrations...");
            if let Err(e) = Migrator::up(&connection, None).await {
                error!("Failed to run migrations: {}", e);
                return Err(e.into());
            }
            info!("Migrations completed");

            let repository = Arc::new(SeaOrmCustomerRepository::new(connection.clone()));
            seed_random_customer(repository.as_ref()).await;

            db = Some(connection);
            repository
        }
    };

    // ── Service and router ──────────────────────────────────────
    let service = Arc::new(CustomerService::new(repository.clone()));
    let api_router = create_api_router(service, repository, prometheus_handle);

    // ── Start REST API server with graceful shutdown ────────────
    let api_addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("REST API server listening on http://{}", api_addr);
    info!("Swagger UI available at http://{}/docs/", api_addr);

    axum::serve(listener, api_router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Perform final cleanup
    if let Some(db) = db {
        if let Err(e) = db.close().await {
            warn!("Error closing database connection: {}", e);
        } else {
            info!("Database connection closed");
        }
    }

    info!("Customer Service shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}

/// Seed one randomly generated customer if the store is empty
async fn seed_random_customer(repository: &dyn CustomerRepository) {
    const FIRST_NAMES: [&str; 8] = [
        "Alex", "Jamila", "Maria", "Omar", "Elena", "Yusuf", "Nadia", "Victor",
    ];
    const LAST_NAMES: [&str; 8] = [
        "Smith", "Karimova", "Garcia", "Aliyev", "Petrova", "Rahimov", "Brown", "Ivanov",
    ];

    let existing = match repository.find_all().await {
        Ok(existing) => existing,
        Err(e) => {
            warn!("Skipping seed, could not inspect storage: {}", e);
            return;
        }
    };
    if !existing.is_empty() {
        return;
    }

    info!("Seeding a randomly generated customer...");

    let mut rng = rand::thread_rng();
    let first_name = FIRST_NAMES.choose(&mut rng).copied().unwrap_or("Alex");
    let last_name = LAST_NAMES.choose(&mut rng).copied().unwrap_or("Smith");
    let age = rng.gen_range(16..99);

    let customer = Customer::new(
        format!("{} {}", first_name, last_name),
        format!(
            "{}.{}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        age,
    );

    match repository.insert(customer).await {
        Ok(customer) => info!("Seed customer created: {}", customer.email),
        Err(e) => warn!("Failed to seed customer: {}", e),
    }
}
