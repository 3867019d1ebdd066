//! Local Library catalog core
//!
//! The relational data and integrity layer for a lending-library catalog:
//! entities (Author, Book, Genre, BookInstance), association traversal,
//! validation, and integrity-guarded mutations. The surrounding shell
//! (routing, rendering) calls in with plain parameters and receives plain
//! records or typed failures.

use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod validate;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Catalog handle shared by all callers. Holds the one storage handle for
/// the process; constructed once and passed around explicitly.
#[derive(Clone)]
pub struct Catalog {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl Catalog {
    /// Load `.env` and the layered configuration, then connect.
    pub async fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        let config = AppConfig::load()?;
        Self::connect(config).await
    }

    /// Connect to the store, run migrations, and wire up the service layer.
    pub async fn connect(config: AppConfig) -> AppResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.max_connections)
            .min_connections(config.database.min_connections)
            .connect(&config.database.url)
            .await?;

        tracing::info!("Connected to database");

        sqlx::migrate!("./migrations").run(&pool).await?;

        tracing::info!("Database migrations completed");

        let repository = repository::Repository::new(pool);
        let services = services::Services::new(repository);

        Ok(Self {
            config: Arc::new(config),
            services: Arc::new(services),
        })
    }
}

/// Initialize tracing from the logging configuration. Falls back to the
/// RUST_LOG environment variable when set.
pub fn init_tracing(config: &config::LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("locallibrary={}", config.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
