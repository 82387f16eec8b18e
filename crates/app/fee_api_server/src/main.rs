//! Fee chat backend server binary.
//!
//! Serves the chat, upload and contact-form API for the SESMag frontend.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use fee_core::completion::openai::{self, OpenAiCompleter, OpenAiConfig};
use fee_core::completion::DEFAULT_MAX_TOKENS;
use fee_core::db::{DbConfig, DbError};
use fee_core::extraction::PdfExtractor;
use fee_core::persistence::{MemoryStore, Persistence, PgStore};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "fee_api_server", about = "Fee chat backend server", version)]
struct Args {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 5001)]
    port: u16,

    /// Interface to bind.
    #[arg(long, env = "BIND_HOST", default_value = "0.0.0.0")]
    host: String,

    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    db_host: String,

    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    db_port: u16,

    #[arg(long, env = "DB_USER", default_value = "postgres")]
    db_user: String,

    #[arg(long, env = "DB_PASSWORD", default_value = "", hide_env_values = true)]
    db_password: String,

    #[arg(long, env = "DB_DATABASE", default_value = fee_core::db::DEFAULT_DATABASE)]
    db_database: String,

    /// PostgreSQL connection URL. Overrides the individual `--db-*` settings.
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    /// Maximum number of database connections in the pool.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,

    /// Seconds a storage call waits for a database connection.
    #[arg(long, env = "DB_ACQUIRE_TIMEOUT_SECS", default_value_t = 5)]
    db_acquire_timeout_secs: u64,

    /// Keep all records in process memory instead of PostgreSQL.
    #[arg(long, default_value_t = false)]
    in_memory: bool,

    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    openai_api_key: Option<String>,

    #[arg(long, env = "OPENAI_MODEL", default_value = openai::DEFAULT_MODEL)]
    openai_model: String,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = openai::DEFAULT_BASE_URL)]
    openai_base_url: String,

    /// Seconds to wait for a completion before giving up.
    #[arg(long, env = "FEE_COMPLETION_TIMEOUT_SECS", default_value_t = 60)]
    completion_timeout_secs: u64,

    /// Reply length ceiling passed to the language model.
    #[arg(long, env = "FEE_MAX_TOKENS", default_value_t = DEFAULT_MAX_TOKENS)]
    max_tokens: u32,

    /// Frontend origin allowed by CORS (`*` for any).
    #[arg(long, env = "CORS_ORIGIN", default_value = fee_api::config::DEFAULT_CORS_ORIGIN)]
    cors_origin: String,

    /// Directory where uploads are staged while their text is extracted.
    #[arg(long, env = "UPLOAD_DIR", default_value = "uploads")]
    upload_dir: PathBuf,

    #[arg(long, env = "FEE_MAX_UPLOAD_BYTES", default_value_t = fee_api::config::DEFAULT_MAX_UPLOAD_BYTES)]
    max_upload_bytes: usize,
}

impl Args {
    fn db_config(&self) -> DbConfig {
        DbConfig {
            host: self.db_host.clone(),
            port: self.db_port,
            user: self.db_user.clone(),
            password: self.db_password.clone(),
            database: self.db_database.clone(),
            url: self.database_url.clone(),
            acquire_timeout: Duration::from_secs(self.db_acquire_timeout_secs),
        }
    }

    fn openai_config(&self) -> OpenAiConfig {
        OpenAiConfig {
            api_key: self
                .openai_api_key
                .clone()
                .filter(|k| !k.trim().is_empty()),
            model: self.openai_model.clone(),
            base_url: self.openai_base_url.clone(),
            timeout: Duration::from_secs(self.completion_timeout_secs),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,fee_api=debug,fee_core=debug")),
        )
        .init();

    let args = Args::parse();

    info!(port = args.port, version = fee_core::version(), "starting fee_api_server");

    let store: Arc<dyn Persistence> = if args.in_memory {
        warn!("using in-memory storage, records are lost on exit");
        Arc::new(MemoryStore::new())
    } else {
        let db = args.db_config();
        info!(
            database = %db.redacted(),
            max_connections = args.max_connections,
            "configuring connection pool"
        );
        Arc::new(open_pg_store(&db, args.max_connections).await?)
    };

    let openai = args.openai_config();
    if openai.api_key.is_none() {
        warn!("OPENAI_API_KEY is not set, chat requests will fail");
    }
    info!(model = %openai.model, "configured completion service");
    let completer = Arc::new(OpenAiCompleter::new(openai)?);

    let config = fee_api::config::ApiConfig {
        bind_addr: format!("{}:{}", args.host, args.port),
        cors_origin: args.cors_origin.clone(),
        upload_dir: args.upload_dir.clone(),
        max_upload_bytes: args.max_upload_bytes,
        max_tokens: args.max_tokens,
    };
    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let state = fee_api::AppState {
        store,
        completer,
        extractor: Arc::new(PdfExtractor),
        config: config.clone(),
    };
    let app = fee_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

/// Build the PostgreSQL store and migrate it when the server is reachable.
///
/// An unreachable database is logged and the server keeps running: storage
/// routes answer 500 and `GET /` reports `db_connected: false` until it
/// comes back. Only malformed connection settings are fatal.
async fn open_pg_store(db: &DbConfig, max_connections: u32) -> Result<PgStore, DbError> {
    let store = PgStore::new(db.connect_lazy(max_connections)?);

    if !store.ping().await {
        error!(database = %db.redacted(), "failed to connect to the database");
        return Ok(store);
    }
    info!("connected to the database");

    info!("running database migrations");
    if let Err(e) = fee_core::migrate::migrate(store.pool()).await {
        error!("database migrations failed: {e}");
    }
    Ok(store)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
