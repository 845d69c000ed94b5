use crate::config::AppConfig;
use crate::errors::{AppError, ServiceError};
use futures::future::BoxFuture;
use metrics::{counter, gauge, histogram};
use migrations::{Migrator, TABLES};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DatabaseTransaction, DbBackend,
    DbErr, Statement, TransactionError, TransactionTrait,
};
use sea_orm_migration::{MigratorTrait, SchemaManager};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Type alias for a database connection pool
pub type DbPool = DatabaseConnection;

/// Configuration for database connection
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Database connection URL
    pub url: String,
    /// Maximum number of connections
    pub max_connections: u32,
    /// Minimum number of connections
    pub min_connections: u32,
    /// Connection timeout duration
    pub connect_timeout: Duration,
    /// Idle timeout duration
    pub idle_timeout: Duration,
    /// Acquire connection timeout
    pub acquire_timeout: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 8,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            acquire_timeout: Duration::from_secs(8),
        }
    }
}

impl From<&AppConfig> for DbConfig {
    fn from(cfg: &AppConfig) -> Self {
        Self {
            url: cfg.database_url.clone(),
            max_connections: cfg.db_max_connections,
            min_connections: cfg.db_min_connections,
            connect_timeout: Duration::from_secs(cfg.db_connect_timeout_secs),
            idle_timeout: Duration::from_secs(cfg.db_idle_timeout_secs),
            acquire_timeout: Duration::from_secs(cfg.db_acquire_timeout_secs),
        }
    }
}

/// Establishes a connection pool to the database with default pool settings.
///
/// # Errors
/// Returns an `AppError` if the connection cannot be established
pub async fn establish_connection(database_url: &str) -> Result<DbPool, AppError> {
    let config = DbConfig {
        url: database_url.to_string(),
        ..Default::default()
    };

    establish_connection_with_config(&config).await
}

/// Establishes a connection pool to the database with custom configuration.
///
/// On SQLite the pool is refused if foreign-key enforcement is off, since
/// every reference between tables relies on it.
pub async fn establish_connection_with_config(config: &DbConfig) -> Result<DbPool, AppError> {
    debug!("Configuring database connection with: {:?}", config);

    let mut opt = ConnectOptions::new(config.url.clone());
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .sqlx_logging(true);

    gauge!("daedalosys_db.max_connections", config.max_connections as f64);

    info!(
        "Connecting to database with max_connections={}",
        config.max_connections
    );

    let db_pool = Database::connect(opt).await.map_err(|e| {
        error!("Database connection establishment failed: {}", e);
        AppError::DatabaseError(e)
    })?;

    if db_pool.get_database_backend() == DbBackend::Sqlite {
        verify_foreign_keys(&db_pool).await?;
    }

    info!("Database connection pool established successfully");
    Ok(db_pool)
}

/// Establish DB pool using AppConfig tuning
pub async fn establish_connection_from_app_config(cfg: &AppConfig) -> Result<DbPool, AppError> {
    let db_cfg: DbConfig = cfg.into();
    establish_connection_with_config(&db_cfg).await
}

async fn verify_foreign_keys(pool: &DbPool) -> Result<(), AppError> {
    let row = pool
        .query_one(Statement::from_string(
            DbBackend::Sqlite,
            "PRAGMA foreign_keys".to_owned(),
        ))
        .await?;

    let enabled = match row {
        Some(row) => row.try_get::<i32>("", "foreign_keys")? == 1,
        None => false,
    };

    if enabled {
        debug!("SQLite foreign key enforcement is on");
        Ok(())
    } else {
        Err(ServiceError::InternalError(
            "SQLite foreign key enforcement is disabled".to_string(),
        ))
    }
}

/// Key of the Postgres advisory lock held while the schema is created.
const SCHEMA_LOCK_KEY: i64 = 0x6461_6564_616c_6f73;

/// Attempts before a contended schema creation gives up.
const SCHEMA_ATTEMPTS: u32 = 5;

/// Creates every table and index that does not exist yet.
///
/// All statements run inside one transaction, so a failed start leaves no
/// half-built schema behind. Existing tables and their rows are never
/// touched. Concurrent starts are serialized: Postgres through an advisory
/// lock, SQLite by retrying when the database write lock is taken.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), AppError> {
    info!("Ensuring database schema");
    let start = Instant::now();

    let mut attempt = 1;
    loop {
        match create_missing_schema(pool).await {
            Ok(()) => break,
            Err(e) if attempt < SCHEMA_ATTEMPTS && is_lock_contention(&e) => {
                warn!(attempt, "Schema creation contended, retrying: {}", e);
                counter!("daedalosys_db.schema.retries", 1);
                tokio::time::sleep(Duration::from_millis(50 * u64::from(attempt))).await;
                attempt += 1;
            }
            Err(e) => {
                error!("Schema creation failed: {}", e);
                return Err(ServiceError::from_db(e));
            }
        }
    }

    let elapsed = start.elapsed();
    histogram!("daedalosys_db.schema.duration", elapsed);
    info!("Database schema ready in {:?}", elapsed);
    Ok(())
}

async fn create_missing_schema(pool: &DbPool) -> Result<(), DbErr> {
    let txn = pool.begin().await?;
    if txn.get_database_backend() == DbBackend::Postgres {
        txn.execute(Statement::from_string(
            DbBackend::Postgres,
            format!("SELECT pg_advisory_xact_lock({})", SCHEMA_LOCK_KEY),
        ))
        .await?;
    }

    {
        let manager = SchemaManager::new(&txn);
        for migration in Migrator::migrations() {
            debug!(migration = %migration.name(), "Applying schema step");
            migration.up(&manager).await?;
        }
    }

    txn.commit().await
}

// SQLITE_BUSY and SQLITE_BUSY_SNAPSHOT both report "database is locked".
fn is_lock_contention(err: &DbErr) -> bool {
    let message = err.to_string();
    message.contains("database is locked") || message.contains("database table is locked")
}

/// Runs database migrations through the migration history table.
///
/// # Errors
/// Returns an `AppError` if migrations fail to execute
pub async fn run_migrations(pool: &DbPool) -> Result<(), AppError> {
    info!("Running database migrations");
    let start = Instant::now();

    let result = Migrator::up(pool, None)
        .await
        .map_err(AppError::DatabaseError);

    let elapsed = start.elapsed();
    match &result {
        Ok(_) => info!(
            "Database migrations completed successfully in {:?}",
            elapsed
        ),
        Err(e) => error!("Database migrations failed after {:?}: {}", elapsed, e),
    }

    result
}

/// Lists the schema tables that are absent from the database.
pub async fn missing_tables(pool: &DbPool) -> Result<Vec<&'static str>, AppError> {
    let manager = SchemaManager::new(pool);
    let mut missing = Vec::new();
    for table in TABLES {
        if !manager.has_table(table).await? {
            missing.push(table);
        }
    }
    Ok(missing)
}

/// Checks if the database connection is active
pub async fn check_connection(pool: &DbPool) -> Result<(), AppError> {
    debug!("Checking database connection");
    let start = Instant::now();

    let result = pool.ping().await.map_err(AppError::DatabaseError);

    let elapsed = start.elapsed();
    match &result {
        Ok(_) => {
            debug!("Database connection check successful in {:?}", elapsed);
            gauge!(
                "daedalosys_db.connection_latency",
                elapsed.as_millis() as f64
            );
        }
        Err(e) => {
            error!(
                "Database connection check failed after {:?}: {}",
                elapsed, e
            );
            counter!("daedalosys_db.connection_failures", 1);
        }
    }

    result
}

/// Closes the database connection pool
pub async fn close_pool(pool: DbPool) -> Result<(), AppError> {
    info!("Closing database connection pool");

    pool.close().await.map_err(AppError::DatabaseError)
}

/// Runs `f` inside a database transaction.
///
/// The transaction commits when `f` returns `Ok` and rolls back on `Err`,
/// so a rejected statement never leaves partial writes behind.
pub async fn with_transaction<F, T>(pool: &DbPool, f: F) -> Result<T, ServiceError>
where
    F: for<'a> FnOnce(&'a DatabaseTransaction) -> BoxFuture<'a, Result<T, ServiceError>> + Send,
    T: Send + 'static,
{
    let transaction_id = Uuid::new_v4();
    let start = Instant::now();

    debug!(transaction_id = %transaction_id, "Starting database transaction");
    counter!("daedalosys_db.transaction.started", 1);

    let result = pool.transaction::<_, T, ServiceError>(move |txn| f(txn)).await;

    let elapsed = start.elapsed();
    histogram!("daedalosys_db.transaction.duration", elapsed);

    match &result {
        Ok(_) => {
            counter!("daedalosys_db.transaction.committed", 1);
            debug!(transaction_id = %transaction_id, "Transaction committed successfully in {:?}", elapsed);
        }
        Err(e) => {
            counter!("daedalosys_db.transaction.rolled_back", 1);
            warn!(transaction_id = %transaction_id, error = %e, "Transaction rolled back after {:?}", elapsed);
        }
    }

    result.map_err(|e| match e {
        TransactionError::Connection(e) => ServiceError::from_db(e),
        TransactionError::Transaction(e) => e,
    })
}
