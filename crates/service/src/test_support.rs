#![cfg(test)]
use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, DATABASE_URL};
use configs::DatabaseConfig;

use crate::catalog::domain::Record;
use crate::catalog::repository::Repository;
use crate::errors::ServiceError;

// Migrations run at most once per test process; `false` means no database.
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

fn test_config() -> DatabaseConfig {
    DatabaseConfig {
        url: DATABASE_URL.clone(),
        max_connections: 20,
        min_connections: 1,
        connect_timeout_secs: 5,
        acquire_timeout_secs: 10,
        ..Default::default()
    }
}

/// Fresh connection to a migrated database, or `None` when DB tests are
/// disabled (`SKIP_DB_TESTS`) or no database is reachable.
pub async fn get_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let ready = MIGRATED
        .get_or_init(|| async {
            let db = match connect_with_config(&test_config()).await {
                Ok(db) => db,
                Err(e) => {
                    eprintln!("skip: cannot connect to db: {}", e);
                    return false;
                }
            };
            match migration::Migrator::up(&db, None).await {
                Ok(()) => true,
                Err(e) => {
                    eprintln!("skip: migrate up failed: {}", e);
                    false
                }
            }
        })
        .await;
    if !*ready {
        return None;
    }
    connect_with_config(&test_config()).await.ok()
}

/// Repository whose every call fails like a lost database connection.
pub struct FailingRepository;

#[async_trait]
impl<E: Record> Repository<E> for FailingRepository {
    async fn find_all(&self) -> Result<Vec<E>, ServiceError> { Err(ServiceError::Db("connection reset".into())) }
    async fn find_by_id(&self, _id: i64) -> Result<Option<E>, ServiceError> { Err(ServiceError::Db("connection reset".into())) }
    async fn save(&self, _entity: E) -> Result<E, ServiceError> { Err(ServiceError::Db("connection reset".into())) }
    async fn delete_by_id(&self, _id: i64) -> Result<(), ServiceError> { Err(ServiceError::Db("connection reset".into())) }
}

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

/// Route INFO-and-above events on the current thread into a buffer until the guard drops.
pub fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    (logs, tracing::subscriber::set_default(subscriber))
}
