use std::path::Path;
use std::sync::Arc;

use contracts::domain::common::{AggregateRoot, InventoryError};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr,
    Statement,
};
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, MutexGuard};

/// Потолки размеров записи: ключ (id) и сериализованное значение в байтах
///
/// Читается напрямую из секции `[storage]` config.toml.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageLimits {
    pub max_key_size: usize,
    pub max_value_size: usize,
}

impl Default for StorageLimits {
    fn default() -> Self {
        Self {
            max_key_size: 44,
            max_value_size: 1024,
        }
    }
}

/// Хранилище всех коллекций склада
///
/// Открывается явно при старте и передаётся в сервисы и роутер.
/// Клоны делят одно соединение и одну блокировку записи.
#[derive(Clone)]
pub struct Store {
    conn: Arc<DatabaseConnection>,
    limits: StorageLimits,
    write_lock: Arc<Mutex<()>>,
}

impl Store {
    /// Открыть (или создать) файл SQLite и подготовить таблицы
    pub async fn open(db_file: &Path, limits: StorageLimits) -> anyhow::Result<Self> {
        if let Some(parent) = db_file.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let absolute_path = if db_file.is_absolute() {
            db_file.to_path_buf()
        } else {
            std::env::current_dir()?.join(db_file)
        };
        // Normalize path separators and ensure proper URL form on Windows
        let normalized = absolute_path.to_string_lossy().replace('\\', "/");
        let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
        let prefix = if needs_leading_slash { "/" } else { "" };
        let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

        tracing::info!("Opening database: {}", db_url);
        let conn = Database::connect(&db_url).await?;
        Ok(Self::from_connection(conn, limits).await?)
    }

    /// Хранилище в памяти (для тестов)
    pub async fn open_in_memory(limits: StorageLimits) -> anyhow::Result<Self> {
        let mut options = ConnectOptions::new("sqlite::memory:");
        // Each pooled connection would get its own empty in-memory database
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);
        let conn = Database::connect(options).await?;
        Ok(Self::from_connection(conn, limits).await?)
    }

    async fn from_connection(conn: DatabaseConnection, limits: StorageLimits) -> Result<Self, DbErr> {
        bootstrap_schema(&conn).await?;
        Ok(Self {
            conn: Arc::new(conn),
            limits,
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    /// Временный файл SQLite с пулом из нескольких соединений (для тестов)
    #[cfg(test)]
    pub(crate) async fn open_temp(limits: StorageLimits) -> anyhow::Result<Self> {
        let path = std::env::temp_dir()
            .join(format!("inventory-test-{}.db", uuid::Uuid::new_v4()));
        Self::open(&path, limits).await
    }

    pub fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }

    pub fn limits(&self) -> StorageLimits {
        self.limits
    }

    /// Захватить блокировку записи
    ///
    /// Чтение, проверка и запись одной операции выполняются под этим guard,
    /// поэтому изменения одной и той же записи не теряются и не пересекаются.
    pub async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    /// Проверить, что запись помещается в потолки коллекции
    pub fn check_size<A>(&self, record: &A) -> Result<(), InventoryError>
    where
        A: AggregateRoot + Serialize,
    {
        let key_size = record.to_string_id().len();
        if key_size > self.limits.max_key_size {
            return Err(InventoryError::RecordTooLarge {
                collection: A::collection_name(),
                size: key_size,
                limit: self.limits.max_key_size,
            });
        }

        let value_size = serde_json::to_vec(record)
            .map_err(|e| InventoryError::Storage(e.to_string()))?
            .len();
        if value_size > self.limits.max_value_size {
            return Err(InventoryError::RecordTooLarge {
                collection: A::collection_name(),
                size: value_size,
                limit: self.limits.max_value_size,
            });
        }
        Ok(())
    }
}

/// Ошибки sea-orm наружу уходят как `InventoryError::Storage`
pub fn storage_error(e: DbErr) -> InventoryError {
    tracing::error!("Storage failure: {}", e);
    InventoryError::Storage(e.to_string())
}

const CREATE_ITEM_TABLE: &str = r#"
    CREATE TABLE a001_item (
        id TEXT PRIMARY KEY NOT NULL,
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        illustration_url TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT
    );
"#;

const CREATE_SUPPLIER_TABLE: &str = r#"
    CREATE TABLE a002_supplier (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT
    );
"#;

const CREATE_SUPPLIER_ITEM_STOCK_TABLE: &str = r#"
    CREATE TABLE a003_supplier_item_stock (
        id TEXT PRIMARY KEY NOT NULL,
        item_id TEXT NOT NULL,
        quantity TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT
    );
"#;

/// Создать отсутствующие таблицы
async fn bootstrap_schema(conn: &DatabaseConnection) -> Result<(), DbErr> {
    ensure_table(conn, "a001_item", CREATE_ITEM_TABLE).await?;
    ensure_table(conn, "a002_supplier", CREATE_SUPPLIER_TABLE).await?;
    ensure_table(
        conn,
        "a003_supplier_item_stock",
        CREATE_SUPPLIER_ITEM_STOCK_TABLE,
    )
    .await?;
    Ok(())
}

async fn ensure_table(conn: &DatabaseConnection, name: &str, create_sql: &str) -> Result<(), DbErr> {
    let existing = conn
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type='table' AND name=?;",
            [name.into()],
        ))
        .await?;

    if existing.is_empty() {
        tracing::info!("Creating {} table", name);
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_sql.to_string(),
        ))
        .await?;
    } else {
        tracing::debug!("Table {} already exists", name);
    }
    Ok(())
}
