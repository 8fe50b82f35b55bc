//! SeaORM storage backend
//!
//! This module provides database storage using SeaORM,
//! supporting SQLite, MySQL/MariaDB, and PostgreSQL.

mod connection;
mod converters;
mod mutations;
mod query;
pub mod retry;
pub mod seed;
mod store;

use sea_orm::{DatabaseConnection, DbErr, SqlErr};
use tracing::{info, warn};

use crate::config::DatabaseConfig;
use crate::errors::{GomarksError, Result};

pub use connection::{connect_generic, connect_sqlite, run_migrations};
pub use converters::{model_to_query_log, model_to_shortcut, new_shortcut_to_active_model};
pub use retry::RetryPolicy;

/// 从数据库 URL 推断数据库类型
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    if database_url.starts_with("sqlite:")
        || database_url.ends_with(".db")
        || database_url.ends_with(".sqlite")
        || database_url == ":memory:"
    {
        Ok("sqlite".to_string())
    } else if database_url.starts_with("mysql://") || database_url.starts_with("mariadb://") {
        Ok("mysql".to_string())
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        Ok("postgres".to_string())
    } else {
        Err(GomarksError::database_config(format!(
            "无法从 URL 推断数据库类型: {}. 支持的 URL 格式: sqlite://, mysql://, mariadb://, postgres://",
            database_url
        )))
    }
}

/// 连接参数
#[derive(Debug, Clone, Copy)]
pub struct StorageOptions {
    pub pool_size: u32,
    /// 连接超时（秒）
    pub timeout: u64,
    pub retry: RetryPolicy,
}

impl StorageOptions {
    pub fn from_config(config: &DatabaseConfig) -> Self {
        Self {
            pool_size: config.pool_size,
            timeout: config.timeout,
            retry: RetryPolicy::from_config(config),
        }
    }
}

impl Default for StorageOptions {
    fn default() -> Self {
        Self::from_config(&DatabaseConfig::default())
    }
}

/// SeaORM-based storage backend
#[derive(Clone)]
pub struct SeaOrmStorage {
    db: DatabaseConnection,
    backend_name: String,
    retry: RetryPolicy,
}

impl SeaOrmStorage {
    pub async fn new(
        database_url: &str,
        backend_name: &str,
        options: StorageOptions,
    ) -> Result<Self> {
        if database_url.is_empty() {
            return Err(GomarksError::database_config("database_url 未设置"));
        }

        let db = if backend_name == "sqlite" {
            connect_sqlite(database_url, options.pool_size).await?
        } else {
            connect_generic(database_url, backend_name, options.pool_size, options.timeout).await?
        };

        let storage = SeaOrmStorage {
            db,
            backend_name: backend_name.to_string(),
            retry: options.retry,
        };

        run_migrations(&storage.db).await?;

        info!(
            "{} storage initialized",
            storage.backend_name.to_uppercase()
        );
        Ok(storage)
    }

    /// 按 URL 推断类型并连接
    pub async fn connect(database_url: &str, options: StorageOptions) -> Result<Self> {
        let backend_name = infer_backend_from_url(database_url)?;
        Self::new(database_url, &backend_name, options).await
    }

    /// 检查数据库是否可用
    pub async fn ping(&self) -> Result<()> {
        self.db
            .ping()
            .await
            .map_err(|e| GomarksError::database_connection(format!("数据库不可用: {}", e)))
    }

    /// 关闭连接池
    pub async fn close(&self) {
        if let Err(e) = self.db.clone().close().await {
            warn!("Failed to close database connection: {}", e);
        } else {
            info!("Database connection closed");
        }
    }
}

/// 将 DbErr 转换为业务错误，唯一约束冲突映射为 `Conflict`
fn map_db_err(action: &str, keyword: &str, err: DbErr) -> GomarksError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
        return GomarksError::shortcut_exists(keyword);
    }
    GomarksError::database_operation(format!("{}失败: {}", action, err))
}
