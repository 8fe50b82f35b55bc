use std::sync::Arc;

use crate::errors::Result;

pub mod backend;
pub mod memory;
pub mod models;
pub mod traits;

pub use backend::SeaOrmStorage;
pub use memory::MemoryStore;
pub use models::{NewShortcut, QueryLogEntry, Shortcut, ShortcutChanges};
pub use traits::ShortcutStore;

pub struct StorageFactory;

impl StorageFactory {
    /// 按全局配置创建存储，并写入首次运行的默认值
    pub async fn create() -> Result<Arc<SeaOrmStorage>> {
        let config = crate::config::get_config();
        let database_url = &config.database.database_url;

        // 从 URL 自动推断数据库类型
        let backend_type = backend::infer_backend_from_url(database_url)?;

        let storage = backend::SeaOrmStorage::new(
            database_url,
            &backend_type,
            backend::StorageOptions::from_config(&config.database),
        )
        .await?;

        storage
            .ensure_defaults(
                &config.defaults.fallback_url,
                config.defaults.seed_examples,
            )
            .await?;

        Ok(Arc::new(storage))
    }
}
