//! 首次运行时写入的默认数据

use sea_orm::EntityTrait;
use tracing::info;

use super::SeaOrmStorage;
use crate::errors::{GomarksError, Result};
use crate::storage::NewShortcut;

use migration::entities::setting;

/// settings 表中后备模板的 key
pub const FALLBACK_SETTING_KEY: &str = "fallback_url";

/// 新库中的示例快捷方式
pub fn example_shortcuts() -> Vec<NewShortcut> {
    [
        ("b", "https://www.bbc.com", false),
        ("bb", "https://www.bbc.com/news/world/%s", false),
        ("bbc", "https://www.bbc.com/search?q=%s", false),
    ]
    .into_iter()
    .map(|(keyword, destination, single_word)| NewShortcut {
        keyword: keyword.to_string(),
        destination: destination.to_string(),
        single_word,
    })
    .collect()
}

impl SeaOrmStorage {
    /// 后备模板不存在时视为首次运行：写入默认模板，空库时再写入示例
    ///
    /// 返回是否为首次运行。
    pub async fn ensure_defaults(&self, fallback_url: &str, seed_examples: bool) -> Result<bool> {
        let existing = setting::Entity::find_by_id(FALLBACK_SETTING_KEY)
            .one(&self.db)
            .await
            .map_err(|e| GomarksError::database_operation(format!("读取设置失败: {}", e)))?;

        if existing.is_some() {
            return Ok(false);
        }

        self.save_fallback(fallback_url).await?;

        if seed_examples && self.count().await? == 0 {
            let examples = example_shortcuts();
            let total = examples.len();
            for example in examples {
                self.insert(example).await?;
            }
            info!("Seeded {} example shortcuts", total);
        }

        Ok(true)
    }
}
