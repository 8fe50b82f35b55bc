//! Query operations for SeaOrmStorage
//!
//! This module contains all read-only database operations.

use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};
use tracing::error;

use super::SeaOrmStorage;
use super::converters::{model_to_query_log, model_to_shortcut};
use super::seed::FALLBACK_SETTING_KEY;
use crate::errors::{GomarksError, Result};
use crate::storage::{QueryLogEntry, Shortcut};

use migration::entities::{query_log, setting, shortcut};

impl SeaOrmStorage {
    /// 大小写不敏感地查找快捷方式
    pub async fn get_shortcut(&self, keyword: &str) -> Result<Option<Shortcut>> {
        let db = &self.db;
        let lower = keyword.to_lowercase();

        let result = self
            .retry
            .run(&format!("get_shortcut({})", keyword), || async {
                shortcut::Entity::find()
                    .filter(shortcut::Column::KeywordLower.eq(lower.as_str()))
                    .one(db)
                    .await
            })
            .await;

        match result {
            Ok(model) => Ok(model.map(model_to_shortcut)),
            Err(e) => {
                error!("查询快捷方式失败（重试后仍失败）: {}", e);
                Err(GomarksError::database_operation(format!(
                    "查询快捷方式 '{}' 失败: {}",
                    keyword, e
                )))
            }
        }
    }

    pub async fn load_fallback(&self) -> Result<String> {
        let db = &self.db;

        let model = self
            .retry
            .run("load_fallback", || async {
                setting::Entity::find_by_id(FALLBACK_SETTING_KEY)
                    .one(db)
                    .await
            })
            .await
            .map_err(|e| GomarksError::database_operation(format!("读取后备模板失败: {}", e)))?;

        model
            .map(|m| m.value)
            .ok_or_else(|| GomarksError::not_found("Fallback URL setting is missing"))
    }

    /// 按关键字升序加载全部快捷方式
    pub async fn load_shortcuts(&self) -> Result<Vec<Shortcut>> {
        let models = shortcut::Entity::find()
            .order_by_asc(shortcut::Column::KeywordLower)
            .all(&self.db)
            .await
            .map_err(|e| GomarksError::database_operation(format!("加载快捷方式失败: {}", e)))?;

        Ok(models.into_iter().map(model_to_shortcut).collect())
    }

    pub async fn count(&self) -> Result<u64> {
        shortcut::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| GomarksError::database_operation(format!("统计快捷方式失败: {}", e)))
    }

    /// 最近的查询记录，最新的在前
    pub async fn load_recent_queries(&self, limit: u64) -> Result<Vec<QueryLogEntry>> {
        let models = query_log::Entity::find()
            .order_by_desc(query_log::Column::CreatedAt)
            .order_by_desc(query_log::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| GomarksError::database_operation(format!("加载查询历史失败: {}", e)))?;

        Ok(models.into_iter().map(model_to_query_log).collect())
    }
}
