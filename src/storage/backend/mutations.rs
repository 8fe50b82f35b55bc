//! Mutation operations for SeaOrmStorage
//!
//! This module contains all write database operations.

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ExprTrait, QueryFilter};
use tracing::{debug, info};

use super::converters::{model_to_shortcut, new_shortcut_to_active_model};
use super::seed::FALLBACK_SETTING_KEY;
use super::{SeaOrmStorage, map_db_err};
use crate::errors::{GomarksError, Result};
use crate::storage::{NewShortcut, Shortcut, ShortcutChanges};

use migration::entities::{query_log, setting, shortcut};

impl SeaOrmStorage {
    pub async fn insert(&self, new: NewShortcut) -> Result<Shortcut> {
        if self.get_shortcut(&new.keyword).await?.is_some() {
            return Err(GomarksError::shortcut_exists(&new.keyword));
        }

        let db = &self.db;
        let active = new_shortcut_to_active_model(&new, Utc::now());

        let model = self
            .retry
            .run(&format!("insert({})", new.keyword), || {
                let active = active.clone();
                async move { active.insert(db).await }
            })
            .await
            .map_err(|e| map_db_err("创建快捷方式", &new.keyword, e))?;

        info!("Shortcut created: {} -> {}", model.keyword, model.destination);
        Ok(model_to_shortcut(model))
    }

    /// 修改快捷方式，重命名时保留 id 和访问次数
    pub async fn update(&self, keyword: &str, changes: ShortcutChanges) -> Result<Shortcut> {
        let db = &self.db;
        let old_lower = keyword.to_lowercase();
        let new_lower = changes.keyword.to_lowercase();

        let existing = shortcut::Entity::find()
            .filter(shortcut::Column::KeywordLower.eq(old_lower.as_str()))
            .one(db)
            .await
            .map_err(|e| GomarksError::database_operation(format!("查询快捷方式失败: {}", e)))?
            .ok_or_else(|| GomarksError::shortcut_not_found(keyword))?;

        if new_lower != old_lower && self.get_shortcut(&changes.keyword).await?.is_some() {
            return Err(GomarksError::shortcut_exists(&changes.keyword));
        }

        let mut active: shortcut::ActiveModel = existing.into();
        active.keyword = Set(changes.keyword.clone());
        active.keyword_lower = Set(new_lower);
        active.destination = Set(changes.destination.clone());
        active.single_word = Set(changes.single_word);
        active.updated_at = Set(Utc::now());

        let model = self
            .retry
            .run(&format!("update({})", keyword), || {
                let active = active.clone();
                async move { active.update(db).await }
            })
            .await
            .map_err(|e| map_db_err("修改快捷方式", &changes.keyword, e))?;

        info!("Shortcut updated: {} -> {}", keyword, model.keyword);
        Ok(model_to_shortcut(model))
    }

    pub async fn remove(&self, keyword: &str) -> Result<bool> {
        let db = &self.db;
        let lower = keyword.to_lowercase();

        let result = self
            .retry
            .run(&format!("remove({})", keyword), || async {
                shortcut::Entity::delete_many()
                    .filter(shortcut::Column::KeywordLower.eq(lower.as_str()))
                    .exec(db)
                    .await
            })
            .await
            .map_err(|e| GomarksError::database_operation(format!("删除快捷方式失败: {}", e)))?;

        if result.rows_affected > 0 {
            info!("Shortcut deleted: {}", keyword);
        }
        Ok(result.rows_affected > 0)
    }

    /// 单条 UPDATE 完成自增，并发请求不会丢失计数
    pub async fn increment_visits(&self, keyword: &str) -> Result<()> {
        let db = &self.db;
        let lower = keyword.to_lowercase();

        self.retry
            .run(&format!("increment_visits({})", keyword), || async {
                shortcut::Entity::update_many()
                    .col_expr(
                        shortcut::Column::VisitCount,
                        Expr::col(shortcut::Column::VisitCount).add(Expr::val(1i64)),
                    )
                    .filter(shortcut::Column::KeywordLower.eq(lower.as_str()))
                    .exec(db)
                    .await
            })
            .await
            .map_err(|e| GomarksError::database_operation(format!("更新访问次数失败: {}", e)))?;

        debug!("Visit count incremented: {}", keyword);
        Ok(())
    }

    pub async fn reset_visits(&self, keyword: &str) -> Result<bool> {
        let lower = keyword.to_lowercase();
        let result = shortcut::Entity::update_many()
            .col_expr(shortcut::Column::VisitCount, Expr::value(0i64))
            .filter(shortcut::Column::KeywordLower.eq(lower.as_str()))
            .exec(&self.db)
            .await
            .map_err(|e| GomarksError::database_operation(format!("重置访问次数失败: {}", e)))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn reset_all_visits(&self) -> Result<u64> {
        let result = shortcut::Entity::update_many()
            .col_expr(shortcut::Column::VisitCount, Expr::value(0i64))
            .exec(&self.db)
            .await
            .map_err(|e| GomarksError::database_operation(format!("重置访问次数失败: {}", e)))?;

        info!("Visit counts reset for {} shortcuts", result.rows_affected);
        Ok(result.rows_affected)
    }

    /// 写入后备模板（存在则覆盖）
    pub async fn save_fallback(&self, template: &str) -> Result<()> {
        let db = &self.db;
        let active = setting::ActiveModel {
            key: Set(FALLBACK_SETTING_KEY.to_string()),
            value: Set(template.to_string()),
            updated_at: Set(Utc::now()),
        };

        self.retry
            .run("save_fallback", || {
                let active = active.clone();
                async move {
                    setting::Entity::insert(active)
                        .on_conflict(
                            OnConflict::column(setting::Column::Key)
                                .update_columns([setting::Column::Value, setting::Column::UpdatedAt])
                                .to_owned(),
                        )
                        .exec(db)
                        .await
                }
            })
            .await
            .map_err(|e| GomarksError::database_operation(format!("保存后备模板失败: {}", e)))?;

        info!("Fallback URL set to {}", template);
        Ok(())
    }

    pub async fn append_log(&self, raw_query: &str) -> Result<()> {
        let db = &self.db;
        let active = query_log::ActiveModel {
            raw_query: Set(raw_query.to_string()),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        self.retry
            .run("append_log", || {
                let active = active.clone();
                async move { query_log::Entity::insert(active).exec(db).await }
            })
            .await
            .map_err(|e| GomarksError::database_operation(format!("写入查询历史失败: {}", e)))?;

        Ok(())
    }

    pub async fn clear_log(&self) -> Result<u64> {
        let result = query_log::Entity::delete_many()
            .exec(&self.db)
            .await
            .map_err(|e| GomarksError::database_operation(format!("清空查询历史失败: {}", e)))?;

        info!("Query history cleared ({} entries)", result.rows_affected);
        Ok(result.rows_affected)
    }
}
