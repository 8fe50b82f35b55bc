//! Shortcut management service
//!
//! Shared business logic for the admin API and CLI commands. Every write
//! goes through validation before it reaches the store.

use std::sync::Arc;

use tracing::info;

use crate::errors::{GomarksError, Result};
use crate::resolver::ShortcutLookup;
use crate::storage::{NewShortcut, QueryLogEntry, Shortcut, ShortcutChanges, ShortcutStore};

use super::validation::{
    normalize_single_word, validate_destination, validate_fallback, validate_keyword,
};

/// 查询历史一次最多返回的条数
pub const MAX_HISTORY_LIMIT: u64 = 1000;

// ============ Request DTOs ============

/// Request to create a new shortcut
#[derive(Debug, Clone)]
pub struct CreateShortcutRequest {
    pub keyword: String,
    pub destination: String,
    pub single_word: bool,
}

/// Request to update an existing shortcut
#[derive(Debug, Clone)]
pub struct UpdateShortcutRequest {
    /// New keyword (None = keep current)
    pub rename: Option<String>,
    pub destination: String,
    pub single_word: bool,
}

// ============ ShortcutService Implementation ============

pub struct ShortcutService {
    store: Arc<dyn ShortcutStore>,
    default_history_limit: u64,
}

impl ShortcutService {
    pub fn new(store: Arc<dyn ShortcutStore>, default_history_limit: u64) -> Self {
        Self {
            store,
            default_history_limit: default_history_limit.clamp(1, MAX_HISTORY_LIMIT),
        }
    }

    pub fn backend_name(&self) -> &str {
        self.store.backend_name()
    }

    pub async fn list(&self) -> Result<Vec<Shortcut>> {
        self.store.list_shortcuts().await
    }

    pub async fn count(&self) -> Result<u64> {
        self.store.count_shortcuts().await
    }

    pub async fn get(&self, keyword: &str) -> Result<Shortcut> {
        self.store
            .find_by_keyword(keyword.trim())
            .await?
            .ok_or_else(|| GomarksError::shortcut_not_found(keyword.trim()))
    }

    pub async fn create(&self, req: CreateShortcutRequest) -> Result<Shortcut> {
        let keyword = req.keyword.trim();
        let destination = req.destination.trim();
        validate_keyword(keyword)?;
        validate_destination(destination)?;

        let shortcut = self
            .store
            .insert_shortcut(NewShortcut {
                keyword: keyword.to_string(),
                destination: destination.to_string(),
                single_word: normalize_single_word(destination, req.single_word),
            })
            .await?;

        info!(
            "ShortcutService: created '{}' -> '{}'",
            shortcut.keyword, shortcut.destination
        );
        Ok(shortcut)
    }

    /// 修改快捷方式，`rename` 为新关键字
    pub async fn update(&self, keyword: &str, req: UpdateShortcutRequest) -> Result<Shortcut> {
        let keyword = keyword.trim();
        let new_keyword = req
            .rename
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .unwrap_or(keyword);
        let destination = req.destination.trim();

        validate_keyword(new_keyword)?;
        validate_destination(destination)?;

        let shortcut = self
            .store
            .update_shortcut(
                keyword,
                ShortcutChanges {
                    keyword: new_keyword.to_string(),
                    destination: destination.to_string(),
                    single_word: normalize_single_word(destination, req.single_word),
                },
            )
            .await?;

        info!("ShortcutService: updated '{}'", shortcut.keyword);
        Ok(shortcut)
    }

    pub async fn delete(&self, keyword: &str) -> Result<()> {
        let keyword = keyword.trim();
        if !self.store.delete_shortcut(keyword).await? {
            return Err(GomarksError::shortcut_not_found(keyword));
        }
        info!("ShortcutService: deleted '{}'", keyword);
        Ok(())
    }

    pub async fn reset_visits(&self, keyword: &str) -> Result<()> {
        let keyword = keyword.trim();
        if !self.store.reset_visit_count(keyword).await? {
            return Err(GomarksError::shortcut_not_found(keyword));
        }
        info!("ShortcutService: reset visits of '{}'", keyword);
        Ok(())
    }

    /// 返回受影响的快捷方式数量
    pub async fn reset_all_visits(&self) -> Result<u64> {
        self.store.reset_all_visit_counts().await
    }

    pub async fn fallback(&self) -> Result<String> {
        self.store.fallback_template().await
    }

    pub async fn set_fallback(&self, template: &str) -> Result<String> {
        let template = template.trim();
        validate_fallback(template)?;
        self.store.set_fallback_template(template).await?;
        Ok(template.to_string())
    }

    /// 最近的查询，`None` 使用默认条数
    pub async fn history(&self, limit: Option<u64>) -> Result<Vec<QueryLogEntry>> {
        let limit = limit
            .unwrap_or(self.default_history_limit)
            .clamp(1, MAX_HISTORY_LIMIT);
        self.store.recent_queries(limit).await
    }

    /// 返回删除的条数
    pub async fn clear_history(&self) -> Result<u64> {
        self.store.clear_query_log().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn service() -> ShortcutService {
        ShortcutService::new(Arc::new(MemoryStore::with_examples()), 30)
    }

    fn create(keyword: &str, destination: &str, single_word: bool) -> CreateShortcutRequest {
        CreateShortcutRequest {
            keyword: keyword.to_string(),
            destination: destination.to_string(),
            single_word,
        }
    }

    #[tokio::test]
    async fn test_create_trims_and_normalizes() {
        let service = service();
        let created = service
            .create(create("  gh ", " https://github.com ", true))
            .await
            .unwrap();
        assert_eq!(created.keyword, "gh");
        assert_eq!(created.destination, "https://github.com");
        assert!(!created.single_word);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicates_and_bad_templates() {
        let service = service();
        assert!(matches!(
            service.create(create("BB", "https://x.test", false)).await,
            Err(GomarksError::Conflict(_))
        ));
        assert!(matches!(
            service
                .create(create("two", "https://x.test/%s/%s", false))
                .await,
            Err(GomarksError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let service = service();
        let err = service
            .update(
                "nope",
                UpdateShortcutRequest {
                    rename: None,
                    destination: "https://x.test".to_string(),
                    single_word: false,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, GomarksError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_and_reset_unknown_keyword() {
        let service = service();
        assert!(matches!(
            service.delete("nope").await,
            Err(GomarksError::NotFound(_))
        ));
        assert!(matches!(
            service.reset_visits("nope").await,
            Err(GomarksError::NotFound(_))
        ));
        assert!(service.delete("B").await.is_ok());
        assert_eq!(service.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_set_fallback_validates() {
        let service = service();
        assert!(service.set_fallback("https://s.test/?q=").await.is_err());
        let saved = service
            .set_fallback(" https://s.test/?q={searchTerms} ")
            .await
            .unwrap();
        assert_eq!(saved, "https://s.test/?q={searchTerms}");
        assert_eq!(service.fallback().await.unwrap(), saved);
    }

    #[tokio::test]
    async fn test_history_limit_is_clamped() {
        let service = service();
        assert!(service.history(Some(0)).await.unwrap().is_empty());
        assert!(service.history(None).await.unwrap().is_empty());
    }
}
