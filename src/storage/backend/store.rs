use async_trait::async_trait;

use super::SeaOrmStorage;
use crate::errors::Result;
use crate::resolver::ShortcutLookup;
use crate::storage::{NewShortcut, QueryLogEntry, Shortcut, ShortcutChanges, ShortcutStore};

#[async_trait]
impl ShortcutLookup for SeaOrmStorage {
    async fn find_by_keyword(&self, keyword: &str) -> Result<Option<Shortcut>> {
        self.get_shortcut(keyword).await
    }

    async fn fallback_template(&self) -> Result<String> {
        self.load_fallback().await
    }
}

#[async_trait]
impl ShortcutStore for SeaOrmStorage {
    async fn increment_visit_count(&self, keyword: &str) -> Result<()> {
        self.increment_visits(keyword).await
    }

    async fn append_query_log(&self, raw_query: &str) -> Result<()> {
        self.append_log(raw_query).await
    }

    async fn list_shortcuts(&self) -> Result<Vec<Shortcut>> {
        self.load_shortcuts().await
    }

    async fn count_shortcuts(&self) -> Result<u64> {
        self.count().await
    }

    async fn insert_shortcut(&self, shortcut: NewShortcut) -> Result<Shortcut> {
        self.insert(shortcut).await
    }

    async fn update_shortcut(&self, keyword: &str, changes: ShortcutChanges) -> Result<Shortcut> {
        self.update(keyword, changes).await
    }

    async fn delete_shortcut(&self, keyword: &str) -> Result<bool> {
        self.remove(keyword).await
    }

    async fn reset_visit_count(&self, keyword: &str) -> Result<bool> {
        self.reset_visits(keyword).await
    }

    async fn reset_all_visit_counts(&self) -> Result<u64> {
        self.reset_all_visits().await
    }

    async fn set_fallback_template(&self, template: &str) -> Result<()> {
        self.save_fallback(template).await
    }

    async fn recent_queries(&self, limit: u64) -> Result<Vec<QueryLogEntry>> {
        self.load_recent_queries(limit).await
    }

    async fn clear_query_log(&self) -> Result<u64> {
        self.clear_log().await
    }

    fn backend_name(&self) -> &str {
        &self.backend_name
    }
}
