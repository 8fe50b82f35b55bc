//! 内存存储
//!
//! 与 SeaOrmStorage 行为一致的并发内存实现，不落盘。

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use parking_lot::{Mutex, RwLock};

use super::backend::seed::example_shortcuts;
use super::models::{NewShortcut, QueryLogEntry, Shortcut, ShortcutChanges};
use super::traits::ShortcutStore;
use crate::errors::{GomarksError, Result};
use crate::resolver::ShortcutLookup;

pub struct MemoryStore {
    /// key 为小写关键字
    shortcuts: DashMap<String, Shortcut>,
    fallback: RwLock<String>,
    query_log: Mutex<Vec<QueryLogEntry>>,
    next_shortcut_id: AtomicI64,
    next_log_id: AtomicI64,
    /// 串行化插入、重命名、删除，计数更新不经过这把锁
    write_lock: Mutex<()>,
}

impl MemoryStore {
    pub fn new(fallback_template: impl Into<String>) -> Self {
        Self {
            shortcuts: DashMap::new(),
            fallback: RwLock::new(fallback_template.into()),
            query_log: Mutex::new(Vec::new()),
            next_shortcut_id: AtomicI64::new(1),
            next_log_id: AtomicI64::new(1),
            write_lock: Mutex::new(()),
        }
    }

    /// 带默认后备模板和示例快捷方式
    pub fn with_examples() -> Self {
        let store = Self::new(crate::config::default_fallback_url());
        for example in example_shortcuts() {
            store.insert_unchecked(example);
        }
        store
    }

    fn insert_unchecked(&self, new: NewShortcut) -> Shortcut {
        let now = Utc::now();
        let shortcut = Shortcut {
            id: self.next_shortcut_id.fetch_add(1, Ordering::Relaxed),
            keyword: new.keyword,
            destination: new.destination,
            single_word: new.single_word,
            visit_count: 0,
            created_at: now,
            updated_at: now,
        };
        self.shortcuts
            .insert(shortcut.keyword.to_lowercase(), shortcut.clone());
        shortcut
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(crate::config::default_fallback_url())
    }
}

#[async_trait]
impl ShortcutLookup for MemoryStore {
    async fn find_by_keyword(&self, keyword: &str) -> Result<Option<Shortcut>> {
        Ok(self
            .shortcuts
            .get(&keyword.to_lowercase())
            .map(|entry| entry.value().clone()))
    }

    async fn fallback_template(&self) -> Result<String> {
        Ok(self.fallback.read().clone())
    }
}

#[async_trait]
impl ShortcutStore for MemoryStore {
    async fn increment_visit_count(&self, keyword: &str) -> Result<()> {
        if let Some(mut entry) = self.shortcuts.get_mut(&keyword.to_lowercase()) {
            entry.visit_count += 1;
        }
        Ok(())
    }

    async fn append_query_log(&self, raw_query: &str) -> Result<()> {
        let entry = QueryLogEntry {
            id: self.next_log_id.fetch_add(1, Ordering::Relaxed),
            raw_query: raw_query.to_string(),
            created_at: Utc::now(),
        };
        self.query_log.lock().push(entry);
        Ok(())
    }

    async fn list_shortcuts(&self) -> Result<Vec<Shortcut>> {
        let mut list: Vec<(String, Shortcut)> = self
            .shortcuts
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        list.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(list.into_iter().map(|(_, shortcut)| shortcut).collect())
    }

    async fn count_shortcuts(&self) -> Result<u64> {
        Ok(self.shortcuts.len() as u64)
    }

    async fn insert_shortcut(&self, shortcut: NewShortcut) -> Result<Shortcut> {
        let _guard = self.write_lock.lock();
        if self.shortcuts.contains_key(&shortcut.keyword.to_lowercase()) {
            return Err(GomarksError::shortcut_exists(&shortcut.keyword));
        }
        Ok(self.insert_unchecked(shortcut))
    }

    async fn update_shortcut(&self, keyword: &str, changes: ShortcutChanges) -> Result<Shortcut> {
        let _guard = self.write_lock.lock();
        let old_key = keyword.to_lowercase();
        let new_key = changes.keyword.to_lowercase();

        let existing = self
            .shortcuts
            .get(&old_key)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| GomarksError::shortcut_not_found(keyword))?;

        if new_key != old_key && self.shortcuts.contains_key(&new_key) {
            return Err(GomarksError::shortcut_exists(&changes.keyword));
        }

        let updated = Shortcut {
            keyword: changes.keyword,
            destination: changes.destination,
            single_word: changes.single_word,
            updated_at: Utc::now(),
            ..existing
        };

        // 计数可能在克隆之后被并发更新，以移除时的值为准
        let visit_count = match self.shortcuts.remove(&old_key) {
            Some((_, current)) => current.visit_count,
            None => updated.visit_count,
        };
        let updated = Shortcut {
            visit_count,
            ..updated
        };
        self.shortcuts.insert(new_key, updated.clone());
        Ok(updated)
    }

    async fn delete_shortcut(&self, keyword: &str) -> Result<bool> {
        let _guard = self.write_lock.lock();
        Ok(self.shortcuts.remove(&keyword.to_lowercase()).is_some())
    }

    async fn reset_visit_count(&self, keyword: &str) -> Result<bool> {
        match self.shortcuts.get_mut(&keyword.to_lowercase()) {
            Some(mut entry) => {
                entry.visit_count = 0;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn reset_all_visit_counts(&self) -> Result<u64> {
        let mut affected = 0;
        for mut entry in self.shortcuts.iter_mut() {
            entry.visit_count = 0;
            affected += 1;
        }
        Ok(affected)
    }

    async fn set_fallback_template(&self, template: &str) -> Result<()> {
        *self.fallback.write() = template.to_string();
        Ok(())
    }

    async fn recent_queries(&self, limit: u64) -> Result<Vec<QueryLogEntry>> {
        let log = self.query_log.lock();
        Ok(log.iter().rev().take(limit as usize).cloned().collect())
    }

    async fn clear_query_log(&self) -> Result<u64> {
        let mut log = self.query_log.lock();
        let removed = log.len() as u64;
        log.clear();
        Ok(removed)
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_shortcut(keyword: &str, destination: &str) -> NewShortcut {
        NewShortcut {
            keyword: keyword.to_string(),
            destination: destination.to_string(),
            single_word: false,
        }
    }

    #[tokio::test]
    async fn test_lookup_is_case_insensitive() {
        let store = MemoryStore::default();
        store
            .insert_shortcut(new_shortcut("GH", "https://github.com/%s"))
            .await
            .unwrap();

        let found = store.find_by_keyword("gh").await.unwrap().unwrap();
        assert_eq!(found.keyword, "GH");
        assert!(store.find_by_keyword("gl").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_conflict_ignores_case() {
        let store = MemoryStore::default();
        store
            .insert_shortcut(new_shortcut("gh", "https://github.com"))
            .await
            .unwrap();
        let err = store
            .insert_shortcut(new_shortcut("GH", "https://gitlab.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, GomarksError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_rename_keeps_id_and_count() {
        let store = MemoryStore::default();
        let created = store
            .insert_shortcut(new_shortcut("gh", "https://github.com"))
            .await
            .unwrap();
        store.increment_visit_count("gh").await.unwrap();
        store.increment_visit_count("GH").await.unwrap();

        let renamed = store
            .update_shortcut(
                "gh",
                ShortcutChanges {
                    keyword: "hub".into(),
                    destination: "https://github.com/%s".into(),
                    single_word: true,
                },
            )
            .await
            .unwrap();

        assert_eq!(renamed.id, created.id);
        assert_eq!(renamed.visit_count, 2);
        assert!(store.find_by_keyword("gh").await.unwrap().is_none());
        assert!(store.find_by_keyword("hub").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_concurrent_increments_are_not_lost() {
        let store = Arc::new(MemoryStore::default());
        store
            .insert_shortcut(new_shortcut("b", "https://www.bbc.com"))
            .await
            .unwrap();

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                for _ in 0..50 {
                    store.increment_visit_count("b").await.unwrap();
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let b = store.find_by_keyword("b").await.unwrap().unwrap();
        assert_eq!(b.visit_count, 400);
    }

    #[tokio::test]
    async fn test_recent_queries_newest_first() {
        let store = MemoryStore::default();
        for q in ["one", "two", "three"] {
            store.append_query_log(q).await.unwrap();
        }
        let recent: Vec<String> = store
            .recent_queries(2)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.raw_query)
            .collect();
        assert_eq!(recent, vec!["three", "two"]);

        assert_eq!(store.clear_query_log().await.unwrap(), 3);
        assert!(store.recent_queries(10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_with_examples() {
        let store = MemoryStore::with_examples();
        let keywords: Vec<String> = store
            .list_shortcuts()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.keyword)
            .collect();
        assert_eq!(keywords, vec!["b", "bb", "bbc"]);
        assert!(store.fallback_template().await.unwrap().contains("{searchTerms}"));
    }
}
