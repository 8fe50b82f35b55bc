//! Storage backend tests
//!
//! Tests for SeaOrmStorage using temporary SQLite databases.

use std::sync::Arc;

use gomarks::config::default_fallback_url;
use gomarks::errors::GomarksError;
use gomarks::resolver::ShortcutLookup;
use gomarks::storage::backend::{SeaOrmStorage, StorageOptions};
use gomarks::storage::{NewShortcut, ShortcutChanges, ShortcutStore};
use tempfile::TempDir;

/// 创建临时 SQLite 数据库的存储实例
async fn create_temp_storage(seed_examples: bool) -> (SeaOrmStorage, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let storage = SeaOrmStorage::new(&db_url, "sqlite", StorageOptions::default())
        .await
        .expect("Failed to create storage");
    storage
        .ensure_defaults(&default_fallback_url(), seed_examples)
        .await
        .expect("Failed to write defaults");

    (storage, temp_dir)
}

fn new_shortcut(keyword: &str, destination: &str, single_word: bool) -> NewShortcut {
    NewShortcut {
        keyword: keyword.to_string(),
        destination: destination.to_string(),
        single_word,
    }
}

#[tokio::test]
async fn test_first_run_seeds_examples_and_fallback() {
    let (storage, _dir) = create_temp_storage(true).await;

    let keywords: Vec<String> = storage
        .list_shortcuts()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.keyword)
        .collect();
    assert_eq!(keywords, vec!["b", "bb", "bbc"]);
    assert_eq!(
        storage.fallback_template().await.unwrap(),
        default_fallback_url()
    );
}

#[tokio::test]
async fn test_defaults_are_not_reapplied() {
    let (storage, _dir) = create_temp_storage(true).await;
    storage.delete_shortcut("b").await.unwrap();
    storage
        .set_fallback_template("https://search.test/?q={searchTerms}")
        .await
        .unwrap();

    let first_run = storage
        .ensure_defaults(&default_fallback_url(), true)
        .await
        .unwrap();
    assert!(!first_run);
    assert_eq!(storage.count_shortcuts().await.unwrap(), 2);
    assert_eq!(
        storage.fallback_template().await.unwrap(),
        "https://search.test/?q={searchTerms}"
    );
}

#[tokio::test]
async fn test_keyword_lookup_ignores_case() {
    let (storage, _dir) = create_temp_storage(false).await;
    storage
        .insert_shortcut(new_shortcut("GitHub", "https://github.com/%s", true))
        .await
        .unwrap();

    let found = storage.find_by_keyword("github").await.unwrap().unwrap();
    assert_eq!(found.keyword, "GitHub");
    assert!(found.single_word);
    assert_eq!(found.visit_count, 0);

    let err = storage
        .insert_shortcut(new_shortcut("GITHUB", "https://x.test", false))
        .await
        .unwrap_err();
    assert!(matches!(err, GomarksError::Conflict(_)));
}

#[tokio::test]
async fn test_update_rename_and_conflict() {
    let (storage, _dir) = create_temp_storage(true).await;
    storage.increment_visit_count("bbc").await.unwrap();

    let renamed = storage
        .update_shortcut(
            "BBC",
            ShortcutChanges {
                keyword: "news".into(),
                destination: "https://www.bbc.com/search?q=%s".into(),
                single_word: false,
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.keyword, "news");
    assert_eq!(renamed.visit_count, 1);
    assert!(storage.find_by_keyword("bbc").await.unwrap().is_none());

    let err = storage
        .update_shortcut(
            "news",
            ShortcutChanges {
                keyword: "BB".into(),
                destination: "https://x.test".into(),
                single_word: false,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, GomarksError::Conflict(_)));

    let err = storage
        .update_shortcut(
            "missing",
            ShortcutChanges {
                keyword: "missing".into(),
                destination: "https://x.test".into(),
                single_word: false,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, GomarksError::NotFound(_)));
}

#[tokio::test]
async fn test_visit_counts() {
    let (storage, _dir) = create_temp_storage(true).await;
    for _ in 0..3 {
        storage.increment_visit_count("B").await.unwrap();
    }
    storage.increment_visit_count("bb").await.unwrap();
    // 不存在的关键字静默忽略
    storage.increment_visit_count("nope").await.unwrap();

    assert_eq!(
        storage.find_by_keyword("b").await.unwrap().unwrap().visit_count,
        3
    );

    assert!(storage.reset_visit_count("b").await.unwrap());
    assert!(!storage.reset_visit_count("nope").await.unwrap());
    assert_eq!(
        storage.find_by_keyword("b").await.unwrap().unwrap().visit_count,
        0
    );

    assert_eq!(storage.reset_all_visit_counts().await.unwrap(), 3);
    assert_eq!(
        storage.find_by_keyword("bb").await.unwrap().unwrap().visit_count,
        0
    );
}

#[tokio::test]
async fn test_concurrent_increments_on_sqlite() {
    let (storage, _dir) = create_temp_storage(true).await;
    let storage = Arc::new(storage);

    let mut handles = Vec::new();
    for _ in 0..4 {
        let storage = storage.clone();
        handles.push(tokio::spawn(async move {
            for _ in 0..10 {
                storage.increment_visit_count("bbc").await.unwrap();
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(
        storage
            .find_by_keyword("bbc")
            .await
            .unwrap()
            .unwrap()
            .visit_count,
        40
    );
}

#[tokio::test]
async fn test_query_log_order_and_clear() {
    let (storage, _dir) = create_temp_storage(false).await;
    for q in ["first", "second", "  third  "] {
        storage.append_query_log(q).await.unwrap();
    }

    let recent: Vec<String> = storage
        .recent_queries(2)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.raw_query)
        .collect();
    assert_eq!(recent, vec!["  third  ", "second"]);

    assert_eq!(storage.clear_query_log().await.unwrap(), 3);
    assert!(storage.recent_queries(10).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_reports_missing() {
    let (storage, _dir) = create_temp_storage(true).await;
    assert!(storage.delete_shortcut("BB").await.unwrap());
    assert!(!storage.delete_shortcut("bb").await.unwrap());
    assert_eq!(storage.backend_name(), "sqlite");
    storage.ping().await.unwrap();
}
