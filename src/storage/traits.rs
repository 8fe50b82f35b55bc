use async_trait::async_trait;

use super::models::{NewShortcut, QueryLogEntry, Shortcut, ShortcutChanges};
use crate::errors::Result;
use crate::resolver::ShortcutLookup;

/// 完整的存储能力：解析所需的只读查找之外，还包括计数、历史和管理操作
///
/// 所有关键字参数都按大小写不敏感处理。
#[async_trait]
pub trait ShortcutStore: ShortcutLookup {
    /// 原子地 `visit_count = visit_count + 1`，关键字不存在时静默忽略
    async fn increment_visit_count(&self, keyword: &str) -> Result<()>;

    async fn append_query_log(&self, raw_query: &str) -> Result<()>;

    /// 按关键字升序（大小写不敏感）
    async fn list_shortcuts(&self) -> Result<Vec<Shortcut>>;

    async fn count_shortcuts(&self) -> Result<u64>;

    /// 关键字已存在时返回 `Conflict`
    async fn insert_shortcut(&self, shortcut: NewShortcut) -> Result<Shortcut>;

    /// 不存在返回 `NotFound`，重命名撞车返回 `Conflict`
    async fn update_shortcut(&self, keyword: &str, changes: ShortcutChanges) -> Result<Shortcut>;

    /// 返回是否删除了记录
    async fn delete_shortcut(&self, keyword: &str) -> Result<bool>;

    /// 返回是否找到记录
    async fn reset_visit_count(&self, keyword: &str) -> Result<bool>;

    /// 返回受影响的行数
    async fn reset_all_visit_counts(&self) -> Result<u64>;

    async fn set_fallback_template(&self, template: &str) -> Result<()>;

    /// 最新的在前
    async fn recent_queries(&self, limit: u64) -> Result<Vec<QueryLogEntry>>;

    /// 返回删除的条数
    async fn clear_query_log(&self) -> Result<u64>;

    fn backend_name(&self) -> &str;
}
