//! 解析请求的副作用编排
//!
//! 顺序固定：解析查询 → 写查询日志 → 解析 → 命中时计数 +1。

use std::sync::Arc;

use tracing::debug;

use crate::resolver::{self, ParsedQuery, Resolution, ResolveError};
use crate::storage::ShortcutStore;

pub struct ResolveService {
    store: Arc<dyn ShortcutStore>,
}

impl ResolveService {
    pub fn new(store: Arc<dyn ShortcutStore>) -> Self {
        Self { store }
    }

    /// 解析一条查询并执行副作用
    ///
    /// 空查询直接返回 `EmptyQuery`，不写日志。其余情况日志恰好写一次，
    /// 只有 `Direct` 结果会增加访问次数。
    pub async fn resolve(&self, raw: &str) -> Result<Resolution, ResolveError> {
        let query = ParsedQuery::parse(raw)?;

        self.store.append_query_log(raw).await?;

        let resolution = resolver::resolve(&query, self.store.as_ref()).await?;

        if let Some(keyword) = resolution.visited_keyword() {
            self.store.increment_visit_count(keyword).await?;
        }

        debug!(
            "Resolved '{}' -> {} ({})",
            query.trimmed(),
            resolution.url(),
            if resolution.is_fallback() {
                "fallback"
            } else {
                "direct"
            }
        );
        Ok(resolution)
    }

    /// 只解析，不写日志也不计数
    pub async fn preview(&self, raw: &str) -> Result<Resolution, ResolveError> {
        let query = ParsedQuery::parse(raw)?;
        resolver::resolve(&query, self.store.as_ref()).await
    }
}
