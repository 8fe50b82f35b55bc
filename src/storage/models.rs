use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 关键字到目标 URL 模板的映射
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    pub id: i64,
    /// 保留用户输入时的大小写，用于展示
    pub keyword: String,
    /// 目标模板，最多一个 `%s`
    pub destination: String,
    /// 为 true 时占位符只接受一个词，多于一个词走后备搜索
    pub single_word: bool,
    #[serde(default)]
    pub visit_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Shortcut {
    pub fn has_placeholder(&self) -> bool {
        crate::resolver::template::has_placeholder(&self.destination)
    }
}

/// 新建快捷方式（已通过校验）
#[derive(Debug, Clone)]
pub struct NewShortcut {
    pub keyword: String,
    pub destination: String,
    pub single_word: bool,
}

/// 修改快捷方式（已通过校验）
///
/// `keyword` 与原关键字不同即为重命名，id 和访问次数保持不变。
#[derive(Debug, Clone)]
pub struct ShortcutChanges {
    pub keyword: String,
    pub destination: String,
    pub single_word: bool,
}

/// 查询历史记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryLogEntry {
    pub id: i64,
    pub raw_query: String,
    pub created_at: DateTime<Utc>,
}
