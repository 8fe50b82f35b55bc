//! Admin API 类型定义

use serde::{Deserialize, Serialize};

use crate::storage::{QueryLogEntry, Shortcut};

/// 统一的 JSON 响应包装
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// POST /shortcuts 请求体
#[derive(Deserialize, Clone, Debug)]
pub struct PostShortcut {
    pub keyword: String,
    pub destination: String,
    #[serde(default)]
    pub single_word: bool,
}

/// PUT /shortcuts/{keyword} 请求体，`keyword` 为新关键字（可选）
#[derive(Deserialize, Clone, Debug)]
pub struct PutShortcut {
    pub keyword: Option<String>,
    pub destination: String,
    #[serde(default)]
    pub single_word: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ShortcutResponse {
    pub id: i64,
    pub keyword: String,
    pub destination: String,
    pub single_word: bool,
    pub has_placeholder: bool,
    pub visit_count: u64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Shortcut> for ShortcutResponse {
    fn from(shortcut: Shortcut) -> Self {
        Self {
            has_placeholder: shortcut.has_placeholder(),
            id: shortcut.id,
            keyword: shortcut.keyword,
            destination: shortcut.destination,
            single_word: shortcut.single_word,
            visit_count: shortcut.visit_count,
            created_at: shortcut.created_at.to_rfc3339(),
            updated_at: shortcut.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ShortcutListResponse {
    pub total: usize,
    pub shortcuts: Vec<ShortcutResponse>,
}

/// 后备搜索模板，读写共用
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FallbackBody {
    pub url: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct HistoryQuery {
    pub limit: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct QueryLogResponse {
    pub id: i64,
    pub query: String,
    pub created_at: String,
}

impl From<QueryLogEntry> for QueryLogResponse {
    fn from(entry: QueryLogEntry) -> Self {
        Self {
            id: entry.id,
            query: entry.raw_query,
            created_at: entry.created_at.to_rfc3339(),
        }
    }
}

/// 批量操作的影响条数
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AffectedResponse {
    pub affected: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthStorageCheck {
    pub status: String,
    pub backend: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortcuts_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthChecks {
    pub storage: HealthStorageCheck,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime: u64,
    pub checks: HealthChecks,
    pub response_time_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_shortcut_response_reports_placeholder() {
        let now = Utc::now();
        let response = ShortcutResponse::from(Shortcut {
            id: 7,
            keyword: "bb".into(),
            destination: "https://www.bbc.com/news/world/%s".into(),
            single_word: true,
            visit_count: 3,
            created_at: now,
            updated_at: now,
        });
        assert!(response.has_placeholder);
        assert_eq!(response.visit_count, 3);
        assert_eq!(response.created_at, now.to_rfc3339());
    }

    #[test]
    fn test_put_shortcut_defaults_single_word() {
        let body: PutShortcut =
            serde_json::from_str(r#"{"destination":"https://x.test"}"#).unwrap();
        assert!(body.keyword.is_none());
        assert!(!body.single_word);
    }

    #[test]
    fn test_api_response_omits_empty_data() {
        let json = serde_json::to_value(ApiResponse::<()> {
            code: 1000,
            message: "bad".into(),
            data: None,
        })
        .unwrap();
        assert!(json.get("data").is_none());
        assert_eq!(json["code"], 1000);
    }
}
