//! 统一 API 错误码定义

use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::errors::GomarksError;

/// API 错误码枚举
///
/// 使用 serde_repr 序列化为数字，按千位分域：
/// - 0: 成功
/// - 1000-1099: 通用错误
/// - 3000-3099: 快捷方式错误
/// - 4000-4099: 后备搜索与历史错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum ErrorCode {
    // 成功
    Success = 0,

    // 通用错误 1000-1099
    BadRequest = 1000,
    NotFound = 1004,
    InternalServerError = 1005,
    ServiceUnavailable = 1030,

    // 快捷方式错误 3000-3099
    ShortcutNotFound = 3000,
    ShortcutAlreadyExists = 3001,
    ShortcutInvalid = 3002,
    ShortcutDatabaseError = 3005,

    // 后备搜索与历史错误 4000-4099
    FallbackInvalid = 4000,
    HistoryQueryFailed = 4001,
}

impl From<&GomarksError> for ErrorCode {
    fn from(err: &GomarksError) -> Self {
        match err {
            GomarksError::Validation(_) => ErrorCode::ShortcutInvalid,
            GomarksError::NotFound(_) => ErrorCode::ShortcutNotFound,
            GomarksError::Conflict(_) => ErrorCode::ShortcutAlreadyExists,
            GomarksError::DatabaseConnection(_) | GomarksError::DatabaseOperation(_) => {
                ErrorCode::ShortcutDatabaseError
            }
            _ => ErrorCode::InternalServerError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_number() {
        assert_eq!(
            serde_json::to_string(&ErrorCode::ShortcutAlreadyExists).unwrap(),
            "3001"
        );
    }

    #[test]
    fn test_from_error() {
        assert_eq!(
            ErrorCode::from(&GomarksError::shortcut_not_found("gh")),
            ErrorCode::ShortcutNotFound
        );
        assert_eq!(
            ErrorCode::from(&GomarksError::database_operation("locked")),
            ErrorCode::ShortcutDatabaseError
        );
        assert_eq!(
            ErrorCode::from(&GomarksError::config("bad")),
            ErrorCode::InternalServerError
        );
    }
}
