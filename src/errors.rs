use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone)]
pub enum GomarksError {
    Config(String),
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    FileOperation(String),
    Validation(String),
    NotFound(String),
    Conflict(String),
    Serialization(String),
}

impl GomarksError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            GomarksError::Config(_) => "E001",
            GomarksError::DatabaseConfig(_) => "E002",
            GomarksError::DatabaseConnection(_) => "E003",
            GomarksError::DatabaseOperation(_) => "E004",
            GomarksError::FileOperation(_) => "E005",
            GomarksError::Validation(_) => "E006",
            GomarksError::NotFound(_) => "E007",
            GomarksError::Conflict(_) => "E008",
            GomarksError::Serialization(_) => "E009",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            GomarksError::Config(_) => "Configuration Error",
            GomarksError::DatabaseConfig(_) => "Database Configuration Error",
            GomarksError::DatabaseConnection(_) => "Database Connection Error",
            GomarksError::DatabaseOperation(_) => "Database Operation Error",
            GomarksError::FileOperation(_) => "File Operation Error",
            GomarksError::Validation(_) => "Validation Error",
            GomarksError::NotFound(_) => "Resource Not Found",
            GomarksError::Conflict(_) => "Resource Conflict",
            GomarksError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            GomarksError::Config(msg)
            | GomarksError::DatabaseConfig(msg)
            | GomarksError::DatabaseConnection(msg)
            | GomarksError::DatabaseOperation(msg)
            | GomarksError::FileOperation(msg)
            | GomarksError::Validation(msg)
            | GomarksError::NotFound(msg)
            | GomarksError::Conflict(msg)
            | GomarksError::Serialization(msg) => msg,
        }
    }

    /// HTTP 状态码映射
    pub fn http_status(&self) -> StatusCode {
        match self {
            GomarksError::Validation(_) => StatusCode::BAD_REQUEST,
            GomarksError::NotFound(_) => StatusCode::NOT_FOUND,
            GomarksError::Conflict(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 格式化为彩色输出（用于 Server 模式）
    #[cfg(feature = "server")]
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 CLI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for GomarksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for GomarksError {}

// 便捷的构造函数
impl GomarksError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        GomarksError::Config(msg.into())
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        GomarksError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        GomarksError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        GomarksError::DatabaseOperation(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        GomarksError::FileOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        GomarksError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        GomarksError::NotFound(msg.into())
    }

    pub fn conflict<T: Into<String>>(msg: T) -> Self {
        GomarksError::Conflict(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        GomarksError::Serialization(msg.into())
    }

    pub fn shortcut_not_found(keyword: &str) -> Self {
        GomarksError::NotFound(format!("Shortcut '{}' not found", keyword))
    }

    pub fn shortcut_exists(keyword: &str) -> Self {
        GomarksError::Conflict(format!("The keyword '{}' already exists", keyword))
    }
}

impl From<sea_orm::DbErr> for GomarksError {
    fn from(err: sea_orm::DbErr) -> Self {
        GomarksError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for GomarksError {
    fn from(err: std::io::Error) -> Self {
        GomarksError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for GomarksError {
    fn from(err: serde_json::Error) -> Self {
        GomarksError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for GomarksError {
    fn from(err: toml::ser::Error) -> Self {
        GomarksError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GomarksError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let errors = [
            GomarksError::config(""),
            GomarksError::database_config(""),
            GomarksError::database_connection(""),
            GomarksError::database_operation(""),
            GomarksError::file_operation(""),
            GomarksError::validation(""),
            GomarksError::not_found(""),
            GomarksError::conflict(""),
            GomarksError::serialization(""),
        ];
        let codes: std::collections::HashSet<_> = errors.iter().map(|e| e.code()).collect();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(
            GomarksError::validation("bad").http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GomarksError::not_found("x").http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            GomarksError::conflict("x").http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            GomarksError::database_operation("x").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_format_simple() {
        let err = GomarksError::not_found("Shortcut 'gh' not found");
        assert_eq!(
            err.format_simple(),
            "Resource Not Found: Shortcut 'gh' not found"
        );
        assert_eq!(err.to_string(), err.format_simple());
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: GomarksError = io.into();
        assert!(matches!(err, GomarksError::FileOperation(_)));
    }
}
