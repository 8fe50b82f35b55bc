use std::fmt;

use crate::errors::GomarksError;

/// 解析失败或关键字使用不当时的错误
///
/// 前三种是用户输入问题，`StoreFailure` 表示存储层出错。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    EmptyQuery,
    ExtraOptionsNotAccepted { keyword: String, destination: String },
    MissingOption { keyword: String, destination: String },
    StoreFailure(String),
}

impl ResolveError {
    /// 是否由用户输入引起（HTTP 层映射为 400）
    pub fn is_user_error(&self) -> bool {
        !matches!(self, ResolveError::StoreFailure(_))
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::EmptyQuery => write!(f, "A query can't be empty."),
            ResolveError::ExtraOptionsNotAccepted {
                keyword,
                destination,
            } => write!(
                f,
                "The keyword {} doesn't accept options as its URL {} doesn't have a placeholder.",
                keyword, destination
            ),
            ResolveError::MissingOption {
                keyword,
                destination,
            } => write!(
                f,
                "The keyword {} expects an option as its URL {} contains a placeholder.",
                keyword, destination
            ),
            ResolveError::StoreFailure(msg) => write!(f, "Storage failure: {}", msg),
        }
    }
}

impl std::error::Error for ResolveError {}

impl From<GomarksError> for ResolveError {
    fn from(err: GomarksError) -> Self {
        ResolveError::StoreFailure(err.message().to_string())
    }
}

/// 分词后的查询
///
/// 保留原始文本用于写查询日志，`words` 按空白切分且至少有一个元素。
#[derive(Debug, Clone)]
pub struct ParsedQuery<'a> {
    raw: &'a str,
    words: Vec<&'a str>,
}

impl<'a> ParsedQuery<'a> {
    pub fn parse(raw: &'a str) -> Result<Self, ResolveError> {
        let words: Vec<&'a str> = raw.split_whitespace().collect();
        if words.is_empty() {
            return Err(ResolveError::EmptyQuery);
        }
        Ok(Self { raw, words })
    }

    /// 用户输入的原文，未做任何修改
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// 去掉首尾空白后的文本，内部空白原样保留
    pub fn trimmed(&self) -> &'a str {
        self.raw.trim()
    }

    pub fn keyword(&self) -> &'a str {
        self.words[0]
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// 关键字之后的所有词
    pub fn options(&self) -> &[&'a str] {
        &self.words[1..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_whitespace_runs() {
        let q = ParsedQuery::parse("  bb   climate\tchange ").unwrap();
        assert_eq!(q.keyword(), "bb");
        assert_eq!(q.word_count(), 3);
        assert_eq!(q.options(), &["climate", "change"]);
        assert_eq!(q.raw(), "  bb   climate\tchange ");
        assert_eq!(q.trimmed(), "bb   climate\tchange");
    }

    #[test]
    fn test_parse_single_word() {
        let q = ParsedQuery::parse("b").unwrap();
        assert_eq!(q.word_count(), 1);
        assert!(q.options().is_empty());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(ParsedQuery::parse("").unwrap_err(), ResolveError::EmptyQuery);
        assert_eq!(
            ParsedQuery::parse("   \t\n").unwrap_err(),
            ResolveError::EmptyQuery
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ResolveError::EmptyQuery.to_string(), "A query can't be empty.");

        let err = ResolveError::ExtraOptionsNotAccepted {
            keyword: "b".into(),
            destination: "https://www.bbc.com".into(),
        };
        assert_eq!(
            err.to_string(),
            "The keyword b doesn't accept options as its URL https://www.bbc.com doesn't have a placeholder."
        );

        let err = ResolveError::MissingOption {
            keyword: "bb".into(),
            destination: "https://www.bbc.com/news/world/%s".into(),
        };
        assert_eq!(
            err.to_string(),
            "The keyword bb expects an option as its URL https://www.bbc.com/news/world/%s contains a placeholder."
        );
    }

    #[test]
    fn test_user_error_classification() {
        assert!(ResolveError::EmptyQuery.is_user_error());
        assert!(!ResolveError::StoreFailure("boom".into()).is_user_error());

        let from_store: ResolveError = GomarksError::database_operation("locked").into();
        assert_eq!(from_store, ResolveError::StoreFailure("locked".into()));
    }
}
