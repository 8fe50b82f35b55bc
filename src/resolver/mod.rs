//! 快捷方式解析引擎
//!
//! 把一条自由文本查询变成重定向目标：关键字命中时按占位符和单词策略
//! 拼出目标 URL，否则落到后备搜索引擎。引擎本身不写日志、不计数，
//! 副作用由调用方根据返回的 [`Resolution`] 执行。

mod query;
pub mod template;

use async_trait::async_trait;

use crate::errors::Result;
use crate::storage::Shortcut;

pub use query::{ParsedQuery, ResolveError};

/// 解析引擎所需的只读存储能力
#[async_trait]
pub trait ShortcutLookup: Send + Sync {
    /// 按关键字查找（大小写不敏感）
    async fn find_by_keyword(&self, keyword: &str) -> Result<Option<Shortcut>>;

    /// 当前后备搜索模板
    async fn fallback_template(&self) -> Result<String>;
}

/// `decide` 的结果，后备 URL 尚未生成
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Direct { url: String, keyword: String },
    Fallback,
}

/// 最终解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// 命中快捷方式，`keyword` 为存储中的原始大小写
    Direct { url: String, keyword: String },
    Fallback { url: String },
}

impl Resolution {
    pub fn url(&self) -> &str {
        match self {
            Resolution::Direct { url, .. } | Resolution::Fallback { url } => url,
        }
    }

    /// 需要增加访问次数的关键字，仅 `Direct` 有
    pub fn visited_keyword(&self) -> Option<&str> {
        match self {
            Resolution::Direct { keyword, .. } => Some(keyword),
            Resolution::Fallback { .. } => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolution::Fallback { .. })
    }
}

/// 纯决策函数
pub fn decide(
    query: &ParsedQuery<'_>,
    shortcut: Option<&Shortcut>,
) -> std::result::Result<Decision, ResolveError> {
    let Some(shortcut) = shortcut else {
        return Ok(Decision::Fallback);
    };

    let words = query.word_count();
    let direct = |url: String| Decision::Direct {
        url,
        keyword: shortcut.keyword.clone(),
    };

    if !template::has_placeholder(&shortcut.destination) {
        return if words == 1 {
            Ok(direct(shortcut.destination.clone()))
        } else {
            Err(ResolveError::ExtraOptionsNotAccepted {
                keyword: shortcut.keyword.clone(),
                destination: shortcut.destination.clone(),
            })
        };
    }

    match (words, shortcut.single_word) {
        (1, _) => Err(ResolveError::MissingOption {
            keyword: shortcut.keyword.clone(),
            destination: shortcut.destination.clone(),
        }),
        (2, true) => Ok(direct(template::substitute_placeholder(
            &shortcut.destination,
            query.options()[0],
        ))),
        (_, true) => Ok(Decision::Fallback),
        (_, false) => Ok(direct(template::substitute_placeholder(
            &shortcut.destination,
            &query.options().join(" "),
        ))),
    }
}

/// 查找关键字并生成解析结果
///
/// 只有在需要后备时才读取后备模板。
pub async fn resolve<L>(
    query: &ParsedQuery<'_>,
    lookup: &L,
) -> std::result::Result<Resolution, ResolveError>
where
    L: ShortcutLookup + ?Sized,
{
    let shortcut = lookup.find_by_keyword(query.keyword()).await?;

    match decide(query, shortcut.as_ref())? {
        Decision::Direct { url, keyword } => Ok(Resolution::Direct { url, keyword }),
        Decision::Fallback => {
            let fallback = lookup.fallback_template().await?;
            Ok(Resolution::Fallback {
                url: template::substitute_search_terms(&fallback, query.trimmed()),
            })
        }
    }
}
