//! 快捷方式与后备模板的写入校验
//!
//! 解析引擎依赖这里保证的不变量：目标模板最多一个 `%s`，后备模板恰好一个 `{searchTerms}`。

use crate::errors::{GomarksError, Result};
use crate::resolver::template::{
    count_placeholders, count_search_terms, substitute_placeholder, substitute_search_terms,
};
use crate::utils::url_validator::validate_url;

const EMPTY_FIELDS: &str = "Keyword and URL cannot be empty.";
const SAMPLE_VALUE: &str = "test";

pub fn validate_keyword(keyword: &str) -> Result<()> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err(GomarksError::validation(EMPTY_FIELDS));
    }
    if keyword.chars().any(char::is_whitespace) {
        return Err(GomarksError::validation(format!(
            "The keyword '{}' can't contain whitespace.",
            keyword
        )));
    }
    Ok(())
}

pub fn validate_destination(destination: &str) -> Result<()> {
    let destination = destination.trim();
    if destination.is_empty() {
        return Err(GomarksError::validation(EMPTY_FIELDS));
    }
    if count_placeholders(destination) > 1 {
        return Err(GomarksError::validation(
            "You can only have one placeholder in your URL.",
        ));
    }

    validate_url(&substitute_placeholder(destination, SAMPLE_VALUE))
        .map_err(|e| GomarksError::validation(e.to_string()))
}

pub fn validate_fallback(template: &str) -> Result<()> {
    let template = template.trim();
    if count_search_terms(template) != 1 {
        return Err(GomarksError::validation(
            "You need exactly one {searchTerms} in your fallback URL.",
        ));
    }

    validate_url(&substitute_search_terms(template, SAMPLE_VALUE))
        .map_err(|e| GomarksError::validation(e.to_string()))
}

/// 没有占位符时单词策略没有意义，统一存为 false
pub fn normalize_single_word(destination: &str, single_word: bool) -> bool {
    single_word && count_placeholders(destination) == 1
}
