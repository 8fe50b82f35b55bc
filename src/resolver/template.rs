//! 模板占位符处理
//!
//! 目标模板只认两个固定记号：快捷方式里的 `%s`，后备搜索引擎里的 `{searchTerms}`。
//! 写入时已保证出现次数，这里只做纯字符串替换。

/// 快捷方式目标模板中的占位符
pub const PLACEHOLDER: &str = "%s";

/// 后备搜索模板中的占位符
pub const SEARCH_TERMS: &str = "{searchTerms}";

/// 用 `value` 替换模板中第一个 `%s`
pub fn substitute_placeholder(template: &str, value: &str) -> String {
    template.replacen(PLACEHOLDER, value, 1)
}

/// 用 `query` 替换后备模板中第一个 `{searchTerms}`
pub fn substitute_search_terms(template: &str, query: &str) -> String {
    template.replacen(SEARCH_TERMS, query, 1)
}

pub fn count_placeholders(template: &str) -> usize {
    template.matches(PLACEHOLDER).count()
}

pub fn count_search_terms(template: &str) -> usize {
    template.matches(SEARCH_TERMS).count()
}

pub fn has_placeholder(template: &str) -> bool {
    template.contains(PLACEHOLDER)
}

/// 从已替换的 URL 中取回占位符的值
///
/// 模板没有 `%s`，或 `url` 与模板的前后缀对不上时返回 `None`。
pub fn extract_placeholder_value<'a>(template: &str, url: &'a str) -> Option<&'a str> {
    let (prefix, suffix) = template.split_once(PLACEHOLDER)?;
    let rest = url.strip_prefix(prefix)?;
    rest.strip_suffix(suffix)
}
