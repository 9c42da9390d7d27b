//! Configuration options for Markdown rendering

/// Default marker for unordered list items
pub const DEFAULT_BULLET_SYMBOL: &str = "-";

/// Options for [`Html2Markdown`](crate::Html2Markdown)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Prefix for `ul > li` items, used verbatim (e.g. `"-"`, `"*"`, `"•"`)
    pub bullet_symbol: String,
}

impl Options {
    pub fn with_bullet_symbol(bullet_symbol: impl Into<String>) -> Self {
        Self {
            bullet_symbol: bullet_symbol.into(),
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            bullet_symbol: DEFAULT_BULLET_SYMBOL.to_string(),
        }
    }
}
