//! # html2markdown
//!
//! Render HTML as Markdown.
//!
//! The renderer walks a parsed DOM tree depth-first and emits Markdown for a
//! fixed set of tags: paragraphs, headings, block quotes, emphasis, inline
//! code, links, ordered/unordered lists and table rows. Every other tag is
//! transparent and only its children are rendered.
//!
//! ## Design
//!
//! - **Parser at the edge**: HTML is parsed with `scraper` (html5ever) behind
//!   the default `html` feature. The renderer itself only sees [`Node`], so
//!   any parser can feed it.
//! - **Closed dispatch**: tag names are resolved into a [`Tag`] when a node is
//!   built.
//! - **Spacing in one place**: block elements add blank lines freely; a final
//!   pass collapses any run of three or more newlines to exactly two.
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use html2markdown::Html2Markdown;
//!
//! let converter = Html2Markdown::new();
//! let markdown = converter.markdown("<h1>Header 1</h1><h3>Header 3</h3>").unwrap();
//! assert_eq!(markdown, "# Header 1\n\n### Header 3");
//! ```
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use html2markdown::{Html2Markdown, Node, Options};
//!
//! let mut ul = Node::element("ul");
//! for text in ["one", "two"] {
//!     let mut li = Node::element("li");
//!     li.add_child(Node::text(text));
//!     ul.add_child(li);
//! }
//!
//! let converter = Html2Markdown::with_options(Options::with_bullet_symbol("•"));
//! assert_eq!(converter.convert(&ul), "• one\n• two");
//! ```

#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod options;
mod service;
mod utilities;

#[cfg(feature = "html")]
pub use html::parse_html;
pub use node::{Node, Tag};
pub use options::{Options, DEFAULT_BULLET_SYMBOL};
pub use service::Html2Markdown;
pub use utilities::collapse_newlines;

/// Error type for html2markdown operations
#[derive(Debug, thiserror::Error)]
pub enum Html2MarkdownError {
    #[error("Parse error: {0}")]
    ParseError(String),
}

pub type Result<T> = std::result::Result<T, Html2MarkdownError>;
