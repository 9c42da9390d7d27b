//! Html2Markdown - the main entry point for HTML to Markdown conversion.

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::node::{Node, Tag};
use crate::options::Options;
use crate::utilities::collapse_newlines;
#[cfg(feature = "html")]
use crate::{Html2MarkdownError, Result};

/// List kind handed from an `ol`/`ul` to its direct children only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListContext {
    None,
    Ordered,
    Unordered,
}

/// A node's place among its parent's children.
#[derive(Debug, Clone, Copy)]
struct Position {
    index: usize,
    count: usize,
}

impl Position {
    /// The entry node has no parent; treat it as an only child.
    fn root() -> Self {
        Self { index: 0, count: 1 }
    }

    fn is_first(self) -> bool {
        self.index == 0
    }

    fn is_last(self) -> bool {
        self.index + 1 == self.count
    }
}

/// The main service for converting HTML to Markdown
#[derive(Debug, Clone, Default)]
pub struct Html2Markdown {
    options: Options,
}

impl Html2Markdown {
    /// Create a new converter with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Convert an HTML document to Markdown.
    ///
    /// A document without a `<body>` converts to an empty string.
    #[cfg(feature = "html")]
    pub fn markdown(&self, html: &str) -> Result<String> {
        let _span = tracing::debug_span!("markdown", input_bytes = html.len()).entered();

        match crate::html::parse_html(html) {
            Some(body) => Ok(self.convert(&body)),
            None => {
                tracing::warn!("document has no body element, nothing to convert");
                Ok(String::new())
            }
        }
    }

    /// Convert raw HTML bytes to Markdown. Bytes that are not UTF-8 fail to parse.
    #[cfg(feature = "html")]
    pub fn markdown_bytes(&self, html: &[u8]) -> Result<String> {
        let html = std::str::from_utf8(html)
            .map_err(|e| Html2MarkdownError::ParseError(e.to_string()))?;
        self.markdown(html)
    }

    /// Convert an already-built Node tree to Markdown.
    pub fn convert(&self, node: &Node) -> String {
        let rendered = self.render(node);
        let markdown = collapse_newlines(&rendered);
        debug!(output_bytes = markdown.len(), "converted to markdown");
        markdown
    }

    /// Depth-first walk with an explicit work stack, so nesting depth is
    /// bounded by heap rather than the call stack.
    fn render(&self, root: &Node) -> String {
        let mut out = String::new();
        let mut stack = vec![Step::Visit {
            node: root,
            position: Position::root(),
            list: ListContext::None,
        }];

        while let Some(step) = stack.pop() {
            match step {
                Step::Write(text) => out.push_str(&text),
                Step::Visit {
                    node,
                    position,
                    list,
                } => self.visit(node, position, list, &mut out, &mut stack),
            }
        }

        out
    }

    /// Write a node's opening markup and schedule its children followed by
    /// its closing markup.
    fn visit<'a>(
        &self,
        node: &'a Node,
        position: Position,
        list: ListContext,
        out: &mut String,
        stack: &mut Vec<Step<'a>>,
    ) {
        match node.tag {
            Tag::Text => {
                out.push_str(node.node_value.as_deref().unwrap_or_default().trim());
            }

            Tag::LineBreak => {
                out.push('\n');
                schedule_children(node, ListContext::None, stack);
            }

            Tag::Paragraph => visit_block(node, position, "", ListContext::None, out, stack),

            Tag::Blockquote => visit_block(node, position, "> ", ListContext::None, out, stack),

            Tag::OrderedList => visit_block(node, position, "", ListContext::Ordered, out, stack),

            Tag::UnorderedList => {
                visit_block(node, position, "", ListContext::Unordered, out, stack)
            }

            Tag::Strong => visit_wrapped(node, "**", out, stack),

            Tag::Emphasis => visit_wrapped(node, "*", out, stack),

            Tag::Code => visit_wrapped(node, "`", out, stack),

            Tag::Anchor => {
                if let Some(href) = node.attr("href").filter(|href| !href.is_empty()) {
                    out.push('[');
                    stack.push(Step::Write(Cow::Owned(format!("]({href})"))));
                }
                schedule_children(node, ListContext::None, stack);
            }

            Tag::ListItem => {
                match list {
                    ListContext::Ordered => {
                        out.push_str(&(position.index + 1).to_string());
                        out.push_str(". ");
                    }
                    ListContext::Unordered => {
                        out.push_str(&self.options.bullet_symbol);
                        out.push(' ');
                    }
                    ListContext::None => {}
                }
                if !position.is_last() {
                    stack.push(Step::Write(Cow::Borrowed("\n")));
                }
                schedule_children(node, ListContext::None, stack);
            }

            Tag::TableRow => visit_row(node, position, out, stack),

            Tag::Heading(level) => {
                if !position.is_first() {
                    out.push_str("\n\n");
                }
                out.push_str(&"#".repeat(level));
                out.push(' ');
                schedule_children(node, ListContext::None, stack);
            }

            Tag::TableCell => schedule_children(node, ListContext::None, stack),

            Tag::Other => {
                trace!(tag = node.tag_name(), "no markdown syntax, rendering children");
                schedule_children(node, ListContext::None, stack);
            }
        }
    }
}

/// Pending work for the renderer.
enum Step<'a> {
    Visit {
        node: &'a Node,
        position: Position,
        list: ListContext,
    },
    Write(Cow<'a, str>),
}

/// Push children in reverse so they pop in document order.
fn schedule_children<'a>(node: &'a Node, list: ListContext, stack: &mut Vec<Step<'a>>) {
    let count = node.children.len();
    for (index, child) in node.children.iter().enumerate().rev() {
        stack.push(Step::Visit {
            node: child,
            position: Position { index, count },
            list,
        });
    }
}

/// Blank line before unless first, blank line after unless last.
fn visit_block<'a>(
    node: &'a Node,
    position: Position,
    prefix: &str,
    list: ListContext,
    out: &mut String,
    stack: &mut Vec<Step<'a>>,
) {
    if !position.is_first() {
        out.push_str("\n\n");
    }
    out.push_str(prefix);
    if !position.is_last() {
        stack.push(Step::Write(Cow::Borrowed("\n\n")));
    }
    schedule_children(node, list, stack);
}

fn visit_wrapped<'a>(
    node: &'a Node,
    delimiter: &'static str,
    out: &mut String,
    stack: &mut Vec<Step<'a>>,
) {
    out.push_str(delimiter);
    stack.push(Step::Write(Cow::Borrowed(delimiter)));
    schedule_children(node, ListContext::None, stack);
}

/// The first row of a table body also emits an empty header row and a
/// separator row, sized to its own cell count. Only `td`/`th` children
/// are cells.
fn visit_row<'a>(node: &'a Node, position: Position, out: &mut String, stack: &mut Vec<Step<'a>>) {
    let count = node.children.len();
    let cells: Vec<(usize, &Node)> = node
        .children
        .iter()
        .enumerate()
        .filter(|(_, child)| child.tag == Tag::TableCell)
        .collect();

    if position.is_first() {
        let columns = cells.len();
        out.push('|');
        out.push_str(&vec!["   "; columns].join("|"));
        out.push_str("|\n|");
        out.push_str(&vec!["---"; columns].join("|"));
        out.push_str("|\n");
    }

    out.push_str("| ");
    stack.push(Step::Write(Cow::Borrowed(if position.is_last() {
        " |"
    } else {
        " |\n"
    })));
    for (n, (index, cell)) in cells.into_iter().enumerate().rev() {
        stack.push(Step::Visit {
            node: cell,
            position: Position { index, count },
            list: ListContext::None,
        });
        if n > 0 {
            stack.push(Step::Write(Cow::Borrowed(" | ")));
        }
    }
}
