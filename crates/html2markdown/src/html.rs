//! HTML parsing support.
//!
//! Parses an HTML string with `scraper` (html5ever) and converts the
//! document body into the [`Node`] structure the renderer consumes.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse an HTML document and return its `<body>` as a Node tree.
///
/// Returns `None` when the document has no body element, which happens for
/// frameset documents. Fragments without `<html>`/`<body>` get an implied
/// body from the parser.
///
/// # Example
///
/// ```rust
/// use html2markdown::{parse_html, Html2Markdown};
///
/// let body = parse_html("<h1>Hello</h1><p><em>World</em></p>").unwrap();
/// assert_eq!(body.tag_name(), "body");
///
/// let markdown = Html2Markdown::new().convert(&body);
/// assert_eq!(markdown, "# Hello\n\n*World*");
/// ```
pub fn parse_html(html: &str) -> Option<Node> {
    let document = Html::parse_document(html);
    document
        .root_element()
        .children()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == "body")
        .and_then(scraper_to_node)
}

/// A scraper child worth keeping.
enum Child<'a> {
    Text(&'a str),
    Element(ElementRef<'a>),
}

/// An element whose children are still being converted.
struct Pending<'a> {
    node: Node,
    children: std::vec::IntoIter<Child<'a>>,
}

impl<'a> Pending<'a> {
    /// Comments, doctypes and whitespace-only text are left out. They would
    /// render as nothing but still shift sibling positions.
    fn new(element: ElementRef<'a>) -> Self {
        let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
        let children: Vec<Child<'a>> = element
            .children()
            .filter_map(|child| match child.value() {
                ScraperNode::Text(text) if !text.trim().is_empty() => Some(Child::Text(&text.text)),
                ScraperNode::Element(_) => ElementRef::wrap(child).map(Child::Element),
                _ => None,
            })
            .collect();

        Self {
            node: Node::element_with_attrs(element.value().name(), attrs),
            children: children.into_iter(),
        }
    }
}

/// Convert a scraper ElementRef to our Node structure.
///
/// Walks with an explicit stack; html5ever accepts arbitrarily deep nesting.
fn scraper_to_node(element: ElementRef) -> Option<Node> {
    let mut stack = vec![Pending::new(element)];

    while let Some(pending) = stack.last_mut() {
        match pending.children.next() {
            Some(Child::Text(text)) => pending.node.add_child(Node::text(text)),
            Some(Child::Element(child)) => stack.push(Pending::new(child)),
            None => {
                let finished = stack.pop()?.node;
                match stack.last_mut() {
                    Some(parent) => parent.node.add_child(finished),
                    None => return Some(finished),
                }
            }
        }
    }

    None
}
