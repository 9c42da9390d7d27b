//! Read-only DOM tree consumed by the renderer.
//!
//! Any HTML parser can produce this structure; the `html` feature ships an
//! adapter for `scraper`. Tag names are resolved into a closed [`Tag`] once,
//! when the node is built, so rendering never re-matches raw strings.

use indexmap::IndexMap;

/// Node name used for text nodes.
pub const TEXT_NODE_NAME: &str = "#text";

/// The element categories the renderer knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// Text node
    Text,
    /// `br`
    LineBreak,
    /// `p`
    Paragraph,
    /// `blockquote`
    Blockquote,
    /// `b`, `strong`
    Strong,
    /// `i`, `em`
    Emphasis,
    /// `code`
    Code,
    /// `a`
    Anchor,
    /// `ol`
    OrderedList,
    /// `ul`
    UnorderedList,
    /// `li`
    ListItem,
    /// `tr`
    TableRow,
    /// `td`, `th`
    TableCell,
    /// `h` followed by digits, carrying the numeric level
    Heading(usize),
    /// Anything else; children are rendered without markup
    Other,
}

impl Tag {
    /// Resolve an element name (case-insensitive).
    pub fn from_name(name: &str) -> Self {
        let name = name.to_ascii_lowercase();
        match name.as_str() {
            TEXT_NODE_NAME => Tag::Text,
            "br" => Tag::LineBreak,
            "p" => Tag::Paragraph,
            "blockquote" => Tag::Blockquote,
            "b" | "strong" => Tag::Strong,
            "i" | "em" => Tag::Emphasis,
            "code" => Tag::Code,
            "a" => Tag::Anchor,
            "ol" => Tag::OrderedList,
            "ul" => Tag::UnorderedList,
            "li" => Tag::ListItem,
            "tr" => Tag::TableRow,
            "td" | "th" => Tag::TableCell,
            other => heading_level(other).map_or(Tag::Other, Tag::Heading),
        }
    }
}

/// `h1`, `h2`, ... `h10`: an `h` followed only by ASCII digits, level >= 1.
fn heading_level(name: &str) -> Option<usize> {
    let digits = name.strip_prefix('h')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().filter(|level| *level > 0)
}

/// A DOM node: an element with attributes and ordered children, or a text node.
///
/// Sibling position is not stored here. The renderer derives it from the
/// parent's child list.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Resolved element category
    pub tag: Tag,

    /// Lowercase element name, or `#text` for text nodes
    pub node_name: String,

    /// Text content for text nodes
    pub node_value: Option<String>,

    /// Attributes in document order, keyed by lowercase name
    pub attributes: IndexMap<String, String>,

    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        let node_name = tag_name.to_ascii_lowercase();
        Self {
            tag: Tag::from_name(&node_name),
            node_name,
            node_value: None,
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut node = Self::element(tag_name);
        for (name, value) in attrs {
            node.set_attr(name, value);
        }
        node
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self {
            tag: Tag::Text,
            node_name: TEXT_NODE_NAME.to_string(),
            node_value: Some(content.to_string()),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn is_text(&self) -> bool {
        self.tag == Tag::Text
    }

    pub fn is_element(&self) -> bool {
        !self.is_text()
    }

    pub fn tag_name(&self) -> &str {
        &self.node_name
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Set an attribute, replacing any previous value
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes
            .insert(name.to_ascii_lowercase(), value.to_string());
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn element_children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(|n| n.is_element())
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node.node_value {
                Some(ref value) => text.push_str(value),
                None => stack.extend(node.children.iter().rev()),
            }
        }
        text
    }
}

// Flatten the subtree before dropping so deep trees don't overflow the stack.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut child) = pending.pop() {
            pending.append(&mut child.children);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_element() {
        let node = Node::element("DIV");
        assert!(node.is_element());
        assert_eq!(node.tag_name(), "div");
        assert_eq!(node.tag, Tag::Other);
    }

    #[test]
    fn test_create_text() {
        let node = Node::text("Hello World");
        assert!(node.is_text());
        assert_eq!(node.tag_name(), "#text");
        assert_eq!(node.text_content(), "Hello World");
    }

    #[test]
    fn test_tag_resolution() {
        assert_eq!(Tag::from_name("strong"), Tag::Strong);
        assert_eq!(Tag::from_name("B"), Tag::Strong);
        assert_eq!(Tag::from_name("em"), Tag::Emphasis);
        assert_eq!(Tag::from_name("th"), Tag::TableCell);
        assert_eq!(Tag::from_name("span"), Tag::Other);
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(Tag::from_name("h1"), Tag::Heading(1));
        assert_eq!(Tag::from_name("H6"), Tag::Heading(6));
        assert_eq!(Tag::from_name("h7"), Tag::Heading(7));
        assert_eq!(Tag::from_name("h0"), Tag::Other);
        assert_eq!(Tag::from_name("h"), Tag::Other);
        assert_eq!(Tag::from_name("hr"), Tag::Other);
        assert_eq!(Tag::from_name("head"), Tag::Other);
        assert_eq!(Tag::from_name("h1a"), Tag::Other);
    }

    #[test]
    fn test_attributes() {
        let node =
            Node::element_with_attrs("a", vec![("HREF", "https://example.com"), ("title", "Example")]);
        assert_eq!(node.attr("href"), Some("https://example.com"));
        assert_eq!(node.attr("Title"), Some("Example"));
        assert!(!node.has_attr("class"));

        let names: Vec<&str> = node.attributes.keys().map(String::as_str).collect();
        assert_eq!(names, ["href", "title"]);
    }

    #[test]
    fn test_set_attr_replaces() {
        let mut node = Node::element("a");
        node.set_attr("href", "one");
        node.set_attr("href", "two");
        assert_eq!(node.attr("href"), Some("two"));
        assert_eq!(node.attributes.len(), 1);
    }

    #[test]
    fn test_children_and_text_content() {
        let mut div = Node::element("div");
        div.add_child(Node::text("Hello "));
        let mut span = Node::element("span");
        span.add_child(Node::text("World"));
        div.add_child(span);

        assert_eq!(div.children().len(), 2);
        assert_eq!(div.element_children().count(), 1);
        assert_eq!(div.text_content(), "Hello World");
    }

    #[test]
    fn test_deep_tree_text_and_drop() {
        let mut node = Node::text("leaf");
        for _ in 0..50_000 {
            let mut div = Node::element("div");
            div.add_child(node);
            node = div;
        }
        assert_eq!(node.text_content(), "leaf");
        drop(node);
    }
}
