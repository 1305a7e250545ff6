//! Owned DOM node tree consumed by the converter.
//!
//! Any HTML parser can be bridged to this structure; the converter only
//! reads it. Attributes keep document order, and lookups resolve duplicate
//! names to the first occurrence.

/// The kind of a DOM node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Whole-document root.
    Document,
    /// Rootless fragment of sibling nodes.
    Fragment,
    /// Element node with a tag name, attributes, and children.
    Element,
    /// Text node carrying a payload.
    Text,
    /// Comment node; contributes nothing to the output.
    Comment,
}

/// A node in an owned HTML tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// Node kind.
    pub node_type: NodeType,
    /// Lowercase tag name for elements, empty for other kinds.
    name: String,
    /// Payload for text and comment nodes.
    value: Option<String>,
    /// Attributes in document order.
    attrs: Vec<(String, String)>,
    /// Child nodes in document order.
    children: Vec<Node>,
}

impl Node {
    /// Create an element node.
    pub fn element(tag_name: &str) -> Self {
        Self {
            node_type: NodeType::Element,
            name: tag_name.to_lowercase(),
            value: None,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create an element node with attributes.
    pub fn element_with_attrs(tag_name: &str, attrs: &[(&str, &str)]) -> Self {
        let mut node = Self::element(tag_name);
        node.attrs = attrs
            .iter()
            .map(|(k, v)| (k.to_lowercase(), (*v).to_string()))
            .collect();
        node
    }

    /// Create a text node.
    pub fn text(content: &str) -> Self {
        Self {
            node_type: NodeType::Text,
            name: String::new(),
            value: Some(content.to_string()),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a comment node.
    pub fn comment(content: &str) -> Self {
        Self {
            node_type: NodeType::Comment,
            name: String::new(),
            value: Some(content.to_string()),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a document fragment node.
    pub fn fragment() -> Self {
        Self {
            node_type: NodeType::Fragment,
            name: String::new(),
            value: None,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Check if this is an element node.
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Check if this is a text node.
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// The lowercase tag name. Empty for non-element nodes.
    pub fn tag_name(&self) -> &str {
        &self.name
    }

    /// Text payload of a text or comment node.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Look up an attribute value by name.
    ///
    /// Names compare ASCII-case-insensitively; the first occurrence wins
    /// when a name is duplicated.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Check if an attribute exists.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Child nodes in document order.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Append a child node.
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Set an attribute, overwriting an existing one of the same name.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        let name = name.to_lowercase();
        match self.attrs.iter_mut().find(|(k, _)| *k == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attrs.push((name, value.to_string())),
        }
    }

    /// Aggregate plain-text content of this node and its descendants.
    pub fn text_content(&self) -> String {
        match self.node_type {
            NodeType::Text => self.value.clone().unwrap_or_default(),
            NodeType::Comment => String::new(),
            _ => self.children().map(Node::text_content).collect(),
        }
    }
}
