//! HTML parsing support.
//!
//! Bridges scraper/html5ever output into the owned [`Node`] tree the
//! converter consumes. Only available with the `html` feature (on by
//! default).

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse an HTML fragment into a [`Node`] tree.
///
/// html5ever is error-recovering, so malformed markup still yields a tree;
/// the fragment is rooted at a synthetic `html` element.
///
/// # Example
///
/// ```rust
/// use htmldown::{parse_html, Htmldown};
///
/// let tree = parse_html("<h2>Hello World</h2>");
/// let markdown = Htmldown::from_node(tree).render();
/// assert_eq!(markdown, "\n## Hello World\n");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_fragment(html);
    convert_element(document.root_element())
}

fn convert_element(element: ElementRef) -> Node {
    let mut node = Node::element(element.value().name());
    for (name, value) in element.value().attrs() {
        node.set_attr(name, value);
    }

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => node.add_child(Node::text(&text.text)),
            ScraperNode::Comment(comment) => node.add_child(Node::comment(&comment.comment)),
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(convert_element(child_element));
                }
            }
            _ => {}
        }
    }

    node
}
