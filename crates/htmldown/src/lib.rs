//! # htmldown
//!
//! Convert HTML node trees to Markdown.
//!
//! The converter walks an already-parsed DOM tree depth-first and emits
//! Markdown tokens per tag, keeping track of list nesting, blockquote depth,
//! table columns, and whitespace significance as it descends.
//!
//! ## Design
//!
//! Parsing is deliberately decoupled from conversion. The core consumes a
//! [`Node`] tree and never mutates it, so the same tree can be rendered any
//! number of times. With the default `html` feature an HTML string can be
//! parsed into a tree via scraper/html5ever; without it the crate has no
//! parser dependency and callers bring their own tree.
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use htmldown::Htmldown;
//!
//! let converter = Htmldown::from_html("<strong>bold</strong>").unwrap();
//! assert_eq!(converter.render(), "**bold**");
//! ```
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use htmldown::{Htmldown, Node};
//!
//! let mut heading = Node::element("h1");
//! heading.add_child(Node::text("Hello World"));
//!
//! let markdown = Htmldown::from_node(heading).render();
//! assert_eq!(markdown, "\n# Hello World\n");
//! ```
//!
//! ## Rewriting attributes
//!
//! Link and image URLs can be rewritten without touching the traversal by
//! registering a replacer for the attribute name:
//!
//! ```rust
//! use htmldown::Htmldown;
//!
//! let mut converter = Htmldown::from_html(r#"<img src="a.png" alt="a">"#).unwrap();
//! converter.register_replacer("src", |src, _| format!("https://cdn.example.com/{src}"));
//! assert_eq!(converter.render(), "![a](https://cdn.example.com/a.png)");
//! ```

mod emit;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod replace;
mod service;

#[cfg(feature = "html")]
pub use html::parse_html;
pub use node::{Node, NodeType};
pub use replace::{Replacer, ReplacerRegistry};
pub use service::Htmldown;

/// Error type for htmldown operations.
#[derive(Debug, thiserror::Error)]
pub enum HtmldownError {
    /// The input text could not be parsed into a document tree.
    ///
    /// Raised only by the text-based constructor; conversion itself never
    /// fails once a tree exists.
    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, HtmldownError>;
