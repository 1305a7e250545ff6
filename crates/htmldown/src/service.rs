//! Htmldown - the main entry point for HTML to Markdown conversion.

use crate::emit::Emitter;
use crate::node::Node;
use crate::replace::ReplacerRegistry;
#[cfg(feature = "html")]
use crate::Result;

/// Converts one HTML document tree to Markdown.
///
/// The service owns the tree and a replacer registry; rendering borrows
/// both immutably, so [`render`](Htmldown::render) can be called any number
/// of times and always produces the same string.
pub struct Htmldown {
    root: Node,
    replacers: ReplacerRegistry,
}

impl Htmldown {
    /// Parse an HTML string and wrap the resulting tree.
    ///
    /// The parser recovers from malformed markup, so in practice this only
    /// fails if the parser itself reports that no tree could be built.
    #[cfg(feature = "html")]
    pub fn from_html(html: &str) -> Result<Self> {
        Ok(Self::from_node(crate::html::parse_html(html)))
    }

    /// Wrap an already-parsed tree. Always succeeds.
    pub fn from_node(root: Node) -> Self {
        Self {
            root,
            replacers: ReplacerRegistry::new(),
        }
    }

    /// Register a rewrite hook for an attribute name.
    ///
    /// The replacer receives the raw attribute value and the owning node,
    /// and its return value is emitted instead of the raw value. Intended
    /// to be set up before rendering; re-registration overwrites.
    pub fn register_replacer<F>(&mut self, attribute: &str, replacer: F)
    where
        F: Fn(&str, &Node) -> String + Send + Sync + 'static,
    {
        self.replacers.register(attribute, replacer);
    }

    /// Run the full traversal and return the accumulated Markdown.
    ///
    /// The tree is never mutated; rendering twice yields identical output.
    pub fn render(&self) -> String {
        Emitter::new(&self.replacers).render(&self.root)
    }

    /// The wrapped tree.
    pub fn root(&self) -> &Node {
        &self.root
    }
}
