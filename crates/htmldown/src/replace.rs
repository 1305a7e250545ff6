//! Attribute resolution with caller-supplied rewrite hooks.
//!
//! A replacer rewrites an attribute's raw value before it is emitted —
//! URL rewriting for every `src`, tracking parameters on every `href` —
//! without the caller having to touch the traversal.

use indexmap::IndexMap;

use crate::node::Node;

/// A rewrite function for one attribute name. Receives the raw value and
/// the node that owns the attribute.
pub type Replacer = Box<dyn Fn(&str, &Node) -> String + Send + Sync>;

/// Registry of replacers, keyed by attribute name.
#[derive(Default)]
pub struct ReplacerRegistry {
    replacers: IndexMap<String, Replacer>,
}

impl ReplacerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a replacer for an attribute name.
    ///
    /// Re-registering under the same name overwrites the previous replacer.
    /// Registration only affects attribute reads that happen afterwards.
    pub fn register<F>(&mut self, attribute: &str, replacer: F)
    where
        F: Fn(&str, &Node) -> String + Send + Sync + 'static,
    {
        self.replacers
            .insert(attribute.to_lowercase(), Box::new(replacer));
    }

    /// Resolve an attribute on `node`.
    ///
    /// Returns the raw value, passed through the registered replacer if one
    /// exists for this name. A missing attribute resolves to the empty
    /// string and never invokes a replacer.
    pub fn resolve(&self, name: &str, node: &Node) -> String {
        let Some(raw) = node.attr(name) else {
            return String::new();
        };
        match self.replacers.get(&name.to_lowercase()) {
            Some(replacer) => replacer(raw, node),
            None => raw.to_string(),
        }
    }
}
