//! The tree-to-text transducer: depth-first walk with Markdown emission.
//!
//! Per-frame state (list depth, quote depth, whitespace mode) travels down
//! the recursion by value, so it restores itself on the way back up. Table
//! state has to survive across sibling rows and therefore lives on the
//! emitter, saved and reset around each `table` element.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::node::{Node, NodeType};
use crate::replace::ReplacerRegistry;

/// Recognized element kinds. Everything else passes through to its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Heading(usize),
    Strong,
    Emphasis,
    Strikethrough,
    Link,
    Image,
    List,
    ListItem,
    BlockQuote,
    Code,
    Pre,
    Table,
    TableRow,
    TableCell { header: bool },
    Paragraph,
    LineBreak,
    ThematicBreak,
    Passthrough,
}

impl Tag {
    fn classify(name: &str) -> Self {
        match name {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                // A non-numeric suffix degrades to level 0.
                Tag::Heading(name[1..].parse().unwrap_or(0))
            }
            "strong" | "b" => Tag::Strong,
            "i" | "em" => Tag::Emphasis,
            "del" | "s" => Tag::Strikethrough,
            "a" => Tag::Link,
            "img" => Tag::Image,
            "ul" | "ol" => Tag::List,
            "li" => Tag::ListItem,
            "blockquote" => Tag::BlockQuote,
            "code" => Tag::Code,
            "pre" => Tag::Pre,
            "table" => Tag::Table,
            "tr" => Tag::TableRow,
            "td" => Tag::TableCell { header: false },
            "th" => Tag::TableCell { header: true },
            "p" => Tag::Paragraph,
            "br" => Tag::LineBreak,
            "hr" => Tag::ThematicBreak,
            _ => Tag::Passthrough,
        }
    }
}

/// Per-frame emission state, copied into each recursive call.
///
/// `list_depth` starts at -1, the "not inside any list" sentinel; the first
/// list level is 0. `trim_text` controls whether text payloads get their
/// surrounding whitespace stripped; code and pre content turn it off.
#[derive(Debug, Clone, Copy)]
struct Scope {
    list_depth: i32,
    quote_depth: usize,
    trim_text: bool,
}

impl Default for Scope {
    fn default() -> Self {
        Self {
            list_depth: -1,
            quote_depth: 0,
            trim_text: true,
        }
    }
}

/// Separator bookkeeping for the table currently being walked.
#[derive(Debug, Clone, Copy, Default)]
struct TableState {
    /// Header cells counted so far; sizes the separator row.
    columns: usize,
    /// Latched once the separator row has been written.
    separator_emitted: bool,
}

/// Strips highlighter-framework prefixes from a `class` value, leaving the
/// bare language name. Longer alternatives come first so that
/// `highlight-source-` is consumed as a whole token.
static CLASS_PREFIXES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(language-|highlight-source-|highlight|hljs)\s*").unwrap());

/// Recover a fence language token from a CSS class value.
fn code_language(class: &str) -> String {
    let stripped = CLASS_PREFIXES.replace_all(class, "");
    stripped
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_string()
}

/// One render in flight: the output buffer plus cross-sibling table state.
pub(crate) struct Emitter<'a> {
    replacers: &'a ReplacerRegistry,
    out: String,
    table: TableState,
}

impl<'a> Emitter<'a> {
    pub(crate) fn new(replacers: &'a ReplacerRegistry) -> Self {
        Self {
            replacers,
            out: String::new(),
            table: TableState::default(),
        }
    }

    /// Walk the whole tree and hand back the accumulated Markdown.
    pub(crate) fn render(mut self, root: &Node) -> String {
        self.walk(root, None, Scope::default());
        self.out
    }

    fn walk(&mut self, node: &Node, parent: Option<&Node>, scope: Scope) {
        match node.node_type {
            NodeType::Text => self.text(node, scope),
            NodeType::Element => self.element(node, parent, scope),
            NodeType::Comment => {}
            NodeType::Document | NodeType::Fragment => self.walk_children(node, scope),
        }
    }

    fn walk_children(&mut self, node: &Node, scope: Scope) {
        for child in node.children() {
            self.walk(child, Some(node), scope);
        }
    }

    fn text(&mut self, node: &Node, scope: Scope) {
        let data = node.value().unwrap_or("");
        if scope.trim_text {
            self.out.push_str(data.trim());
        } else {
            self.out.push_str(data);
        }
    }

    fn element(&mut self, node: &Node, parent: Option<&Node>, scope: Scope) {
        match Tag::classify(node.tag_name()) {
            Tag::Heading(level) => self.heading(node, level, scope),
            Tag::Strong => self.wrapped(node, "**", scope),
            Tag::Emphasis => self.wrapped(node, "*", scope),
            Tag::Strikethrough => self.wrapped(node, "~~", scope),
            Tag::Link => self.link(node),
            Tag::Image => self.image(node, parent),
            Tag::List => self.list(node, scope),
            Tag::ListItem => self.list_item(node, scope),
            Tag::BlockQuote => self.blockquote(node, scope),
            Tag::Code => self.code(node, parent, scope),
            Tag::Pre => self.pre(node, scope),
            Tag::Table => self.table(node, scope),
            Tag::TableRow => self.table_row(node, scope),
            Tag::TableCell { header } => self.table_cell(node, header, scope),
            Tag::Paragraph => self.paragraph(node, scope),
            Tag::LineBreak => self.out.push('\n'),
            Tag::ThematicBreak => self.out.push_str("\n---\n"),
            Tag::Passthrough => self.walk_children(node, scope),
        }
    }

    /// Resolve an attribute through the replacer registry.
    fn resolve(&self, name: &str, node: &Node) -> String {
        self.replacers.resolve(name, node)
    }

    fn heading(&mut self, node: &Node, level: usize, scope: Scope) {
        self.out.push('\n');
        self.out.push_str(&"#".repeat(level));
        self.out.push(' ');
        self.walk_children(node, Scope { trim_text: true, ..scope });
        self.out.push('\n');
    }

    /// Symmetric delimiter wrap for the emphasis family.
    fn wrapped(&mut self, node: &Node, delimiter: &str, scope: Scope) {
        self.out.push_str(delimiter);
        self.walk_children(node, scope);
        self.out.push_str(delimiter);
    }

    /// `[text](href)`. The label is the first child's plain text; nested
    /// markup inside a link is not re-rendered. A childless anchor emits
    /// nothing.
    fn link(&mut self, node: &Node) {
        let Some(first) = node.children().next() else {
            return;
        };
        let href = self.resolve("href", node);
        self.out.push('[');
        self.out.push_str(&first.text_content());
        self.out.push_str("](");
        self.out.push_str(&href);
        self.out.push(')');
    }

    /// `![alt](src)`, forced onto its own line inside a paragraph.
    fn image(&mut self, node: &Node, parent: Option<&Node>) {
        let in_paragraph = parent.is_some_and(|p| p.is_element() && p.tag_name() == "p");
        let alt = self.resolve("alt", node);
        let src = self.resolve("src", node);

        if in_paragraph {
            self.out.push('\n');
        }
        self.out.push_str("![");
        self.out.push_str(&alt);
        self.out.push_str("](");
        self.out.push_str(&src);
        self.out.push(')');
        if in_paragraph {
            self.out.push('\n');
        }
    }

    fn list(&mut self, node: &Node, scope: Scope) {
        self.walk_children(
            node,
            Scope {
                list_depth: scope.list_depth + 1,
                ..scope
            },
        );
    }

    fn list_item(&mut self, node: &Node, scope: Scope) {
        self.out.push('\n');
        if scope.list_depth > 0 {
            self.out.push_str(&"\t".repeat(scope.list_depth as usize));
        }
        self.out.push_str("- ");
        self.walk_children(node, Scope { trim_text: true, ..scope });
    }

    /// Nested quotes accumulate markers: `> `, `>> `, `>>> `, ...
    fn blockquote(&mut self, node: &Node, scope: Scope) {
        let depth = scope.quote_depth + 1;
        self.out.push('\n');
        self.out.push_str(&">".repeat(depth));
        self.out.push(' ');
        self.walk_children(
            node,
            Scope {
                quote_depth: depth,
                trim_text: true,
                ..scope
            },
        );
    }

    fn code(&mut self, node: &Node, parent: Option<&Node>, scope: Scope) {
        let parent_pre = parent.filter(|p| p.is_element() && p.tag_name() == "pre");

        let mut class = self.resolve("class", node);
        if class.is_empty() {
            if let Some(pre) = parent_pre {
                class = self.resolve("class", pre);
            }
        }
        let language = code_language(&class);

        let fenced = parent_pre.is_some() || !language.is_empty();
        if fenced {
            self.out.push('\n');
        }
        self.out.push_str("```");
        self.out.push_str(&language);
        if fenced {
            self.out.push('\n');
        }
        self.walk_children(node, Scope { trim_text: false, ..scope });
        if fenced {
            self.out.push('\n');
        }
        self.out.push_str("```");
    }

    /// A `pre` whose first meaningful child is a `code` element defers to
    /// the code handler; otherwise its content gets a bare fence.
    fn pre(&mut self, node: &Node, scope: Scope) {
        let first = node
            .children()
            .find(|c| !c.is_text() || !c.text_content().trim().is_empty());
        let defers = first.is_some_and(|c| c.is_element() && c.tag_name() == "code");

        if defers {
            self.walk_children(node, scope);
        } else {
            self.out.push_str("\n```\n");
            self.walk_children(node, Scope { trim_text: false, ..scope });
            self.out.push_str("\n```\n");
        }
    }

    /// The table element emits nothing itself, but scopes the separator
    /// bookkeeping so sibling tables never share state.
    fn table(&mut self, node: &Node, scope: Scope) {
        let outer = self.table;
        self.table = TableState::default();
        self.walk_children(node, scope);
        self.table = outer;
    }

    fn table_row(&mut self, node: &Node, scope: Scope) {
        // Header cells were counted while the previous row was walked, so
        // the separator lands between the header row and this one.
        if self.table.columns > 0 && !self.table.separator_emitted {
            self.out.push_str("\n| ");
            self.out.push_str(&"---- | ".repeat(self.table.columns));
            self.table.separator_emitted = true;
        }
        self.out.push_str("\n| ");
        self.walk_children(node, scope);
    }

    fn table_cell(&mut self, node: &Node, header: bool, scope: Scope) {
        self.walk_children(node, Scope { trim_text: true, ..scope });
        self.out.push_str(" | ");
        if header {
            self.table.columns += 1;
        }
    }

    fn paragraph(&mut self, node: &Node, scope: Scope) {
        // No separating newline when the buffer already ends in forced
        // whitespace: a quote marker, list bullet, or cell opener.
        if !self.out.is_empty() && !self.out.ends_with(char::is_whitespace) {
            self.out.push('\n');
        }
        self.walk_children(node, scope);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_stripping() {
        assert_eq!(code_language("hljs javascript"), "javascript");
        assert_eq!(code_language("language-rust"), "rust");
        assert_eq!(code_language("highlight-source-go"), "go");
        assert_eq!(code_language("highlight ruby"), "ruby");
        assert_eq!(code_language("hljs"), "");
        assert_eq!(code_language(""), "");
        assert_eq!(code_language("python"), "python");
    }

    #[test]
    fn language_takes_first_token() {
        assert_eq!(code_language("hljs js extra"), "js");
        assert_eq!(code_language("julia-repl hljs"), "julia-repl");
    }

    #[test]
    fn classify_headings() {
        assert_eq!(Tag::classify("h1"), Tag::Heading(1));
        assert_eq!(Tag::classify("h6"), Tag::Heading(6));
        assert_eq!(Tag::classify("header"), Tag::Passthrough);
    }

    #[test]
    fn classify_cells() {
        assert_eq!(Tag::classify("th"), Tag::TableCell { header: true });
        assert_eq!(Tag::classify("td"), Tag::TableCell { header: false });
    }

    #[test]
    fn unknown_tags_pass_through() {
        assert_eq!(Tag::classify("div"), Tag::Passthrough);
        assert_eq!(Tag::classify("span"), Tag::Passthrough);
        assert_eq!(Tag::classify("tbody"), Tag::Passthrough);
    }
}
