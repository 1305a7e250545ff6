//! End-to-end conversion tests with exact expected strings.

#![cfg(feature = "html")]

use htmldown::Htmldown;

fn convert(html: &str) -> String {
    Htmldown::from_html(html).unwrap().render()
}

#[test]
fn headings_all_levels() {
    for level in 1..=6 {
        let html = format!("<h{level}>Title {level}</h{level}>");
        let expected = format!("\n{} Title {level}\n", "#".repeat(level));
        assert_eq!(convert(&html), expected);
    }
}

#[test]
fn emphasis_wraps_are_symmetric() {
    assert_eq!(convert("<strong>strong</strong>"), "**strong**");
    assert_eq!(convert("<b>bold</b>"), "**bold**");
    assert_eq!(convert("<i>italic</i>"), "*italic*");
    assert_eq!(convert("<em>italic</em>"), "*italic*");
    assert_eq!(convert("<del>gone</del>"), "~~gone~~");
    assert_eq!(convert("<s>gone</s>"), "~~gone~~");
}

#[test]
fn inline_link() {
    assert_eq!(convert(r#"<a href="xxx.com">link</a>"#), "[link](xxx.com)");
}

#[test]
fn link_without_href_resolves_empty() {
    assert_eq!(convert("<a>link</a>"), "[link]()");
}

#[test]
fn image() {
    assert_eq!(
        convert(r#"<img src="x.jpg" alt="y">"#),
        "![y](x.jpg)"
    );
}

#[test]
fn image_inside_paragraph_gets_own_line() {
    assert_eq!(
        convert(r#"<p><img src="x.jpg" alt="y"></p>"#),
        "\n![y](x.jpg)\n"
    );
}

#[test]
fn horizontal_rule() {
    assert_eq!(convert("<hr>"), "\n---\n");
}

#[test]
fn line_break() {
    assert_eq!(convert("<p>a<br>b</p>"), "a\nb");
}

#[test]
fn paragraphs_separate_on_one_newline() {
    assert_eq!(convert("<p>one</p><p>two</p>"), "one\ntwo");
}

#[test]
fn list_items() {
    assert_eq!(convert("<ul><li>One</li><li>Two</li></ul>"), "\n- One\n- Two");
    assert_eq!(convert("<ol><li>One</li><li>Two</li></ol>"), "\n- One\n- Two");
}

#[test]
fn nested_list_indents_one_unit_per_level() {
    assert_eq!(
        convert("<ul><li>A<ul><li>B</li></ul></li></ul>"),
        "\n- A\n\t- B"
    );
}

#[test]
fn bare_list_item_has_no_indent() {
    assert_eq!(convert("<li>List</li>"), "\n- List");
}

#[test]
fn blockquote() {
    assert_eq!(convert("<blockquote>quoted</blockquote>"), "\n> quoted");
}

#[test]
fn blockquote_keeps_paragraph_on_marker_line() {
    assert_eq!(
        convert("<blockquote><p>Quote</p></blockquote>"),
        "\n> Quote"
    );
}

#[test]
fn list_item_keeps_paragraph_on_bullet_line() {
    assert_eq!(convert("<ul><li><p>item</p></li></ul>"), "\n- item");
}

#[test]
fn nested_blockquotes_accumulate_markers() {
    assert_eq!(
        convert("<blockquote>outer<blockquote>inner</blockquote></blockquote>"),
        "\n> outer\n>> inner"
    );
}

#[test]
fn inline_code() {
    assert_eq!(convert("<code>x = 1</code>"), "```x = 1```");
}

#[test]
fn fenced_code_with_language_from_pre_class() {
    assert_eq!(
        convert(r#"<pre class="hljs javascript"><code>code</code></pre>"#),
        "\n```javascript\ncode\n```"
    );
}

#[test]
fn fenced_code_with_language_from_own_class() {
    assert_eq!(
        convert(r#"<code class="language-rust">let x = 1;</code>"#),
        "\n```rust\nlet x = 1;\n```"
    );
}

#[test]
fn fenced_code_without_language() {
    assert_eq!(
        convert("<pre><code>fn main() {}</code></pre>"),
        "\n```\nfn main() {}\n```"
    );
}

#[test]
fn code_preserves_inner_whitespace() {
    assert_eq!(
        convert("<pre><code>line one\n    line two</code></pre>"),
        "\n```\nline one\n    line two\n```"
    );
}

#[test]
fn pre_without_code_child_is_fenced() {
    assert_eq!(convert("<pre>plain text</pre>"), "\n```\nplain text\n```\n");
}

#[test]
fn table_header_only() {
    assert_eq!(
        convert("<table><tr><th>table header</th></tr></table>"),
        "\n| table header | "
    );
}

#[test]
fn table_header_row_then_separator_then_data() {
    assert_eq!(
        convert(
            "<table><tr><th>H1</th><th>H2</th></tr>\
             <tr><td>D1</td><td>D2</td></tr></table>"
        ),
        "\n| H1 | H2 | \n| ---- | ---- | \n| D1 | D2 | "
    );
}

#[test]
fn table_with_thead_and_tbody_sections() {
    assert_eq!(
        convert(
            "<table><thead><tr><th>A</th><th>B</th></tr></thead>\
             <tbody><tr><td>1</td><td>2</td></tr></tbody></table>"
        ),
        "\n| A | B | \n| ---- | ---- | \n| 1 | 2 | "
    );
}

#[test]
fn sibling_tables_reset_separator_state() {
    assert_eq!(
        convert(
            "<table><tr><th>H</th></tr><tr><td>D</td></tr></table>\
             <table><tr><th>J</th></tr><tr><td>E</td></tr></table>"
        ),
        "\n| H | \n| ---- | \n| D | \n| J | \n| ---- | \n| E | "
    );
}

#[test]
fn header_less_table_has_no_separator() {
    assert_eq!(
        convert("<table><tr><td>a</td></tr><tr><td>b</td></tr></table>"),
        "\n| a | \n| b | "
    );
}

#[test]
fn unknown_tags_pass_through_to_children() {
    assert_eq!(convert("<section><div><span>x</span></div></section>"), "x");
}

#[test]
fn comments_emit_nothing() {
    assert_eq!(convert("<p>a<!-- hidden -->b</p>"), "ab");
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    assert_eq!(convert("<div>  spaced  </div>"), "spaced");
}

#[test]
fn replacer_rewrites_image_sources() {
    let mut converter = Htmldown::from_html(r#"<img src="a.png" alt="a">"#).unwrap();
    converter.register_replacer("src", |src, _| format!("https://cdn.example.com/{src}"));
    assert_eq!(converter.render(), "![a](https://cdn.example.com/a.png)");
}

#[test]
fn replacer_receives_owning_node() {
    let mut converter =
        Htmldown::from_html(r#"<a href="xxx.com"><span>link</span></a>"#).unwrap();
    converter.register_replacer("href", |href, node| {
        assert_eq!(node.tag_name(), "a");
        format!("https://{href}")
    });
    assert_eq!(converter.render(), "[link](https://xxx.com)");
}

#[test]
fn rendering_twice_is_identical() {
    let converter = Htmldown::from_html(
        "<h1>Doc</h1><pre><code>  keep  </code></pre><ul><li>item</li></ul>",
    )
    .unwrap();
    assert_eq!(converter.render(), converter.render());
}

#[test]
fn mixed_document() {
    let html = "<h1>Post</h1>\
                <p>Intro with <strong>bold</strong></p>\
                <blockquote>note</blockquote>\
                <ul><li>first</li><li>second</li></ul>\
                <hr>";
    // Trim mode strips the whitespace around inline boundaries.
    assert_eq!(
        convert(html),
        "\n# Post\nIntro with**bold**\n> note\n- first\n- second\n---\n"
    );
}
