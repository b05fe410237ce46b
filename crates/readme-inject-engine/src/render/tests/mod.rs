//! End-to-end tests for the renderer.
//!
//! Fixtures (.md) and their insta snapshots (.snap) live side by side in
//! `fixtures/`.

use pretty_assertions::assert_eq;
use regex::Regex;
use rstest::rstest;

use crate::render::render;

// Fixture-based snapshot tests

#[test]
fn fixture_readme() {
    assert_fixture("readme");
}

#[test]
fn fixture_code_fences() {
    assert_fixture("code_fences");
}

#[test]
fn fixture_edge_cases() {
    assert_fixture("edge_cases");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!(
        "{}/src/render/tests/fixtures",
        env!("CARGO_MANIFEST_DIR")
    );
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    // Fixture files carry the editor's final newline; the snapshots don't.
    let html = render(md.trim_end_matches('\n'));
    assert_no_injection(&html);

    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, html);
    });
}

// Exact output cases

#[rstest]
#[case("", "")]
#[case("# Title", "<h1>Title</h1>")]
#[case(
    "**bold** and *italic*",
    "<p><strong>bold</strong> and <em>italic</em></p>"
)]
#[case("- a\n- b", "<ul>\n<li>a</li>\n<li>b</li>\n</ul>")]
#[case("- only item", "<ul>\n<li>only item</li>\n</ul>")]
#[case("```\ncode <tag>\n```", "<pre><code>code &lt;tag&gt;</code></pre>")]
#[case("line one\nline two", "<p>line one</p>\n<p>line two</p>")]
#[case("a\n\nb", "<p>a</p>\n\n<p>b</p>")]
#[case("```\nnever closed", "<p>```</p>\n<p>never closed</p>")]
#[case("1 < 2 && 3 > 2", "<p>1 &lt; 2 &amp;&amp; 3 &gt; 2</p>")]
#[case("**[x](u)**", r#"<p><strong><a href="u">x</a></strong></p>"#)]
#[case("`*p*`", "<p><code><em>p</em></code></p>")]
#[case("`a*b*c`", "<p><code>a<em>b</em>c</code></p>")]
fn renders(#[case] markdown: &str, #[case] expected: &str) {
    assert_eq!(render(markdown), expected);
}

#[test]
fn switching_list_kind_closes_first_run() {
    let html = render("- a\n1. b");
    assert!(html.contains("</ul>\n<ol>"), "got: {html}");
    assert_eq!(html.matches("<ul>").count(), html.matches("</ul>").count());
    assert_eq!(html.matches("<ol>").count(), html.matches("</ol>").count());
}

#[test]
fn code_block_interior_is_not_rewritten() {
    let html = render("```\n# h *i* **b** [l](u) `c`\n- x\n1. y\n```");
    assert_eq!(
        html,
        "<pre><code># h *i* **b** [l](u) `c`\n- x\n1. y</code></pre>"
    );
}

#[test]
fn code_block_is_not_paragraph_wrapped() {
    let html = render("before\n```\nx\n```\nafter");
    assert_eq!(html, "<p>before</p>\n<pre><code>x</code></pre>\n<p>after</p>");
}

#[test]
fn author_cannot_forge_placeholder() {
    let html = render("\u{E000}CODE_BLOCK_0\u{E000}\n```\nreal\n```");
    assert_eq!(
        html,
        "<p>&#xE000;CODE_BLOCK_0&#xE000;</p>\n<pre><code>real</code></pre>"
    );
}

#[test]
fn rendering_twice_double_escapes() {
    let once = render("a & b");
    let twice = render(&once);
    assert_eq!(once, "<p>a &amp; b</p>");
    assert_eq!(twice, "<p>&lt;p&gt;a &amp;amp; b&lt;/p&gt;</p>");
}

#[test]
fn concurrent_renders_do_not_interfere() {
    let inputs: Vec<String> = (0..8)
        .map(|i| format!("# Doc {i}\n```\nblock {i}\n```\n- item {i}"))
        .collect();
    let expected: Vec<String> = inputs.iter().map(|md| render(md)).collect();

    let handles: Vec<_> = inputs
        .into_iter()
        .map(|md| std::thread::spawn(move || render(&md)))
        .collect();
    let actual: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(actual, expected);
}

// No-injection property

#[rstest]
#[case("<script>alert(1)</script>")]
#[case("<img src=x onerror=alert(1)>")]
#[case("[click](javascript:x\" onmouseover=\"y)")]
#[case("**<b>bold</b>** *<i>*")]
#[case("```\n</code></pre><script>\n```")]
#[case("# <h1>\n- <li>\n1. </ol>")]
#[case("`<code>` & &amp; &lt;")]
fn hostile_input_is_escaped(#[case] markdown: &str) {
    assert_no_injection(&render(markdown));
}

/// Asserts that once the renderer's own tags are removed, no raw `<`, `>`
/// or quote is left and every `&` starts an entity.
fn assert_no_injection(html: &str) {
    let generated = Regex::new(
        r#"</?(?:h[1-3]|p|ul|ol|li|pre|code|strong|em)>|<a href="[^"<>]*">|</a>"#,
    )
    .unwrap();
    let entity = Regex::new(r"&(?:amp|lt|gt|quot|#x27|#39|#xE000);").unwrap();

    let text = generated.replace_all(html, "");
    assert!(
        !text.contains(['<', '>', '"']),
        "unescaped markup in output: {html}"
    );

    let without_entities = entity.replace_all(&text, "");
    assert!(
        !without_entities.contains('&'),
        "bare ampersand in output: {html}"
    );
}
