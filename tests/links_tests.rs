mod common;

use common::fixtures::*;
use common::{TestResult, init_logger, with_links};
use ghost2hugo::{RewriteOptions, rewrite_html, substitute};

const NOJS: &[(&str, &str)] = &[("https://example.com", "https://nojs.example.com")];

#[test]
fn test_anchor_href_is_substituted() -> TestResult {
    init_logger();
    assert_rewrites_to!(
        r#"<a href="https://example.com" rel="noopener">Example.com</a>"#,
        &with_links(NOJS),
        r#"<a href="https://nojs.example.com" rel="noopener">Example.com</a>"#
    );
    Ok(())
}

#[test]
fn test_anchor_and_image_in_one_post() -> TestResult {
    init_logger();
    assert_rewrites_to!(
        r#"<p>Test</p><img height="900" width="200" src="foo.png"><p><a href="https://example.com" rel="noopener noreferrer nofollow">Example.com</a></p><p>Test 3</p>"#,
        &with_links(NOJS),
        r#"<p>Test</p><img src="foo.png"></img><p><a href="https://nojs.example.com" rel="noopener noreferrer nofollow">Example.com</a></p><p>Test 3</p>"#
    );
    Ok(())
}

#[test]
fn test_disabled_substitution_leaves_anchors_alone() -> TestResult {
    init_logger();
    let source = link_paragraph("https://example.com/a?b=1&amp;c=2", "the <em>docs</em>");
    let mut options = with_links(NOJS);
    options.replace_links = false;
    let out = rewrite_html(&source, &options)?;
    assert_eq!(out.html, source);
    Ok(())
}

#[test]
fn test_nested_markup_is_flattened_when_anchor_has_attributes() -> TestResult {
    init_logger();
    assert_rewrites_to!(
        r#"<p><a class="btn">Read <em>the</em> <strong>docs</strong></a></p>"#,
        &with_links(NOJS),
        r#"<p><a class="btn">Read the docs</a></p>"#
    );
    Ok(())
}

#[test]
fn test_nested_markup_is_kept_when_anchor_has_no_attributes() -> TestResult {
    init_logger();
    assert_rewrites_to!(
        "<p><a>Read <em>the</em> <strong>docs</strong></a></p>",
        &with_links(NOJS),
        "<p><a>Read <em>the</em> <strong>docs</strong></a></p>"
    );
    Ok(())
}

#[test]
fn test_anchor_text_entities_survive_flattening() -> TestResult {
    init_logger();
    assert_rewrites_to!(
        r#"<a href="https://example.com/?a=1&amp;b=2">Q&amp;A &mdash; <em>now</em></a>"#,
        &with_links(NOJS),
        "<a href=\"https://nojs.example.com/?a=1&amp;b=2\">Q&amp;A \u{2014} now</a>"
    );
    Ok(())
}

#[test]
fn test_bare_ampersand_in_href() -> TestResult {
    init_logger();
    assert_rewrites_to!(
        r#"<a href="https://example.com/?a=1&b=2">x</a>"#,
        &with_links(NOJS),
        r#"<a href="https://nojs.example.com/?a=1&amp;b=2">x</a>"#
    );
    Ok(())
}

#[test]
fn test_only_first_duplicate_href_is_rewritten() -> TestResult {
    init_logger();
    assert_rewrites_to!(
        r#"<a href="https://example.com/1" href="https://example.com/2">x</a>"#,
        &with_links(NOJS),
        r#"<a href="https://nojs.example.com/1" href="https://example.com/2">x</a>"#
    );
    Ok(())
}

#[test]
fn test_rules_cascade() -> TestResult {
    init_logger();
    assert_eq!(substitute("a", &[]), "a");
    assert_rewrites_to!(
        r#"<a href="a">x</a>"#,
        &with_links(&[("a", "b"), ("b", "c")]),
        r#"<a href="c">x</a>"#
    );
    Ok(())
}

#[test]
fn test_undecodable_anchor_is_dropped() -> TestResult {
    init_logger();
    let out = rewrite_html(
        r#"<p>a</p><a href="https://example.com">&#xZZ;</a><p>b</p>"#,
        &with_links(NOJS),
    )?;
    assert_eq!(out.html, "<p>a</p><p>b</p>");
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.diagnostics[0].element, "a");
    Ok(())
}

#[test]
fn test_unknown_entities_in_anchor_are_kept_literally() -> TestResult {
    init_logger();
    assert_rewrites_to!(
        r#"<p><a href="https://example.com/?q=1&utm;">AT&T; rocks</a></p>"#,
        &with_links(NOJS),
        r#"<p><a href="https://nojs.example.com/?q=1&amp;utm;">AT&amp;T; rocks</a></p>"#
    );
    Ok(())
}

#[test]
fn test_unclosed_anchor_is_dropped() -> TestResult {
    init_logger();
    let out = rewrite_html(
        r#"<p>a</p><a href="https://example.com">dangling"#,
        &with_links(NOJS),
    )?;
    assert_eq!(out.html, "<p>a</p>");
    assert_eq!(out.diagnostics.len(), 1);
    Ok(())
}

#[test]
fn test_undecodable_anchor_passes_when_substitution_disabled() -> TestResult {
    init_logger();
    let source = r#"<p><a href="x">&#xZZ;</a></p>"#;
    let out = rewrite_html(source, &RewriteOptions::default())?;
    assert_eq!(out.html, source);
    assert!(out.is_clean());
    Ok(())
}
