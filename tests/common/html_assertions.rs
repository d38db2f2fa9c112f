/// Counts occurrences of `needle` in `html`.
pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// Assert that a rewrite succeeded and produced exactly `expected`
#[macro_export]
macro_rules! assert_rewrites_to {
    ($source:expr, $options:expr, $expected:expr) => {
        let out = ghost2hugo::rewrite_html($source, $options)?;
        assert_eq!(
            out.html, $expected,
            "unexpected rewrite of:\n{}",
            $source
        );
        assert!(
            out.diagnostics.is_empty(),
            "expected no dropped elements, got {:?}",
            out.diagnostics
        );
    };
}

/// Assert that every img start tag is immediately followed by its end tag
#[macro_export]
macro_rules! assert_images_closed {
    ($html:expr) => {
        let opened = $crate::common::html_assertions::count($html, "<img");
        let closed = $crate::common::html_assertions::count($html, "></img>");
        assert_eq!(
            opened, closed,
            "every <img> should be closed explicitly in:\n{}",
            $html
        );
    };
}
