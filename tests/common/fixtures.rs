//! Post HTML in the shapes Ghost stores it.

/// An image card as the Ghost editor emits it.
pub fn image_card(src: &str) -> String {
    format!(
        r#"<figure class="kg-card kg-image-card kg-card-hascaption"><img src="{src}" class="kg-image" alt="" loading="lazy" width="1920" height="1280" srcset="{src} 600w, {src} 1920w" sizes="(min-width: 720px) 720px"><figcaption>A caption</figcaption></figure>"#
    )
}

/// The same card after rewriting.
pub fn image_card_rewritten(src: &str) -> String {
    format!(
        r#"<figure class="kg-card kg-image-card kg-card-hascaption"><img src="{src}" class="kg-image" alt="" loading="lazy" srcset="{src} 600w, {src} 1920w" sizes="(min-width: 720px) 720px"></img><figcaption>A caption</figcaption></figure>"#
    )
}

/// A paragraph with an external link, as pasted into the editor.
pub fn link_paragraph(href: &str, text: &str) -> String {
    format!(r#"<p>See <a href="{href}" rel="noopener noreferrer nofollow">{text}</a> for more.</p>"#)
}

/// A longer post mixing every element kind the rewriter cares about.
pub fn sample_post() -> String {
    let mut post = String::from("<h2 id=\"intro\">Intro</h2><p>Fish &amp; chips &mdash; a <strong>classic</strong>.</p>");
    post.push_str(&image_card("https://blog.example.com/content/images/2024/08/a.jpg"));
    post.push_str(&link_paragraph("https://example.com/recipes", "recipes"));
    post.push_str("<!--kg-card-begin: html--><div class=\"embed\"><a>anchor without attributes <em>kept</em></a></div><!--kg-card-end: html-->");
    post.push_str("<ul><li>one<li>two</ul><p><img src=\"/b.png\"/></p>");
    post
}
