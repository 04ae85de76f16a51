//! Serialization of a parsed page with container writes applied.
//!
//! Each write is parsed as a fragment and grafted into a copy of the
//! document tree in place of the container's children. The result is then
//! serialized by html5ever through [`Html::html`], so markup outside the
//! containers (namespaced attributes, raw text, comments) is kept as parsed.

use scraper::{ElementRef, Html};

/// Serialize `html`, substituting the inner HTML of each target element.
pub(super) fn document(html: &Html, targets: &[(ElementRef<'_>, &str)]) -> String {
    let mut spliced = html.clone();
    for (element, content) in targets {
        let Some(mut container) = spliced.tree.get_mut(element.id()) else {
            continue;
        };

        while let Some(mut child) = container.first_child() {
            child.detach();
        }

        // A fragment parses to a document root holding one <html> wrapper
        let fragment = Html::parse_fragment(content);
        let grafted = container.append_subtree(fragment.tree).id();
        let wrapper = container
            .tree()
            .get(grafted)
            .and_then(|root| root.children().find(|c| c.value().is_element()))
            .map(|w| w.id());

        if let Some(wrapper) = wrapper {
            container.reparent_from_id_append(wrapper);
        }
        if let Some(mut root) = container.tree().get_mut(grafted) {
            root.detach();
        }
    }
    spliced.html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    fn round_trip(source: &str) -> String {
        document(&Html::parse_document(source), &[])
    }

    fn write(source: &str, selector: &str, content: &str) -> String {
        let html = Html::parse_document(source);
        let selector = Selector::parse(selector).unwrap();
        let target = html.select(&selector).next().unwrap();
        document(&html, &[(target, content)])
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let html = round_trip(r#"<html><body><img src="a.jpg" alt="A"><br></body></html>"#);
        assert!(html.contains(r#"<img src="a.jpg" alt="A"><br>"#));
        assert!(!html.contains("</img>"));
        assert!(!html.contains("</br>"));
    }

    #[test]
    fn test_script_text_is_not_escaped() {
        let html = round_trip("<html><head><script>if (a < b && c) {}</script></head></html>");
        assert!(html.contains("<script>if (a < b && c) {}</script>"));
    }

    #[test]
    fn test_comments_and_attribute_escaping() {
        let html = round_trip(r#"<html><body><!-- note --><a href="/?a=1&amp;b=&quot;2&quot;">x</a></body></html>"#);
        assert!(html.contains("<!-- note -->"));
        assert!(html.contains(r#"href="/?a=1&amp;b=&quot;2&quot;""#));
    }

    #[test]
    fn test_namespaced_attributes_survive() {
        let source = r##"<!DOCTYPE html><html xml:lang="en"><body>
            <svg><use xlink:href="#icon"></use></svg>
            <div id="grid"></div>
        </body></html>"##;
        let html = write(source, "#grid", "<p>x</p>");
        assert!(html.contains(r##"<use xlink:href="#icon"></use>"##));
        assert!(html.contains(r#"<div id="grid"><p>x</p></div>"#));
        assert_eq!(round_trip(source), Html::parse_document(source).html());
    }

    #[test]
    fn test_write_replaces_existing_children() {
        let html = write(
            r#"<html><body><ul id="list"><li>old</li></ul><p>after</p></body></html>"#,
            "#list",
            "<li>new &amp; <b>bold</b></li>",
        );
        assert!(html.contains(r#"<ul id="list"><li>new &amp; <b>bold</b></li></ul><p>after</p>"#));
        assert!(!html.contains("old"));
    }

    #[test]
    fn test_empty_write_clears_container() {
        let html = write(
            r#"<html><body><div id="c"><span>x</span></div></body></html>"#,
            "#c",
            "",
        );
        assert!(html.contains(r#"<div id="c"></div>"#));
    }
}
