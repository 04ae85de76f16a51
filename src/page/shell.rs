//! Built-in host pages, used when no host HTML is supplied.

use askama::Template;

use crate::layout::Layout;

/// Values substituted into the built-in host page.
#[derive(Debug, Clone)]
pub struct ShellOptions {
    pub title: String,
    /// BibTeX shown in the citation block; the block is omitted when `None`.
    pub citation: Option<String>,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            title: "Tutorial".to_string(),
            citation: None,
        }
    }
}

#[derive(Template)]
#[template(path = "page_v1.html")]
struct ClassicShell<'a> {
    title: &'a str,
    citation: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "page_v2.html")]
struct OutlineShell<'a> {
    title: &'a str,
    citation: Option<&'a str>,
}

/// Render the built-in host page for `layout`.
pub fn render_shell(layout: Layout, options: &ShellOptions) -> Result<String, askama::Error> {
    let title = options.title.as_str();
    let citation = options.citation.as_deref();
    match layout {
        Layout::V1 => ClassicShell { title, citation }.render(),
        Layout::V2 => OutlineShell { title, citation }.render(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;

    #[test]
    fn test_v1_shell_has_every_bound_container() {
        let html = render_shell(Layout::V1, &ShellOptions::default()).unwrap();
        let page = Page::parse(&html);
        let bindings = Layout::V1.bindings();
        assert!(page.has(bindings.roster));
        assert!(page.has(bindings.schedule));
        assert!(page.has(bindings.reading_list));
        assert!(page.has("#navToggle"));
        assert!(page.has("#backToTop"));
        // No citation configured, so no copy button
        assert!(!page.has("#copyBibtexBtn"));
    }

    #[test]
    fn test_v2_shell_has_every_bound_container() {
        let html = render_shell(Layout::V2, &ShellOptions::default()).unwrap();
        let page = Page::parse(&html);
        let bindings = Layout::V2.bindings();
        assert!(page.has(bindings.roster));
        assert!(page.has(bindings.affiliations.unwrap()));
        assert!(page.has(bindings.schedule));
        assert!(page.has(bindings.reading_list));
        assert!(page.has(bindings.contact.unwrap()));
    }

    #[test]
    fn test_citation_is_escaped_and_copyable() {
        let options = ShellOptions {
            title: "Graphs & Things".to_string(),
            citation: Some("@misc{g, title={<Graphs>}}".to_string()),
        };
        let html = render_shell(Layout::V1, &options).unwrap();
        assert!(html.contains("Graphs &amp; Things"));

        let page = Page::parse(&html);
        assert!(page.has("#copyBibtexBtn"));
        assert_eq!(page.text("#bibtexCode").unwrap(), "@misc{g, title={<Graphs>}}");
    }
}
