//! Reading list markup.

use crate::models::Paper;
use crate::utils::{external_link, html_escape};

/// Unordered list of paper links.
pub fn papers_list(papers: &[Paper], class: Option<&str>) -> String {
    let items: String = papers
        .iter()
        .map(|paper| {
            format!(
                "<li>{}</li>",
                external_link(paper.href(), None, &html_escape(&paper.title))
            )
        })
        .collect();

    match class {
        Some(class) => format!(r#"<ul class="{}">{}</ul>"#, class, items),
        None => format!("<ul>{}</ul>", items),
    }
}
