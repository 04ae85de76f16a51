//! Organizer roster and affiliation legend markup.

use crate::models::{Affiliation, AffiliationId, Organizer};
use crate::utils::{external_link, html_escape};

use super::affiliations::AffiliationIndex;

/// Organizer name, linked to their website when they have one.
fn name_markup(organizer: &Organizer, class: Option<&str>) -> String {
    let name = html_escape(&organizer.name);
    match organizer.website.as_deref() {
        Some(website) => external_link(website, class, &name),
        None => name,
    }
}

fn affiliation_links(numbers: &[AffiliationId], index: &AffiliationIndex, class: &str) -> Vec<String> {
    numbers
        .iter()
        .map(|num| {
            external_link(
                index.website(num),
                Some(class),
                &html_escape(num.as_str()),
            )
        })
        .collect()
}

/// Superscripted affiliation links, each number in its own `<sup>`.
///
/// Empty when the organizer has no affiliation numbers.
pub fn superscripts(numbers: &[AffiliationId], index: &AffiliationIndex) -> String {
    affiliation_links(numbers, index, "affiliation-link")
        .into_iter()
        .map(|link| format!("<sup>{}</sup>", link))
        .collect::<Vec<_>>()
        .join(",")
}

/// Photo grid plus affiliation legend, for a single roster container.
pub fn organizers_grid(organizers: &[Organizer], affiliations: Option<&[Affiliation]>) -> String {
    let index = AffiliationIndex::build(affiliations);

    let items: String = organizers
        .iter()
        .map(|org| {
            format!(
                r#"<div class="organizer-item"><img src="{}" alt="{}"><div class="organizer-name-with-sup">{}{}</div></div>"#,
                html_escape(&org.image),
                html_escape(&org.name),
                name_markup(org, Some("organizer-name-link")),
                superscripts(&org.affiliation_numbers, &index)
            )
        })
        .collect();

    let legend = affiliations
        .map(|affs| {
            let entries: Vec<String> = affs
                .iter()
                .map(|aff| {
                    format!(
                        r#"<span class="affiliation"><sup>{}</sup>{}</span>"#,
                        html_escape(aff.number.as_str()),
                        affiliation_name(aff, Some("affiliation-name-link"))
                    )
                })
                .collect();
            format!(r#"<div class="affiliations">{}</div>"#, entries.join(" "))
        })
        .unwrap_or_default();

    format!(r#"<div class="organizers-grid">{}</div>{}"#, items, legend)
}

/// Presenter cards, one per organizer.
///
/// All of a presenter's references share one `<sup>`, placed after the name.
pub fn presenter_cards(organizers: &[Organizer], index: &AffiliationIndex) -> String {
    organizers
        .iter()
        .map(|org| {
            let refs = affiliation_links(
                &org.affiliation_numbers,
                index,
                "presenter-affiliation-ref",
            );
            let sup = if refs.is_empty() {
                String::new()
            } else {
                format!("<sup>{}</sup>", refs.join(","))
            };
            format!(
                r#"<div class="presenter-card"><img src="{}" alt="{}" class="presenter-photo" loading="lazy"><div class="presenter-name">{}{}</div></div>"#,
                html_escape(&org.image),
                html_escape(&org.name),
                name_markup(org, None),
                sup
            )
        })
        .collect()
}

/// Affiliation name, linked when a website exists.
pub(super) fn affiliation_name(aff: &Affiliation, class: Option<&str>) -> String {
    let name = html_escape(&aff.name);
    match aff.website.as_deref().filter(|w| !w.is_empty()) {
        Some(website) => external_link(website, class, &name),
        None => name,
    }
}

/// Standalone affiliation list, or `None` when there is nothing to list.
pub fn affiliation_list(affiliations: &[Affiliation]) -> Option<String> {
    if affiliations.is_empty() {
        return None;
    }

    let mut html = String::from(r#"<h3 class="subsection-title">Affiliations</h3>"#);
    for aff in affiliations {
        html.push_str(&format!(
            r#"<div class="affiliation-item"><span class="affiliation-number"><sup>{}</sup></span>{}</div>"#,
            html_escape(aff.number.as_str()),
            affiliation_name(aff, None)
        ));
    }
    Some(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamDocument;

    fn scenario_team() -> TeamDocument {
        serde_json::from_str(
            r#"{
                "organizers": [{"name": "A", "image": "a.jpg", "affiliationNumbers": [1, 2]}],
                "affiliations": [
                    {"number": 1, "name": "X", "website": "https://x.test"},
                    {"number": 2, "name": "Y"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_superscript_links_resolve_or_fall_back() {
        let team = scenario_team();
        let html = organizers_grid(
            team.organizers.as_deref().unwrap(),
            team.affiliations.as_deref(),
        );

        let first = html.find(r#"<sup><a href="https://x.test" class="affiliation-link""#);
        let second = html.find(r##"<sup><a href="#" class="affiliation-link""##);
        assert!(first.is_some());
        assert!(second.is_some());
        assert!(first < second);
        assert!(html.contains("</sup>,<sup>"));
    }

    #[test]
    fn test_no_affiliations_no_sup() {
        let organizers: Vec<Organizer> = serde_json::from_str(
            r#"[{"name": "Solo", "image": "s.jpg", "website": "https://solo.test"}]"#,
        )
        .unwrap();
        let index = AffiliationIndex::build(None);

        let grid = organizers_grid(&organizers, None);
        assert!(!grid.contains("<sup>"));
        let cards = presenter_cards(&organizers, &index);
        assert!(!cards.contains("<sup>"));
        assert!(cards.contains(r#"<a href="https://solo.test" target="_blank" rel="noopener noreferrer">Solo</a>"#));
    }

    #[test]
    fn test_name_without_website_is_plain() {
        let team = scenario_team();
        let html = organizers_grid(team.organizers.as_deref().unwrap(), None);
        assert!(html.contains(r#"<div class="organizer-name-with-sup">A<sup>"#));
        assert!(!html.contains("organizer-name-link"));
    }

    #[test]
    fn test_legend_links_only_with_website() {
        let team = scenario_team();
        let html = organizers_grid(
            team.organizers.as_deref().unwrap(),
            team.affiliations.as_deref(),
        );
        assert!(html.contains(r#"<span class="affiliation"><sup>1</sup><a href="https://x.test" class="affiliation-name-link""#));
        assert!(html.contains(r#"<span class="affiliation"><sup>2</sup>Y</span>"#));
    }

    #[test]
    fn test_presenter_refs_share_one_sup() {
        let team = scenario_team();
        let index = AffiliationIndex::build(team.affiliations.as_deref());
        let html = presenter_cards(team.organizers.as_deref().unwrap(), &index);
        assert_eq!(html.matches("<sup>").count(), 1);
        assert!(html.contains(r##"class="presenter-affiliation-ref" target="_blank" rel="noopener noreferrer">1</a>,<a href="#""##));
    }

    #[test]
    fn test_affiliation_list() {
        let team = scenario_team();
        let html = affiliation_list(team.affiliations.as_deref().unwrap()).unwrap();
        assert!(html.starts_with(r#"<h3 class="subsection-title">Affiliations</h3>"#));
        assert_eq!(html.matches("affiliation-item").count(), 2);
        assert!(affiliation_list(&[]).is_none());
    }

    #[test]
    fn test_names_are_escaped() {
        let organizers: Vec<Organizer> =
            serde_json::from_str(r#"[{"name": "<b>Eve</b>", "image": "e.jpg"}]"#).unwrap();
        let html = organizers_grid(&organizers, None);
        assert!(html.contains("&lt;b&gt;Eve&lt;/b&gt;"));
        assert!(!html.contains("<b>Eve"));
    }
}
