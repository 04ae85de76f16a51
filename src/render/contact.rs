//! Primary contact card.

use crate::models::{Affiliation, Organizer};
use crate::utils::{external_link, html_escape};

use super::roster::affiliation_name;

const INQUIRY_NOTE: &str = "For inquiries about the tutorial, please contact the organizers via the email addresses provided on their personal websites.";

/// Affiliation line for the contact: the first numbered affiliation if it
/// resolves, else the free-text affiliation, else nothing.
fn contact_affiliation(contact: &Organizer, affiliations: Option<&[Affiliation]>) -> Option<String> {
    let resolved = contact.affiliation_numbers.first().and_then(|first| {
        affiliations
            .unwrap_or_default()
            .iter()
            .find(|aff| &aff.number == first)
    });

    match resolved {
        Some(aff) => Some(affiliation_name(aff, None)),
        None => contact.affiliation.as_deref().map(html_escape),
    }
}

/// Card for the first organizer, or `None` when there are no organizers.
pub fn contact_card(organizers: &[Organizer], affiliations: Option<&[Affiliation]>) -> Option<String> {
    let contact = organizers.first()?;

    let name = html_escape(&contact.name);
    let name = match contact.website.as_deref() {
        Some(website) => external_link(website, None, &name),
        None => name,
    };
    let org_line = contact_affiliation(contact, affiliations)
        .map(|aff| format!(r#"<p class="contact-org">{}</p>"#, aff))
        .unwrap_or_default();

    Some(format!(
        r#"<div class="contact-card"><div class="contact-role">Primary Contact</div><h3 class="contact-name">{}</h3>{}<p class="contact-note">{}</p></div>"#,
        name, org_line, INQUIRY_NOTE
    ))
}
