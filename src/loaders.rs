//! Page bootstrap: fetch each section's document and render it into the page.
//!
//! Sections are independent. Their fetches run concurrently and each may
//! fail on its own; a failure is logged and only that section is skipped.
//! A missing container or a missing top-level key is not a failure, the
//! section is simply left as the host page had it.

use std::fmt;

use serde::de::DeserializeOwned;

use crate::fetch::{fetch_json, ContentSource, ResourcePaths};
use crate::layout::{Layout, WriteMode};
use crate::models::{ReadingListDocument, ScheduleDocument, TeamDocument};
use crate::page::Page;
use crate::render;

/// Page sections filled from fetched documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Roster,
    Schedule,
    ReadingList,
    Contact,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Section::Roster => "organizers",
            Section::Schedule => "schedule",
            Section::ReadingList => "reading list",
            Section::Contact => "contact",
        })
    }
}

/// Documents fetched for one page load. `None` means the fetch failed or
/// the layout has no such section.
#[derive(Debug, Default)]
pub struct SectionDocuments {
    pub roster: Option<TeamDocument>,
    pub schedule: Option<ScheduleDocument>,
    pub reading_list: Option<ReadingListDocument>,
    pub contact: Option<TeamDocument>,
}

/// Which containers a page load wrote to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub roster: bool,
    pub affiliations: bool,
    pub schedule: bool,
    pub reading_list: bool,
    pub contact: bool,
}

impl RenderReport {
    pub fn sections_rendered(&self) -> usize {
        [self.roster, self.schedule, self.reading_list, self.contact]
            .iter()
            .filter(|r| **r)
            .count()
    }
}

async fn load<T: DeserializeOwned>(
    source: &dyn ContentSource,
    path: &str,
    section: Section,
) -> Option<T> {
    match fetch_json(source, path).await {
        Ok(doc) => {
            tracing::debug!("Loaded {} from {}", section, path);
            Some(doc)
        }
        Err(e) => {
            tracing::error!("Error loading {}: {}", section, e);
            None
        }
    }
}

/// Fetch every section the layout uses, concurrently.
pub async fn fetch_sections(
    source: &dyn ContentSource,
    layout: Layout,
    paths: &ResourcePaths,
) -> SectionDocuments {
    let wants_contact = layout.bindings().contact.is_some();

    let contact = async {
        if wants_contact {
            load::<TeamDocument>(source, &paths.team, Section::Contact).await
        } else {
            None
        }
    };

    let (roster, schedule, reading_list, contact) = tokio::join!(
        load::<TeamDocument>(source, &paths.team, Section::Roster),
        load::<ScheduleDocument>(source, &paths.schedule, Section::Schedule),
        load::<ReadingListDocument>(source, &paths.reading_list, Section::ReadingList),
        contact,
    );

    SectionDocuments {
        roster,
        schedule,
        reading_list,
        contact,
    }
}

fn skip(section: Section, reason: &str) -> bool {
    tracing::debug!("Skipping {}: {}", section, reason);
    false
}

/// Render the organizer roster. Returns whether the roster container was written.
pub fn render_roster(page: &mut Page, layout: Layout, team: &TeamDocument) -> bool {
    let bindings = layout.bindings();
    if !page.has(bindings.roster) {
        return skip(Section::Roster, "no container");
    }
    let Some(organizers) = team.organizers.as_deref() else {
        return skip(Section::Roster, "document has no organizers");
    };
    let affiliations = team.affiliations.as_deref();

    match layout {
        Layout::V1 => page.set_inner_html(
            bindings.roster,
            render::organizers_grid(organizers, affiliations),
        ),
        Layout::V2 => {
            let index = render::AffiliationIndex::build(affiliations);
            page.set_inner_html(bindings.roster, render::presenter_cards(organizers, &index))
        }
    }
}

/// Render the standalone affiliation list, for layouts that have one.
///
/// Only written when the roster container is present as well.
pub fn render_affiliations(page: &mut Page, layout: Layout, team: &TeamDocument) -> bool {
    let bindings = layout.bindings();
    let Some(selector) = bindings.affiliations else {
        return false;
    };
    if !page.has(bindings.roster) {
        return skip(Section::Roster, "no container");
    }
    if team.organizers.is_none() {
        return skip(Section::Roster, "document has no organizers");
    }
    match team.affiliations.as_deref().and_then(render::affiliation_list) {
        Some(html) => page.set_inner_html(selector, html),
        None => false,
    }
}

/// Render the schedule in the layout's style.
pub fn render_schedule(page: &mut Page, layout: Layout, schedule: &ScheduleDocument) -> bool {
    let selector = layout.bindings().schedule;
    if !page.has(selector) {
        return skip(Section::Schedule, "no container");
    }

    let html = match layout {
        Layout::V1 => schedule
            .days()
            .map(|days| render::schedule_tables(schedule.tutorial_info.as_ref(), days)),
        Layout::V2 => schedule.sessions().map(render::outline),
    };

    match html {
        Some(html) => page.set_inner_html(selector, html),
        None => skip(Section::Schedule, "document has no entries for this layout"),
    }
}

/// Render the reading list, appending or replacing per layout.
pub fn render_reading_list(
    page: &mut Page,
    layout: Layout,
    reading_list: &ReadingListDocument,
) -> bool {
    let bindings = layout.bindings();
    if !page.has(bindings.reading_list) {
        return skip(Section::ReadingList, "no container");
    }
    let Some(papers) = reading_list.papers.as_deref() else {
        return skip(Section::ReadingList, "document has no papers");
    };

    match bindings.reading_list_mode {
        WriteMode::Append => page.append_inner_html(
            bindings.reading_list,
            &render::papers_list(papers, Some("papers-list")),
        ),
        WriteMode::Replace => {
            page.set_inner_html(bindings.reading_list, render::papers_list(papers, None))
        }
    }
}

/// Render the primary contact card.
pub fn render_contact(page: &mut Page, layout: Layout, team: &TeamDocument) -> bool {
    let Some(selector) = layout.bindings().contact else {
        return false;
    };
    if !page.has(selector) {
        return skip(Section::Contact, "no container");
    }
    let Some(organizers) = team.organizers.as_deref() else {
        return skip(Section::Contact, "document has no organizers");
    };

    match render::contact_card(organizers, team.affiliations.as_deref()) {
        Some(html) => page.set_inner_html(selector, html),
        None => skip(Section::Contact, "no organizers listed"),
    }
}

/// Render every fetched section into `page`.
pub fn apply(page: &mut Page, layout: Layout, docs: &SectionDocuments) -> RenderReport {
    let mut report = RenderReport::default();

    if let Some(team) = &docs.roster {
        report.roster = render_roster(page, layout, team);
        report.affiliations = render_affiliations(page, layout, team);
    }
    if let Some(schedule) = &docs.schedule {
        report.schedule = render_schedule(page, layout, schedule);
    }
    if let Some(reading_list) = &docs.reading_list {
        report.reading_list = render_reading_list(page, layout, reading_list);
    }
    if let Some(team) = &docs.contact {
        report.contact = render_contact(page, layout, team);
    }

    report
}

/// One full page load: fetch all sections, render them into `host_html`,
/// and return the resulting document.
pub async fn load_page(
    source: &dyn ContentSource,
    layout: Layout,
    paths: &ResourcePaths,
    host_html: &str,
) -> (String, RenderReport) {
    let docs = fetch_sections(source, layout, paths).await;

    let mut page = Page::parse(host_html);
    let report = apply(&mut page, layout, &docs);
    tracing::info!(
        "Rendered {} of the page's sections from {}",
        report.sections_rendered(),
        source.location()
    );
    (page.to_html(), report)
}
