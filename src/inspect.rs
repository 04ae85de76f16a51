//! Report which containers and UI affordances a host page provides.

use serde::Serialize;

use crate::layout::Layout;
use crate::page::Page;
use crate::ui::UiBindings;

/// One container the layout writes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerStatus {
    pub section: &'static str,
    pub selector: &'static str,
    pub present: bool,
}

/// What a host page binds under a layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection {
    pub layout: Layout,
    pub containers: Vec<ContainerStatus>,
    /// Number of nav links, when the nav menu binds.
    pub nav_links: Option<usize>,
    pub back_to_top: bool,
    pub animated_elements: usize,
    pub citation: bool,
}

impl Inspection {
    pub fn missing_containers(&self) -> impl Iterator<Item = &ContainerStatus> {
        self.containers.iter().filter(|c| !c.present)
    }
}

pub fn inspect(page: &Page, layout: Layout) -> Inspection {
    let bindings = layout.bindings();

    let mut selectors = vec![("organizers", bindings.roster)];
    if let Some(affiliations) = bindings.affiliations {
        selectors.push(("affiliations", affiliations));
    }
    selectors.push(("schedule", bindings.schedule));
    selectors.push(("reading list", bindings.reading_list));
    if let Some(contact) = bindings.contact {
        selectors.push(("contact", contact));
    }

    let containers = selectors
        .into_iter()
        .map(|(section, selector)| ContainerStatus {
            section,
            selector,
            present: page.has(selector),
        })
        .collect();

    let ui = UiBindings::bind(page, layout);
    Inspection {
        layout,
        containers,
        nav_links: ui.nav.map(|n| n.link_count()),
        back_to_top: ui.back_to_top.is_some(),
        animated_elements: ui.scroll.map(|s| s.len()).unwrap_or(0),
        citation: ui.copy.is_some(),
    }
}
