//! Page layout variants and the containers each one binds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How generated markup is written into a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace whatever the container holds.
    Replace,
    /// Keep existing content and add after it.
    Append,
}

/// Host page variant.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Organizer photos, day/session schedule tables, appended reading list.
    #[default]
    V1,
    /// Presenter cards, nested session outline, contact card.
    V2,
}

/// Container selectors and behaviors for one layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bindings {
    pub roster: &'static str,
    /// Separate affiliation legend container, if the layout has one.
    pub affiliations: Option<&'static str>,
    pub schedule: &'static str,
    pub reading_list: &'static str,
    pub reading_list_mode: WriteMode,
    pub contact: Option<&'static str>,
    /// Whether a click outside the nav closes an open menu.
    pub nav_closes_on_outside_click: bool,
}

const V1_BINDINGS: Bindings = Bindings {
    roster: "#organizers-photos",
    affiliations: None,
    schedule: "#scheduleContent",
    reading_list: ".reading-list",
    reading_list_mode: WriteMode::Append,
    contact: None,
    nav_closes_on_outside_click: true,
};

const V2_BINDINGS: Bindings = Bindings {
    roster: "#presentersGrid",
    affiliations: Some("#affiliationsList"),
    schedule: "#outlineContent",
    reading_list: "#readingListContent",
    reading_list_mode: WriteMode::Replace,
    contact: Some("#contactContent"),
    nav_closes_on_outside_click: false,
};

impl Layout {
    pub fn bindings(self) -> Bindings {
        match self {
            Layout::V1 => V1_BINDINGS,
            Layout::V2 => V2_BINDINGS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Layout::V1 => "v1",
            Layout::V2 => "v2",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v1" | "1" => Ok(Layout::V1),
            "v2" | "2" => Ok(Layout::V2),
            other => Err(format!("unknown layout '{}' (expected v1 or v2)", other)),
        }
    }
}
