//! Team roster document (`team.json`).

use std::fmt;

use serde::{Deserialize, Deserializer};

/// Affiliation reference number.
///
/// Documents use both JSON numbers and strings for these, and the page has
/// always treated `1` and `"1"` as the same reference, so both normalize to
/// the same textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AffiliationId(String);

impl AffiliationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AffiliationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u32> for AffiliationId {
    fn from(n: u32) -> Self {
        Self(n.to_string())
    }
}

impl From<&str> for AffiliationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl<'de> Deserialize<'de> for AffiliationId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => AffiliationId(number_key(&n)),
            Raw::Text(s) => AffiliationId(s),
        })
    }
}

/// Text form of a numeric id. Integral floats print as integers, so `1.0`
/// and `1` are the same key.
fn number_key(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
        _ => n.to_string(),
    }
}

/// An institution referenced by organizers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Affiliation {
    pub number: AffiliationId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub website: Option<String>,
}

/// Embedded `{number}` reference used by the older organizer schema.
#[derive(Debug, Clone, Deserialize)]
struct AffiliationRef {
    number: AffiliationId,
}

/// Organizer as it appears on the wire, in either schema shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrganizerRecord {
    #[serde(default)]
    name: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    website: Option<String>,
    #[serde(default)]
    affiliation_numbers: Option<Vec<AffiliationId>>,
    #[serde(default)]
    affiliations: Option<Vec<AffiliationRef>>,
    #[serde(default)]
    affiliation: Option<String>,
}

/// A person shown in the roster, with affiliations in canonical form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "OrganizerRecord")]
pub struct Organizer {
    pub name: String,
    pub image: String,
    pub website: Option<String>,
    /// Ordered affiliation references.
    pub affiliation_numbers: Vec<AffiliationId>,
    /// Free-text affiliation, used when no numbered reference resolves.
    pub affiliation: Option<String>,
}

impl From<OrganizerRecord> for Organizer {
    fn from(record: OrganizerRecord) -> Self {
        // An explicit list wins over embedded refs even when empty.
        let affiliation_numbers = match (record.affiliation_numbers, record.affiliations) {
            (Some(numbers), _) => numbers,
            (None, Some(refs)) => refs.into_iter().map(|r| r.number).collect(),
            (None, None) => Vec::new(),
        };

        Self {
            name: record.name,
            image: record.image,
            website: record.website.filter(|w| !w.is_empty()),
            affiliation_numbers,
            affiliation: record.affiliation.filter(|a| !a.is_empty()),
        }
    }
}

/// Contents of `team.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamDocument {
    #[serde(default)]
    pub organizers: Option<Vec<Organizer>>,
    #[serde(default)]
    pub affiliations: Option<Vec<Affiliation>>,
}
