//! Affiliation number to website lookup.

use std::collections::HashMap;

use crate::models::{Affiliation, AffiliationId};

/// Link target used when an affiliation has no website.
pub const PLACEHOLDER_HREF: &str = "#";

/// Maps affiliation numbers to website URLs.
///
/// Affiliations without a website map to [`PLACEHOLDER_HREF`], as do lookups
/// of numbers that were never listed, so link markup never needs a branch.
#[derive(Debug, Clone, Default)]
pub struct AffiliationIndex {
    websites: HashMap<AffiliationId, String>,
}

impl AffiliationIndex {
    pub fn build(affiliations: Option<&[Affiliation]>) -> Self {
        let websites = affiliations
            .unwrap_or_default()
            .iter()
            .map(|aff| {
                let website = aff
                    .website
                    .as_deref()
                    .filter(|w| !w.is_empty())
                    .unwrap_or(PLACEHOLDER_HREF);
                (aff.number.clone(), website.to_string())
            })
            .collect();
        Self { websites }
    }

    /// Website for `id`, or the placeholder.
    pub fn website(&self, id: &AffiliationId) -> &str {
        self.websites
            .get(id)
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_HREF)
    }

    pub fn contains(&self, id: &AffiliationId) -> bool {
        self.websites.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.websites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.websites.is_empty()
    }
}
