//! Markup generation for each page section.
//!
//! Renderers are pure: documents in, HTML strings out. Text from documents
//! is always escaped; only the renderers' own tags are emitted raw.

pub mod affiliations;
pub mod contact;
pub mod reading_list;
pub mod roster;
pub mod schedule;

pub use affiliations::{AffiliationIndex, PLACEHOLDER_HREF};
pub use contact::contact_card;
pub use reading_list::papers_list;
pub use roster::{affiliation_list, organizers_grid, presenter_cards, superscripts};
pub use schedule::{outline, schedule_tables, tutorial_info};
