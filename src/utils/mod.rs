//! Shared utility functions.
//!
//! - `html`: HTML escaping and link markup helpers

mod html;

pub use html::{external_link, html_escape};
