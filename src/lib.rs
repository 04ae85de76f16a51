//! tutorial-page - render tutorial and conference pages.
//!
//! Fetches the page's JSON documents (team roster, schedule, reading list),
//! renders each into the matching container of a host HTML page, and models
//! the page's UI affordances.

pub mod cli;
pub mod config;
pub mod fetch;
pub mod inspect;
pub mod layout;
pub mod loaders;
pub mod models;
pub mod page;
pub mod render;
pub mod server;
pub mod ui;
pub mod utils;

pub use layout::Layout;
pub use loaders::{load_page, RenderReport};
pub use page::Page;
