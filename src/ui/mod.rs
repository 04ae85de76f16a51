//! Page UI affordances, modeled as small state machines bound to a host page.

pub mod back_to_top;
pub mod clipboard;
pub mod nav;
pub mod scroll;

pub use back_to_top::{BackToTop, ScrollTo};
pub use clipboard::{
    Clipboard, ClipboardError, CommandClipboard, CopyButton, CopyOutcome, Osc52Clipboard,
};
pub use nav::{ClickTarget, NavMenu};
pub use scroll::ScrollAnimator;

use crate::layout::Layout;
use crate::page::Page;

/// Every behavior a page binds on load. Each is `None` when the page lacks
/// the elements it needs.
#[derive(Debug, Clone)]
pub struct UiBindings {
    pub nav: Option<NavMenu>,
    pub back_to_top: Option<BackToTop>,
    pub scroll: Option<ScrollAnimator>,
    pub copy: Option<CopyButton>,
}

impl UiBindings {
    pub fn bind(page: &Page, layout: Layout) -> Self {
        let bindings = layout.bindings();
        Self {
            nav: NavMenu::bind(page, bindings.nav_closes_on_outside_click),
            back_to_top: BackToTop::bind(page),
            scroll: ScrollAnimator::bind(page),
            copy: CopyButton::bind(page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{render_shell, ShellOptions};

    #[test]
    fn test_v1_shell_binds_everything() {
        let options = ShellOptions {
            citation: Some("@misc{x}".to_string()),
            ..Default::default()
        };
        let page = Page::parse(&render_shell(Layout::V1, &options).unwrap());
        let ui = UiBindings::bind(&page, Layout::V1);
        assert!(ui.nav.is_some());
        assert!(ui.back_to_top.is_some());
        assert!(ui.scroll.is_some());
        assert_eq!(ui.copy.unwrap().text(), "@misc{x}");
    }

    #[test]
    fn test_bare_page_binds_nothing() {
        let ui = UiBindings::bind(&Page::parse("<html><body></body></html>"), Layout::V2);
        assert!(ui.nav.is_none());
        assert!(ui.back_to_top.is_none());
        assert!(ui.scroll.is_none());
        assert!(ui.copy.is_none());
    }
}
