//! Mobile navigation menu.

use crate::page::Page;

pub const TOGGLE_SELECTOR: &str = "#navToggle";
pub const MENU_SELECTOR: &str = "#navMenu";
pub const LINK_SELECTOR: &str = ".nav-link";

/// Inline style of one hamburger icon bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyle {
    pub transform: &'static str,
    pub opacity: &'static str,
}

const CLOSED_ICON: [BarStyle; 3] = [
    BarStyle { transform: "none", opacity: "1" },
    BarStyle { transform: "none", opacity: "1" },
    BarStyle { transform: "none", opacity: "1" },
];

const OPEN_ICON: [BarStyle; 3] = [
    BarStyle { transform: "rotate(-45deg) translate(-5px, 6px)", opacity: "1" },
    BarStyle { transform: "none", opacity: "0" },
    BarStyle { transform: "rotate(45deg) translate(-5px, -6px)", opacity: "1" },
];

/// Where a document click landed, relative to the nav.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Toggle,
    Menu,
    Outside,
}

/// Open/closed state of the collapsible nav menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavMenu {
    active: bool,
    link_count: usize,
    close_on_outside_click: bool,
}

impl NavMenu {
    /// Bind to the page's nav, if it has a toggle button.
    pub fn bind(page: &Page, close_on_outside_click: bool) -> Option<Self> {
        if !page.has(TOGGLE_SELECTOR) || !page.has(MENU_SELECTOR) {
            return None;
        }
        Some(Self {
            active: false,
            link_count: page.count(LINK_SELECTOR),
            close_on_outside_click,
        })
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn link_count(&self) -> usize {
        self.link_count
    }

    /// Toggle button pressed.
    pub fn toggle(&mut self) {
        self.active = !self.active;
    }

    /// A nav link was followed.
    pub fn link_clicked(&mut self) {
        self.active = false;
    }

    /// A click anywhere in the document.
    pub fn document_clicked(&mut self, target: ClickTarget) {
        if self.close_on_outside_click && target == ClickTarget::Outside {
            self.active = false;
        }
    }

    /// Styles for the three icon bars in the current state.
    pub fn icon(&self) -> [BarStyle; 3] {
        if self.active {
            OPEN_ICON
        } else {
            CLOSED_ICON
        }
    }
}
