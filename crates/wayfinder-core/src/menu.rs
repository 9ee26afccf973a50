//! Responsive menu visibility
//!
//! `Open` is the resting state: links render inline on wide viewports and stay
//! hidden behind the hamburger on narrow ones. `Closed` is the narrow-viewport
//! dropdown panel, dismissed by a click anywhere outside the menu container or by
//! widening the viewport past the breakpoint.

use serde::{Deserialize, Serialize};

/// Viewport width (logical px) at and above which the inline layout is used
pub const BREAKPOINT_PX: f64 = 768.0;

/// Menu visibility state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuState {
    #[default]
    Open,
    Closed,
}

/// Inputs to the menu state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuEvent {
    /// Hamburger control clicked
    Toggle,
    /// Viewport resized (also fired once at mount)
    Resize { width: f64 },
    /// Pointer click anywhere in the document
    Click { inside_menu: bool },
}

/// Icon shown on the hamburger control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    Bars,
    XMark,
}

impl MenuState {
    /// Transition using the default breakpoint
    pub fn on_event(self, event: MenuEvent) -> MenuState {
        self.on_event_with_breakpoint(event, BREAKPOINT_PX)
    }

    pub fn on_event_with_breakpoint(self, event: MenuEvent, breakpoint: f64) -> MenuState {
        match event {
            MenuEvent::Toggle => self.toggled(),
            MenuEvent::Resize { width } if width >= breakpoint => MenuState::Open,
            MenuEvent::Resize { .. } => self,
            MenuEvent::Click { inside_menu: false } if self == MenuState::Closed => {
                MenuState::Open
            }
            MenuEvent::Click { .. } => self,
        }
    }

    pub fn toggled(self) -> MenuState {
        match self {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        }
    }

    /// Whether the document click listener should be attached
    pub fn listens_for_outside_click(self) -> bool {
        self == MenuState::Closed
    }

    /// Event for a document click, `None` while no listener is attached
    ///
    /// A click on the hamburger counts as inside the menu: the control's own handler
    /// performs the toggle, so the same click must not also dismiss the dropdown.
    pub fn document_click(self, in_menu: bool, on_toggle: bool) -> Option<MenuEvent> {
        self.listens_for_outside_click().then_some(MenuEvent::Click {
            inside_menu: in_menu || on_toggle,
        })
    }

    /// Classes for the link list
    pub fn list_class(self) -> &'static str {
        match self {
            MenuState::Open => "nav-links nav-links-inline",
            MenuState::Closed => "nav-links nav-links-dropdown",
        }
    }

    pub fn toggle_icon(self) -> ToggleIcon {
        match self {
            MenuState::Open => ToggleIcon::Bars,
            MenuState::Closed => ToggleIcon::XMark,
        }
    }

    /// `aria-expanded` value for the hamburger control (dropdown shown)
    pub fn aria_expanded(self) -> &'static str {
        match self {
            MenuState::Open => "false",
            MenuState::Closed => "true",
        }
    }
}
