//! Navigation menu state.
//!
//! The mobile menu is a two-state machine driven only by user actions:
//!
//! ```text
//!              toggle
//!  Collapsed ----------> Expanded
//!      ^                    |
//!      +---- toggle --------+
//!      +---- select link ---+
//! ```
//!
//! The state does not know about the viewport. Resizing never changes it,
//! and at or above [`WIDE_BREAKPOINT_PX`] it has no visible effect because
//! the full link list is always shown. [`nav_visibility`] is the only place
//! where state and viewport meet.
//!
//! The inline menu script in [`crate::components`] applies the same
//! transitions in the browser.

use serde::{Deserialize, Serialize};

/// Viewport width (CSS pixels) from which the nav is always expanded.
pub const WIDE_BREAKPOINT_PX: u32 = 768;

/// Open/closed state of the collapsible nav.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuState {
    /// Menu closed (initial state)
    #[default]
    Collapsed,
    /// Menu open
    Expanded,
}

/// User actions the menu reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// The hamburger control was activated
    Toggle,
    /// A link in the collapsible list was activated (target may not exist)
    SelectLink(String),
}

impl MenuState {
    /// `true` when expanded.
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Expanded)
    }

    /// Flip the state.
    pub fn toggle(self) -> Self {
        match self {
            MenuState::Collapsed => MenuState::Expanded,
            MenuState::Expanded => MenuState::Collapsed,
        }
    }

    /// Activating any link closes the menu. The target is not checked.
    pub fn select_link(self, _href: &str) -> Self {
        MenuState::Collapsed
    }

    /// Apply one event.
    pub fn apply(self, event: &MenuEvent) -> Self {
        match event {
            MenuEvent::Toggle => self.toggle(),
            MenuEvent::SelectLink(href) => self.select_link(href),
        }
    }

    /// Value used for the `data-menu` attribute and the inline script.
    pub fn as_str(self) -> &'static str {
        match self {
            MenuState::Collapsed => "collapsed",
            MenuState::Expanded => "expanded",
        }
    }
}

impl From<bool> for MenuState {
    fn from(open: bool) -> Self {
        if open {
            MenuState::Expanded
        } else {
            MenuState::Collapsed
        }
    }
}

/// Narrow or wide, relative to [`WIDE_BREAKPOINT_PX`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Below the breakpoint: hamburger + collapsible list
    Narrow,
    /// At or above the breakpoint: full link list
    Wide,
}

/// A viewport, reduced to the one dimension the layout cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    /// Width in CSS pixels
    pub width: u32,
}

impl Viewport {
    /// Viewport of the given width.
    pub fn new(width: u32) -> Self {
        Self { width }
    }

    /// Which side of the breakpoint this viewport is on.
    pub fn layout(self) -> Layout {
        if self.width >= WIDE_BREAKPOINT_PX {
            Layout::Wide
        } else {
            Layout::Narrow
        }
    }
}

/// What the nav bar shows for a given state and viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavVisibility {
    /// Inline link list in the bar itself
    pub full_links: bool,
    /// Hamburger control
    pub toggle_control: bool,
    /// Dropdown link list under the bar
    pub collapsible_links: bool,
}

/// Resolve visibility of the nav parts. Mirrors the `@media` rules in
/// [`crate::styles::SITE_CSS`].
pub fn nav_visibility(state: MenuState, viewport: Viewport) -> NavVisibility {
    match viewport.layout() {
        Layout::Wide => NavVisibility {
            full_links: true,
            toggle_control: false,
            collapsible_links: false,
        },
        Layout::Narrow => NavVisibility {
            full_links: false,
            toggle_control: true,
            collapsible_links: state.is_open(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTHS: [u32; 9] = [0, 320, 375, 640, 767, 768, 1024, 1440, 3840];

    #[test]
    fn starts_collapsed() {
        assert_eq!(MenuState::default(), MenuState::Collapsed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn even_number_of_toggles_restores_initial_state() {
        for n in (0..20).step_by(2) {
            let state = (0..n).fold(MenuState::default(), |s, _| s.toggle());
            assert_eq!(state, MenuState::Collapsed, "after {} toggles", n);
        }
    }

    #[test]
    fn odd_number_of_toggles_opens() {
        for n in (1..20).step_by(2) {
            let state = (0..n).fold(MenuState::default(), |s, _| s.toggle());
            assert!(state.is_open(), "after {} toggles", n);
        }
    }

    #[test]
    fn selecting_any_link_closes_menu() {
        for href in ["#home", "#contact", "#does-not-exist", "", "/home"] {
            let open = MenuState::Expanded;
            assert_eq!(open.select_link(href), MenuState::Collapsed);
            assert_eq!(
                open.apply(&MenuEvent::SelectLink(href.to_string())),
                MenuState::Collapsed
            );
        }
    }

    #[test]
    fn selecting_link_while_collapsed_stays_collapsed() {
        assert_eq!(MenuState::Collapsed.select_link("#about"), MenuState::Collapsed);
    }

    #[test]
    fn event_sequence() {
        let events = [
            MenuEvent::Toggle,
            MenuEvent::SelectLink("#team".into()),
            MenuEvent::Toggle,
            MenuEvent::Toggle,
            MenuEvent::Toggle,
        ];
        let states: Vec<_> = events
            .iter()
            .scan(MenuState::default(), |s, e| {
                *s = s.apply(e);
                Some(*s)
            })
            .collect();
        assert_eq!(
            states,
            vec![
                MenuState::Expanded,
                MenuState::Collapsed,
                MenuState::Expanded,
                MenuState::Collapsed,
                MenuState::Expanded,
            ]
        );
    }

    #[test]
    fn breakpoint_boundary() {
        assert_eq!(Viewport::new(WIDE_BREAKPOINT_PX - 1).layout(), Layout::Narrow);
        assert_eq!(Viewport::new(WIDE_BREAKPOINT_PX).layout(), Layout::Wide);
    }

    #[test]
    fn wide_viewports_always_show_full_links() {
        for width in WIDTHS.iter().copied().filter(|w| *w >= WIDE_BREAKPOINT_PX) {
            for state in [MenuState::Collapsed, MenuState::Expanded] {
                let vis = nav_visibility(state, Viewport::new(width));
                assert!(vis.full_links, "width {} state {:?}", width, state);
                assert!(!vis.collapsible_links);
                assert!(!vis.toggle_control);
            }
        }
    }

    #[test]
    fn narrow_viewports_show_collapsible_iff_open() {
        for width in WIDTHS.iter().copied().filter(|w| *w < WIDE_BREAKPOINT_PX) {
            for state in [MenuState::Collapsed, MenuState::Expanded] {
                let vis = nav_visibility(state, Viewport::new(width));
                assert_eq!(vis.collapsible_links, state.is_open(), "width {}", width);
                assert!(!vis.full_links);
                assert!(vis.toggle_control);
            }
        }
    }

    #[test]
    fn narrow_viewport_toggle_reveals_links() {
        let phone = Viewport::new(375);
        let state = MenuState::default();
        assert!(!nav_visibility(state, phone).collapsible_links);
        assert!(nav_visibility(state.toggle(), phone).collapsible_links);
    }

    #[test]
    fn resize_does_not_change_state() {
        let state = MenuState::Expanded;
        let _ = nav_visibility(state, Viewport::new(1440));
        assert!(nav_visibility(state, Viewport::new(375)).collapsible_links);
    }

    #[test]
    fn from_bool_and_labels() {
        assert_eq!(MenuState::from(true), MenuState::Expanded);
        assert_eq!(MenuState::from(false), MenuState::Collapsed);
        assert_eq!(MenuState::Expanded.as_str(), "expanded");
        assert_eq!(MenuState::Collapsed.as_str(), "collapsed");
    }
}
