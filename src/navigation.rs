use std::rc::Rc;

use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};
use yew::Reducible;

use crate::sections::{self, UnknownSectionError, SECTIONS};

/// The whole of the page's reactive chrome, owned by the composition root and
/// handed down as read-only views. Only the actions below mutate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub active_section: &'static str,
    pub menu_open: bool,
    pub show_scroll_top: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active_section: SECTIONS[0].id,
            menu_open: false,
            show_scroll_top: false,
        }
    }
}

pub enum NavAction {
    /// Scroll-spy verdict for the current viewport position.
    SectionInView(&'static str),
    ScrollTopVisible(bool),
    ToggleMenu,
    /// A nav item was activated. Always closes the mobile menu; the active
    /// highlight is left to the scroll-spy, which re-derives it as the smooth
    /// scroll settles (the transient mismatch until then is intentional).
    NavigateTo(&'static str),
}

impl Reducible for NavigationState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: NavAction) -> Rc<Self> {
        match action {
            NavAction::SectionInView(id) => Rc::new(Self {
                active_section: id,
                ..*self
            }),
            NavAction::ScrollTopVisible(visible) => Rc::new(Self {
                show_scroll_top: visible,
                ..*self
            }),
            NavAction::ToggleMenu => Rc::new(Self {
                menu_open: !self.menu_open,
                ..*self
            }),
            NavAction::NavigateTo(id) => {
                // Unreachable from the rendered nav, which only offers
                // registry ids.
                if sections::get(id).is_err() {
                    return self;
                }
                Rc::new(Self {
                    menu_open: false,
                    ..*self
                })
            }
        }
    }
}

/// Ask the host to smooth-scroll the viewport to a section's anchor. A section
/// that is not mounted yet degrades to "no scroll"; only an id missing from
/// the registry is an error.
pub fn scroll_to_section(id: &str) -> Result<(), UnknownSectionError> {
    let section = sections::get(id)?;
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id))
    {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
    Ok(())
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: NavigationState, action: NavAction) -> NavigationState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn starts_on_the_first_section_with_everything_closed() {
        let state = NavigationState::default();
        assert_eq!(state.active_section, "home");
        assert!(!state.menu_open);
        assert!(!state.show_scroll_top);
    }

    #[test]
    fn navigate_closes_the_menu_regardless_of_prior_value() {
        let open = NavigationState {
            menu_open: true,
            ..NavigationState::default()
        };
        let state = reduce(open, NavAction::NavigateTo("services"));
        assert!(!state.menu_open);

        // Idempotent on an already-closed menu.
        let state = reduce(state, NavAction::NavigateTo("services"));
        assert!(!state.menu_open);
    }

    #[test]
    fn navigate_leaves_the_active_highlight_to_the_scroll_spy() {
        let state = reduce(
            NavigationState::default(),
            NavAction::NavigateTo("contact"),
        );
        assert_eq!(state.active_section, "home");
    }

    #[test]
    fn unknown_navigation_target_leaves_state_unmodified() {
        let before = NavigationState {
            active_section: "blog",
            menu_open: true,
            show_scroll_top: true,
        };
        let after = reduce(before.clone(), NavAction::NavigateTo("does-not-exist"));
        assert_eq!(after, before);
    }

    #[test]
    fn toggle_menu_flips_only_the_menu() {
        let state = reduce(NavigationState::default(), NavAction::ToggleMenu);
        assert!(state.menu_open);
        assert_eq!(state.active_section, "home");

        let state = reduce(state, NavAction::ToggleMenu);
        assert!(!state.menu_open);
    }

    #[test]
    fn scroll_spy_actions_update_their_fields() {
        let state = reduce(
            NavigationState::default(),
            NavAction::SectionInView("why-choose-us"),
        );
        assert_eq!(state.active_section, "why-choose-us");

        let state = reduce(state, NavAction::ScrollTopVisible(true));
        assert!(state.show_scroll_top);
    }
}
