//! Selected-view state owned by the root component.
//!
//! # Design
//! - One `Copy` value, no globals; the app shell holds it through `use_reducer`.
//! - Reducing to the same view hands back the existing `Rc`, so Yew skips the
//!   re-render.

use std::rc::Rc;

use yew::functional::Reducible;

use crate::core::content::Page;
use crate::core::view::ViewId;
use crate::features::render_view;

/// Currently selected view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Navigation {
    selected: ViewId,
}

/// Selection events emitted by the navigation bar and page links.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    /// Select a known view.
    Select(ViewId),
    /// Select a view by slug; unknown slugs select the default view.
    SelectSlug(String),
}

impl Navigation {
    /// Start on `initial`.
    #[must_use]
    pub const fn new(initial: ViewId) -> Self {
        Self { selected: initial }
    }

    /// The active view.
    #[must_use]
    pub const fn selected(self) -> ViewId {
        self.selected
    }

    /// Whether `id` is the active view.
    #[must_use]
    pub fn is_active(self, id: ViewId) -> bool {
        self.selected == id
    }

    /// Select `id`. Returns `false` when it was already active.
    pub fn select(&mut self, id: ViewId) -> bool {
        let changed = self.selected != id;
        self.selected = id;
        changed
    }

    /// Select the view named by `slug`, defaulting for unknown slugs.
    pub fn select_slug(&mut self, slug: &str) -> bool {
        self.select(ViewId::from_slug_or_default(slug))
    }

    /// Apply an action. Returns `false` when the selection did not change.
    pub fn apply(&mut self, action: NavAction) -> bool {
        match action {
            NavAction::Select(id) => self.select(id),
            NavAction::SelectSlug(slug) => self.select_slug(&slug),
        }
    }

    /// Content of the active view.
    #[must_use]
    pub fn render(self) -> Page {
        render_view(self.selected)
    }
}

impl Reducible for Navigation {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_renders_overview() {
        let nav = Navigation::default();
        assert_eq!(nav.selected(), ViewId::Overview);
        assert_eq!(nav.render().id, ViewId::Overview);
    }

    #[test]
    fn selecting_each_view_renders_that_view() {
        let mut nav = Navigation::default();
        for view in ViewId::all() {
            nav.select(view);
            assert!(nav.is_active(view));
            assert_eq!(nav.render(), render_view(view));
        }
    }

    #[test]
    fn reselecting_active_view_is_idempotent() {
        let mut nav = Navigation::new(ViewId::Trends);
        let before = nav.render();
        assert!(!nav.select(ViewId::Trends));
        assert_eq!(nav.selected(), ViewId::Trends);
        assert_eq!(nav.render(), before);
    }

    #[test]
    fn unknown_slug_selects_overview() {
        let mut nav = Navigation::new(ViewId::Forecast);
        assert!(nav.select_slug("not-a-view"));
        assert_eq!(nav.selected(), ViewId::Overview);
        assert_eq!(nav.render().id, ViewId::Overview);
    }

    #[test]
    fn reducer_keeps_same_rc_when_unchanged() {
        let state = Rc::new(Navigation::new(ViewId::Hotspots));
        let same = Rc::clone(&state).reduce(NavAction::Select(ViewId::Hotspots));
        assert!(Rc::ptr_eq(&state, &same));

        let next = Rc::clone(&state).reduce(NavAction::SelectSlug("insights".into()));
        assert!(!Rc::ptr_eq(&state, &next));
        assert_eq!(next.selected(), ViewId::Insights);
    }
}
