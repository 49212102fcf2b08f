use hireview_types::Route;
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

/// A single item in the navigation sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Short label rendered in the sidebar row.
    pub label: String,
    /// Route activated by this item.
    pub route: Route,
    /// Optional count badge rendered after the label.
    pub badge: Option<u32>,
}

impl NavItem {
    pub fn new(label: impl Into<String>, route: Route) -> Self {
        Self {
            label: label.into(),
            route,
            badge: None,
        }
    }

    pub fn with_badge(mut self, badge: u32) -> Self {
        self.badge = Some(badge);
        self
    }
}

/// State for the navigation sidebar.
///
/// Owns the items, the selected index, and rat-focus flags for the
/// container and each item. Mutations go through the provided reducers so
/// the logic stays testable without a terminal.
#[derive(Debug, Default, Clone)]
pub struct NavBarState {
    /// Items displayed in sidebar order.
    pub items: Vec<NavItem>,
    /// Index of the item matching the active route.
    pub selected_index: usize,
    /// Focus flag for the container in the global focus tree.
    pub container_focus: FocusFlag,
    /// Focus flags for each item; kept in sync with `items` length.
    pub item_focus_flags: Vec<FocusFlag>,
    /// Last rendered area, for mouse hit testing.
    pub last_area: Rect,
    /// Last computed per-item row areas, for mouse hit testing.
    pub per_item_areas: Vec<Rect>,
}

impl NavBarState {
    pub fn new(items: Vec<NavItem>) -> Self {
        let item_focus_flags = (0..items.len())
            .map(|i| FocusFlag::named(&format!("nav.item.{i}")))
            .collect();
        Self {
            items,
            selected_index: 0,
            container_focus: FocusFlag::named("nav"),
            item_focus_flags,
            last_area: Rect::default(),
            per_item_areas: Vec::new(),
        }
    }

    /// Builds the sidebar with one item per application route.
    ///
    /// The Evaluations badge mirrors the fixed count shown by the product's
    /// sidebar; it is display data, not derived from any live state.
    pub fn for_routes() -> Self {
        Self::new(vec![
            NavItem::new("Dashboard", Route::Dashboard),
            NavItem::new("Upload Resume", Route::Upload),
            NavItem::new("Evaluations", Route::Evaluations).with_badge(24),
            NavItem::new("Job Positions", Route::Positions),
            NavItem::new("Settings", Route::Settings),
        ])
    }

    /// Returns the focused item together with its index, if any.
    pub fn focused_item(&self) -> Option<(&NavItem, usize)> {
        let idx = self.item_focus_flags.iter().position(|flag| flag.get())?;
        self.items.get(idx).map(|item| (item, idx))
    }

    /// Returns the focus flag of the next (or previous) item, wrapping.
    pub fn cycle_focus(&self, forward: bool) -> Option<FocusFlag> {
        let len = self.item_focus_flags.len();
        if len == 0 {
            return None;
        }
        let idx = self.item_focus_flags.iter().position(|flag| flag.get())?;
        let next = if forward { (idx + 1) % len } else { (idx + len - 1) % len };
        self.item_focus_flags.get(next).cloned()
    }

    /// Marks the item matching `route` as selected.
    pub fn set_route(&mut self, route: Route) -> Route {
        if let Some(idx) = self.items.iter().position(|item| item.route == route) {
            self.selected_index = idx;
        }
        route
    }
}

impl HasFocus for NavBarState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        for flag in &self.item_focus_flags {
            builder.leaf_widget(flag);
        }
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_item_per_route() {
        let state = NavBarState::for_routes();
        let routes: Vec<Route> = state.items.iter().map(|item| item.route).collect();
        assert_eq!(routes, Route::ALL);
    }

    #[test]
    fn set_route_moves_selection() {
        let mut state = NavBarState::for_routes();
        state.set_route(Route::Settings);
        assert_eq!(state.selected_index, 4);
        state.set_route(Route::Upload);
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn cycle_focus_wraps() {
        let state = NavBarState::for_routes();
        state.item_focus_flags[4].set(true);
        let next = state.cycle_focus(true).expect("next flag");
        assert_eq!(next.widget_id(), state.item_focus_flags[0].widget_id());
    }
}
