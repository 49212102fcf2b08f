use hireview_catalog::JobCatalog;
use hireview_types::JobPosition;
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

/// State for the job-positions page.
///
/// The search box and the department/status selectors hold whatever the
/// user typed or cycled to, but the listing itself always shows the full
/// catalog; filtering is display-only chrome until positions are editable.
#[derive(Debug)]
pub struct PositionsState {
    pub search: String,
    /// Department filter choices; index 0 is "All Departments".
    pub departments: Vec<String>,
    pub department_idx: usize,
    pub status_idx: usize,
    /// Card the cursor is on.
    pub selected: usize,
    pub container_focus: FocusFlag,
    pub f_search: FocusFlag,
    pub f_department: FocusFlag,
    pub f_status: FocusFlag,
    pub f_list: FocusFlag,
    pub f_upload_jd: FocusFlag,
    pub f_create: FocusFlag,
    pub last_area: Rect,
}

/// Status filter labels, cycled by the status selector.
pub const STATUS_FILTERS: [&str; 4] = ["All Status", "Active", "Draft", "Closed"];

impl PositionsState {
    pub fn new(catalog: &JobCatalog) -> Self {
        let mut departments = vec!["All Departments".to_string()];
        departments.extend(catalog.departments().into_iter().map(String::from));
        Self {
            search: String::new(),
            departments,
            department_idx: 0,
            status_idx: 0,
            selected: 0,
            container_focus: FocusFlag::named("positions"),
            f_search: FocusFlag::named("positions.search"),
            f_department: FocusFlag::named("positions.department"),
            f_status: FocusFlag::named("positions.status"),
            f_list: FocusFlag::named("positions.list"),
            f_upload_jd: FocusFlag::named("positions.upload_jd"),
            f_create: FocusFlag::named("positions.create"),
            last_area: Rect::default(),
        }
    }

    pub fn cycle_department(&mut self, forward: bool) {
        let len = self.departments.len();
        if len == 0 {
            return;
        }
        self.department_idx = if forward {
            (self.department_idx + 1) % len
        } else {
            (self.department_idx + len - 1) % len
        };
    }

    pub fn cycle_status(&mut self, forward: bool) {
        let len = STATUS_FILTERS.len();
        self.status_idx = if forward {
            (self.status_idx + 1) % len
        } else {
            (self.status_idx + len - 1) % len
        };
    }

    pub fn department_label(&self) -> &str {
        self.departments
            .get(self.department_idx)
            .map(String::as_str)
            .unwrap_or("All Departments")
    }

    pub fn status_label(&self) -> &str {
        STATUS_FILTERS[self.status_idx % STATUS_FILTERS.len()]
    }

    /// The positions to display. The selectors do not narrow the result;
    /// every catalog entry is always listed.
    pub fn visible_positions<'a>(&self, catalog: &'a JobCatalog) -> &'a [JobPosition] {
        catalog.positions()
    }

    pub fn move_selection(&mut self, catalog: &JobCatalog, down: bool) {
        let len = catalog.len();
        if len == 0 {
            return;
        }
        self.selected = if down {
            (self.selected + 1).min(len - 1)
        } else {
            self.selected.saturating_sub(1)
        };
    }
}

impl HasFocus for PositionsState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.leaf_widget(&self.f_search);
        builder.leaf_widget(&self.f_department);
        builder.leaf_widget(&self.f_status);
        builder.leaf_widget(&self.f_list);
        builder.leaf_widget(&self.f_upload_jd);
        builder.leaf_widget(&self.f_create);
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

    fn catalog() -> JobCatalog {
        JobCatalog::from_embedded().expect("embedded catalog")
    }

    #[test]
    fn selectors_do_not_narrow_the_listing() {
        let catalog = catalog();
        let mut state = PositionsState::new(&catalog);
        state.search.push_str("nonexistent");
        state.cycle_department(true);
        state.cycle_status(true);
        assert_eq!(state.visible_positions(&catalog).len(), catalog.len());
    }

    #[test]
    fn department_choices_include_all_plus_catalog() {
        let catalog = catalog();
        let state = PositionsState::new(&catalog);
        assert_eq!(state.departments[0], "All Departments");
        assert_eq!(state.departments.len(), catalog.departments().len() + 1);
    }

    #[test]
    fn status_cycle_wraps() {
        let catalog = catalog();
        let mut state = PositionsState::new(&catalog);
        for _ in 0..STATUS_FILTERS.len() {
            state.cycle_status(true);
        }
        assert_eq!(state.status_label(), "All Status");
        state.cycle_status(false);
        assert_eq!(state.status_label(), "Closed");
    }

    #[test]
    fn selection_is_clamped_to_catalog() {
        let catalog = catalog();
        let mut state = PositionsState::new(&catalog);
        for _ in 0..10 {
            state.move_selection(&catalog, true);
        }
        assert_eq!(state.selected, catalog.len() - 1);
        state.move_selection(&catalog, false);
        assert_eq!(state.selected, catalog.len() - 2);
    }
}
