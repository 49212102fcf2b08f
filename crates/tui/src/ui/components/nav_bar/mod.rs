//! Vertical navigation sidebar.

mod nav_bar_component;
mod state;

pub use nav_bar_component::NavBarComponent;
pub use state::{NavBarState, NavItem};
