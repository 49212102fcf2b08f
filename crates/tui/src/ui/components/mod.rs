//! UI components: sidebar plus one component per page, and shared modals.

pub mod common;
pub mod component;
pub mod dashboard;
pub mod evaluations;
pub mod nav_bar;
pub mod positions;
pub mod settings;
pub mod upload;

pub use component::Component;
pub use dashboard::DashboardComponent;
pub use evaluations::EvaluationsComponent;
pub use nav_bar::NavBarComponent;
pub use positions::PositionsComponent;
pub use settings::SettingsComponent;
pub use upload::UploadComponent;
