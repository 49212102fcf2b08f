mod settings_component;
mod state;

pub use settings_component::SettingsComponent;
pub use state::{NumberInput, SettingsState};
