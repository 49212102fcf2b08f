mod file_picker_component;
mod state;

pub use file_picker_component::FilePickerComponent;
pub use state::{FilePickerState, PickerEntry};
