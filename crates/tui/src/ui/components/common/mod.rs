//! Shared modal components.

pub mod file_picker;

pub use file_picker::{FilePickerComponent, FilePickerState};
