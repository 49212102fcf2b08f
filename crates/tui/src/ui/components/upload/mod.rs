//! Upload page: job selection, file picking, and the simulated-analysis
//! workflow.

mod state;
mod upload_component;

pub use state::{UploadPhase, UploadState};
pub use upload_component::UploadComponent;
