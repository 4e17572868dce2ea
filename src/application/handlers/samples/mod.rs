//! Writing sample handlers.

mod delete_sample;
mod list_samples;
mod upload_sample;

pub use delete_sample::{DeleteSampleCommand, DeleteSampleHandler};
pub use list_samples::{ListSamplesHandler, ListSamplesQuery};
pub use upload_sample::{UploadSampleCommand, UploadSampleHandler};
