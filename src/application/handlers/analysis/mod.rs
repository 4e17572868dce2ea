//! Style analysis handlers.

mod analyze_samples;
mod get_style_profile;

pub use analyze_samples::{AnalyzeSamplesCommand, AnalyzeSamplesHandler, AnalyzeSamplesResult};
pub use get_style_profile::{GetStyleProfileHandler, GetStyleProfileQuery};
