pub mod activity;
pub mod analysis;
pub mod project;

pub use activity::{Activity, AnalyzedActivity, GraphActivity, Schedule};
pub use analysis::ProjectAnalysis;
pub use project::NetworkProject;
