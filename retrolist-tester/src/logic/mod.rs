pub mod artifacts;
pub mod convert;
pub mod loader;
pub mod reports;
pub mod runner;

pub use artifacts::write_artifacts;
pub use convert::convert_capture;
pub use loader::{load_dataset, select_evaluators};
pub use runner::run_evaluations;
