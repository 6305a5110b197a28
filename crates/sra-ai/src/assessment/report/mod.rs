mod summary;
pub mod views;

pub use summary::{generate_report, Report};
