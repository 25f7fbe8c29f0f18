//! Output rendering (merge reports)

pub mod report;

pub use report::{write_report, ReportOptions};
