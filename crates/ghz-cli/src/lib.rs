//! GHZ CLI - Command line tools for geohazard survey planning.
//!
//! - plan_mission: plan a survey from CSV catalogs and print the result

pub mod report;

pub use report::{render_report, Report};
