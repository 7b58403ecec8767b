//! Output formatting for load balancer drafts.
//!
//! - [`csv`] - CSV output of the rule collection
//! - [`terminal`] - Terminal summary with colors

mod csv;
mod terminal;

pub use csv::{print_rules_csv, rules_csv};
pub use terminal::{format_field, print_summary, summary_lines};
