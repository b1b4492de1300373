//! Problem-file parsing and plan output.

mod format;
mod parse;

pub use format::{format_route, write_json, write_text, PlanReport};
pub use parse::{parse_line, parse_point, parse_problem, read_problem};
