//! Employee records and derived grades.
//!
//! The source hierarchy is an owned tree: each employee exclusively owns its
//! direct reports. Nothing in this module mutates a loaded tree.

pub mod grade;
pub mod node;

pub use grade::{grade, Grade};
pub use node::{Employee, MetricValue, Metrics, EXEMPT_DEPARTMENT, STANDARD_DEPARTMENTS};
