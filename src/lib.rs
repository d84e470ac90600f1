//! Orgchart: Filterable Organization Charts
//!
//! Renders a company hierarchy as a collapsible tree. A filter pass prunes the
//! forest to nodes matching a name search, a department, and a grade (or that
//! lead to such a node) and marks highlights and exact matches; per-node
//! expansion state, keyed by stable node identity, decides what is shown.

pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod format;
pub mod logging;
pub mod session;
pub mod tooling;
pub mod tree;
pub mod types;
pub mod views;

pub use error::{ChartError, Result};
pub use filter::{classify, filter_forest, filter_tree, FilterCriteria, FilteredNode};
pub use tree::{grade, Employee, Grade};
