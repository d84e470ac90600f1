//! Tree Filtering
//!
//! Rebuilds the org-chart forest for one set of filter inputs. Each pass is a
//! pure function of (source forest, criteria): nodes survive when they match
//! all three predicates or when any descendant survives, and survivors carry
//! the highlight and exact-match flags the rendering layer consumes.

pub mod classify;
pub mod criteria;
pub mod prune;

pub use classify::{classify, MatchClassifier, MatchOutcome};
pub use criteria::{DepartmentFilter, FilterCriteria, GradeFilter};
pub use prune::{filter_forest, filter_tree, FilteredNode};
