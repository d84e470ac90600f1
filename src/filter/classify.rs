//! Match classification of a single node against the filter inputs

use super::criteria::{DepartmentFilter, FilterCriteria, GradeFilter};
use crate::error::{ChartError, Result};
use crate::tree::{Employee, Grade, EXEMPT_DEPARTMENT};
use crate::types::NodeKey;
use unicode_normalization::UnicodeNormalization;

/// Per-node result of the three filter predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchOutcome {
    pub name_match: bool,
    pub department_match: bool,
    pub grade_match: bool,
}

impl MatchOutcome {
    /// All three predicates hold.
    pub fn is_match(&self) -> bool {
        self.name_match && self.department_match && self.grade_match
    }
}

/// Case folding used for every case-insensitive comparison.
pub(crate) fn fold(value: &str) -> String {
    value.nfc().collect::<String>().to_lowercase()
}

/// Classifier with the criteria folded once per filter pass.
pub struct MatchClassifier {
    search: Option<String>,
    department: Option<String>,
    grade: GradeFilter,
    exempt: String,
}

impl MatchClassifier {
    pub fn new(criteria: &FilterCriteria) -> Self {
        let search = criteria.search_active().then(|| fold(&criteria.search_term));
        let department = match &criteria.department {
            DepartmentFilter::All => None,
            DepartmentFilter::Named(name) => Some(fold(name)),
        };
        Self {
            search,
            department,
            grade: criteria.grade,
            exempt: fold(EXEMPT_DEPARTMENT),
        }
    }

    /// Classify a root-level node, or any node that carries an explicit id.
    pub fn classify(&self, node: &Employee) -> Result<MatchOutcome> {
        self.classify_at(node, &NodeKey::root(node))
    }

    /// Classify a node whose position in the forest is `key`; the key is
    /// reported when the node has to be graded but has no rating.
    pub fn classify_at(&self, node: &Employee, key: &NodeKey) -> Result<MatchOutcome> {
        let name_match = match &self.search {
            None => true,
            Some(term) => fold(&node.name).contains(term.as_str()),
        };

        let department_match = match &self.department {
            None => true,
            Some(wanted) => {
                let department = fold(&node.department);
                department == *wanted || department == self.exempt
            }
        };

        let grade_match = match self.grade {
            GradeFilter::All => true,
            GradeFilter::Only(wanted) => {
                let rating = node.rating().ok_or_else(|| ChartError::MissingRating {
                    name: node.name.clone(),
                    key: key.clone(),
                })?;
                Grade::from_rating(rating) == wanted
            }
        };

        Ok(MatchOutcome {
            name_match,
            department_match,
            grade_match,
        })
    }
}

/// Classify one node; see [`MatchClassifier`] for repeated use.
pub fn classify(node: &Employee, criteria: &FilterCriteria) -> Result<MatchOutcome> {
    MatchClassifier::new(criteria).classify(node)
}
