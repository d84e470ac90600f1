//! Chart session: the composition of dataset, filter inputs, filtered forest,
//! expansion state, and zoom that one interactive view owns.

use crate::dataset::Dataset;
use crate::error::{ChartError, Result};
use crate::filter::classify::fold;
use crate::filter::{filter_forest, DepartmentFilter, FilterCriteria, FilteredNode, GradeFilter};
use crate::tree::STANDARD_DEPARTMENTS;
use crate::types::NodeKey;
use crate::views::{visible_rows, ExpansionState, ExpansionStore, VisibleRow, ZoomLevel};
use tracing::debug;

/// Interactive chart state.
///
/// Every filter input change recomputes the forest from the full dataset.
/// Expansion state is keyed by [`NodeKey`] and is never reset by filtering.
pub struct ChartSession {
    dataset: Dataset,
    departments: Vec<String>,
    criteria: FilterCriteria,
    forest: Vec<FilteredNode>,
    expansion: ExpansionStore,
    zoom: ZoomLevel,
}

impl ChartSession {
    /// Start a session with default filters over `dataset`.
    pub fn new(dataset: Dataset) -> Result<Self> {
        let departments = STANDARD_DEPARTMENTS.iter().map(|d| d.to_string()).collect();
        Self::with_options(dataset, departments, ZoomLevel::default())
    }

    pub fn with_options(dataset: Dataset, departments: Vec<String>, zoom: ZoomLevel) -> Result<Self> {
        let criteria = FilterCriteria::default();
        let forest = filter_forest(&dataset.employees, &criteria)?;
        Ok(Self {
            dataset,
            departments,
            criteria,
            forest,
            expansion: ExpansionStore::new(),
            zoom,
        })
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn forest(&self) -> &[FilteredNode] {
        &self.forest
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn departments(&self) -> &[String] {
        &self.departments
    }

    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    pub fn zoom_mut(&mut self) -> &mut ZoomLevel {
        &mut self.zoom
    }

    pub fn expansion(&self) -> &ExpansionStore {
        &self.expansion
    }

    pub fn is_empty(&self) -> bool {
        self.forest.is_empty()
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) -> Result<()> {
        let mut criteria = self.criteria.clone();
        criteria.search_term = term.into();
        self.apply(criteria)
    }

    /// Set the department dropdown; names outside the department set are rejected.
    pub fn set_department_filter(&mut self, value: &str) -> Result<()> {
        let mut criteria = self.criteria.clone();
        criteria.department = DepartmentFilter::parse_known(value, &self.departments)?;
        self.apply(criteria)
    }

    pub fn set_grade_filter(&mut self, value: &str) -> Result<()> {
        let mut criteria = self.criteria.clone();
        criteria.grade = GradeFilter::parse(value)?;
        self.apply(criteria)
    }

    /// Restore search, department, and grade inputs to their defaults.
    pub fn reset_filters(&mut self) -> Result<()> {
        let mut criteria = self.criteria.clone();
        criteria.reset();
        self.apply(criteria)
    }

    /// Run a filter pass; on failure the previous criteria and forest stay.
    pub fn apply(&mut self, criteria: FilterCriteria) -> Result<()> {
        let forest = filter_forest(&self.dataset.employees, &criteria)?;
        self.criteria = criteria;
        self.forest = forest;
        Ok(())
    }

    /// Rows currently displayed, in display order.
    pub fn rows(&self) -> Vec<VisibleRow> {
        visible_rows(&self.forest, &self.expansion, &self.criteria.search_term)
    }

    /// Resolve a user query to a node key in the current forest.
    ///
    /// Accepts an exact key, or a name (case-insensitive) that identifies
    /// exactly one surviving node.
    pub fn resolve(&self, query: &str) -> Result<NodeKey> {
        let query = query.trim();
        let key = NodeKey::from(query);
        if find_in(&self.forest, &key).is_some() {
            return Ok(key);
        }

        let wanted = fold(query);
        let mut matches = Vec::new();
        let mut stack: Vec<&FilteredNode> = self.forest.iter().collect();
        while let Some(node) = stack.pop() {
            if fold(&node.name) == wanted {
                matches.push(node.key.clone());
            }
            stack.extend(node.reports.iter());
        }
        match matches.len() {
            0 => Err(ChartError::UnknownNode(query.to_string())),
            1 => Ok(matches.remove(0)),
            _ => {
                matches.sort();
                let candidates: Vec<String> = matches.iter().map(|k| k.to_string()).collect();
                Err(ChartError::AmbiguousNode {
                    query: query.to_string(),
                    candidates: candidates.join(", "),
                })
            }
        }
    }

    /// Toggle a node's expansion. Returns the resolved key and the new
    /// effective expansion.
    pub fn toggle(&mut self, query: &str) -> Result<(NodeKey, bool)> {
        let key = self.resolve(query)?;
        let is_root = self.forest.iter().any(|root| root.key == key);
        let node = find_in(&self.forest, &key)
            .ok_or_else(|| ChartError::UnknownNode(key.to_string()))?;
        let expanded = self
            .expansion
            .toggle(node, is_root, &self.criteria.search_term);
        debug!(%key, expanded, "toggled node");
        Ok((key, expanded))
    }

    /// Force a node open or closed regardless of its current state.
    pub fn set_expanded(&mut self, query: &str, expanded: bool) -> Result<NodeKey> {
        let key = self.resolve(query)?;
        let state = if expanded {
            ExpansionState::ExpandedByUser
        } else {
            ExpansionState::CollapsedByUser
        };
        self.expansion.set(key.clone(), state);
        Ok(key)
    }
}

fn find_in<'a>(forest: &'a [FilteredNode], key: &NodeKey) -> Option<&'a FilteredNode> {
    forest.iter().find_map(|root| root.find(key))
}
