//! Recursive tree filter: prunes non-matching subtrees and annotates survivors.

use super::classify::MatchClassifier;
use super::criteria::FilterCriteria;
use crate::error::Result;
use crate::tree::{Employee, Metrics};
use crate::types::NodeKey;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A surviving node of one filter pass.
///
/// Owns copies of the employee fields; a filtered tree never aliases the
/// source dataset and is rebuilt from scratch on every pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilteredNode {
    pub key: NodeKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub position: String,
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Name matches a non-empty search term
    pub is_highlighted: bool,
    /// Node satisfies all three predicates under a non-empty search term
    pub is_exact_match: bool,
    /// Surviving direct reports, in source order
    pub reports: Vec<FilteredNode>,
}

impl FilteredNode {
    pub fn rating(&self) -> Option<f64> {
        self.metrics.as_ref().and_then(|m| m.rating)
    }

    /// Number of nodes in this filtered subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.reports.iter().map(FilteredNode::subtree_len).sum::<usize>()
    }

    /// Depth-first search for a node by key.
    pub fn find(&self, key: &NodeKey) -> Option<&FilteredNode> {
        if &self.key == key {
            return Some(self);
        }
        self.reports.iter().find_map(|child| child.find(key))
    }
}

/// Filter a single tree rooted at `node`.
///
/// Returns `None` when neither the node nor any descendant matches.
pub fn filter_tree(node: &Employee, criteria: &FilterCriteria) -> Result<Option<FilteredNode>> {
    let classifier = MatchClassifier::new(criteria);
    filter_node(node, NodeKey::root(node), &classifier, criteria.search_active())
}

/// Filter every root independently, keeping the survivors in order.
pub fn filter_forest(roots: &[Employee], criteria: &FilterCriteria) -> Result<Vec<FilteredNode>> {
    let classifier = MatchClassifier::new(criteria);
    let search_active = criteria.search_active();
    let mut forest = Vec::with_capacity(roots.len());
    for root in roots {
        if let Some(filtered) = filter_node(root, NodeKey::root(root), &classifier, search_active)? {
            forest.push(filtered);
        }
    }
    debug!(
        roots = roots.len(),
        survivors = forest.iter().map(FilteredNode::subtree_len).sum::<usize>(),
        %criteria,
        "filter pass complete"
    );
    Ok(forest)
}

// Post-order: children are decided before the parent.
fn filter_node(
    node: &Employee,
    key: NodeKey,
    classifier: &MatchClassifier,
    search_active: bool,
) -> Result<Option<FilteredNode>> {
    let mut reports = Vec::new();
    for child in &node.reports {
        if let Some(filtered) = filter_node(child, key.child(child), classifier, search_active)? {
            reports.push(filtered);
        }
    }

    let outcome = classifier.classify_at(node, &key)?;
    let is_match = outcome.is_match();
    if !is_match && reports.is_empty() {
        return Ok(None);
    }

    Ok(Some(FilteredNode {
        key,
        id: node.id.clone(),
        name: node.name.clone(),
        position: node.position.clone(),
        department: node.department.clone(),
        metrics: node.metrics.clone(),
        image: node.image.clone(),
        is_highlighted: search_active && outcome.name_match,
        is_exact_match: search_active && is_match,
        reports,
    }))
}
