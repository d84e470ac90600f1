//! Visible-row projection of a filtered forest.

use super::expansion::ExpansionStore;
use crate::filter::FilteredNode;
use crate::tree::{Grade, Metrics};
use crate::types::NodeKey;
use serde::Serialize;

/// Card style of a rendered node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStyle {
    ExactMatch,
    Highlight,
    Plain,
}

impl RowStyle {
    pub fn of(node: &FilteredNode) -> Self {
        if node.is_exact_match {
            RowStyle::ExactMatch
        } else if node.is_highlighted {
            RowStyle::Highlight
        } else {
            RowStyle::Plain
        }
    }
}

/// One displayed node, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisibleRow {
    pub key: NodeKey,
    pub depth: usize,
    pub name: String,
    pub position: String,
    pub department: String,
    pub grade: Option<Grade>,
    pub metrics: Option<Metrics>,
    pub style: RowStyle,
    /// Surviving direct reports, shown or not
    pub report_count: usize,
    /// `None` for leaves, which have nothing to expand
    pub expanded: Option<bool>,
}

/// Children in display order: exact matches first, otherwise source order.
pub fn ordered_children(children: &[FilteredNode]) -> Vec<&FilteredNode> {
    let mut ordered: Vec<&FilteredNode> = children.iter().collect();
    ordered.sort_by_key(|child| !child.is_exact_match);
    ordered
}

/// Flatten the forest into the rows the chart shows, honoring expansion.
pub fn visible_rows(
    forest: &[FilteredNode],
    expansion: &ExpansionStore,
    search_term: &str,
) -> Vec<VisibleRow> {
    let mut rows = Vec::new();
    for root in forest {
        push_rows(root, 0, true, expansion, search_term, &mut rows);
    }
    rows
}

fn push_rows(
    node: &FilteredNode,
    depth: usize,
    is_root: bool,
    expansion: &ExpansionStore,
    search_term: &str,
    rows: &mut Vec<VisibleRow>,
) {
    let expanded = expansion.is_expanded(node, is_root, search_term);
    rows.push(VisibleRow {
        key: node.key.clone(),
        depth,
        name: node.name.clone(),
        position: node.position.clone(),
        department: node.department.clone(),
        grade: node.rating().map(Grade::from_rating),
        metrics: node.metrics.clone(),
        style: RowStyle::of(node),
        report_count: node.reports.len(),
        expanded: (!node.reports.is_empty()).then_some(expanded),
    });
    if expanded {
        for child in ordered_children(&node.reports) {
            push_rows(child, depth + 1, false, expansion, search_term, rows);
        }
    }
}
