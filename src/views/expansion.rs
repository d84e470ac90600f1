//! Per-node expansion state keyed by stable node identity.

use crate::filter::FilteredNode;
use crate::types::NodeKey;
use std::collections::HashMap;

/// Expansion state of one displayed node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpansionState {
    /// Follows the derived default
    #[default]
    Unset,
    ExpandedByUser,
    CollapsedByUser,
}

impl ExpansionState {
    /// Effective expansion given the derived default.
    pub fn resolve(self, default: bool) -> bool {
        match self {
            ExpansionState::Unset => default,
            ExpansionState::ExpandedByUser => true,
            ExpansionState::CollapsedByUser => false,
        }
    }

    fn explicit(expanded: bool) -> Self {
        if expanded {
            ExpansionState::ExpandedByUser
        } else {
            ExpansionState::CollapsedByUser
        }
    }
}

/// Derived default for an `Unset` node: roots, matches, and every node while
/// a search is active start expanded.
pub fn default_expanded(node: &FilteredNode, is_root: bool, search_term: &str) -> bool {
    is_root || node.is_exact_match || node.is_highlighted || !search_term.is_empty()
}

/// Expansion states owned by the rendering layer.
///
/// Looked up by [`NodeKey`] on every render, so explicit user choices survive
/// re-filtering even though filtered nodes are rebuilt each pass.
#[derive(Debug, Default, Clone)]
pub struct ExpansionStore {
    states: HashMap<NodeKey, ExpansionState>,
}

impl ExpansionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, key: &NodeKey) -> ExpansionState {
        self.states.get(key).copied().unwrap_or_default()
    }

    pub fn set(&mut self, key: NodeKey, state: ExpansionState) {
        if state == ExpansionState::Unset {
            self.states.remove(&key);
        } else {
            self.states.insert(key, state);
        }
    }

    pub fn is_expanded(&self, node: &FilteredNode, is_root: bool, search_term: &str) -> bool {
        self.state(&node.key)
            .resolve(default_expanded(node, is_root, search_term))
    }

    /// Invert the effective expansion and store it as an explicit choice.
    ///
    /// Returns the new effective value.
    pub fn toggle(&mut self, node: &FilteredNode, is_root: bool, search_term: &str) -> bool {
        let expanded = !self.is_expanded(node, is_root, search_term);
        self.states
            .insert(node.key.clone(), ExpansionState::explicit(expanded));
        expanded
    }

    /// The `(current effective state, toggle())` pair for one node.
    pub fn handle<'a>(
        &'a mut self,
        node: &'a FilteredNode,
        is_root: bool,
        search_term: &'a str,
    ) -> ExpansionHandle<'a> {
        ExpansionHandle {
            store: self,
            node,
            is_root,
            search_term,
        }
    }

    /// Number of nodes with an explicit user choice.
    pub fn explicit_count(&self) -> usize {
        self.states.len()
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }
}

/// Borrowed view of a single node's expansion.
pub struct ExpansionHandle<'a> {
    store: &'a mut ExpansionStore,
    node: &'a FilteredNode,
    is_root: bool,
    search_term: &'a str,
}

impl ExpansionHandle<'_> {
    pub fn is_expanded(&self) -> bool {
        self.store
            .is_expanded(self.node, self.is_root, self.search_term)
    }

    pub fn state(&self) -> ExpansionState {
        self.store.state(&self.node.key)
    }

    pub fn toggle(&mut self) -> bool {
        self.store.toggle(self.node, self.is_root, self.search_term)
    }
}
