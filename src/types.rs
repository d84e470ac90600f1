//! Core identity types for org-chart nodes.

use crate::tree::Employee;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between name segments of a path key.
pub const KEY_SEPARATOR: char = '/';

/// NodeKey: stable identity of an employee node across filter passes.
///
/// Derived from the explicit `id` when the dataset provides one, otherwise from
/// the chain of names from the root (`Carol/Dan`). Filtering never changes a
/// surviving node's ancestors, so both forms survive re-filtering unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeKey(String);

impl NodeKey {
    /// Key for a root employee.
    pub fn root(employee: &Employee) -> Self {
        match &employee.id {
            Some(id) => NodeKey(format!("#{}", id)),
            None => NodeKey(employee.name.clone()),
        }
    }

    /// Key for a direct report of the node identified by `self`.
    pub fn child(&self, employee: &Employee) -> Self {
        match &employee.id {
            Some(id) => NodeKey(format!("#{}", id)),
            None => NodeKey(format!("{}{}{}", self.0, KEY_SEPARATOR, employee.name)),
        }
    }

    /// Whether the key was derived from an explicit employee id.
    pub fn is_id(&self) -> bool {
        self.0.starts_with('#') && !self.0.contains(KEY_SEPARATOR)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeKey {
    fn from(value: &str) -> Self {
        NodeKey(value.to_string())
    }
}

impl From<String> for NodeKey {
    fn from(value: String) -> Self {
        NodeKey(value)
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
