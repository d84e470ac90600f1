//! Dataset loading and validation
//!
//! Reads the employee hierarchy from JSON or YAML. The document is either
//! `{ "employees": [...] }` or a bare array of root employees.

use crate::error::{ChartError, Result};
use crate::tree::Employee;
use crate::types::NodeKey;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tracing::{info, warn};

/// Loaded forest of root employees
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub employees: Vec<Employee>,
}

const SHAPE_ERROR: &str = "expected an object with an `employees` list or an array of employees";

/// Findings of [`validate`]; none of them reject the dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetReport {
    pub total_nodes: usize,
    pub duplicate_keys: Vec<NodeKey>,
    pub missing_ratings: Vec<NodeKey>,
}

impl DatasetReport {
    pub fn is_clean(&self) -> bool {
        self.duplicate_keys.is_empty() && self.missing_ratings.is_empty()
    }
}

impl Dataset {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    /// Parse a JSON document. The top-level shape is checked first so that
    /// field errors come straight from serde with their line and column.
    pub fn from_json_str(text: &str) -> Result<Self> {
        match text.trim_start().chars().next() {
            Some('{') => Ok(serde_json::from_str::<Dataset>(text)?),
            Some('[') => Ok(Dataset::new(serde_json::from_str::<Vec<Employee>>(text)?)),
            _ => Err(ChartError::Dataset(SHAPE_ERROR.to_string())),
        }
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(text)?;
        match value {
            serde_yaml::Value::Mapping(_) => Ok(serde_yaml::from_value::<Dataset>(value)?),
            serde_yaml::Value::Sequence(_) => {
                Ok(Dataset::new(serde_yaml::from_value::<Vec<Employee>>(value)?))
            }
            _ => Err(ChartError::Dataset(SHAPE_ERROR.to_string())),
        }
    }

    pub fn total_nodes(&self) -> usize {
        self.employees.iter().map(Employee::subtree_len).sum()
    }

    /// Node count per department, keyed by the department as written.
    pub fn department_tally(&self) -> BTreeMap<String, usize> {
        let mut tally = BTreeMap::new();
        let mut stack: Vec<&Employee> = self.employees.iter().collect();
        while let Some(employee) = stack.pop() {
            *tally.entry(employee.department.clone()).or_insert(0) += 1;
            stack.extend(employee.reports.iter());
        }
        tally
    }
}

/// Load a dataset, choosing the format by file extension (JSON by default).
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        ChartError::Dataset(format!("Failed to read dataset {}: {}", path.display(), e))
    })?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    let dataset = match extension.as_deref() {
        Some("yaml") | Some("yml") => Dataset::from_yaml_str(&text)?,
        _ => Dataset::from_json_str(&text)?,
    };

    let report = validate(&dataset);
    for key in &report.duplicate_keys {
        warn!(%key, "duplicate node key; expansion state will be shared");
    }
    for key in &report.missing_ratings {
        warn!(%key, "employee has no rating; grade filtering will fail");
    }
    info!(
        path = %path.display(),
        roots = dataset.employees.len(),
        nodes = report.total_nodes,
        "dataset loaded"
    );
    Ok(dataset)
}

/// Check node keys for uniqueness and ratings for presence.
pub fn validate(dataset: &Dataset) -> DatasetReport {
    let mut report = DatasetReport::default();
    let mut seen = HashSet::new();
    let mut stack: Vec<(&Employee, NodeKey)> = dataset
        .employees
        .iter()
        .rev()
        .map(|e| (e, NodeKey::root(e)))
        .collect();
    while let Some((employee, key)) = stack.pop() {
        report.total_nodes += 1;
        if employee.rating().is_none() {
            report.missing_ratings.push(key.clone());
        }
        for child in employee.reports.iter().rev() {
            stack.push((child, key.child(child)));
        }
        if !seen.insert(key.clone()) {
            report.duplicate_keys.push(key);
        }
    }
    report
}
