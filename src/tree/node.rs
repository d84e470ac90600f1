//! Employee node types as they appear in the dataset

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Department whose members pass every department filter.
pub const EXEMPT_DEPARTMENT: &str = "Executive";

/// Department set offered by the filter widget.
pub const STANDARD_DEPARTMENTS: [&str; 6] = [
    "Executive",
    "Marketing",
    "Design",
    "Sales",
    "Development",
    "Operations",
];

/// Display-only metric: datasets use both numbers and preformatted strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Number(n) => write!(f, "{}", n),
            MetricValue::Text(s) => f.write_str(s),
        }
    }
}

/// Performance metrics attached to an employee
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Numeric rating; the only metric used for filtering (grade derivation)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_achievement: Option<MetricValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement_score: Option<MetricValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<MetricValue>,
}

/// Employee node: one source record plus its direct reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Optional stable identifier; path of names is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub position: String,
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reports: Vec<Employee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Employee>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Employee>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Employee {
    /// Create a leaf employee without metrics.
    pub fn new(name: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            position: String::new(),
            department: department.into(),
            metrics: None,
            reports: Vec::new(),
            image: None,
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.metrics.get_or_insert_with(Metrics::default).rating = Some(rating);
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    pub fn with_reports(mut self, reports: Vec<Employee>) -> Self {
        self.reports = reports;
        self
    }

    pub fn rating(&self) -> Option<f64> {
        self.metrics.as_ref().and_then(|m| m.rating)
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.reports.iter().map(Employee::subtree_len).sum::<usize>()
    }
}
