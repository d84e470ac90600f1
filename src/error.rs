//! Error types for dataset loading, filtering, and CLI operations.

use crate::types::NodeKey;
use thiserror::Error;

/// Errors surfaced by the org-chart core and its tooling.
#[derive(Error, Debug)]
pub enum ChartError {
    /// A node had to be grade-classified but carries no rating.
    #[error("Employee '{name}' ({key}) has no metrics.rating; cannot classify grade")]
    MissingRating { name: String, key: NodeKey },

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("No visible employee matches '{0}'")]
    UnknownNode(String),

    #[error("'{query}' matches several employees: {candidates}")]
    AmbiguousNode { query: String, candidates: String },

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
