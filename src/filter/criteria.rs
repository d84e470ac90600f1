//! Filter inputs supplied by the search box and the two dropdowns.

use super::classify::fold;
use crate::error::{ChartError, Result};
use crate::tree::Grade;
use serde::{Deserialize, Serialize};
use std::fmt;

const ALL: &str = "All";

/// Department dropdown value
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DepartmentFilter {
    #[default]
    All,
    Named(String),
}

impl DepartmentFilter {
    /// Parse a dropdown value. `"All"` matches case-insensitively; any other
    /// value is kept as typed.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL) {
            DepartmentFilter::All
        } else {
            DepartmentFilter::Named(value.to_string())
        }
    }

    /// Parse and check the value against the known department set.
    pub fn parse_known<S: AsRef<str>>(value: &str, departments: &[S]) -> Result<Self> {
        let filter = Self::parse(value);
        if let DepartmentFilter::Named(name) = &filter {
            let wanted = fold(name);
            let known = departments.iter().any(|d| fold(d.as_ref()) == wanted);
            if !known {
                let names: Vec<&str> = departments.iter().map(|d| d.as_ref()).collect();
                return Err(ChartError::InvalidFilter(format!(
                    "unknown department '{}' (expected All or one of: {})",
                    name,
                    names.join(", ")
                )));
            }
        }
        Ok(filter)
    }
}

impl fmt::Display for DepartmentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepartmentFilter::All => f.write_str(ALL),
            DepartmentFilter::Named(name) => f.write_str(name),
        }
    }
}

/// Grade dropdown value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GradeFilter {
    #[default]
    All,
    Only(Grade),
}

impl GradeFilter {
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL) {
            return Ok(GradeFilter::All);
        }
        value
            .parse::<Grade>()
            .map(GradeFilter::Only)
            .map_err(ChartError::InvalidFilter)
    }
}

impl fmt::Display for GradeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradeFilter::All => f.write_str(ALL),
            GradeFilter::Only(grade) => write!(f, "{}", grade),
        }
    }
}

/// The three filter inputs that drive one filter pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text name search; empty means no search
    pub search_term: String,
    pub department: DepartmentFilter,
    pub grade: GradeFilter,
}

impl FilterCriteria {
    pub fn new(
        search_term: impl Into<String>,
        department: DepartmentFilter,
        grade: GradeFilter,
    ) -> Self {
        Self {
            search_term: search_term.into(),
            department,
            grade,
        }
    }

    /// Search-only criteria with both dropdowns on `All`.
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search_term: term.into(),
            ..Self::default()
        }
    }

    pub fn search_active(&self) -> bool {
        !self.search_term.is_empty()
    }

    /// Restore all three inputs to their defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "search={:?} department={} grade={}",
            self.search_term, self.department, self.grade
        )
    }
}
