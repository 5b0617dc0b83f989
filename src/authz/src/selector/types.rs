//! Label selector type definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Label selector as written in tenant configuration
///
/// Mirrors the Kubernetes `LabelSelector` shape. An empty selector selects
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelSelector {
    /// Required exact label values
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub match_labels: BTreeMap<String, String>,

    /// Set-based label expressions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub match_expressions: Vec<LabelSelectorRequirement>,
}

impl LabelSelector {
    /// Create an empty selector
    pub fn new() -> Self {
        Self::default()
    }

    /// Require an exact label value
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.match_labels.insert(key.into(), value.into());
        self
    }

    /// Add a set-based expression
    pub fn with_expression(
        mut self,
        key: impl Into<String>,
        operator: impl Into<String>,
        values: Vec<String>,
    ) -> Self {
        self.match_expressions.push(LabelSelectorRequirement {
            key: key.into(),
            operator: operator.into(),
            values,
        });
        self
    }
}

/// One `matchExpressions` entry
///
/// The operator stays a plain string so that a typo in one rule surfaces as
/// a selector conversion error instead of rejecting the whole configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSelectorRequirement {
    /// Label key
    pub key: String,

    /// One of `In`, `NotIn`, `Exists`, `DoesNotExist`
    pub operator: String,

    /// Values for `In`/`NotIn`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

/// Operator of an atomic label requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequirementOperator {
    Equals,
    In,
    NotIn,
    Exists,
    DoesNotExist,
}

/// One atomic label constraint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabelRequirement {
    pub key: String,
    pub operator: RequirementOperator,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

impl LabelRequirement {
    /// Create a requirement without validation
    pub fn new(
        key: impl Into<String>,
        operator: RequirementOperator,
        values: Vec<String>,
    ) -> Self {
        Self {
            key: key.into(),
            operator,
            values,
        }
    }
}

impl fmt::Display for LabelRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operator {
            RequirementOperator::Exists => write!(f, "{}", self.key),
            RequirementOperator::DoesNotExist => write!(f, "!{}", self.key),
            RequirementOperator::Equals => {
                write!(f, "{}={}", self.key, self.values.first().map_or("", String::as_str))
            }
            RequirementOperator::In => write!(f, "{} in ({})", self.key, self.values.join(",")),
            RequirementOperator::NotIn => {
                write!(f, "{} notin ({})", self.key, self.values.join(","))
            }
        }
    }
}

/// Result of parsing a label selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedSelector {
    /// Selects nothing (no selector configured)
    Nothing,
    /// Conjunction of requirements; empty selects everything
    Requirements(Vec<LabelRequirement>),
}

/// Renders requirements in canonical selector syntax (`a=b,c in (d)`)
pub fn render_requirements(requirements: &[LabelRequirement]) -> String {
    requirements
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
