//! Core authorization types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AuthzError;
use crate::selector::LabelSelector;

/// Resource coordinate of one incoming request (group, version, kind)
///
/// The core API group is the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceCoordinate {
    /// API group (e.g., "apps", "" for core)
    #[serde(default)]
    pub group: String,

    /// API version (e.g., "v1")
    pub version: String,

    /// Resource kind (e.g., "Deployment")
    pub kind: String,
}

impl ResourceCoordinate {
    /// Create a new resource coordinate
    pub fn new(
        group: impl Into<String>,
        version: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
            kind: kind.into(),
        }
    }

    /// Composite `group/version` string used by patterns containing `/`
    pub fn group_version(&self) -> String {
        format!("{}/{}", self.group, self.version)
    }
}

impl fmt::Display for ResourceCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}, Kind={}", self.group, self.version, self.kind)
    }
}

/// Operation a tenant may perform on a cluster-scoped resource
///
/// Compared by equality only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Operation {
    #[serde(alias = "list")]
    List,
    #[serde(alias = "watch")]
    Watch,
    #[serde(alias = "get")]
    Get,
    #[serde(alias = "create")]
    Create,
    #[serde(alias = "update")]
    Update,
    #[serde(alias = "patch")]
    Patch,
    #[serde(alias = "delete")]
    Delete,
}

impl Operation {
    /// Lowercase Kubernetes API verb
    pub fn verb(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Watch => "watch",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Patch => "patch",
            Self::Delete => "delete",
        }
    }
}

impl FromStr for Operation {
    type Err = AuthzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "list" => Ok(Self::List),
            "watch" => Ok(Self::Watch),
            "get" => Ok(Self::Get),
            "create" => Ok(Self::Create),
            "update" => Ok(Self::Update),
            "patch" => Ok(Self::Patch),
            "delete" => Ok(Self::Delete),
            _ => Err(AuthzError::InvalidInput(format!("unknown operation: {}", s))),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// One tenant-configured cluster resource rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterResourceRule {
    /// Resource kinds (exact names, or "*" for all)
    #[serde(default, alias = "resources")]
    pub kinds: Vec<String>,

    /// API group or group/version patterns (e.g., "", "apps", "*/v1", "*")
    #[serde(default, rename = "apiGroups", alias = "groupPatterns")]
    pub group_patterns: Vec<String>,

    /// Operations granted when the rule matches
    #[serde(default)]
    pub operations: Vec<Operation>,

    /// Label selector scoping the visible objects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<LabelSelector>,
}

impl ClusterResourceRule {
    /// Create a new rule for the given kinds and group patterns
    pub fn new(kinds: Vec<String>, group_patterns: Vec<String>) -> Self {
        Self {
            kinds,
            group_patterns,
            operations: Vec::new(),
            selector: None,
        }
    }

    /// Set the granted operations
    pub fn with_operations(mut self, operations: Vec<Operation>) -> Self {
        self.operations = operations;
        self
    }

    /// Set the label selector
    pub fn with_selector(mut self, selector: LabelSelector) -> Self {
        self.selector = Some(selector);
        self
    }
}

/// Snapshot of one tenant's cluster-scope configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    /// Tenant name
    pub name: String,

    /// Cluster resource rules, in evaluation order
    #[serde(default, alias = "clusterResources")]
    pub rules: Vec<ClusterResourceRule>,
}

impl Tenant {
    /// Create a tenant without rules
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Append a rule
    pub fn with_rule(mut self, rule: ClusterResourceRule) -> Self {
        self.rules.push(rule);
        self
    }
}
