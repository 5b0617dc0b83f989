//! # Tenant Proxy Authorization Matcher
//!
//! Cluster-scope authorization matching for a multi-tenant Kubernetes API proxy.
//!
//! ## Features
//!
//! - **Wildcard patterns** with a greedy, non-backtracking `*` scanner
//! - **Rule matching** on kind, API group and group/version
//! - **Requirement aggregation** of operations and label requirements across tenants
//! - **Label selectors** decomposed with Kubernetes `LabelSelector` semantics
//! - **Copy-on-write tenant registry** for stable per-request snapshots
//!
//! ## Example
//!
//! ```rust
//! use tenant_proxy_authz::{
//!     aggregate, ClusterResourceRule, LabelSelector, Operation, ResourceCoordinate, Tenant,
//! };
//!
//! let tenant = Tenant::new("oil").with_rule(
//!     ClusterResourceRule::new(vec!["Namespace".into()], vec!["".into()])
//!         .with_operations(vec![Operation::List])
//!         .with_selector(LabelSelector::new().with_label("tenant", "oil")),
//! );
//!
//! let coord = ResourceCoordinate::new("", "v1", "Namespace");
//! let result = aggregate(&coord, &[tenant]);
//!
//! assert_eq!(result.operations, vec![Operation::List]);
//! assert_eq!(result.label_selector(), "tenant=oil");
//! ```

pub mod aggregator;
pub mod config;
pub mod error;
pub mod matcher;
pub mod middleware;
pub mod pattern;
pub mod registry;
pub mod selector;
pub mod server;
pub mod types;

// Re-export commonly used types
pub use aggregator::{aggregate, ClusterScopeRequirements, RequirementAggregator};
pub use config::{ServerConfig, TenantsFile};
pub use error::{AuthzError, Result};
pub use matcher::matches_resource;
pub use pattern::match_pattern;
pub use registry::TenantRegistry;
pub use selector::{
    KubeSelectorParser, LabelRequirement, LabelSelector, LabelSelectorRequirement,
    ParsedSelector, RequirementOperator, SelectorError, SelectorParser,
};
pub use types::{ClusterResourceRule, Operation, ResourceCoordinate, Tenant};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
