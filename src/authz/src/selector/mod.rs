//! Label selector module
//!
//! Converts the label selector attached to a cluster resource rule into the
//! atomic requirements the aggregator hands downstream.
//!
//! The conversion sits behind the narrow [`SelectorParser`] capability so the
//! aggregator never looks at selector syntax itself:
//!
//! - `parse` validates a selector and returns an opaque selector value
//! - `decompose` splits that value into requirements plus a selectable flag
//!
//! [`KubeSelectorParser`] is the production implementation and follows the
//! Kubernetes `LabelSelector` conversion rules.
//!
//! # Example
//!
//! ```rust
//! use tenant_proxy_authz::selector::{KubeSelectorParser, LabelSelector, SelectorParser};
//!
//! let parser = KubeSelectorParser::new();
//! let selector = LabelSelector::new()
//!     .with_label("tenant", "oil")
//!     .with_expression("env", "In", vec!["prod".into(), "dev".into()]);
//!
//! let parsed = parser.parse(Some(&selector)).unwrap();
//! let (requirements, selectable) = parser.decompose(&parsed);
//!
//! assert!(selectable);
//! assert_eq!(requirements[0].to_string(), "env in (dev,prod)");
//! assert_eq!(requirements[1].to_string(), "tenant=oil");
//! ```

mod parser;
mod types;

pub use parser::{KubeSelectorParser, SelectorError, SelectorParser};
pub use types::{
    render_requirements, LabelRequirement, LabelSelector, LabelSelectorRequirement,
    ParsedSelector, RequirementOperator,
};
