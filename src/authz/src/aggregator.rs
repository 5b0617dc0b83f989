//! Requirement aggregation across tenants
//!
//! Walks every tenant's rules in order and, for each rule matching the
//! coordinate, collects its operations and label requirements. Output order
//! is traversal order (tenants outer, rules inner). Nothing is sorted,
//! de-duplicated or simplified here; downstream consumers apply their own
//! set or conjunction semantics.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matcher::matches_resource;
use crate::selector::{render_requirements, KubeSelectorParser, LabelRequirement, SelectorParser};
use crate::types::{Operation, ResourceCoordinate, Tenant};

/// Operations and label requirements contributed by all matching rules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterScopeRequirements {
    /// Operations of every matching rule, duplicates preserved
    pub operations: Vec<Operation>,

    /// Requirements of every matching, selectable rule, duplicates preserved
    pub requirements: Vec<LabelRequirement>,
}

impl ClusterScopeRequirements {
    /// Returns true if no rule contributed anything
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty() && self.requirements.is_empty()
    }

    /// Appends another result, keeping order
    pub fn extend(&mut self, other: ClusterScopeRequirements) {
        self.operations.extend(other.operations);
        self.requirements.extend(other.requirements);
    }

    /// Requirements rendered as a label selector string for outbound calls
    pub fn label_selector(&self) -> String {
        render_requirements(&self.requirements)
    }
}

/// Aggregates cluster-scope requirements using a label selector capability
///
/// # Examples
///
/// ```rust
/// use tenant_proxy_authz::{
///     ClusterResourceRule, Operation, RequirementAggregator, ResourceCoordinate, Tenant,
/// };
///
/// let aggregator = RequirementAggregator::new();
/// let tenants = vec![Tenant::new("solar").with_rule(
///     ClusterResourceRule::new(vec!["*".into()], vec!["*".into()])
///         .with_operations(vec![Operation::List, Operation::Watch]),
/// )];
///
/// let result = aggregator.aggregate(&ResourceCoordinate::new("apps", "v1", "Deployment"), &tenants);
/// assert_eq!(result.operations, vec![Operation::List, Operation::Watch]);
/// assert!(result.requirements.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequirementAggregator<P = KubeSelectorParser> {
    parser: P,
}

impl RequirementAggregator<KubeSelectorParser> {
    /// Creates an aggregator backed by the Kubernetes selector parser
    pub fn new() -> Self {
        Self::with_parser(KubeSelectorParser::new())
    }
}

impl<P: SelectorParser> RequirementAggregator<P> {
    /// Creates an aggregator with a custom selector capability
    pub fn with_parser(parser: P) -> Self {
        Self { parser }
    }

    /// Collects operations and requirements of every rule matching `coord`
    ///
    /// A rule whose selector fails to parse, or cannot select anything, still
    /// contributes its operations.
    pub fn aggregate(
        &self,
        coord: &ResourceCoordinate,
        tenants: &[Tenant],
    ) -> ClusterScopeRequirements {
        let mut result = ClusterScopeRequirements::default();

        for tenant in tenants {
            for (index, rule) in tenant.rules.iter().enumerate() {
                if !matches_resource(coord, rule) {
                    continue;
                }

                result.operations.extend(rule.operations.iter().copied());

                let selector = match self.parser.parse(rule.selector.as_ref()) {
                    Ok(selector) => selector,
                    Err(e) => {
                        debug!(
                            tenant = %tenant.name,
                            rule = index,
                            error = %e,
                            "Skipping requirements of rule with invalid selector"
                        );
                        continue;
                    }
                };

                let (requirements, selectable) = self.parser.decompose(&selector);
                if !selectable {
                    debug!(
                        tenant = %tenant.name,
                        rule = index,
                        "Skipping requirements of non-selectable rule"
                    );
                    continue;
                }

                result.requirements.extend(requirements);
            }
        }

        result
    }
}

/// Aggregates with the Kubernetes selector parser
pub fn aggregate(coord: &ResourceCoordinate, tenants: &[Tenant]) -> ClusterScopeRequirements {
    RequirementAggregator::new().aggregate(coord, tenants)
}
