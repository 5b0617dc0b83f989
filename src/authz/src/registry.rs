//! Copy-on-write tenant registry
//!
//! Holds the current tenant configuration as one `Arc<Vec<Tenant>>`. Writers
//! always build a fresh collection and swap it in, so a snapshot handed to an
//! aggregation call never changes underneath it.

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

use crate::aggregator::{ClusterScopeRequirements, RequirementAggregator};
use crate::selector::{KubeSelectorParser, SelectorParser};
use crate::types::{ResourceCoordinate, Tenant};

/// Thread-safe tenant snapshot holder
pub struct TenantRegistry<P = KubeSelectorParser> {
    /// Current tenant snapshot
    tenants: RwLock<Arc<Vec<Tenant>>>,
    /// Aggregator evaluating snapshots
    aggregator: RequirementAggregator<P>,
}

impl TenantRegistry<KubeSelectorParser> {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::with_tenants(Vec::new())
    }

    /// Creates a registry seeded with tenants
    pub fn with_tenants(tenants: Vec<Tenant>) -> Self {
        Self::with_aggregator(tenants, RequirementAggregator::new())
    }
}

impl Default for TenantRegistry<KubeSelectorParser> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: SelectorParser> TenantRegistry<P> {
    /// Creates a registry with a custom aggregator
    pub fn with_aggregator(tenants: Vec<Tenant>, aggregator: RequirementAggregator<P>) -> Self {
        Self {
            tenants: RwLock::new(Arc::new(tenants)),
            aggregator,
        }
    }

    /// Returns the current immutable snapshot
    pub fn snapshot(&self) -> Arc<Vec<Tenant>> {
        Arc::clone(&self.tenants.read())
    }

    /// Replaces all tenants
    pub fn replace(&self, tenants: Vec<Tenant>) {
        debug!(count = tenants.len(), "Replacing tenant snapshot");
        *self.tenants.write() = Arc::new(tenants);
    }

    /// Inserts a tenant or replaces the one with the same name
    pub fn upsert(&self, tenant: Tenant) {
        let mut guard = self.tenants.write();
        let mut next: Vec<Tenant> = guard.iter().cloned().collect();

        match next.iter_mut().find(|t| t.name == tenant.name) {
            Some(existing) => *existing = tenant,
            None => next.push(tenant),
        }

        *guard = Arc::new(next);
    }

    /// Removes a tenant by name, returning whether it existed
    pub fn remove(&self, name: &str) -> bool {
        let mut guard = self.tenants.write();
        if !guard.iter().any(|t| t.name == name) {
            return false;
        }

        let next: Vec<Tenant> = guard.iter().filter(|t| t.name != name).cloned().collect();
        *guard = Arc::new(next);
        true
    }

    /// Number of tenants in the current snapshot
    pub fn len(&self) -> usize {
        self.tenants.read().len()
    }

    /// Returns true if no tenants are registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Aggregates requirements for a coordinate against the current snapshot
    pub fn aggregate(&self, coord: &ResourceCoordinate) -> ClusterScopeRequirements {
        let snapshot = self.snapshot();
        self.aggregator.aggregate(coord, &snapshot)
    }
}
