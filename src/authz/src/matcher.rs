//! Resource rule matching
//!
//! A rule applies to a coordinate when both gates pass:
//! - **Kind gate**: `kinds` holds `"*"` or the exact kind (never pattern-matched)
//! - **Group gate**: some entry of `group_patterns` matches. Entries containing
//!   `/` are matched against `group/version`, all others against the group
//!   alone, so `""` selects the core group.
//!
//! Empty `kinds` or empty `group_patterns` never match.

use crate::pattern::match_pattern;
use crate::types::{ClusterResourceRule, ResourceCoordinate};

/// Checks if a cluster resource rule applies to a resource coordinate
///
/// # Examples
///
/// ```rust
/// use tenant_proxy_authz::{matches_resource, ClusterResourceRule, ResourceCoordinate};
///
/// let coord = ResourceCoordinate::new("apps", "v1", "Deployment");
///
/// let rule = ClusterResourceRule::new(vec!["Deployment".into()], vec!["apps/*".into()]);
/// assert!(matches_resource(&coord, &rule));
///
/// let rule = ClusterResourceRule::new(vec!["Deployment".into()], vec![]);
/// assert!(!matches_resource(&coord, &rule));
/// ```
pub fn matches_resource(coord: &ResourceCoordinate, rule: &ClusterResourceRule) -> bool {
    let kind_match = rule
        .kinds
        .iter()
        .any(|kind| kind == "*" || *kind == coord.kind);

    if !kind_match {
        return false;
    }

    // Built on first use, shared by every `/` entry
    let mut group_version: Option<String> = None;

    for group_pattern in &rule.group_patterns {
        if group_pattern == "*" {
            return true;
        }

        let matched = if group_pattern.contains('/') {
            let target = group_version.get_or_insert_with(|| coord.group_version());
            match_pattern(group_pattern, target.as_str())
        } else {
            match_pattern(group_pattern, &coord.group)
        };

        if matched {
            return true;
        }
    }

    false
}
