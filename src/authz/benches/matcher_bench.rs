//! Matcher and aggregation benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tenant_proxy_authz::{
    aggregate, match_pattern, matches_resource, ClusterResourceRule, LabelSelector, Operation,
    ResourceCoordinate, Tenant,
};

fn create_test_tenants(count: usize) -> Vec<Tenant> {
    (0..count)
        .map(|i| {
            Tenant::new(format!("tenant-{}", i))
                .with_rule(
                    ClusterResourceRule::new(vec!["Namespace".into()], vec!["".into()])
                        .with_operations(vec![Operation::List])
                        .with_selector(
                            LabelSelector::new().with_label("tenant", format!("tenant-{}", i)),
                        ),
                )
                .with_rule(
                    ClusterResourceRule::new(
                        vec!["StorageClass".into(), "IngressClass".into()],
                        vec!["storage.k8s.io/*".into(), "networking.k8s.io".into()],
                    )
                    .with_operations(vec![Operation::List, Operation::Get]),
                )
        })
        .collect()
}

fn bench_match_pattern(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_pattern");

    let cases = [
        ("exact", "apps", "apps"),
        ("prefix", "apps*", "apps/v1"),
        ("suffix", "*/v1", "networking.k8s.io/v1"),
        ("multi", "*.k8s.*/v1*", "storage.k8s.io/v1beta1"),
    ];

    for (name, pattern, value) in cases {
        group.bench_function(name, |b| {
            b.iter(|| match_pattern(black_box(pattern), black_box(value)))
        });
    }

    group.finish();
}

fn bench_matches_resource(c: &mut Criterion) {
    let coord = ResourceCoordinate::new("storage.k8s.io", "v1", "StorageClass");
    let rule = ClusterResourceRule::new(
        vec!["Namespace".into(), "StorageClass".into()],
        vec!["apps".into(), "batch/*".into(), "storage.k8s.io/v1".into()],
    );

    c.bench_function("matches_resource", |b| {
        b.iter(|| matches_resource(black_box(&coord), black_box(&rule)))
    });
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    let coord = ResourceCoordinate::new("", "v1", "Namespace");

    for tenant_count in [10, 100, 1000].iter() {
        let tenants = create_test_tenants(*tenant_count);
        group.bench_with_input(
            BenchmarkId::new("tenants", tenant_count),
            &tenants,
            |b, tenants| b.iter(|| aggregate(black_box(&coord), black_box(tenants))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_match_pattern, bench_matches_resource, bench_aggregate);
criterion_main!(benches);
