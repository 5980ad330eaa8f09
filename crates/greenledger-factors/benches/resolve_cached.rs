// SPDX-License-Identifier: Apache-2.0

use criterion::{criterion_group, criterion_main, Criterion};
use greenledger_factors::{FactorKey, FactorResolver, ResolverConfig};
use tokio::runtime::Runtime;

fn bench_resolve(c: &mut Criterion) {
    let rt = Runtime::new().expect("tokio runtime");
    let resolver = FactorResolver::new(ResolverConfig::default());
    let key = FactorKey::new("fuels", "diesel", None);
    rt.block_on(resolver.resolve(&key)).expect("warm factor");

    c.bench_function("resolve_cached_hit", |b| {
        b.to_async(&rt).iter(|| async {
            resolver.resolve(&key).await.expect("cached factor");
        });
    });

    c.bench_function("resolve_defaults_miss_cache", |b| {
        b.to_async(&rt).iter(|| async {
            resolver.clear_cache();
            resolver.resolve(&key).await.expect("default factor");
        });
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
