use criterion::{black_box, criterion_group, criterion_main, Criterion};
use inetaddr::address::{parse_numerical, InetAddress};
use inetaddr::dns::InetResolver;
use std::collections::HashSet;

fn bench_parse_numerical(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_numerical");

    // Literals and names mixed, as a resolver front end sees them
    let inputs = vec![
        "127.0.0.1",
        "192.168.100.200",
        "::1",
        "2001:db8:85a3::8a2e:370:7334",
        "fe80::1ff:fe23:4567:890a%3",
        "example.com",
        "not-a-literal.internal",
    ];

    group.bench_function("parse_1000_mixed_inputs", |b| {
        b.iter(|| {
            for _ in 0..143 {
                for input in &inputs {
                    black_box(parse_numerical(input));
                }
            }
        });
    });

    let addrs: Vec<InetAddress> = inputs.iter().filter_map(|i| parse_numerical(i)).collect();

    group.bench_function("render_literals", |b| {
        b.iter(|| {
            for addr in &addrs {
                black_box(addr.to_string());
            }
        });
    });

    group.bench_function("hash_set_insert", |b| {
        b.iter(|| {
            let set: HashSet<InetAddress> = addrs.iter().copied().collect();
            black_box(set.len())
        });
    });

    group.finish();
}

fn bench_literal_short_circuit(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let resolver = InetResolver::system();

    c.bench_function("find_numeric_literal", |b| {
        b.to_async(&rt)
            .iter(|| async { black_box(resolver.find("2001:db8::1").await.unwrap()) });
    });
}

criterion_group!(benches, bench_parse_numerical, bench_literal_short_circuit);
criterion_main!(benches);
