use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use hashbrown::HashSet;
use relnorm_core::normal_form::{check, closure, is_key, NormalForm};
use relnorm_core::schema::{FunctionalDependency, Relvar};

/// Build a chain schema `a0 -> a1 -> ... -> a(n-1)`.
///
/// The closure of `{a0}` walks the whole chain, which is the worst case for
/// the fixpoint when the FDs are listed against discovery order.
fn build_chain(length: usize) -> (HashSet<String>, Vec<FunctionalDependency<String>>) {
    let heading: HashSet<String> = (0..length).map(|i| format!("a{i}")).collect();
    // Reverse order forces one fixpoint pass per discovered attribute.
    let fds: Vec<FunctionalDependency<String>> = (1..length)
        .rev()
        .map(|i| {
            FunctionalDependency::new(
                core::iter::once(format!("a{}", i - 1)).collect(),
                core::iter::once(format!("a{i}")).collect(),
            )
        })
        .collect();
    (heading, fds)
}

fn bench_closure(c: &mut Criterion) {
    let (heading_small, fds_small) = build_chain(8);
    let (heading_medium, fds_medium) = build_chain(32);
    let (heading_large, fds_large) = build_chain(128);

    let start_small: HashSet<String> = core::iter::once(String::from("a0")).collect();

    assert_eq!(
        closure(&start_small, &fds_small),
        heading_small,
        "benchmark schema generation must produce a chain whose head determines everything",
    );

    let mut group = c.benchmark_group("closure_fixpoint");

    for (name, heading, fds) in [
        ("chain_small", &heading_small, &fds_small),
        ("chain_medium", &heading_medium, &fds_medium),
        ("chain_large", &heading_large, &fds_large),
    ] {
        group.bench_function(format!("closure_{name}"), |b| {
            b.iter(|| {
                let _ = closure(black_box(&start_small), black_box(fds));
            });
        });

        group.bench_function(format!("is_key_{name}"), |b| {
            b.iter(|| {
                let _ = is_key(black_box(&start_small), black_box(heading), black_box(fds));
            });
        });

        group.bench_function(format!("bcnf_{name}"), |b| {
            let relvar =
                Relvar::with_dependencies(heading.clone(), fds.iter().cloned(), []).unwrap();
            b.iter(|| {
                let _ = check(black_box(&relvar), black_box(NormalForm::BoyceCodd));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_closure);
criterion_main!(benches);
