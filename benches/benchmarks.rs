//! Performance benchmarks for twig

use std::io;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use termcolor::NoColor;
use twig::output::indentation;
use twig::test_utils::TestDir;
use twig::{OutputConfig, StreamingFormatter, TreeWalker, WalkerConfig};

fn walk_to_sink(walker: &TreeWalker, dir: &TestDir) {
    let mut formatter =
        StreamingFormatter::with_writer(OutputConfig::plain(), NoColor::new(io::sink()));
    walker
        .walk(black_box(dir.path()), &mut formatter)
        .expect("walk should succeed");
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");

    // 3 levels, fanout 4: 84 directories
    let small = TestDir::new();
    small.populate(3, 4);
    let walker = TreeWalker::new(WalkerConfig::default());
    group.bench_function("small_tree", |b| b.iter(|| walk_to_sink(&walker, &small)));

    // 4 levels, fanout 5: 780 directories
    let large = TestDir::new();
    large.populate(4, 5);
    group.bench_function("large_tree", |b| b.iter(|| walk_to_sink(&walker, &large)));

    let limited = TreeWalker::new(WalkerConfig {
        max_depth: Some(2),
        ..Default::default()
    });
    group.bench_function("large_tree_depth_2", |b| {
        b.iter(|| walk_to_sink(&limited, &large))
    });

    let dirs_only = TreeWalker::new(WalkerConfig {
        dirs_only: true,
        ..Default::default()
    });
    group.bench_function("large_tree_dirs_only", |b| {
        b.iter(|| walk_to_sink(&dirs_only, &large))
    });

    group.finish();
}

fn bench_indentation(c: &mut Criterion) {
    let shallow = [false, true];
    let deep: Vec<bool> = (0..32).map(|i| i % 3 == 0).collect();

    let mut group = c.benchmark_group("indentation");
    group.bench_function("depth_2", |b| {
        b.iter(|| indentation(black_box(&shallow), black_box(false)))
    });
    group.bench_function("depth_32", |b| {
        b.iter(|| indentation(black_box(&deep), black_box(true)))
    });
    group.finish();
}

criterion_group!(benches, bench_walk, bench_indentation);
criterion_main!(benches);
