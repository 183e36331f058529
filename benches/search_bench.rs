//! Search pipeline benchmarks.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `compile` | Term normalization and regex compilation |
//! | `pipeline` | Filter + sort + project + materialize at a fixed table size |
//! | `scaling` | One AND query as the table grows from 1k to 100k rows |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench search_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pnsearch::{
    Column, Combinator, Config, Dataset, FuzzyPattern, Limits, Output, Pipeline, Presence, Query,
    QueryDefaults, SortDirection,
};
use std::hint::black_box;
use std::sync::Arc;

const PART_NAMES: [&str; 6] = [
    "六角ボルト",
    "六角ナット",
    "スプリング",
    "ベアリング",
    "平座金",
    "Oリング",
];
const MAKERS: [&str; 4] = ["ミスミ", "サンコー", "NSK", "オーエスジー"];

/// Deterministic table of `rows` order lines, newest first.
fn orders(rows: usize) -> Dataset {
    let text = |f: &dyn Fn(usize) -> String| (0..rows).map(|i| Some(f(i))).collect::<Vec<_>>();
    let sometimes = |every: usize| {
        (0..rows)
            .map(|i| (i % every != 0).then(|| format!("2024-{:02}-{:02}", i % 12 + 1, i % 28 + 1)))
            .collect::<Vec<_>>()
    };
    Dataset::new(vec![
        Column::new("登録日", text(&|i| format!("{:08}", rows - i))),
        Column::new("製番", text(&|i| format!("P{}", i % 500))),
        Column::new("ユニットNo", text(&|i| format!("U-{:05}", i))),
        Column::new("品番", text(&|i| format!("B-{}-{}", i % 12, i % 40))),
        Column::new("品名", text(&|i| PART_NAMES[i % PART_NAMES.len()].to_string())),
        Column::new("形式寸法", text(&|i| format!("M{}x{}", i % 12 + 3, i % 60 + 5))),
        Column::new("メーカ", text(&|i| MAKERS[i % MAKERS.len()].to_string())),
        Column::new("発注日", sometimes(3)),
        Column::new("納入日", sometimes(2)),
    ])
    .expect("bench table is rectangular")
}

fn pipeline(rows: usize) -> Pipeline {
    let aliases = Config::defaults().alias_table().expect("shipped aliases are valid");
    Pipeline::new(Arc::new(orders(rows)), Arc::new(aliases), "登録日", Limits::default())
}

/// No projection: the bench table lacks most of the default columns.
fn query() -> Query {
    Query::new(&QueryDefaults {
        sort_column: "登録日".into(),
        select: Vec::new(),
    })
}

// ---------------------------------------------------------------------------
// Pattern compilation
// ---------------------------------------------------------------------------

fn compile_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");
    for (name, mode) in [("and", Combinator::And), ("or", Combinator::Or)] {
        group.bench_function(name, |b| {
            b.iter(|| FuzzyPattern::compile(black_box("  六角\u{3000}ボルト M6 "), mode))
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Full pipeline
// ---------------------------------------------------------------------------

fn pipeline_bench(c: &mut Criterion) {
    let p = pipeline(20_000);
    let mut group = c.benchmark_group("pipeline");
    group.throughput(Throughput::Elements(20_000));

    let mut and = query();
    and.terms.part_name = "六角 ボルト".into();
    and.terms.maker = "ミスミ".into();
    group.bench_function("and_natural_order", |b| {
        b.iter(|| p.search(black_box(&and), Output::Display))
    });

    let mut or = query();
    or.terms.part_name = "ナット リング".into();
    or.combinator = Combinator::Or;
    group.bench_function("or_natural_order", |b| {
        b.iter(|| p.search(black_box(&or), Output::Display))
    });

    let mut sorted = query();
    sorted.terms.model = "M1".into();
    sorted.sort_column = "型式".into();
    sorted.direction = SortDirection::Ascending;
    group.bench_function("and_sorted_export", |b| {
        b.iter(|| p.search(black_box(&sorted), Output::Export))
    });

    let mut pending = query();
    pending.ordered = Presence::Present;
    pending.delivered = Presence::Absent;
    group.bench_function("presence_only", |b| {
        b.iter(|| p.search(black_box(&pending), Output::Display))
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Scaling
// ---------------------------------------------------------------------------

fn scaling_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");
    let mut q = query();
    q.terms.part_name = "ボルト".into();

    for rows in [1_000usize, 10_000, 100_000] {
        let p = pipeline(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &p, |b, p| {
            b.iter(|| p.search(black_box(&q), Output::Display))
        });
    }
    group.finish();
}

criterion_group!(benches, compile_bench, pipeline_bench, scaling_bench);
criterion_main!(benches);
