//! Rendering benchmarks.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use lazy_static::lazy_static;

use butter::{
    attribute, leaf, parent, render, string, tag, value, Attributable, Fragment, Parent, Tag,
};

lazy_static! {
    static ref TABLE: Parent = parent(&tag("table"), &tag("/table"));
    static ref TR: Parent = parent(&tag("tr"), &tag("/tr"));
    static ref TD: Parent = parent(&tag("td"), &tag("/td"));
    static ref DIV: Parent = parent(&tag("div"), &tag("/div"));
    static ref IMG: Tag = tag("img");
    static ref SRC: Tag = tag("src");
}

/// A 100x10 table, every cell holding escaped text and an image.
fn wide_table() -> Fragment {
    TABLE.content(
        (0..100)
            .map(|row| {
                TR.content(
                    (0..10)
                        .map(|col| {
                            TD.content(string(&format!("{} < {}", row, col)).then(
                                leaf(&IMG).with(attribute(&SRC, &value("cell.png"))),
                            ))
                        })
                        .collect(),
                )
            })
            .collect(),
    )
}

fn deep_tree(depth: usize) -> Fragment {
    let mut fragment = string(&"leaf & branch");
    for _ in 0..depth {
        fragment = DIV.content(fragment);
    }
    fragment
}

fn bench_render_wide(c: &mut Criterion) {
    let table = wide_table();
    c.bench_function("render_wide_table", |b| {
        b.iter(|| render(black_box(&table)));
    });
}

fn bench_render_deep(c: &mut Criterion) {
    let tree = deep_tree(10_000);
    c.bench_function("render_deep_tree", |b| {
        b.iter(|| render(black_box(&tree)));
    });
}

fn bench_build_and_render(c: &mut Criterion) {
    c.bench_function("build_and_render_table", |b| {
        b.iter(|| render(&wide_table()));
    });
}

criterion_group!(
    benches,
    bench_render_wide,
    bench_render_deep,
    bench_build_and_render
);
criterion_main!(benches);
