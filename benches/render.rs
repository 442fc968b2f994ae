//! Benchmarks for grid render cycles.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gridmark::highlight::HighlightStore;
use gridmark::layout::GridLayout;
use gridmark::render::{html, render_pass};
use gridmark::{Grid, GridConfig, Orientation};

fn config(final_columns: u32) -> GridConfig {
    GridConfig {
        num_final_columns: final_columns,
        column_starts_with_zero: true,
        row_starts_with_zero: true,
        ..GridConfig::default()
    }
}

/// Single render pass over the host layout with the demo highlights merged.
fn bench_render_pass(c: &mut Criterion) {
    let grid = Grid::demo().expect("demo grid");
    let layout = grid.layout().clone();
    let store: HighlightStore = grid.store().clone();

    c.bench_function("render_pass_demo", |b| {
        b.iter(|| render_pass(black_box(&layout), Orientation::Vertical, black_box(&store)))
    });
}

/// Full highlight cycle (render, merge, re-render) at increasing widths.
fn bench_highlight_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlight_cycle");

    for final_columns in [69u32, 280, 1120] {
        let layout = GridLayout::new(&config(final_columns)).expect("layout");
        group.throughput(Throughput::Elements(layout.cell_count() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(final_columns),
            &final_columns,
            |b, &final_columns| {
                b.iter(|| {
                    let mut grid = Grid::new(config(final_columns)).expect("grid");
                    grid.highlight_cell(black_box("40.5"), "red");
                    grid.highlight_cell(black_box("12.3"), "blue");
                    grid.undo_last_highlight();
                    grid
                })
            },
        );
    }

    group.finish();
}

fn bench_html(c: &mut Criterion) {
    let grid = Grid::demo().expect("demo grid");
    c.bench_function("html_fragment_demo", |b| {
        b.iter(|| html::render_fragment(black_box(grid.rendered())))
    });
}

criterion_group!(
    benches,
    bench_render_pass,
    bench_highlight_cycle,
    bench_html
);
criterion_main!(benches);
