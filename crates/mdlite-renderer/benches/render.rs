//! Benchmarks for marker rendering.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mdlite_renderer::MarkerRenderer;

fn nested_pairs(count: usize) -> String {
    format!("{}{}", "_This ".repeat(count), "and that_ ".repeat(count))
}

fn bench_render_sentence(c: &mut Criterion) {
    let renderer = MarkerRenderer::default();

    c.bench_function("render_mixed_sentence", |b| {
        b.iter(|| renderer.render("Different _scores __can_ intersect__ with 'code' too"));
    });
}

fn bench_render_nested(c: &mut Criterion) {
    let renderer = MarkerRenderer::default();
    let mut group = c.benchmark_group("render_nested_pairs");

    for count in [100, 1000, 10_000] {
        let markdown = nested_pairs(count);
        group.throughput(Throughput::Bytes(markdown.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &markdown, |b, md| {
            b.iter(|| renderer.render(md));
        });
    }

    group.finish();
}

fn bench_render_flat(c: &mut Criterion) {
    let renderer = MarkerRenderer::default();
    let mut group = c.benchmark_group("render_flat_pairs");

    for count in [100, 1000, 10_000] {
        let markdown = "_This_ ".repeat(count);
        group.throughput(Throughput::Bytes(markdown.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &markdown, |b, md| {
            b.iter(|| renderer.render(md));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_render_sentence,
    bench_render_nested,
    bench_render_flat
);
criterion_main!(benches);
