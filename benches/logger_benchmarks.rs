//! Criterion benchmarks for rust_field_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_field_logger::prelude::*;
use rust_field_logger::Template;

fn sample_attributes() -> Attributes {
    Attributes::new()
        .with_field("module", "bench")
        .with_field("_pid", 4242)
        .with_field("request_id", "abc-123")
        .with_field("latency_ms", 42)
        .with_field("cached", false)
}

// ============================================================================
// Formatter Benchmarks
// ============================================================================

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.throughput(Throughput::Elements(1));

    let entry = LogEntry::new(LogLevel::Warning, "Request processed", sample_attributes());

    let template = LineFormatter::default();
    group.bench_function("default_template", |b| {
        b.iter(|| black_box(template.format(black_box(&entry)).unwrap()));
    });

    let named = LineFormatter::from_config("{dt} {level} {module}: {message} {extra}");
    group.bench_function("named_template", |b| {
        b.iter(|| black_box(named.format(black_box(&entry)).unwrap()));
    });

    let json = LineFormatter::from_config("json");
    group.bench_function("json", |b| {
        b.iter(|| black_box(json.format(black_box(&entry)).unwrap()));
    });

    group.bench_function("template_parse", |b| {
        b.iter(|| black_box(Template::parse(black_box(rust_field_logger::DEFAULT_TEMPLATE))));
    });

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let capture = MemoryAppender::new();
    let logger = Logger::builder()
        .module("bench")
        .min_level(LogLevel::Info)
        .appender(capture.clone())
        .build()
        .unwrap();
    let attrs = sample_attributes();

    group.bench_function("warning_with_attributes", |b| {
        b.iter(|| {
            logger.warning(black_box("Warning message"), "", Some(&attrs), None);
            capture.clear();
        });
    });

    group.bench_function("filtered_debug", |b| {
        b.iter(|| logger.debug(black_box("Filtered message"), "", Some(&attrs), None));
    });

    group.finish();
}

// ============================================================================
// Merge Benchmarks
// ============================================================================

fn bench_merge(c: &mut Criterion) {
    let common = Attributes::new()
        .with_field("module", "bench")
        .with_field("_pid", 4242);
    let call = sample_attributes();

    c.bench_function("merge_attributes", |b| {
        b.iter(|| black_box(common.merged(black_box(&call))));
    });
}

criterion_group!(benches, bench_formatting, bench_dispatch, bench_merge);
criterion_main!(benches);
