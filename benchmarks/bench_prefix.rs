use std::hint::black_box;
use std::io;

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};

use prefixlog::{Caller, Capabilities, Logger, PrefixOverrides};

fn bench_logger(color: bool) -> Logger {
    Logger::builder()
        .name("bench")
        .date(true)
        .color(color)
        .capabilities(Capabilities { color })
        .output(io::sink())
        .diagnostics(io::sink())
        .build()
}

fn bench_build_prefix(c: &mut Criterion) {
    let plain = bench_logger(false);
    let colored = bench_logger(true);
    let now = NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_milli_opt(10, 30, 45, 123)
        .unwrap();
    let overrides = PrefixOverrides::none();

    c.bench_function("build_prefix_plain", |b| {
        b.iter(|| black_box(plain.build_prefix_at(2, Caller::named("handler"), &overrides, now)));
    });

    c.bench_function("build_prefix_colored", |b| {
        b.iter(|| black_box(colored.build_prefix_at(5, Caller::named("handler"), &overrides, now)));
    });
}

fn bench_filtered_message(c: &mut Criterion) {
    let log = bench_logger(false);
    c.bench_function("log_below_threshold", |b| {
        b.iter(|| log.log_message(black_box("discarded"), 0));
    });
    c.bench_function("log_to_sink", |b| {
        b.iter(|| prefixlog::info!(log, "request {} served", black_box(42)));
    });
}

criterion_group!(benches, bench_build_prefix, bench_filtered_message);
criterion_main!(benches);
