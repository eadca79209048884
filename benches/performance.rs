//! Benchmarks for the hot pure paths: log-line formatting and flag parsing

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use inference_app::logger::{LogLevel, format_line};
use inference_app::options::Options;

fn bench_format_line(c: &mut Criterion) {
    c.bench_function("format_line", |b| {
        b.iter(|| {
            format_line(
                black_box(LogLevel::Info),
                black_box("Thu Aug  7 14:03:05 2026"),
                black_box("Inference running... count: 42"),
            )
        })
    });
}

fn bench_parse_opts(c: &mut Criterion) {
    let tokens: Vec<String> = [
        "--model",
        "model.bin",
        "--config",
        "config.toml",
        "--log_level",
        "DEBUG",
        "--log",
        "inference.log",
    ]
    .iter()
    .map(|t| t.to_string())
    .collect();

    c.bench_function("parse_opts", |b| {
        b.iter(|| {
            let mut opts = Options::new();
            opts.parse_opts(black_box(tokens.clone())).unwrap();
            opts
        })
    });
}

criterion_group!(benches, bench_format_line, bench_parse_opts);
criterion_main!(benches);
