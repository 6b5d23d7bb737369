// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for TABSCORE
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Text rendering of long sections
//! - JSON serialization and parsing
//! - Copy-on-write edit cost as sections grow

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tabscore::{Column, Section, Tuning};

/// Build a section with `size` columns of mixed-width fret labels
fn build_section(size: usize) -> Section {
    let tuning = Tuning::standard_guitar();
    let labels = ["0", "3", "12", "", "x", "h7"];
    let columns = (0..size)
        .map(|i| {
            let frets = (0..tuning.len()).map(|s| labels[(i + s) % labels.len()]);
            Column::from_frets(frets, &tuning)
        })
        .collect();
    Section::new("Bench", columns, tuning, 120.0)
}

/// Benchmark rendering to ASCII tab
fn bench_render_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_text");

    for size in [16, 256, 4096].iter() {
        let section = build_section(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &section, |b, section| {
            b.iter(|| black_box(section.to_text()))
        });
    }

    group.finish();
}

/// Benchmark JSON serialization and parsing
fn bench_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("json");

    for size in [16, 256, 4096].iter() {
        let section = build_section(*size);
        let json = section.to_json();
        let text = section.to_json_string();

        group.bench_with_input(BenchmarkId::new("to_json", size), &section, |b, section| {
            b.iter(|| black_box(section.to_json()))
        });

        group.bench_with_input(BenchmarkId::new("from_json", size), &json, |b, json| {
            b.iter(|| black_box(Section::from_json(json, Tuning::standard_guitar())))
        });

        group.bench_with_input(BenchmarkId::new("from_json_str", size), &text, |b, text| {
            b.iter(|| black_box(Section::from_json_str(text, Tuning::standard_guitar())))
        });
    }

    group.finish();
}

/// Benchmark single edits against sections of increasing size
fn bench_edits(c: &mut Criterion) {
    let mut group = c.benchmark_group("edits");

    for size in [16, 256, 4096].iter() {
        let section = build_section(*size);
        let middle = *size / 2;

        group.bench_with_input(BenchmarkId::new("add_column", size), &section, |b, section| {
            b.iter(|| black_box(section.add_column(middle as isize)))
        });

        group.bench_with_input(BenchmarkId::new("set_fret", size), &section, |b, section| {
            b.iter(|| {
                let column = section.columns()[middle].set_fret(1, "5").unwrap();
                black_box(section.set_column(column, middle))
            })
        });

        group.bench_with_input(BenchmarkId::new("set_tuning", size), &section, |b, section| {
            b.iter(|| black_box(section.set_tuning(Tuning::standard_bass())))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_text, bench_json, bench_edits);
criterion_main!(benches);
