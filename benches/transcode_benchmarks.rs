//! Performance benchmarks for parsing and rendering.
//!
//! These benchmarks measure throughput on synthetic address books:
//! - Parsing only
//! - Rendering already-parsed records
//! - Full clean (parse + render) at different sizes

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vcf_cleaner::{parse, render, DEFAULT_VERSION};

/// Build an address book with `count` contacts, each carrying duplicate
/// phones, repeated categories and a passthrough line.
fn synthetic_address_book(count: usize) -> String {
    let mut text = String::new();
    for i in 0..count {
        text.push_str("BEGIN:VCARD\nVERSION:3.0\n");
        text.push_str(&format!("FN:Person {i}\nN:Surname{i};Given{i};;;\n"));
        text.push_str("CATEGORIES:Friends,Work\nCATEGORIES:Work,Family\n");
        text.push_str(&format!("TEL;TYPE=CELL:+1 (555) {:03}-{:04}\n", i % 1000, i));
        text.push_str(&format!("TEL;TYPE=HOME:+1555{:03}{:04}\n", i % 1000, i));
        text.push_str(&format!("EMAIL:person{i}@example.com\n"));
        text.push_str("END:VCARD\n\n");
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let text = synthetic_address_book(1_000);
    c.bench_function("parse_1000_contacts", |b| {
        b.iter(|| parse(black_box(&text)));
    });
}

fn bench_render(c: &mut Criterion) {
    let records = parse(&synthetic_address_book(1_000));
    c.bench_function("render_1000_contacts", |b| {
        b.iter(|| render(black_box(&records), DEFAULT_VERSION, true));
    });
}

fn bench_clean_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("clean");
    for size in [10, 100, 1_000, 10_000] {
        let text = synthetic_address_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| render(&parse(text), DEFAULT_VERSION, false));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_render, bench_clean_sizes);
criterion_main!(benches);
