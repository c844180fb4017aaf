//! Benchmarks for markdown to HTML conversion.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use grip_renderer::{Parser, preprocess};

/// Generate markdown exercising alerts, task lists, emoji and code blocks.
fn generate_markdown(sections: usize) -> String {
    let mut md = String::with_capacity(sections * 300);
    md.push_str("# Release notes :tada:\n\n");

    for i in 0..sections {
        md.push_str(&format!("## Section {i}\n\n"));
        md.push_str("> [!NOTE]\n> Upgrade before **Friday** :rocket:\n\n");
        md.push_str("Checklist:\n- [x] tests\n- [ ] docs\n- plain item\n\n");
        md.push_str(&format!(
            "```rust\nfn section_{i}() -> usize {{ {i} }}\n```\n\n"
        ));
    }
    md
}

fn bench_simple(c: &mut Criterion) {
    let parser = Parser::new("light");

    c.bench_function("convert_simple_markdown", |b| {
        b.iter(|| parser.md_to_html(b"# Hello\n\nSimple content."));
    });
}

fn bench_preprocess(c: &mut Criterion) {
    let markdown = generate_markdown(50);

    c.bench_function("preprocess_50_sections", |b| {
        b.iter(|| preprocess(&markdown));
    });
}

fn bench_varying_sizes(c: &mut Criterion) {
    let parser = Parser::new("auto");
    let mut group = c.benchmark_group("convert_by_size");

    for sections in [5, 20, 50] {
        let markdown = generate_markdown(sections);
        group.throughput(Throughput::Bytes(markdown.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("sections", sections),
            &markdown,
            |b, md| b.iter(|| parser.md_to_html(md.as_bytes())),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_simple, bench_preprocess, bench_varying_sizes);
criterion_main!(benches);
