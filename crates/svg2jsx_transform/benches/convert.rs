//! Benchmarks for converting documents into components
use std::{fmt::Write, hint::black_box};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use svg2jsx_transform::{convert, convert_batch, Options, SourceFile};

fn icon() -> String {
    r#"<svg xmlns="http://www.w3.org/2000/svg" class="icon" viewBox="0 0 24 24">
    <!-- arrow -->
    <path d="M5 12h14M12 5l7 7-7 7" fill="none" stroke="currentColor"/>
</svg>"#
        .to_string()
}

fn illustration() -> String {
    let mut svg = String::from(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 512 512">"#);
    for i in 0..200 {
        let _ = write!(
            svg,
            r#"<g id="group-{i}" transform="translate({i} {i})"><path d="{}"/><circle cx="{i}" cy="{i}" r="4"/></g>"#,
            "M0 0h32v32H0zM4 4l24 24M28 4L4 28c4 4 8 8 12 12s8 8 12 12".repeat(3)
        );
    }
    svg.push_str("</svg>");
    svg
}

/// # Panics
/// If a fixture can't be converted
pub fn criterion_benchmark(c: &mut Criterion) {
    let options = Options {
        typescript: true,
        cleanup_ids: true,
        ..Options::default()
    };
    for (name, svg) in [("icon", icon()), ("illustration", illustration())] {
        c.bench_with_input(BenchmarkId::new("convert", name), &svg, |b, svg| {
            b.iter(|| black_box(convert(svg, "bench-icon.svg", options).unwrap()));
        });
    }

    let files: Vec<_> = (0..64)
        .map(|i| SourceFile {
            name: format!("icon-{i}.svg"),
            content: icon(),
        })
        .collect();
    c.bench_function("convert_batch", |b| {
        b.iter(|| black_box(convert_batch(files.clone(), options)));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
