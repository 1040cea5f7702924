use std::hint::black_box;
use std::path::PathBuf;

use criterion::{criterion_group, criterion_main, Criterion};
use theopedia::{load_catalog, validate_catalog, PageGenerator, SiteConfig};

fn bench_render(c: &mut Criterion) {
    let content_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("content");
    let catalog = load_catalog(&content_dir).expect("content should load");
    let generator = PageGenerator::new(SiteConfig::default());

    c.bench_function("load_catalog", |b| b.iter(|| load_catalog(black_box(&content_dir))));
    c.bench_function("validate_catalog", |b| b.iter(|| validate_catalog(black_box(&catalog))));
    c.bench_function("render_html_all", |b| {
        b.iter(|| {
            for page in catalog.iter() {
                black_box(generator.render_html(page, "en").expect("html"));
            }
        })
    });
    c.bench_function("render_markdown_all", |b| {
        b.iter(|| {
            for page in catalog.iter() {
                black_box(generator.render_markdown(page, "en").expect("markdown"));
            }
        })
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
