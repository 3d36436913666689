//! Benchmarks for the fractalinator pipeline.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fractalinator::parser::parse_sessions;
use fractalinator::{ArtConfig, Artwork, FieldSynthesizer};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn base_config() -> ArtConfig {
    ArtConfig::default().with_shape(160, 120).with_seed(42).with_brush(20, 50.0)
}

// -- Noise synthesis --

fn bench_synthesis(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthesis");

    for sigma in [2.0, 26.0] {
        let synth = FieldSynthesizer::new(42, sigma).unwrap();
        group.bench_function(format!("synthesize_160x120_sigma_{}", sigma), |b| {
            b.iter(|| synth.synthesize(black_box((160, 120))).unwrap())
        });
    }

    group.finish();
}

// -- Artwork operations --

fn bench_artwork(c: &mut Criterion) {
    let mut group = c.benchmark_group("artwork");

    group.bench_function("construct_160x120", |b| {
        b.iter(|| Artwork::new(black_box(base_config())).unwrap())
    });

    let mut art = Artwork::new(base_config()).unwrap();
    group.bench_function("paint_stroke_r20", |b| {
        let mut x = 0;
        b.iter(|| {
            x = (x + 7) % 160;
            art.paint_stroke(black_box(x), black_box(60)).unwrap()
        })
    });

    let art = Artwork::new(base_config()).unwrap();
    group.bench_function("high_res_x2", |b| b.iter(|| art.high_res(black_box(2)).unwrap()));

    group.finish();
}

// -- Session parsing --

fn bench_parsing(c: &mut Criterion) {
    let source = fs::read_to_string(fixtures_dir().join("gallery.art.md")).unwrap();

    c.bench_function("parse_gallery", |b| {
        b.iter(|| parse_sessions(black_box(&source)).unwrap())
    });
}

criterion_group!(benches, bench_synthesis, bench_artwork, bench_parsing);
criterion_main!(benches);
