use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rootword::{EmbeddedSource, LetterSignature, WordEngine};

fn bench_init(c: &mut Criterion) {
    c.bench_function("init_embedded", |b| {
        b.iter(|| WordEngine::init(black_box(&EmbeddedSource)))
    });
}

fn bench_generate(c: &mut Criterion) {
    let engine = WordEngine::init(&EmbeddedSource);

    c.bench_function("generate_level_6", |b| {
        b.iter(|| engine.generate_level(black_box(6)))
    });
    c.bench_function("generate_level_7", |b| {
        b.iter(|| engine.generate_level(black_box(7)))
    });

    let root = LetterSignature::of("strain");
    c.bench_function("sub_words_strain", |b| {
        b.iter(|| engine.index().sub_words(black_box(&root)).len())
    });
}

criterion_group!(benches, bench_init, bench_generate);
criterion_main!(benches);
