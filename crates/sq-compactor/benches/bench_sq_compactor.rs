use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use sq_compactor::{split_prompts, compress_batch, RuleCompressor};
use sq_core::HeuristicCounter;

fn generate_text(size_kb: usize) -> String {
    let base = "Hello! I would like to know, could you please explain in order to help me understand \
                the way in which artificial intelligence is basically used in healthcare? It is worth \
                noting that, in my opinion, this is really very important due to the fact that privacy \
                (and security) matters... For example, large language model providers utilize data. ";
    let mut text = String::with_capacity(size_kb * 1024);
    while text.len() < size_kb * 1024 {
        text.push_str(base);
    }
    text.truncate(size_kb * 1024);
    text
}

fn generate_word_soup(words: usize) -> String {
    let vocab = [
        "please", "actually", "very", "the", "the", "in", "order", "to", "that", "is",
        "machine", "learning", "hello", "report", ",", "...", "!!", "(aside)",
    ];
    let mut rng = StdRng::seed_from_u64(7);
    (0..words)
        .map(|_| *vocab.choose(&mut rng).unwrap())
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_compress_text(c: &mut Criterion) {
    let compressor = RuleCompressor::new();
    for kb in [1, 10, 100] {
        let text = generate_text(kb);
        c.bench_function(&format!("compress_prose_{kb}kb"), |b| {
            b.iter(|| black_box(compressor.compress(black_box(&text))))
        });
    }

    let soup = generate_word_soup(2_000);
    c.bench_function("compress_word_soup_2k", |b| {
        b.iter(|| black_box(compressor.compress(black_box(&soup))))
    });
}

fn bench_batch(c: &mut Criterion) {
    let compressor = RuleCompressor::new();
    let counter = HeuristicCounter::default();
    let doc = (0..200).map(|i| format!("prompt {i}: {}", generate_text(1))).collect::<Vec<_>>().join("\n\n");
    let prompts = split_prompts(&doc);
    c.bench_function("compress_batch_200", |b| {
        b.iter(|| black_box(compress_batch(&compressor, black_box(&prompts), &counter, "gpt-4")))
    });
}

criterion_group!(benches, bench_compress_text, bench_batch);
criterion_main!(benches);
