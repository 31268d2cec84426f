use criterion::{criterion_group, criterion_main, Criterion};
use recommender_core::{recommend, Document};

const WORDS: &[&str] = &[
    "auto", "insurance", "claims", "health", "plans", "coverage", "premium", "deductible",
    "policy", "renewal", "home", "travel", "accident", "liability", "billing", "payment",
];

fn synthetic_corpus(n: usize) -> Vec<Document> {
    (0..n)
        .map(|i| {
            let title: Vec<&str> = (0..5).map(|k| WORDS[(i * 7 + k * 3) % WORDS.len()]).collect();
            Document::new(i as u64, title.join(" "), "", format!("https://help.example/{i}"))
        })
        .collect()
}

fn bench_recommend(c: &mut Criterion) {
    let corpus = synthetic_corpus(500);
    c.bench_function("recommend_500", |b| b.iter(|| recommend(&corpus, "health insurance claims", 3)));
}

criterion_group!(benches, bench_recommend);
criterion_main!(benches);
