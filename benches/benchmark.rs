use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tfidf_cosine::{TfidfVectorizer, Tokenizer};

/// xorshift32, deterministic synthetic corpus
struct Rng(u32);

impl Rng {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }
}

/// letter-only word so the default token pattern keeps it whole
fn word(mut x: u32) -> String {
    let mut out = String::with_capacity(4);
    for _ in 0..4 {
        out.push((b'a' + (x % 26) as u8) as char);
        x /= 26;
    }
    out
}

fn synthetic_collection(doc_count: usize, tokens_per_doc: usize, vocab_size: u32) -> Vec<String> {
    let mut rng = Rng(0x9e3779b9);
    (0..doc_count)
        .map(|_| {
            (0..tokens_per_doc)
                .map(|_| word(rng.next_u32() % vocab_size))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn fit_and_similarity_benchmark(c: &mut Criterion) {
    let collection = synthetic_collection(200, 300, 2_000);
    let stopwords = [word(0), word(1), word(2), word(3)];

    c.bench_function("fit_transform", |b| {
        b.iter(|| {
            let tokenizer = Tokenizer::new().with_stopwords(stopwords.clone());
            let mut vectorizer = TfidfVectorizer::with_tokenizer(tokenizer);
            vectorizer
                .fit_transform(black_box(&collection))
                .expect("collection is non-empty");
            vectorizer
        });
    });

    let tokenizer = Tokenizer::new().with_stopwords(stopwords.clone());
    let mut vectorizer = TfidfVectorizer::with_tokenizer(tokenizer);
    vectorizer
        .fit_transform(&collection)
        .expect("collection is non-empty");

    c.bench_function("similarity_matrix", |b| {
        b.iter(|| black_box(vectorizer.similarity_matrix()));
    });
}

criterion_group!(benches, fit_and_similarity_benchmark);
criterion_main!(benches);
