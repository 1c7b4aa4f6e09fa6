use criterion::{criterion_group, criterion_main, Criterion};
use tf_idf_ranker::{Document, TFIDFRanker, TermFrequency};

/// tiny deterministic PRNG (xorshift32) so runs are comparable
struct Rng(u32);
impl Rng {
    fn new(seed: u32) -> Self {
        Self(seed)
    }
    fn next_u32(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }
}

/// Synthetic corpus with a Zipf-ish skew: low term ids dominate, so document
/// vocabularies overlap the way natural text does.
fn synthetic_corpus(doc_num: usize, tokens_per_doc: usize) -> TFIDFRanker {
    let vocab: Vec<String> = (0..512).map(|i| format!("term{i}")).collect();
    let mut rng = Rng::new(0x1234_5678);
    let mut ranker = TFIDFRanker::new();
    for doc_id in 0..doc_num {
        let tokens: Vec<&str> = (0..tokens_per_doc)
            .map(|_| {
                let a = (rng.next_u32() % 512) as usize;
                let b = (rng.next_u32() % 512) as usize;
                vocab[a.min(b)].as_str()
            })
            .collect();
        let freq = TermFrequency::from_tokens(&tokens);
        let filename = format!("doc{doc_id}.txt");
        ranker.add_doc(Document::new(freq, &filename, "", "", ""));
    }
    ranker
}

fn ranking_benchmark(c: &mut Criterion) {
    let ranker = synthetic_corpus(64, 2_000);
    let query = TermFrequency::from_tokens(&["term1", "term17", "term300"]);

    c.bench_function("build_corpus_64_docs", |b| {
        b.iter(|| synthetic_corpus(64, 2_000));
    });

    c.bench_function("rank_64_docs_top_10", |b| {
        b.iter(|| ranker.rank(&query, 10).expect("aligned collection"));
    });
}

criterion_group!(benches, ranking_benchmark);
criterion_main!(benches);
