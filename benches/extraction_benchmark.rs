use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ticker_mentions::{
    rank_ticker_mentions, CandidateExtractor, MentionPipeline, MentionPipelineConfig,
    TickerValidator,
};

fn benchmark_validator() -> TickerValidator {
    TickerValidator::with_common_abbreviations(
        ["AAPL", "MSFT", "GME", "AMC", "TSLA", "NVDA"]
            .iter()
            .map(|s| s.to_string()),
    )
}

fn benchmark_extract_candidates(c: &mut Criterion) {
    let extractor = CandidateExtractor::new().unwrap();
    let text = "AAPL is performing well, but MSFT is also a strong contender. GME? YOLO.";

    c.bench_function("extract_candidates", |b| {
        b.iter(|| extractor.candidates(black_box(text)).count())
    });
}

fn benchmark_rank_mentions(c: &mut Criterion) {
    let validator = benchmark_validator();
    let text = "GME to the moon. AMC and GME, DD inside. TSLA TSLA NVDA. ".repeat(200);

    c.bench_function("rank_ticker_mentions", |b| {
        b.iter(|| rank_ticker_mentions(black_box(&text), black_box(&validator), 10))
    });
}

fn benchmark_analyze_corpus(c: &mut Criterion) {
    let validator = benchmark_validator();
    let pipeline = MentionPipeline::new(&validator, MentionPipelineConfig::default()).unwrap();
    let items: Vec<String> = (0..500)
        .map(|i| format!("Post {} about GME and AMC with some DD on NVDA", i))
        .collect();

    c.bench_function("analyze_corpus", |b| {
        b.iter(|| pipeline.analyze_corpus(black_box(&items)))
    });
}

criterion_group!(
    benches,
    benchmark_extract_candidates,
    benchmark_rank_mentions,
    benchmark_analyze_corpus
);
criterion_main!(benches);
