use criterion::{black_box, criterion_group, criterion_main, Criterion};
use onthedot_engine::{resolve, words_match, CandidateItem};

fn create_test_candidates(count: u32) -> Vec<CandidateItem> {
    (1..=count)
        .map(|rank| {
            CandidateItem::new(rank, format!("Test Title {}", rank))
                .with_alias(format!("Alias {}", rank))
        })
        .collect()
}

fn bench_words_match(c: &mut Criterion) {
    let pairs = [
        ("Snop Dog", "Snoop Dogg"),
        ("Taylor Swft", "Taylor Swift"),
        ("Marvel Studos", "Marvel Studios"),
        ("Apple", "Apple Inc"),
        ("50 Cnt", "50 Cent"),
    ];

    c.bench_function("words_match_5_pairs", |b| {
        b.iter(|| {
            for (guess, title) in pairs {
                black_box(words_match(guess, title, 1));
            }
        });
    });
}

fn bench_resolve(c: &mut Criterion) {
    let candidates = create_test_candidates(100);
    let previous = ["Test Title 3", "Test Title 70"];

    c.bench_function("resolve_title_100", |b| {
        b.iter(|| black_box(resolve("test title 50", &candidates, &previous).unwrap()));
    });

    c.bench_function("resolve_alias_100", |b| {
        b.iter(|| black_box(resolve("alias 99", &candidates, &previous).unwrap()));
    });

    c.bench_function("resolve_miss_100", |b| {
        b.iter(|| black_box(resolve("nothing like it", &candidates, &previous).unwrap()));
    });
}

criterion_group!(benches, bench_words_match, bench_resolve);
criterion_main!(benches);
