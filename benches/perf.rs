use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

use pl_decade::config::season_labels;
use pl_decade::season_table::generate;
use pl_decade::{TeamRegistry, summarize, team_history};

fn bench_generate_decade(c: &mut Criterion) {
    let registry = TeamRegistry::premier_league();
    let seasons = season_labels(2014, 10);
    c.bench_function("generate_decade", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        b.iter(|| {
            let records = generate(&registry, black_box(&seasons), &mut rng);
            black_box(records.len());
        })
    });
}

fn bench_summarize(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let records = generate(&TeamRegistry::premier_league(), &season_labels(1974, 50), &mut rng);
    c.bench_function("summarize_fifty_seasons", |b| {
        b.iter(|| {
            let summary = summarize(black_box(&records));
            black_box(summary.len());
        })
    });
    c.bench_function("team_history", |b| {
        b.iter(|| {
            let rows = team_history(black_box(&records), "Liverpool");
            black_box(rows.len());
        })
    });
}

criterion_group!(benches, bench_generate_decade, bench_summarize);
criterion_main!(benches);
