// Criterion benchmarks for Valentin Algo

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use valentin_algo::core::{compatibility_score, Matchmaker};
use valentin_algo::models::{
    MatchFilters, PartnerProfile, ScoringWeights, SearchPreferences, SortKey, UserProfile,
};

fn create_partner(id: usize) -> PartnerProfile {
    let cities = ["Paris", "Lyon", "Marseille", "Bordeaux", "Lille"];
    let hobby_pool = ["hiking", "reading", "cooking", "cinema", "travel", "music"];

    PartnerProfile {
        id: id as u64,
        name: format!("Partner {}", id),
        age: Some(20 + (id % 30) as u8),
        city: Some(cities[id % cities.len()].to_string()),
        hobbies: hobby_pool[..(id % 4)].iter().map(|h| h.to_string()).collect(),
        personality: vec!["kind".to_string(), "funny".to_string()],
        description: None,
        image: None,
        is_active: true,
    }
}

fn create_user() -> UserProfile {
    UserProfile {
        name: "Claire".to_string(),
        age: Some(30),
        city: Some("Paris".to_string()),
        selected_traits: vec!["kind".to_string()],
        selected_hobbies: vec!["hiking".to_string(), "reading".to_string()],
        description: None,
        search_preferences: SearchPreferences::default(),
    }
}

fn bench_compatibility_score(c: &mut Criterion) {
    let user = create_user();
    let partner = create_partner(1);
    let weights = ScoringWeights::default();

    c.bench_function("compatibility_score", |b| {
        b.iter(|| compatibility_score(black_box(&user), black_box(&partner), black_box(&weights)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let matchmaker = Matchmaker::with_default_weights();
    let user = create_user();

    let mut group = c.benchmark_group("ranking");

    for partner_count in [10, 50, 100, 500, 1000].iter() {
        let partners: Vec<PartnerProfile> = (0..*partner_count).map(create_partner).collect();

        group.bench_with_input(
            BenchmarkId::new("rank", partner_count),
            partner_count,
            |b, _| {
                b.iter(|| {
                    matchmaker.rank(
                        black_box(&user),
                        black_box(partners.clone()),
                        black_box(&MatchFilters::default()),
                        black_box(SortKey::Compatibility),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_filtered_ranking(c: &mut Criterion) {
    let matchmaker = Matchmaker::with_default_weights();
    let user = create_user();
    let partners: Vec<PartnerProfile> = (0..100).map(create_partner).collect();
    let filters = MatchFilters {
        city: "paris".to_string(),
        min_age: 25,
        max_age: 35,
    };

    c.bench_function("rank_filtered_100_partners", |b| {
        b.iter(|| {
            matchmaker.rank(
                black_box(&user),
                black_box(partners.clone()),
                black_box(&filters),
                black_box(SortKey::Name),
            )
        });
    });
}

criterion_group!(
    benches,
    bench_compatibility_score,
    bench_ranking,
    bench_filtered_ranking
);

criterion_main!(benches);
