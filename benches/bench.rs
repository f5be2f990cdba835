// Criterion benchmarks for the Amora API core logic

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use uuid::Uuid;

use amora_api::core::{filter_candidates, is_mutual_like, normalize_pair, ExclusionSet};
use amora_api::models::{Profile, ProfileType, SwipeAction};

fn create_candidate(id: Uuid) -> Profile {
    Profile {
        id,
        user_id: id.to_string(),
        display_name: format!("User {}", id),
        age: 27,
        location: Some("Berlin".to_string()),
        bio: None,
        photo_urls: vec![],
        interests: vec!["hiking".to_string()],
        is_verified: false,
        is_premium: false,
        is_active: true,
        profile_type: ProfileType::Single,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    }
}

fn bench_normalize_pair(c: &mut Criterion) {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();

    c.bench_function("normalize_pair", |bench| {
        bench.iter(|| normalize_pair(black_box(a), black_box(b)));
    });
}

fn bench_reciprocity(c: &mut Criterion) {
    c.bench_function("is_mutual_like", |bench| {
        bench.iter(|| {
            is_mutual_like(
                black_box(SwipeAction::Like),
                black_box(Some(SwipeAction::Like)),
            )
        });
    });
}

fn bench_feed_filtering(c: &mut Criterion) {
    let viewer = Uuid::new_v4();

    let mut group = c.benchmark_group("feed_filtering");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<Profile> = (0..*candidate_count)
            .map(|_| create_candidate(Uuid::new_v4()))
            .collect();

        // Half the candidates already swiped
        let exclusions = ExclusionSet::new(viewer).with_swiped(
            candidates
                .iter()
                .take(candidate_count / 2)
                .map(|p| p.id)
                .collect::<Vec<_>>(),
        );

        group.bench_with_input(
            BenchmarkId::new("filter_candidates", candidate_count),
            candidate_count,
            |bench, _| {
                bench.iter(|| {
                    filter_candidates(
                        black_box(candidates.clone()),
                        black_box(&exclusions),
                        black_box(20),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_normalize_pair, bench_reciprocity, bench_feed_filtering);

criterion_main!(benches);
