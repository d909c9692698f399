use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::HashMap;

use scoremap::{
    difficulty_performance, overall_statistics, topic_performance, MemoryResponseStore,
    ResponseEvent, ResponseStore, StatisticsFilter,
};

const TOPICS: &[&str] = &["Algebra", "Geometry", "Calculus", "Statistics", "Number Theory"];

fn synthetic_events(count: usize) -> Vec<ResponseEvent> {
    let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| ResponseEvent {
            session_id: format!("session-{}", i % 50),
            question_id: format!("question-{}", i % 500),
            answer_index: (i % 4) as u32,
            correct: i % 3 != 0,
            response_time_ms: ((i * 733) % 45_000) as u64,
            timestamp: start + Duration::seconds(i as i64),
            question_number: (i % 20 + 1) as u32,
            difficulty: (i % 100) as f64 / 99.0,
            topic: TOPICS[i % TOPICS.len()].to_string(),
            student_ability: ((i * 37) % 100) as f64 / 99.0,
            metadata: HashMap::new(),
        })
        .collect()
}

fn bench_aggregation(c: &mut Criterion) {
    let events = synthetic_events(10_000);

    c.bench_function("overall_statistics_10k", |b| {
        b.iter(|| overall_statistics(black_box(&events)))
    });

    c.bench_function("topic_performance_10k", |b| {
        b.iter(|| topic_performance(black_box(&events)))
    });

    c.bench_function("difficulty_performance_10k", |b| {
        b.iter(|| difficulty_performance(black_box(&events)))
    });
}

fn bench_store_fetch(c: &mut Criterion) {
    let store = MemoryResponseStore::new();
    for event in synthetic_events(10_000) {
        store.append(event).unwrap();
    }
    let filter = StatisticsFilter::all().with_topic("alg");

    c.bench_function("memory_store_fetch_filtered_10k", |b| {
        b.iter(|| store.fetch_matching(black_box(&filter)).unwrap())
    });
}

criterion_group!(benches, bench_aggregation, bench_store_fetch);
criterion_main!(benches);
