//! Projection throughput for a mid-sized fight with and without scenario matching.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use fight_bridge::data::{RawFight, RawFightRecord, RawLeek, ScenarioEntity, ScenarioRecord};
use fight_bridge::fight::FightProjector;

const LEEKS_PER_TEAM: i64 = 32;

fn sample_fight() -> RawFightRecord {
    let leeks = (0..LEEKS_PER_TEAM * 2)
        .map(|id| RawLeek {
            id,
            name: Some(format!("leek-{id}")),
            level: Some(100 + id),
            team: Some(if id < LEEKS_PER_TEAM { 1 } else { 2 }),
            farmer: Some(1000 + id % 8),
            ..RawLeek::default()
        })
        .collect();
    let dead = (0..LEEKS_PER_TEAM * 2)
        .filter(|id| id % 3 == 0)
        .map(|id| (id.to_string(), true))
        .collect();
    RawFightRecord {
        fight: RawFight {
            leeks,
            dead,
            winner: Some(2),
            duration: Some(64),
            ..RawFight::default()
        },
    }
}

fn sample_scenario() -> ScenarioRecord {
    let team = |range: std::ops::Range<i64>| -> Vec<ScenarioEntity> {
        range
            .map(|id| ScenarioEntity {
                id: Some(50_000 + id),
                name: Some(format!("leek-{id}")),
                ..ScenarioEntity::default()
            })
            .collect()
    };
    ScenarioRecord {
        farmers: Vec::new(),
        entities: vec![
            team(0..LEEKS_PER_TEAM),
            team(LEEKS_PER_TEAM..LEEKS_PER_TEAM * 2),
        ],
    }
}

fn bench_projection(c: &mut Criterion) {
    let record = sample_fight();
    let scenario = sample_scenario();
    let projector = FightProjector::default();

    let mut group = c.benchmark_group("projection");
    group.throughput(Throughput::Elements((LEEKS_PER_TEAM * 2) as u64));
    group.bench_function("identity_fallback", |b| {
        b.iter(|| projector.project_at(1, black_box(&record), None, 0))
    });
    group.bench_function("scenario_name_match", |b| {
        b.iter(|| projector.project_at(1, black_box(&record), Some(black_box(&scenario)), 0))
    });
    group.finish();
}

criterion_group!(benches, bench_projection);
criterion_main!(benches);
