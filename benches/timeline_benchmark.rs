use chrono::{Duration, NaiveDate};
use criterion::{criterion_group, criterion_main, Criterion};
use player_portal::models::{Appointment, TrainingSession};
use player_portal::services::home::HomeView;
use player_portal::services::portal::PortalBundle;
use player_portal::services::Timeline;
use std::hint::black_box;

fn benchmark_timeline(c: &mut Criterion) {
    // Load a realistic profile from the committed sample data
    let profiles = std::fs::read_to_string("data/profiles.json").expect("Failed to read profiles");
    let profile = serde_json::from_str::<Vec<player_portal::models::Profile>>(&profiles)
        .expect("Failed to parse profiles")
        .remove(0);

    // A few hundred records spread over two years, deliberately unsorted
    let base = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let start_at = |i: i64| base + Duration::hours((i * 7919) % (24 * 730));

    let sessions: Vec<TrainingSession> = (0..300)
        .map(|i| TrainingSession {
            id: format!("ts-{i}"),
            player_id: profile.id.clone(),
            start_time: start_at(i),
            end_time: start_at(i) + Duration::minutes(55),
            trainer_name: "Sam Rivera".to_string(),
            score: 60.0 + (i % 40) as f64,
            number_of_goals: (i % 20) as u32,
            best_streak: (i % 8) as u32,
            number_of_balls: 120,
            avg_speed_of_play: 2.5,
            number_of_exercises: 8,
        })
        .collect();

    let appointments: Vec<Appointment> = (0..300)
        .map(|i| Appointment {
            id: format!("ap-{i}"),
            player_id: profile.id.clone(),
            start_time: start_at(i + 1),
            end_time: start_at(i + 1) + Duration::hours(1),
            trainer_name: "Ines Duarte".to_string(),
        })
        .collect();

    let now = base + Duration::days(365);
    let bundle = PortalBundle {
        profile,
        training_sessions: sessions,
        appointments,
    };

    let mut group = c.benchmark_group("timeline");

    group.bench_function("partition_300_each", |b| {
        b.iter(|| {
            Timeline::build(
                black_box(&bundle.training_sessions),
                black_box(&bundle.appointments),
                now,
            )
        })
    });

    group.bench_function("compose_home_view", |b| {
        b.iter(|| HomeView::compose(black_box(&bundle), now))
    });

    group.finish();
}

criterion_group!(benches, benchmark_timeline);
criterion_main!(benches);
