use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tibia_leveling::{
    apply_bonuses, estimate_leveling_time, experience_for_level, BonusSelection,
    CalculatorSettings, LevelingPlan,
};

fn bench_experience_for_level(c: &mut Criterion) {
    c.bench_function("experience_for_level table", |b| {
        b.iter(|| experience_for_level(black_box(200)))
    });
    c.bench_function("experience_for_level extrapolated", |b| {
        b.iter(|| experience_for_level(black_box(1234)))
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let selection = BonusSelection {
        low_level_bonus: true,
        premium_stamina: true,
        double_experience: true,
        party_size: 5,
    };
    c.bench_function("apply_bonuses + estimate", |b| {
        b.iter(|| {
            let rate = apply_bonuses(black_box(50_000), 20, &selection).total_experience;
            estimate_leveling_time(20, black_box(400), rate, 8)
        })
    });

    let settings = CalculatorSettings::default();
    c.bench_function("LevelingPlan::calculate", |b| {
        b.iter(|| LevelingPlan::calculate(black_box(&settings)))
    });
}

criterion_group!(benches, bench_experience_for_level, bench_pipeline);
criterion_main!(benches);
