use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use stagepop_sim::presets;
use stagepop_sim::projection::{ProjectionBuilder, ProjectionMatrix};

fn banded_model(stages: usize) -> ProjectionMatrix {
    let fecundity: Vec<f64> = (0..stages).map(|i| 0.1 * i as f64).collect();
    let survival = vec![0.8; stages - 1];
    let recurrence = vec![0.1; stages - 1];
    let population = vec![100.0; stages];

    ProjectionBuilder::new(stages)
        .fecundity(fecundity)
        .survival(survival)
        .recurrence(recurrence)
        .population(population)
        .build()
        .unwrap()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection_build");

    group.bench_function("lefkovitch_preset", |b| {
        let config = presets::lefkovitch_three_stage();
        b.iter(|| black_box(config.build().unwrap()))
    });

    group.finish();
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection_step");

    for stages in [3, 16, 128] {
        group.throughput(Throughput::Elements((stages * stages) as u64));
        group.bench_with_input(BenchmarkId::new("step_forward", stages), &stages, |b, &n| {
            b.iter_batched(
                || banded_model(n),
                |mut model| {
                    model.step_forward().unwrap();
                    black_box(model)
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection_run");
    let steps = 100;

    group.bench_with_input(BenchmarkId::new("project", steps), &steps, |b, &steps| {
        b.iter_batched(
            || banded_model(16),
            |mut model| black_box(model.project(steps).unwrap()),
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_step, bench_project);
criterion_main!(benches);
