use criterion::{Criterion, black_box, criterion_group, criterion_main};
use torus_life::patterns::scatter;
use torus_life::{Grid, LifeConfig, Stepper};

fn reference_grid() -> Grid {
    let mut grid = Grid::new(&LifeConfig::default()).unwrap();
    scatter(&mut grid, 0.3, 42).unwrap();
    grid
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_1000x1000");
    group.sample_size(20);

    let mut grid = reference_grid();
    group.bench_function("sequential", |b| b.iter(|| black_box(&mut grid).step()));

    let stepper = Stepper::new(0).unwrap();
    let mut grid = reference_grid();
    group.bench_function("pooled", |b| b.iter(|| stepper.step(black_box(&mut grid))));

    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
