use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridlock::{puzzles::jindosh, solver::engine::SolverEngine};

fn bench_jindosh_riddle(c: &mut Criterion) {
    let (registry, constraints) = jindosh::puzzle().compile().unwrap();
    let solver = SolverEngine::new();

    c.bench_function("jindosh_riddle", |b| {
        b.iter(|| {
            let (solutions, _stats) = solver
                .solve(black_box(&registry), black_box(&constraints))
                .unwrap();
            assert_eq!(solutions.len(), 1);
        })
    });
}

fn bench_single_clue(c: &mut Criterion) {
    let (registry, constraints) = jindosh::puzzle().compile().unwrap();
    let solver = SolverEngine::new();
    let head = &constraints[..1];

    c.bench_function("single_clue", |b| {
        b.iter(|| {
            let (solutions, _stats) = solver.solve(black_box(&registry), black_box(head)).unwrap();
            assert_eq!(solutions.len(), 1);
        })
    });
}

criterion_group!(benches, bench_jindosh_riddle, bench_single_clue);
criterion_main!(benches);
