use criterion::{criterion_group, criterion_main, Criterion};
use grid_astar::{
    at,
    grid::{Endpoint, Grid},
    path::build_path,
    search::{search, FrontierKind, PushPolicy, SearchConfig},
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn random_grid(n: usize, rng: &mut StdRng) -> Grid {
    let mut grid = Grid::build(n, n, 25).unwrap();
    grid.set_endpoint(Endpoint::Source, at(n as i32 / 2, 0)).unwrap();
    grid.set_endpoint(Endpoint::Destination, at(n as i32 / 2, n as i32 - 1))
        .unwrap();
    for row in 0..n as i32 {
        for col in 0..n as i32 {
            let p = at(row, col);
            if !grid.is_endpoint(p) {
                grid.set_obstacle(p, rng.gen_bool(0.25)).unwrap();
            }
        }
    }
    grid
}

fn frontier_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for n in [32, 64] {
        let mut grid = random_grid(n, &mut rng);
        for frontier in [FrontierKind::SortedVec, FrontierKind::BinaryHeap] {
            for (push_policy, early_exit) in [
                (PushPolicy::Always, false),
                (PushPolicy::OnImprovement, false),
                (PushPolicy::OnImprovement, true),
            ] {
                let config = SearchConfig {
                    frontier,
                    push_policy,
                    early_exit,
                };
                let name = format!(
                    "{n}x{n}, {frontier:?}, {push_policy:?}, early exit: {early_exit}"
                );
                c.bench_function(name.as_str(), |b| {
                    b.iter(|| {
                        search(&mut grid, &config);
                        black_box(build_path(&grid));
                    })
                });
            }
        }
    }
}

criterion_group!(benches, frontier_bench);
criterion_main!(benches);
