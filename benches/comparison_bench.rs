use criterion::{criterion_group, criterion_main, Criterion};
use grid_util::grid::Grid;
use grid_util::point::Point;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;
use terrain_pathfinding::solver::astar::AstarSolver;
use terrain_pathfinding::solver::average_neighbor::AverageNeighborSolver;
use terrain_pathfinding::solver::uniform_cost::UniformCostSolver;
use terrain_pathfinding::{ExpansionPolicy, GridMap, Terrain, TileMap};

const SIZE: usize = 32;
const N_SCENARIOS: usize = 20;

fn random_map(rng: &mut StdRng) -> TileMap {
    let terrains = [
        Terrain::Road,
        Terrain::Road,
        Terrain::Grass,
        Terrain::Mud,
        Terrain::Dune,
        Terrain::Water,
        Terrain::Stone,
    ];
    let mut map = TileMap::new(SIZE, SIZE, Terrain::Road);
    for y in 0..SIZE {
        for x in 0..SIZE {
            map.set(x, y, terrains[rng.gen_range(0..terrains.len())]);
        }
    }
    map.update();
    map
}

/// Random start and goal pairs that lie on the same component.
fn scenarios(map: &TileMap, rng: &mut StdRng) -> Vec<(Point, Point)> {
    let mut scenarios = Vec::new();
    while scenarios.len() < N_SCENARIOS {
        let start = Point::new(rng.gen_range(0..SIZE as i32), rng.gen_range(0..SIZE as i32));
        let goal = Point::new(rng.gen_range(0..SIZE as i32), rng.gen_range(0..SIZE as i32));
        if map.passable(start) && map.reachable(&start, &goal) {
            scenarios.push((start, goal));
        }
    }
    scenarios
}

fn bench_solver<S: ExpansionPolicy>(c: &mut Criterion, solver_name: &str, solver: S) {
    let mut rng = StdRng::seed_from_u64(0);
    let map = random_map(&mut rng);
    let scenarios = scenarios(&map, &mut rng);
    c.bench_function(format!("{SIZE}x{SIZE}, {solver_name}").as_str(), |b| {
        b.iter(|| {
            for (start, goal) in &scenarios {
                black_box(solver.get_waypoints(&map, *start, *goal)).ok();
            }
        })
    });
}

fn bench_average_neighbor(c: &mut Criterion) {
    bench_solver(c, "Average neighbor", AverageNeighborSolver::new());
}

fn bench_uniform_cost(c: &mut Criterion) {
    bench_solver(c, "Uniform cost", UniformCostSolver);
}

fn bench_astar(c: &mut Criterion) {
    bench_solver(c, "Astar", AstarSolver::new());
}

criterion_group!(benches, bench_average_neighbor, bench_uniform_cost, bench_astar);
criterion_main!(benches);
