use cell_society::rules::SpreadingFire;
use cell_society::{CellManager, ParameterSet, State};
use rayon::ThreadPoolBuilder;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Runs `generations` updates inside a pool of `threads` workers.
fn run_on_pool(
    threads: usize,
    rows: &[Vec<State>],
    simulation_type: &str,
    parameters: &ParameterSet,
    seed: u64,
    generations: usize,
) -> Vec<Vec<State>> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .unwrap();
    pool.install(|| {
        let mut manager = CellManager::with_seed(seed);
        manager
            .initialize(rows, "toroidal", simulation_type, parameters.clone())
            .unwrap();
        for _ in 0..generations {
            manager.update().unwrap();
        }
        manager.grid().unwrap().states()
    })
}

fn forest(size: usize) -> Vec<Vec<State>> {
    (0..size)
        .map(|row| {
            (0..size)
                .map(|col| match (row * size + col) % 11 {
                    0 => SpreadingFire::BURNING,
                    3 | 7 => SpreadingFire::EMPTY,
                    _ => SpreadingFire::TREE,
                })
                .collect()
        })
        .collect()
}

#[test]
fn seeded_fire_ignores_thread_count() {
    init_logging();
    let rows = forest(40);
    let parameters = ParameterSet::new()
        .with("prob_catch", 0.5)
        .with("prob_grow", 0.1);

    let single = run_on_pool(1, &rows, "spreading_fire", &parameters, 9, 15);
    let many = run_on_pool(8, &rows, "spreading_fire", &parameters, 9, 15);

    assert_eq!(single, many);
    assert_ne!(single, rows);
}

#[test]
fn seeded_segregation_ignores_thread_count() {
    init_logging();
    let rows: Vec<Vec<State>> = (0..30)
        .map(|row: State| (0..30).map(|col| (row * 7 + col * 3) % 3).collect())
        .collect();
    let parameters = ParameterSet::new().with("satisfaction_threshold", 0.5);

    let single = run_on_pool(1, &rows, "segregation", &parameters, 21, 6);
    let many = run_on_pool(8, &rows, "segregation", &parameters, 21, 6);

    assert_eq!(single, many);
}
