use cell_society::{CellManager, ParameterSet, State};
use proptest::collection::vec;
use proptest::prelude::*;

fn binary_grid() -> impl Strategy<Value = Vec<Vec<State>>> {
    (1usize..12, 1usize..12).prop_flat_map(|(width, height)| vec(vec(0..=1, width), height))
}

fn run(
    rows: &[Vec<State>],
    edge_type: &str,
    simulation_type: &str,
    parameters: ParameterSet,
    seed: u64,
    generations: usize,
) -> Vec<Vec<State>> {
    let mut manager = CellManager::with_seed(seed);
    manager
        .initialize(rows, edge_type, simulation_type, parameters)
        .unwrap();
    for _ in 0..generations {
        manager.update().unwrap();
    }
    manager.grid().unwrap().states()
}

proptest! {
    #[test]
    fn life_runs_agree(rows in binary_grid(), toroidal in any::<bool>(), generations in 0usize..6) {
        let edge_type = if toroidal { "toroidal" } else { "bounded" };
        let a = run(&rows, edge_type, "life", ParameterSet::new(), 1, generations);
        let b = run(&rows, edge_type, "life", ParameterSet::new(), 2, generations);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn majority_runs_agree(rows in binary_grid(), threshold in 0u8..=8, generations in 0usize..6) {
        let parameters = ParameterSet::new().with("activation_threshold", threshold as f64);
        let a = run(&rows, "toroidal", "majority", parameters.clone(), 1, generations);
        let b = run(&rows, "toroidal", "majority", parameters, 99, generations);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn seeded_segregation_runs_agree(rows in binary_grid(), seed in any::<u64>()) {
        let parameters = ParameterSet::new().with("satisfaction_threshold", 0.5);
        let a = run(&rows, "toroidal", "segregation", parameters.clone(), seed, 4);
        let b = run(&rows, "toroidal", "segregation", parameters, seed, 4);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn cell_list_is_stable_between_updates(rows in binary_grid()) {
        let mut manager = CellManager::with_seed(3);
        manager.initialize(&rows, "bounded", "life", ParameterSet::new()).unwrap();
        manager.update().unwrap();
        prop_assert_eq!(manager.cell_list().unwrap(), manager.cell_list().unwrap());
    }
}
