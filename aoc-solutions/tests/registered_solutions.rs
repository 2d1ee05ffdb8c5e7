//! Every solution registers itself and answers its sample through the registry

use aoc_solutions::my_solutions::{year_2020, year_2021, year_2022};
use aoc_solver::{RegistryBuilder, SolveError, Solver, SolverError, SolverRegistry};

fn registry() -> SolverRegistry {
    RegistryBuilder::new()
        .register_all_plugins()
        .expect("plugins register without collisions")
        .build()
}

#[test]
fn test_every_day_is_registered() {
    let registry = registry();
    let mut days: Vec<(u16, u8, u8)> = registry
        .iter_info()
        .map(|info| (info.year, info.day, info.parts))
        .collect();
    days.sort();

    assert_eq!(
        days,
        vec![
            (2020, 8, year_2020::day_8::Solver::PARTS),
            (2020, 10, year_2020::day_10::Solver::PARTS),
            (2021, 12, year_2021::day_12::Solver::PARTS),
            (2021, 15, year_2021::day_15::Solver::PARTS),
            (2022, 12, year_2022::day_12::Solver::PARTS),
        ]
    );
}

#[test]
fn test_search_tag_filter() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"search"))
        .unwrap()
        .build();

    assert_eq!(registry.len(), 2);
    assert!(registry.contains(2021, 15));
    assert!(registry.contains(2022, 12));
    assert!(!registry.contains(2020, 10));
}

#[test]
fn test_samples_through_registry() {
    let registry = registry();
    let cases: [(u16, u8, &str, [&str; 2]); 3] = [
        (
            2021,
            15,
            "1163751742\n1381373672\n2136511328\n3694931569\n7463417111\n\
             1319128137\n1359912421\n3125421639\n1293138521\n2311944581\n",
            ["40", "315"],
        ),
        (
            2022,
            12,
            "Sabqponm\nabcryxxl\naccszExk\nacctuvwj\nabdefghi\n",
            ["31", "29"],
        ),
        (2020, 10, "16\n10\n15\n5\n1\n11\n7\n19\n6\n12\n4\n", ["35", "8"]),
    ];

    for (year, day, input, expected) in cases {
        let mut solver = registry.create_solver(year, day, input).unwrap();
        assert_eq!(solver.parts(), 2);
        for (part, answer) in (1..=2).zip(expected) {
            assert_eq!(
                solver.solve(part).unwrap().answer,
                answer,
                "{year} day {day} part {part}"
            );
        }
        assert!(matches!(
            solver.solve(3),
            Err(SolveError::PartOutOfRange(3))
        ));
    }
}

#[test]
fn test_unregistered_and_unparsable() {
    let registry = registry();
    assert!(matches!(
        registry.create_solver(2020, 1, ""),
        Err(SolverError::NotFound(2020, 1))
    ));
    assert!(matches!(
        registry.create_solver(2021, 15, "12\nab"),
        Err(SolverError::ParseError(_))
    ));
}
