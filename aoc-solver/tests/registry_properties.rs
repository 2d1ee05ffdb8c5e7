//! Registry construction, lookup and solver creation

use aoc_solver::{
    AocParser, AocSolver, ParseError, PartSolver, RegistrationError, RegistryBuilder, SolveError,
    SolverError,
};
use proptest::prelude::*;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Floors;

impl AocParser for Floors {
    type SharedData<'a> = &'a [u8];

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let bytes = input.trim().as_bytes();
        match bytes.iter().position(|&b| !matches!(b, b'(' | b')')) {
            Some(at) => Err(ParseError::InvalidFormat(format!("unexpected byte at {at}"))),
            None => Ok(bytes),
        }
    }
}

fn step(b: u8) -> i64 {
    if b == b'(' { 1 } else { -1 }
}

impl PartSolver<1> for Floors {
    fn solve(moves: &mut &[u8]) -> Result<String, SolveError> {
        Ok(moves.iter().copied().map(step).sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Floors {
    fn solve(moves: &mut &[u8]) -> Result<String, SolveError> {
        let mut floor = 0;
        for (i, &b) in moves.iter().enumerate() {
            floor += step(b);
            if floor < 0 {
                return Ok((i + 1).to_string());
            }
        }
        Err(SolveError::Unsolvable("never entered the basement".into()))
    }
}

#[test]
fn test_create_and_solve() {
    let registry = RegistryBuilder::new()
        .register_solver::<Floors>(2015, 1, &["easy"])
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2015, 1, "()())").unwrap();
    assert_eq!(solver.year(), 2015);
    assert_eq!(solver.day(), 1);
    assert_eq!(solver.parts(), 2);
    assert_eq!(solver.solve(1).unwrap().answer, "-1");
    assert_eq!(solver.solve(2).unwrap().answer, "5");
    assert!(solver.parse_duration() >= chrono::TimeDelta::zero());
}

#[test]
fn test_unsolvable_part_is_reported() {
    let registry = RegistryBuilder::new()
        .register_solver::<Floors>(2015, 1, &[])
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2015, 1, "(()").unwrap();
    assert!(matches!(solver.solve(2), Err(SolveError::Unsolvable(_))));
    assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
}

#[test]
fn test_duplicate_registration_rejected() {
    let result = RegistryBuilder::new()
        .register_solver::<Floors>(2015, 1, &[])
        .unwrap()
        .register_solver::<Floors>(2015, 1, &[]);
    assert_eq!(
        result.err(),
        Some(RegistrationError::DuplicateSolver(2015, 1))
    );
}

#[test]
fn test_unknown_and_invalid_lookups() {
    let registry = RegistryBuilder::new()
        .register_solver::<Floors>(2015, 1, &[])
        .unwrap()
        .build();

    assert!(matches!(
        registry.create_solver(2015, 2, ""),
        Err(SolverError::NotFound(2015, 2))
    ));
    assert!(matches!(
        registry.create_solver(1999, 1, ""),
        Err(SolverError::InvalidYearDay(1999, 1))
    ));
    assert!(matches!(
        registry.create_solver(2015, 1, "(x"),
        Err(SolverError::ParseError(ParseError::InvalidFormat(_)))
    ));
}

#[test]
fn test_info_is_ordered_by_year_then_day() {
    let registry = RegistryBuilder::new()
        .register_solver::<Floors>(2021, 3, &["b"])
        .unwrap()
        .register_solver::<Floors>(2016, 25, &[])
        .unwrap()
        .register_solver::<Floors>(2021, 1, &["a"])
        .unwrap()
        .build();

    let order: Vec<(u16, u8)> = registry.iter_info().map(|i| (i.year, i.day)).collect();
    assert_eq!(order, vec![(2016, 25), (2021, 1), (2021, 3)]);
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.get_info(2021, 3).map(|i| i.tags), Some(&["b"][..]));
    assert!(!registry.contains(2021, 2));
}

proptest! {
    #[test]
    fn out_of_range_slots_never_register(year in 0u16..=u16::MAX, day in 0u8..=u8::MAX) {
        let in_range = (2015..2035).contains(&year) && (1..=25).contains(&day);
        let result = RegistryBuilder::new().register_solver::<Floors>(year, day, &[]);
        if in_range {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result.err(), Some(RegistrationError::InvalidYearDay(year, day)));
        }
    }
}
