//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use aoc_solver::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;
use tracing::{debug, warn};

/// Result from a single solver execution
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    /// Absent when the input never reached a parser
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

impl SolverResult {
    fn failed(year: u16, day: u8, part: u8, error: ArcExecutorError) -> Self {
        Self {
            year,
            day,
            part,
            answer: Err(error),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    sync_executor_config: SyncExecutorConfig,
    thread_pool: rayon::ThreadPool,
}

/// The part of the executor shared by reference with every worker
pub struct SyncExecutorConfig {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            sync_executor_config: SyncExecutorConfig {
                registry,
                inputs: InputStore::new(config.input_dir.clone()),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.sync_executor_config;
        cfg.registry
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Work items whose input file is not in the input directory
    pub fn missing_inputs<'w>(&self, work_items: &'w [WorkItem]) -> Vec<&'w WorkItem> {
        let inputs = &self.sync_executor_config.inputs;
        work_items
            .iter()
            .filter(|w| !inputs.contains(w.year, w.day))
            .collect()
    }

    /// Where the input for `year`/`day` is read from
    pub fn input_path(&self, year: u16, day: u8) -> std::path::PathBuf {
        self.sync_executor_config.inputs.path(year, day)
    }

    /// Filter parts based on config.part_filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.sync_executor_config.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        let cfg = &self.sync_executor_config;
        debug!(
            solvers = work_items.len(),
            parallelize_by = ?cfg.parallelize_by,
            threads = self.thread_pool.current_num_threads(),
            "executor starting"
        );

        match cfg.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = run_work_item(&work, &tx, cfg) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_parallel_grouped(by_year, &tx)
            }
            // Part additionally fans out inside run_work_item
            ParallelizeBy::Day | ParallelizeBy::Part => {
                self.execute_parallel_grouped(work_items.into_iter().map(|w| vec![w]).collect(), &tx)
            }
        }
    }

    /// Run groups in parallel, the items of one group in order
    fn execute_parallel_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let cfg = &self.sync_executor_config;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map(|items| {
                    let mut err = None;
                    for work in items {
                        if let Err(e) = run_work_item(&work, tx, cfg) {
                            err = Some(ArcExecutorError::combine_opt(err, e))
                        }
                    }
                    err
                })
                .reduce_with(|err1, err2| match (err1, err2) {
                    (Some(a), Some(b)) => Some(ArcExecutorError::combine(a, b)),
                    (a, b) => a.or(b),
                })
                .flatten()
                .map_or(Ok(()), Err)
        })
    }
}

/// Load the input for one work item and solve its parts.
///
/// Input and parse failures become error results for every part; only a
/// closed result channel is returned as an error.
fn run_work_item(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    cfg: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    let input = match cfg.inputs.read(year, day) {
        Ok(input) => input,
        Err(source) => {
            warn!(year, day, %source, "skipping solver without input");
            let error: ArcExecutorError = ExecutorError::Input { year, day, source }.into();
            return send_failures(work, tx, &error);
        }
    };

    if matches!(cfg.parallelize_by, ParallelizeBy::Part) {
        work.parts
            .clone()
            .into_par_iter()
            .map(|part| solve_parts(work, part..=part, &input, tx, cfg).err())
            .reduce_with(|err1, err2| match (err1, err2) {
                (Some(a), Some(b)) => Some(ArcExecutorError::combine(a, b)),
                (a, b) => a.or(b),
            })
            .flatten()
            .map_or(Ok(()), Err)
    } else {
        solve_parts(work, work.parts.clone(), &input, tx, cfg)
    }
}

/// Parse `input` once and solve `parts` in order
fn solve_parts(
    work: &WorkItem,
    parts: RangeInclusive<u8>,
    input: &str,
    tx: &Sender<SolverResult>,
    cfg: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let mut solver = match cfg.registry.create_solver(year, day, input) {
        Ok(solver) => solver,
        Err(e) => {
            let error: ArcExecutorError = ExecutorError::Solver(e).into();
            let work = WorkItem {
                parts,
                ..work.clone()
            };
            return send_failures(&work, tx, &error);
        }
    };

    for part in parts {
        let result = solve_part(year, day, part, &mut *solver);
        tx.send(result)
            .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
    }
    Ok(())
}

/// Report the same error for every part of `work`
fn send_failures(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    error: &ArcExecutorError,
) -> Result<(), ArcExecutorError> {
    for part in work.parts.clone() {
        tx.send(SolverResult::failed(work.year, work.day, part, error.clone()))
            .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
    }
    Ok(())
}

fn solve_part(year: u16, day: u8, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    let parse_duration = Some(solver.parse_duration());
    match solver.solve(part) {
        Ok(result) => SolverResult {
            year,
            day,
            part,
            solve_duration: result.duration(),
            answer: Ok(result.answer),
            parse_duration,
        },
        Err(e) => SolverResult {
            parse_duration,
            ..SolverResult::failed(year, day, part, ExecutorError::from(e).into())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{AocParser, ParseError, PartSolver, RegistryBuilder, SolveError};
    use std::fs;
    use std::path::Path;
    use std::sync::mpsc;
    use tempfile::TempDir;

    /// Sums a list of numbers, or reports the largest one
    struct Numbers;

    impl AocParser for Numbers {
        type SharedData<'a> = Vec<u64>;

        fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
            input
                .lines()
                .map(|l| {
                    l.trim()
                        .parse()
                        .map_err(|_| ParseError::InvalidFormat(l.to_string()))
                })
                .collect()
        }
    }

    impl PartSolver<1> for Numbers {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            Ok(shared.iter().sum::<u64>().to_string())
        }
    }

    impl PartSolver<2> for Numbers {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            shared
                .iter()
                .max()
                .map(|m| m.to_string())
                .ok_or_else(|| SolveError::Unsolvable("empty list".into()))
        }
    }

    impl aoc_solver::Solver for Numbers {
        const PARTS: u8 = 2;

        fn solve_part(
            shared: &mut Self::SharedData<'_>,
            part: u8,
        ) -> Result<String, SolveError> {
            match part {
                1 => <Self as PartSolver<1>>::solve(shared),
                2 => <Self as PartSolver<2>>::solve(shared),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    fn config(dir: &Path, parallelize_by: ParallelizeBy, part: Option<u8>) -> Config {
        Config {
            year_filter: None,
            day_filter: None,
            part_filter: part,
            tags: Vec::new(),
            input_dir: dir.to_path_buf(),
            thread_count: 2,
            parallelize_by,
            quiet: true,
        }
    }

    fn executor(config: &Config) -> Executor {
        let registry = RegistryBuilder::new()
            .register_solver::<Numbers>(2019, 1, &[])
            .unwrap()
            .register_solver::<Numbers>(2019, 2, &[])
            .unwrap()
            .register_solver::<Numbers>(2020, 3, &[])
            .unwrap()
            .build();
        Executor::new(registry, config).unwrap()
    }

    fn run(executor: &Executor) -> Vec<SolverResult> {
        let (tx, rx) = mpsc::channel();
        executor.execute(tx).unwrap();
        let mut results: Vec<_> = rx.into_iter().collect();
        results.sort_by_key(|r| (r.year, r.day, r.part));
        results
    }

    fn answers(results: &[SolverResult]) -> Vec<Option<&str>> {
        results
            .iter()
            .map(|r| r.answer.as_deref().ok())
            .collect()
    }

    #[test]
    fn test_every_mode_produces_the_same_answers() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2019_day01.txt"), "1\n2\n3\n").unwrap();
        fs::write(temp.path().join("2019_day02.txt"), "10\n4\n").unwrap();
        fs::write(temp.path().join("2020_day03.txt"), "7\n").unwrap();

        for mode in [
            ParallelizeBy::Sequential,
            ParallelizeBy::Year,
            ParallelizeBy::Day,
            ParallelizeBy::Part,
        ] {
            let results = run(&executor(&config(temp.path(), mode, None)));
            assert_eq!(
                answers(&results),
                vec![
                    Some("6"),
                    Some("3"),
                    Some("14"),
                    Some("10"),
                    Some("7"),
                    Some("7")
                ],
                "{mode:?}"
            );
            assert!(results.iter().all(|r| r.parse_duration.is_some()));
        }
    }

    #[test]
    fn test_missing_input_fails_each_part() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2019_day01.txt"), "5\n").unwrap();
        let executor = executor(&config(temp.path(), ParallelizeBy::Day, None));

        let work_items = executor.collect_work_items();
        let missing: Vec<(u16, u8)> = executor
            .missing_inputs(&work_items)
            .iter()
            .map(|w| (w.year, w.day))
            .collect();
        assert_eq!(missing, vec![(2019, 2), (2020, 3)]);

        let results = run(&executor);
        assert_eq!(results.len(), 6);
        assert_eq!(answers(&results)[..2], [Some("5"), Some("5")]);
        for result in &results[2..] {
            let error = result.answer.as_ref().unwrap_err();
            assert!(matches!(error.inner(), ExecutorError::Input { .. }));
            assert_eq!(result.parse_duration, None);
        }
    }

    #[test]
    fn test_parse_and_solve_errors_are_per_part() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2019_day01.txt"), "1\nx\n").unwrap();
        fs::write(temp.path().join("2019_day02.txt"), "").unwrap();
        fs::write(temp.path().join("2020_day03.txt"), "2\n").unwrap();

        let results = run(&executor(&config(temp.path(), ParallelizeBy::Part, None)));
        assert_eq!(
            answers(&results),
            vec![None, None, Some("0"), None, Some("2"), Some("2")]
        );
        assert!(matches!(
            results[0].answer.as_ref().unwrap_err().inner(),
            ExecutorError::Solver(aoc_solver::SolverError::ParseError(_))
        ));
        assert!(matches!(
            results[3].answer.as_ref().unwrap_err().inner(),
            ExecutorError::Solver(aoc_solver::SolverError::SolveError(
                SolveError::Unsolvable(_)
            ))
        ));
    }

    #[test]
    fn test_filters() {
        let temp = TempDir::new().unwrap();
        let mut cfg = config(temp.path(), ParallelizeBy::Day, Some(2));
        cfg.year_filter = Some(2019);
        let items = executor(&cfg).collect_work_items();
        assert_eq!(
            items,
            vec![
                WorkItem {
                    year: 2019,
                    day: 1,
                    parts: 2..=2
                },
                WorkItem {
                    year: 2019,
                    day: 2,
                    parts: 2..=2
                },
            ]
        );

        cfg.day_filter = Some(3);
        assert!(executor(&cfg).collect_work_items().is_empty());
    }

    #[test]
    fn test_closed_channel_is_an_error() {
        let temp = TempDir::new().unwrap();
        let executor = executor(&config(temp.path(), ParallelizeBy::Sequential, None));
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let error = executor.execute(tx).unwrap_err();
        assert!(matches!(error.inner(), ExecutorError::Multiple(errors) if errors.len() == 3));
    }
}
