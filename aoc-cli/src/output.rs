//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::time::Instant;

/// Prints answers to stdout and failures to stderr
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    pub fn print_result(&self, result: &SolverResult) {
        match self.render(result) {
            Ok(line) => println!("{}", line),
            Err(line) => eprintln!("{}", line),
        }
    }

    /// The line for one result, `Err` when it belongs on stderr
    fn render(&self, result: &SolverResult) -> Result<String, String> {
        let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);
        match &result.answer {
            Ok(answer) if self.quiet => Ok(answer.clone()),
            Ok(answer) => {
                let parse_timing = result
                    .parse_duration
                    .map(|d| format!("parse: {}, ", format_duration(d)))
                    .unwrap_or_default();
                Ok(format!(
                    "{}: {} ({}solve: {})",
                    prefix,
                    answer,
                    parse_timing,
                    format_duration(result.solve_duration)
                ))
            }
            Err(e) if self.quiet => Err(format!("Error: {}", e)),
            Err(e) => Err(format!("{}: Error - {}", prefix, e)),
        }
    }

    /// Print a summary after all results.
    ///
    /// Shows both the summed parse/solve times and the elapsed wall-clock
    /// time; their ratio is the speedup gained from running in parallel.
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let summary = Summary::of(results);
        let elapsed = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!(
            "Solvers: {} solved, {} failed",
            summary.solved, summary.failed
        );
        println!("Total parse time: {}", format_duration(summary.parse_time));
        println!("Total solve time: {}", format_duration(summary.solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            TimeDelta::from_std(elapsed)
                .map(format_duration)
                .unwrap_or_else(|_| "N/A".to_string())
        );
        if !elapsed.is_zero() {
            let compute_secs = (summary.parse_time + summary.solve_time)
                .num_microseconds()
                .unwrap_or(0) as f64
                / 1_000_000.0;
            println!(
                "Speedup factor: {:.2}x",
                compute_secs / elapsed.as_secs_f64()
            );
        }
    }
}

/// Totals over the results that produced an answer
#[derive(Debug, PartialEq, Eq)]
struct Summary {
    solved: usize,
    failed: usize,
    parse_time: TimeDelta,
    solve_time: TimeDelta,
}

impl Summary {
    fn of(results: &[SolverResult]) -> Self {
        let solved: Vec<&SolverResult> = results.iter().filter(|r| r.answer.is_ok()).collect();
        Self {
            solved: solved.len(),
            failed: results.len() - solved.len(),
            parse_time: solved.iter().filter_map(|r| r.parse_duration).sum(),
            solve_time: solved.iter().map(|r| r.solve_duration).sum(),
        }
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ArcExecutorError, ExecutorError};

    fn solved(part: u8, answer: &str, parse_us: i64, solve_us: i64) -> SolverResult {
        SolverResult {
            year: 2021,
            day: 15,
            part,
            answer: Ok(answer.to_string()),
            parse_duration: Some(TimeDelta::microseconds(parse_us)),
            solve_duration: TimeDelta::microseconds(solve_us),
        }
    }

    fn failed(part: u8) -> SolverResult {
        let error: ArcExecutorError = ExecutorError::ThreadPool("gone".into()).into();
        SolverResult {
            year: 2020,
            day: 8,
            part,
            answer: Err(error),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(TimeDelta::microseconds(12)), "12µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1_200)), "1.20ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2_500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-7)), "-7µs");
    }

    #[test]
    fn test_render_full() {
        let formatter = OutputFormatter::new(false);
        assert_eq!(
            formatter.render(&solved(1, "40", 12, 1_200)),
            Ok("2021/15 Part 1: 40 (parse: 12µs, solve: 1.20ms)".to_string())
        );
        assert_eq!(
            formatter.render(&failed(2)),
            Err("2020/08 Part 2: Error - Thread pool creation failed: gone".to_string())
        );
    }

    #[test]
    fn test_render_quiet() {
        let formatter = OutputFormatter::new(true);
        assert_eq!(formatter.render(&solved(2, "315", 5, 5)), Ok("315".to_string()));
        assert_eq!(
            formatter.render(&failed(1)),
            Err("Error: Thread pool creation failed: gone".to_string())
        );
    }

    #[test]
    fn test_summary_counts_only_solved_times() {
        let results = [solved(1, "40", 10, 100), solved(2, "315", 10, 900), failed(1)];
        assert_eq!(
            Summary::of(&results),
            Summary {
                solved: 2,
                failed: 1,
                parse_time: TimeDelta::microseconds(20),
                solve_time: TimeDelta::microseconds(1_000),
            }
        );
    }
}
