use std::str::FromStr;

use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

/// Handheld Halting: repair boot code stuck in an infinite loop
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 8, tags = ["simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Acc(i64),
    Jmp(i64),
    Nop(i64),
}

impl Instruction {
    /// Swap `jmp` and `nop`; `acc` has no counterpart
    fn flipped(self) -> Option<Self> {
        match self {
            Instruction::Acc(_) => None,
            Instruction::Jmp(arg) => Some(Instruction::Nop(arg)),
            Instruction::Nop(arg) => Some(Instruction::Jmp(arg)),
        }
    }
}

impl FromStr for Instruction {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (op, arg) = line
            .split_once(' ')
            .ok_or_else(|| anyhow!("expected `<op> <argument>`"))?;
        let arg: i64 = arg
            .parse()
            .with_context(|| format!("bad argument {arg:?}"))?;
        Ok(match op {
            "acc" => Instruction::Acc(arg),
            "jmp" => Instruction::Jmp(arg),
            "nop" => Instruction::Nop(arg),
            _ => bail!("unknown operation {op:?}"),
        })
    }
}

/// How a run of the boot code ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// Execution reached the instruction right after the last one
    Terminated { acc: i64 },
    /// An instruction was about to run a second time
    Looped { acc: i64 },
    /// A jump left the program anywhere other than just past its end
    Escaped { pc: i64 },
    /// The accumulator or a jump target no longer fits in an `i64`
    Overflowed { pc: usize },
}

/// Run `program` once, optionally with the instruction at `patch` flipped.
fn run(program: &[Instruction], patch: Option<usize>) -> Outcome {
    let mut executed = vec![false; program.len()];
    let mut acc = 0i64;
    let mut pc = 0i64;

    loop {
        if pc == program.len() as i64 {
            return Outcome::Terminated { acc };
        }
        let Some(index) = usize::try_from(pc).ok().filter(|&i| i < program.len()) else {
            return Outcome::Escaped { pc };
        };
        if executed[index] {
            return Outcome::Looped { acc };
        }
        executed[index] = true;

        let instruction = match patch {
            Some(at) if at == index => program[index].flipped().unwrap_or(program[index]),
            _ => program[index],
        };
        let next = match instruction {
            Instruction::Acc(arg) => acc.checked_add(arg).map(|sum| {
                acc = sum;
                pc + 1
            }),
            Instruction::Jmp(offset) => pc.checked_add(offset),
            Instruction::Nop(_) => Some(pc + 1),
        };
        let Some(next) = next else {
            return Outcome::Overflowed { pc: index };
        };
        pc = next;
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                line.trim()
                    .parse::<Instruction>()
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {:#}", line_idx + 1, e)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(program: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        match run(program, None) {
            Outcome::Looped { acc } => Ok(acc.to_string()),
            Outcome::Terminated { .. } => Err(SolveError::Unsolvable(
                "boot code terminates without looping".into(),
            )),
            Outcome::Escaped { pc } => Err(SolveError::Unsolvable(format!(
                "jump to {pc} left the program"
            ))),
            Outcome::Overflowed { pc } => Err(SolveError::Unsolvable(format!(
                "instruction {pc} overflowed"
            ))),
        }
    }
}

impl PartSolver<2> for Solver {
    fn solve(program: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let program: &[Instruction] = program;
        for (index, instruction) in program.iter().enumerate() {
            if instruction.flipped().is_none() {
                continue;
            }
            if let Outcome::Terminated { acc } = run(program, Some(index)) {
                debug!(index, ?instruction, "patched instruction");
                return Ok(acc.to_string());
            }
        }
        Err(SolveError::Unsolvable(
            "no single jmp/nop flip terminates the program".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use aoc_solver::Solver as _;

    use super::*;

    const SAMPLE: &str = "\
nop +0
acc +1
jmp +4
acc +3
jmp -3
acc -99
acc +1
jmp -4
acc +6
";

    #[test]
    fn test_sample() {
        let mut program = Solver::parse(SAMPLE).unwrap();
        assert_eq!(program.len(), 9);
        assert_eq!(program[7], Instruction::Jmp(-4));
        assert_eq!(Solver::solve_part(&mut program, 1).unwrap(), "5");
        assert_eq!(Solver::solve_part(&mut program, 2).unwrap(), "8");
    }

    #[test]
    fn test_outcomes() {
        let program = Solver::parse("acc +2\njmp +1").unwrap();
        assert_eq!(run(&program, None), Outcome::Terminated { acc: 2 });

        let program = Solver::parse("acc +2\njmp -1").unwrap();
        assert_eq!(run(&program, None), Outcome::Looped { acc: 2 });

        let program = Solver::parse("acc +2\njmp +5").unwrap();
        assert_eq!(run(&program, None), Outcome::Escaped { pc: 6 });

        let program = Solver::parse("jmp -3").unwrap();
        assert_eq!(run(&program, None), Outcome::Escaped { pc: -3 });
    }

    #[test]
    fn test_overflow_ends_the_run() {
        let program = Solver::parse("nop +0\njmp +9223372036854775807").unwrap();
        assert_eq!(run(&program, None), Outcome::Overflowed { pc: 1 });

        let mut program = Solver::parse("acc +9223372036854775807\nacc +1\njmp -2").unwrap();
        assert_eq!(run(&program, None), Outcome::Overflowed { pc: 1 });
        assert!(matches!(
            Solver::solve_part(&mut program, 1),
            Err(SolveError::Unsolvable(_))
        ));
        assert!(matches!(
            Solver::solve_part(&mut program, 2),
            Err(SolveError::Unsolvable(_))
        ));
    }

    #[test]
    fn test_terminating_program_has_no_loop() {
        let mut program = Solver::parse("nop +0\nacc +1").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut program, 1),
            Err(SolveError::Unsolvable(_))
        ));
    }

    #[test]
    fn test_unrepairable_program() {
        // Flipping either jump leaves the other one looping
        let mut program = Solver::parse("jmp +0\njmp -1").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut program, 2),
            Err(SolveError::Unsolvable(_))
        ));
    }

    #[test]
    fn test_parse_errors_carry_line_numbers() {
        let err = Solver::parse("nop +0\nhcf +1").unwrap_err();
        assert!(matches!(&err, ParseError::InvalidFormat(msg) if msg.starts_with("(line 2)")));

        let err = Solver::parse("acc 1x").unwrap_err();
        assert!(matches!(&err, ParseError::InvalidFormat(msg) if msg.contains("bad argument")));
    }
}
