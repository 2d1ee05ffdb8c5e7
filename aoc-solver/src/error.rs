//! Error types for the solver library

use thiserror::Error;

/// Error produced while turning raw puzzle input into shared data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input does not have the expected shape
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// A required element (start marker, section, ...) is absent
    #[error("Missing data: {0}")]
    MissingData(String),
    /// Anything else that went wrong while parsing
    #[error("Parse error: {0}")]
    Other(String),
}

/// Error produced while solving a single part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solver declares the part but has no implementation for it
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The part number is outside `1..=PARTS`
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The input admits no answer, e.g. the goal of a search is unreachable
    #[error("No solution: {0}")]
    Unsolvable(String),
    /// Any other failure raised by the solver
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error returned by registry lookups and solver creation
#[derive(Debug, Error)]
pub enum SolverError {
    /// Nothing is registered for the year/day pair
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// The year/day pair can never be registered
    #[error("Invalid year/day: {0}/{1}")]
    InvalidYearDay(u16, u8),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error returned while building a registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A solver already occupies this year/day slot
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// Year must be within 2015..2035 and day within 1..=25
    #[error("Invalid year/day for registration: {0}/{1}")]
    InvalidYearDay(u16, u8),
}
