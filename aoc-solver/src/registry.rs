//! Solver registry for looking up and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

// ============================================================================
// Slot layout
// ============================================================================

/// First Advent of Code year
pub const BASE_YEAR: u16 = 2015;
/// Number of years the registry has room for (2015-2034)
pub const MAX_YEARS: usize = 20;
/// Puzzle days per year
pub const DAYS_PER_YEAR: usize = 25;
/// Total number of slots
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// Slot index for a year/day pair, `None` when outside the supported range
#[inline]
fn slot(year: u16, day: u8) -> Option<usize> {
    if !(BASE_YEAR..BASE_YEAR + MAX_YEARS as u16).contains(&year) {
        return None;
    }
    if day == 0 || usize::from(day) > DAYS_PER_YEAR {
        return None;
    }
    Some(usize::from(year - BASE_YEAR) * DAYS_PER_YEAR + usize::from(day - 1))
}

/// Inverse of [`slot`]
#[inline]
fn year_day(slot: usize) -> (u16, u8) {
    let year = BASE_YEAR + (slot / DAYS_PER_YEAR) as u16;
    let day = (slot % DAYS_PER_YEAR) as u8 + 1;
    (year, day)
}

// ============================================================================
// Factories
// ============================================================================

/// Creates a parsed solver from raw input.
///
/// Factories are shared between worker threads, hence `Send + Sync`.
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// What the registry knows about a slot without running anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    pub year: u16,
    pub day: u8,
    pub parts: u8,
    pub tags: &'static [&'static str],
}

struct FactoryEntry {
    factory: SolverFactory,
    parts: u8,
    tags: &'static [&'static str],
}

fn instantiate<'a, S: Solver + 'a>(
    year: u16,
    day: u8,
    input: &'a str,
) -> Result<Box<dyn DynSolver + 'a>, ParseError> {
    let instance = SolverInstance::<S>::new(year, day, input)?;
    Ok(Box::new(instance))
}

// ============================================================================
// Builder
// ============================================================================

/// Collects factories, then freezes them into a [`SolverRegistry`].
///
/// ```
/// use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, RegistryBuilder, SolveError};
///
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 1)]
/// struct Frequency;
///
/// impl AocParser for Frequency {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Vec<i64>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Frequency {
///     fn solve(changes: &mut Vec<i64>) -> Result<String, SolveError> {
///         Ok(changes.iter().sum::<i64>().to_string())
///     }
/// }
///
/// let registry = RegistryBuilder::new()
///     .register_solver::<Frequency>(2018, 1, &["easy"])
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(2018, 1, "+1\n-2\n+3").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "2");
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<FactoryEntry>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a raw factory for `year`/`day`.
    ///
    /// Fails if the slot is out of range or already taken.
    pub fn register<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        tags: &'static [&'static str],
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = slot(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;
        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        self.entries[index] = Some(FactoryEntry {
            factory: Box::new(factory),
            parts,
            tags,
        });
        Ok(self)
    }

    /// Register solver type `S` for `year`/`day`
    pub fn register_solver<S: Solver + 'static>(
        self,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<Self, RegistrationError> {
        self.register(year, day, S::PARTS, tags, move |input: &str| {
            instantiate::<S>(year, day, input)
        })
    }

    /// Register every plugin submitted through `inventory`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the plugins accepted by `filter`.
    ///
    /// ```no_run
    /// # use aoc_solver::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"search"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin
                    .solver
                    .register_with(self, plugin.year, plugin.day, plugin.tags)?;
            }
        }
        Ok(self)
    }

    /// Freeze the builder
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Immutable year/day → factory table with O(1) lookup
pub struct SolverRegistry {
    entries: Vec<Option<FactoryEntry>>,
}

impl SolverRegistry {
    /// Metadata of every registered solver in (year, day) order
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(index, entry)| {
            entry.as_ref().map(|e| {
                let (year, day) = year_day(index);
                FactoryInfo {
                    year,
                    day,
                    parts: e.parts,
                    tags: e.tags,
                }
            })
        })
    }

    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        let entry = self.entries.get(slot(year, day)?)?.as_ref()?;
        Some(FactoryInfo {
            year,
            day,
            parts: entry.parts,
            tags: entry.tags,
        })
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.get_info(year, day).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse `input` with the solver registered for `year`/`day`
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = slot(year, day).ok_or(SolverError::InvalidYearDay(year, day))?;
        let entry = self.entries[index]
            .as_ref()
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }
}

// ============================================================================
// Plugins
// ============================================================================

/// Type-erased registration hook so plugins of different solver types can
/// live in one `inventory` collection.
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register_solver::<S>(year, day, tags)
    }
}

/// A solver submitted for automatic registration.
///
/// Normally produced by `#[derive(AutoRegisterSolver)]`.
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    /// Free-form labels used by `register_solver_plugins` filters
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);
