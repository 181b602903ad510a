/// Solution a KKT check is run against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolutionKind {
    /// Basic solution found by the simplex method
    Basic,
    /// Solution found by the branch-and-cut MIP solver
    Integer,
}

/// KKT condition category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    PrimalEquality,
    PrimalBound,
    DualEquality,
    DualBound,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::PrimalEquality,
        Condition::PrimalBound,
        Condition::DualEquality,
        Condition::DualBound,
    ];

    pub const PRIMAL: [Condition; 2] = [Condition::PrimalEquality, Condition::PrimalBound];

    /// Two-letter tag used in logs and reports
    pub fn tag(self) -> &'static str {
        match self {
            Condition::PrimalEquality => "pe",
            Condition::PrimalBound => "pb",
            Condition::DualEquality => "de",
            Condition::DualBound => "db",
        }
    }
}

/// Raw output of one library check.
///
/// Locations are 1-based, `0` meaning no error was found. Dual equality
/// locations live in the combined row+column space, so column `j` is
/// reported as `num_rows + j`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawCheck {
    pub ae_max: f64,
    pub ae_ind: usize,
    pub re_max: f64,
    pub re_ind: usize,
}

/// Source of KKT residuals for a solved problem
pub trait KktProvider {
    /// Number of rows, used to translate dual equality locations
    fn num_rows(&self) -> usize;

    /// Run a single condition check.
    ///
    /// # Arguments
    /// * `solution` - Which solution to check; `Integer` accepts primal conditions only
    /// * `condition` - The condition category
    /// * `scaled` - Check the scaled problem; ignored by backends that always scale internally
    fn check(&self, solution: SolutionKind, condition: Condition, scaled: bool) -> RawCheck;

    /// Backend name for logging/debugging
    fn name(&self) -> &str;
}
