pub mod glpk_problem;

#[cfg(not(feature = "glpk-legacy"))]
pub mod glpk_kkt;

#[cfg(feature = "glpk-legacy")]
pub mod glpk_legacy_kkt;

pub use glpk_problem::{Problem, ProblemStatus};
