pub mod provider;
pub mod validate;

#[cfg(feature = "glpk")]
pub mod check;
#[cfg(feature = "glpk")]
pub mod solvers;
