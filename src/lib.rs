//! Karush-Kuhn-Tucker solution quality checks on GLPK problems.
//!
//! [`Kkt`] holds the result of a check; [`KktProvider`] is the seam to the
//! library that computes the residuals. With the `glpk` feature the crate
//! also builds GLPK problems from JSON requests and serves checks over HTTP.

pub mod cache;
pub mod config;
pub mod convert;
pub mod domain;
pub mod error;
pub mod kkt;
pub mod models;

#[cfg(feature = "glpk")]
pub mod routes;

pub use domain::provider::{Condition, KktProvider, RawCheck, SolutionKind};
pub use error::{KktError, Result};
pub use kkt::{ConditionCheck, Kkt, KktHandle, Quality, WeakKktHandle};

#[cfg(feature = "glpk")]
pub use domain::solvers::{Problem, ProblemStatus};
