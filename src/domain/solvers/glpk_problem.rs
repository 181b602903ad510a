//! Owned GLPK problem object.
//!
//! GLPK keeps per-thread state, so a `Problem` is neither `Send` nor `Sync`
//! (the raw pointer sees to that): build, solve and check it on one thread.

use std::os::raw::c_int;
use std::ptr::{self, NonNull};

use glpk_kkt_sys::*;

use crate::error::KktError;

/// Status of a GLPK solution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemStatus {
    Undefined,
    Feasible,
    Infeasible,
    NoFeasible,
    Optimal,
    Unbounded,
}

impl ProblemStatus {
    fn from_glpk(status: c_int) -> Self {
        match status {
            GLP_FEAS => ProblemStatus::Feasible,
            GLP_INFEAS => ProblemStatus::Infeasible,
            GLP_NOFEAS => ProblemStatus::NoFeasible,
            GLP_OPT => ProblemStatus::Optimal,
            GLP_UNBND => ProblemStatus::Unbounded,
            _ => ProblemStatus::Undefined,
        }
    }

    /// Whether there is a solution a KKT check can be run against
    pub fn has_solution(self) -> bool {
        matches!(self, ProblemStatus::Optimal | ProblemStatus::Feasible)
    }
}

/// 0-based index to GLPK's 1-based `int`
fn glpk_index(i: usize) -> c_int {
    (i + 1) as c_int
}

/// GLPK problem, deleted on drop
pub struct Problem {
    ptr: NonNull<glp_prob>,
}

impl Problem {
    /// Create an empty problem with terminal output switched off
    pub fn new() -> Result<Self, KktError> {
        unsafe {
            glp_term_out(GLP_OFF);
            let ptr = NonNull::new(glp_create_prob()).ok_or(KktError::Allocation)?;
            Ok(Problem { ptr })
        }
    }

    pub(crate) fn as_ptr(&self) -> *mut glp_prob {
        self.ptr.as_ptr()
    }

    pub fn set_maximize(&mut self, maximize: bool) {
        let dir = if maximize { GLP_MAX } else { GLP_MIN };
        unsafe { glp_set_obj_dir(self.as_ptr(), dir) }
    }

    pub fn add_rows(&mut self, count: usize) {
        if count > 0 {
            unsafe {
                glp_add_rows(self.as_ptr(), count as c_int);
            }
        }
    }

    pub fn add_cols(&mut self, count: usize) {
        if count > 0 {
            unsafe {
                glp_add_cols(self.as_ptr(), count as c_int);
            }
        }
    }

    /// Bound row `i` from above: `row_i <= upper`
    pub fn set_row_upper(&mut self, i: usize, upper: f64) {
        unsafe { glp_set_row_bnds(self.as_ptr(), glpk_index(i), GLP_UP, 0.0, upper) }
    }

    /// Bound column `j`; `None` leaves that side unbounded
    pub fn set_col_bounds(&mut self, j: usize, lower: Option<f64>, upper: Option<f64>) {
        let (kind, lb, ub) = match (lower, upper) {
            (None, None) => (GLP_FR, 0.0, 0.0),
            (Some(lb), None) => (GLP_LO, lb, 0.0),
            (None, Some(ub)) => (GLP_UP, 0.0, ub),
            (Some(lb), Some(ub)) if lb == ub => (GLP_FX, lb, ub),
            (Some(lb), Some(ub)) => (GLP_DB, lb, ub),
        };
        unsafe { glp_set_col_bnds(self.as_ptr(), glpk_index(j), kind, lb, ub) }
    }

    pub fn set_obj_coef(&mut self, j: usize, coef: f64) {
        unsafe { glp_set_obj_coef(self.as_ptr(), glpk_index(j), coef) }
    }

    pub fn set_col_integer(&mut self, j: usize, integer: bool) {
        let kind = if integer { GLP_IV } else { GLP_CV };
        unsafe { glp_set_col_kind(self.as_ptr(), glpk_index(j), kind) }
    }

    /// Replace the constraint matrix with `(row, col, value)` triplets, 0-based
    pub fn load_matrix(&mut self, entries: &[(usize, usize, f64)]) {
        // GLPK ignores element 0 of each array
        let mut ia: Vec<c_int> = Vec::with_capacity(entries.len() + 1);
        let mut ja: Vec<c_int> = Vec::with_capacity(entries.len() + 1);
        let mut ar: Vec<f64> = Vec::with_capacity(entries.len() + 1);
        ia.push(0);
        ja.push(0);
        ar.push(0.0);
        for &(i, j, v) in entries {
            ia.push(glpk_index(i));
            ja.push(glpk_index(j));
            ar.push(v);
        }

        unsafe {
            glp_load_matrix(
                self.as_ptr(),
                entries.len() as c_int,
                ia.as_ptr(),
                ja.as_ptr(),
                ar.as_ptr(),
            )
        }
    }

    pub fn num_rows(&self) -> usize {
        unsafe { glp_get_num_rows(self.as_ptr()) as usize }
    }

    pub fn num_cols(&self) -> usize {
        unsafe { glp_get_num_cols(self.as_ptr()) as usize }
    }

    /// Run the simplex method with default parameters.
    /// Returns GLPK's non-zero return code on failure.
    pub fn simplex(&mut self) -> Result<(), i32> {
        let ret = unsafe { glp_simplex(self.as_ptr(), ptr::null()) };
        if ret == 0 {
            Ok(())
        } else {
            Err(ret)
        }
    }

    /// Run branch-and-cut with default parameters. Needs an optimal basis
    /// from [`simplex`](Self::simplex) first.
    pub fn intopt(&mut self) -> Result<(), i32> {
        let ret = unsafe { glp_intopt(self.as_ptr(), ptr::null()) };
        if ret == 0 {
            Ok(())
        } else {
            Err(ret)
        }
    }

    pub fn status(&self) -> ProblemStatus {
        ProblemStatus::from_glpk(unsafe { glp_get_status(self.as_ptr()) })
    }

    pub fn mip_status(&self) -> ProblemStatus {
        ProblemStatus::from_glpk(unsafe { glp_mip_status(self.as_ptr()) })
    }

    pub fn obj_val(&self) -> f64 {
        unsafe { glp_get_obj_val(self.as_ptr()) }
    }

    pub fn mip_obj_val(&self) -> f64 {
        unsafe { glp_mip_obj_val(self.as_ptr()) }
    }

    pub fn col_prim(&self, j: usize) -> f64 {
        unsafe { glp_get_col_prim(self.as_ptr(), glpk_index(j)) }
    }

    pub fn mip_col_val(&self, j: usize) -> f64 {
        unsafe { glp_mip_col_val(self.as_ptr(), glpk_index(j)) }
    }
}

impl Drop for Problem {
    fn drop(&mut self) {
        unsafe { glp_delete_prob(self.as_ptr()) }
    }
}
