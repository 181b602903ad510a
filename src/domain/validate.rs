use std::collections::HashSet;

use crate::error::{KktError, Result};
use crate::models::{ApiVariable, CheckRequest, ObjectiveOwned, SparseLEProblem};

fn invalid(details: String) -> KktError {
    KktError::InvalidInput(details)
}

pub fn validate_check_request(req: &CheckRequest) -> Result<()> {
    validate_problem(&req.problem)?;
    validate_objective(&req.problem.variables, &req.objective)
}

pub fn validate_problem(problem: &SparseLEProblem) -> Result<()> {
    let a = &problem.a;
    let (nrows, ncols) = (a.shape.nrows, a.shape.ncols);

    if nrows == 0 || ncols == 0 {
        return Err(invalid(format!(
            "Problem must have at least one row and one column, got shape {}x{}",
            nrows, ncols
        )));
    }

    if a.rows.len() != a.cols.len() || a.rows.len() != a.vals.len() {
        return Err(invalid(format!(
            "Matrix arrays differ in length: rows={}, cols={}, vals={}",
            a.rows.len(),
            a.cols.len(),
            a.vals.len()
        )));
    }

    let mut entries: HashSet<(usize, usize)> = HashSet::with_capacity(a.rows.len());
    for ((&row, &col), &val) in a.rows.iter().zip(&a.cols).zip(&a.vals) {
        if row >= nrows || col >= ncols {
            return Err(invalid(format!(
                "Matrix entry ({}, {}) outside shape {}x{}",
                row, col, nrows, ncols
            )));
        }
        if !val.is_finite() {
            return Err(invalid(format!("Matrix entry ({}, {}) is not finite", row, col)));
        }
        // glp_load_matrix aborts the process on duplicate indices
        if !entries.insert((row, col)) {
            return Err(invalid(format!("Duplicate matrix entry ({}, {})", row, col)));
        }
    }

    if problem.b.len() != nrows {
        return Err(invalid(format!(
            "b has {} entries, expected {}",
            problem.b.len(),
            nrows
        )));
    }
    if problem.b.iter().any(|v| !v.is_finite()) {
        return Err(invalid("b contains a non-finite value".to_string()));
    }

    if problem.variables.len() != ncols {
        return Err(invalid(format!(
            "Got {} variables for {} columns",
            problem.variables.len(),
            ncols
        )));
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(problem.variables.len());
    for variable in &problem.variables {
        if variable.id.is_empty() {
            return Err(invalid("Variable id must not be empty".to_string()));
        }
        if !seen.insert(variable.id.as_str()) {
            return Err(invalid(format!("Duplicate variable {}", variable.id)));
        }
        validate_bound(variable)?;
    }

    Ok(())
}

fn validate_bound(variable: &ApiVariable) -> Result<()> {
    let (lower, upper) = variable.bound;
    if lower.is_some_and(|v| !v.is_finite()) || upper.is_some_and(|v| !v.is_finite()) {
        return Err(invalid(format!(
            "Variable {} has a non-finite bound, use null for unbounded",
            variable.id
        )));
    }
    if let (Some(lb), Some(ub)) = (lower, upper) {
        if lb > ub {
            return Err(invalid(format!(
                "Variable {} has lower bound {} above upper bound {}",
                variable.id, lb, ub
            )));
        }
    }
    Ok(())
}

pub fn validate_objective(variables: &[ApiVariable], objective: &ObjectiveOwned) -> Result<()> {
    let variable_ids: HashSet<&str> = variables.iter().map(|v| v.id.as_str()).collect();

    for (objective_variable, coef) in objective {
        if !variable_ids.contains(objective_variable.as_str()) {
            return Err(invalid(format!(
                "Objective contains missing variable {}",
                objective_variable,
            )));
        }
        if !coef.is_finite() {
            return Err(invalid(format!(
                "Objective coefficient of {} is not finite",
                objective_variable,
            )));
        }
    }

    Ok(())
}
