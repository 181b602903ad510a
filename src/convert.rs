use crate::domain::provider::Condition;
use crate::kkt::{ConditionCheck, Kkt, Quality};
use crate::models::{CheckKind, ColumnReport, IndexReport, KktReport, RowReport};

#[cfg(feature = "glpk")]
use crate::domain::solvers::{Problem, ProblemStatus};
#[cfg(feature = "glpk")]
use crate::error::Result;
#[cfg(feature = "glpk")]
use crate::models::{CheckRequest, SolverDirection, Status};

fn quality_code(check: &ConditionCheck) -> char {
    check.quality().unwrap_or(Quality::Unknown).code()
}

fn index_report(check: &ConditionCheck) -> IndexReport {
    IndexReport {
        ae_max: check.ae_max(),
        ae_ind: check.ae_ind(),
        re_max: check.re_max(),
        re_ind: check.re_ind(),
        quality: quality_code(check),
    }
}

/// Copy the holder's fields into the wire report. Dual categories are only
/// reported for continuous checks.
pub fn to_kkt_report(kkt: &Kkt, kind: CheckKind) -> KktReport {
    let pe = kkt.condition(Condition::PrimalEquality);
    let de = kkt.condition(Condition::DualEquality);

    let (de, db) = match kind {
        CheckKind::Continuous => (
            Some(ColumnReport {
                ae_max: de.ae_max(),
                ae_col: de.ae_ind(),
                re_max: de.re_max(),
                re_col: de.re_ind(),
                quality: quality_code(de),
            }),
            Some(index_report(kkt.condition(Condition::DualBound))),
        ),
        CheckKind::Integer => (None, None),
    };

    KktReport {
        pe: RowReport {
            ae_max: pe.ae_max(),
            ae_row: pe.ae_ind(),
            re_max: pe.re_max(),
            re_row: pe.re_ind(),
            quality: quality_code(pe),
        },
        pb: index_report(kkt.condition(Condition::PrimalBound)),
        de,
        db,
    }
}

#[cfg(feature = "glpk")]
impl From<ProblemStatus> for Status {
    fn from(s: ProblemStatus) -> Self {
        match s {
            ProblemStatus::Undefined => Status::Undefined,
            ProblemStatus::Feasible => Status::Feasible,
            ProblemStatus::Infeasible => Status::Infeasible,
            ProblemStatus::NoFeasible => Status::NoFeasible,
            ProblemStatus::Optimal => Status::Optimal,
            ProblemStatus::Unbounded => Status::Unbounded,
        }
    }
}

/// Build a GLPK problem from a validated request.
/// Integer columns are only marked for integer checks.
#[cfg(feature = "glpk")]
pub fn to_glpk_problem(req: &CheckRequest) -> Result<Problem> {
    let problem = &req.problem;
    let mut lp = Problem::new()?;

    lp.set_maximize(req.direction == SolverDirection::Maximize);
    lp.add_rows(problem.a.shape.nrows);
    lp.add_cols(problem.a.shape.ncols);

    for (i, &rhs) in problem.b.iter().enumerate() {
        lp.set_row_upper(i, rhs);
    }

    for (j, variable) in problem.variables.iter().enumerate() {
        let (lower, upper) = variable.bound;
        lp.set_col_bounds(j, lower, upper);
        lp.set_obj_coef(j, req.objective.get(&variable.id).copied().unwrap_or(0.0));
        if req.kind == CheckKind::Integer && variable.integer {
            lp.set_col_integer(j, true);
        }
    }

    let entries: Vec<(usize, usize, f64)> = problem
        .a
        .rows
        .iter()
        .zip(&problem.a.cols)
        .zip(&problem.a.vals)
        .map(|((&i, &j), &v)| (i, j, v))
        .collect();
    lp.load_matrix(&entries);

    Ok(lp)
}
