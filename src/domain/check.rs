use std::collections::HashMap;

use log::warn;

use crate::convert::{to_glpk_problem, to_kkt_report};
use crate::domain::solvers::{Problem, ProblemStatus};
use crate::domain::validate::validate_check_request;
use crate::error::Result;
use crate::kkt::Kkt;
use crate::models::{CheckKind, CheckRequest, CheckResponse, Status};

fn unsolved(status: Status) -> CheckResponse {
    CheckResponse {
        status,
        objective: None,
        solution: HashMap::new(),
        kkt: None,
    }
}

fn column_values(req: &CheckRequest, value: impl Fn(usize) -> f64) -> HashMap<String, f64> {
    req.problem
        .variables
        .iter()
        .enumerate()
        .map(|(j, v)| (v.id.clone(), value(j)))
        .collect()
}

/// Build the request's problem, solve it with GLPK and run the KKT check
/// matching `req.kind` on the solution.
///
/// Must run on a single thread from start to end: the GLPK problem lives and
/// dies inside this call.
pub fn check(req: &CheckRequest) -> Result<CheckResponse> {
    validate_check_request(req)?;

    let mut lp = to_glpk_problem(req)?;

    if let Err(code) = lp.simplex() {
        warn!("glp_simplex failed with code {}", code);
        return Ok(unsolved(Status::SimplexFailed));
    }

    match req.kind {
        CheckKind::Continuous => check_continuous(req, &lp),
        CheckKind::Integer => check_integer(req, &mut lp),
    }
}

fn check_continuous(req: &CheckRequest, lp: &Problem) -> Result<CheckResponse> {
    let status = lp.status();
    if !status.has_solution() {
        return Ok(unsolved(status.into()));
    }

    let mut kkt = Kkt::new();
    kkt.check_continuous(lp, req.scaled);

    Ok(CheckResponse {
        status: status.into(),
        objective: Some(lp.obj_val()),
        solution: column_values(req, |j| lp.col_prim(j)),
        kkt: Some(to_kkt_report(&kkt, CheckKind::Continuous)),
    })
}

fn check_integer(req: &CheckRequest, lp: &mut Problem) -> Result<CheckResponse> {
    // branch-and-cut starts from an optimal relaxation
    let relaxation = lp.status();
    if relaxation != ProblemStatus::Optimal {
        return Ok(unsolved(relaxation.into()));
    }

    if let Err(code) = lp.intopt() {
        warn!("glp_intopt failed with code {}", code);
        return Ok(unsolved(Status::MipFailed));
    }

    let status = lp.mip_status();
    if !status.has_solution() {
        return Ok(unsolved(status.into()));
    }

    let mut kkt = Kkt::new();
    kkt.check_integer(&*lp);

    Ok(CheckResponse {
        status: status.into(),
        objective: Some(lp.mip_obj_val()),
        solution: column_values(req, |j| lp.mip_col_val(j)),
        kkt: Some(to_kkt_report(&kkt, CheckKind::Integer)),
    })
}
