use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ---------- API (wire) types: owned & serde-friendly ----------

/// Variable bound; `null` on either side means unbounded
pub type Bound = (Option<f64>, Option<f64>);

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiVariable {
    pub id: String,
    pub bound: Bound,
    #[serde(default)]
    pub integer: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiShape {
    pub nrows: usize,
    pub ncols: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiSparseMatrix {
    pub rows: Vec<usize>,
    pub cols: Vec<usize>,
    pub vals: Vec<f64>,
    pub shape: ApiShape,
}

/// Constraints `A x <= b` over bounded variables
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SparseLEProblem {
    #[serde(rename = "A")]
    pub a: ApiSparseMatrix,
    pub b: Vec<f64>,
    pub variables: Vec<ApiVariable>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SolverDirection {
    Maximize,
    Minimize,
}

/// Which solution the KKT check runs against
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    #[default]
    Continuous,
    Integer,
}

pub type ObjectiveOwned = HashMap<String, f64>;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CheckRequest {
    pub problem: SparseLEProblem,
    pub objective: ObjectiveOwned,
    pub direction: SolverDirection,
    #[serde(default)]
    pub kind: CheckKind,
    #[serde(default)]
    pub scaled: bool,
}

// ---------- API response types ----------

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Undefined,
    Feasible,
    Infeasible,
    NoFeasible,
    Optimal,
    Unbounded,
    SimplexFailed,
    MipFailed,
}

/// Errors of a condition whose locations are rows (PE)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RowReport {
    pub ae_max: f64,
    pub ae_row: usize,
    pub re_max: f64,
    pub re_row: usize,
    pub quality: char,
}

/// Errors of a condition whose locations are variables (PB, DB)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct IndexReport {
    pub ae_max: f64,
    pub ae_ind: usize,
    pub re_max: f64,
    pub re_ind: usize,
    pub quality: char,
}

/// Errors of a condition whose locations are columns (DE)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ColumnReport {
    pub ae_max: f64,
    pub ae_col: usize,
    pub re_max: f64,
    pub re_col: usize,
    pub quality: char,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct KktReport {
    pub pe: RowReport,
    pub pb: IndexReport,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub de: Option<ColumnReport>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub db: Option<IndexReport>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CheckResponse {
    pub status: Status,
    pub objective: Option<f64>,
    pub solution: HashMap<String, f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub kkt: Option<KktReport>,
}
