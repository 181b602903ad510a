//! Karush-Kuhn-Tucker check results.
//!
//! A [`Kkt`] is filled by running a check against a solved problem and then
//! read through its accessors. Four condition categories are stored:
//! - PE measures the error in the primal solution (`pe_*`),
//! - PB measures the error in satisfying the primal bounds, i.e. feasibility (`pb_*`),
//! - DE and DB are the dual counterparts (`de_*`, `db_*`).

use std::fmt;
use std::sync::{Arc, Weak};

use log::debug;
use parking_lot::RwLock;

use crate::domain::provider::{Condition, KktProvider, RawCheck, SolutionKind};

/// Quality of a solution, derived from its largest relative error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    High,
    Medium,
    Low,
    /// Wrong or infeasible
    Unknown,
}

impl Quality {
    pub fn from_relative_error(re_max: f64) -> Self {
        if re_max <= 1e-9 {
            Quality::High
        } else if re_max <= 1e-6 {
            Quality::Medium
        } else if re_max <= 1e-3 {
            Quality::Low
        } else {
            // NaN lands here too
            Quality::Unknown
        }
    }

    pub fn code(self) -> char {
        match self {
            Quality::High => 'H',
            Quality::Medium => 'M',
            Quality::Low => 'L',
            Quality::Unknown => '?',
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// 1-based library location to 0-based, keeping `0` as "none"
pub fn zero_based(ind: usize) -> usize {
    ind.saturating_sub(1)
}

/// Combined row+column location to a 1-based column location, keeping `0` as "none"
pub fn column_relative(ind: usize, num_rows: usize) -> usize {
    if ind == 0 {
        0
    } else {
        ind.saturating_sub(num_rows)
    }
}

/// Errors measured for one condition category.
///
/// Locations are stored 1-based as the library reports them and converted
/// when read.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConditionCheck {
    ae_max: f64,
    ae_ind: usize,
    re_max: f64,
    re_ind: usize,
    quality: Option<Quality>,
}

impl ConditionCheck {
    fn from_raw(raw: RawCheck) -> Self {
        ConditionCheck {
            ae_max: raw.ae_max,
            ae_ind: raw.ae_ind,
            re_max: raw.re_max,
            re_ind: raw.re_ind,
            quality: Some(Quality::from_relative_error(raw.re_max)),
        }
    }

    /// Largest absolute error
    pub fn ae_max(&self) -> f64 {
        self.ae_max
    }

    /// Largest relative error
    pub fn re_max(&self) -> f64 {
        self.re_max
    }

    /// 0-based location of the largest absolute error, `0` when there is none
    pub fn ae_ind(&self) -> usize {
        zero_based(self.ae_ind)
    }

    /// 0-based location of the largest relative error, `0` when there is none
    pub fn re_ind(&self) -> usize {
        zero_based(self.re_ind)
    }

    /// Like [`ae_ind`](Self::ae_ind) but tells "none" apart from location 0
    pub fn ae_location(&self) -> Option<usize> {
        self.ae_ind.checked_sub(1)
    }

    /// Like [`re_ind`](Self::re_ind) but tells "none" apart from location 0
    pub fn re_location(&self) -> Option<usize> {
        self.re_ind.checked_sub(1)
    }

    /// `None` until a check covering this category has run
    pub fn quality(&self) -> Option<Quality> {
        self.quality
    }
}

/// Karush-Kuhn-Tucker conditions measured on a solution.
///
/// The holder is a snapshot: it keeps nothing of the problem it was computed
/// from, and every check overwrites the categories it covers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Kkt {
    pe: ConditionCheck,
    pb: ConditionCheck,
    de: ConditionCheck,
    db: ConditionCheck,
}

impl Kkt {
    pub fn new() -> Self {
        Kkt::default()
    }

    /// Check the basic solution of a continuous problem against all four
    /// condition categories.
    pub fn check_continuous<P: KktProvider + ?Sized>(&mut self, problem: &P, scaled: bool) {
        let num_rows = problem.num_rows();

        for condition in Condition::ALL {
            let mut raw = problem.check(SolutionKind::Basic, condition, scaled);
            if condition == Condition::DualEquality {
                raw.ae_ind = column_relative(raw.ae_ind, num_rows);
                raw.re_ind = column_relative(raw.re_ind, num_rows);
            }
            *self.slot(condition) = ConditionCheck::from_raw(raw);
        }

        debug!("{} continuous check: {}", problem.name(), self.summary(&Condition::ALL));
    }

    /// Check the MIP solution of an integer problem. Only the primal
    /// categories apply; DE and DB keep whatever they held before.
    pub fn check_integer<P: KktProvider + ?Sized>(&mut self, problem: &P) {
        for condition in Condition::PRIMAL {
            let raw = problem.check(SolutionKind::Integer, condition, false);
            *self.slot(condition) = ConditionCheck::from_raw(raw);
        }

        debug!("{} integer check: {}", problem.name(), self.summary(&Condition::PRIMAL));
    }

    pub fn condition(&self, condition: Condition) -> &ConditionCheck {
        match condition {
            Condition::PrimalEquality => &self.pe,
            Condition::PrimalBound => &self.pb,
            Condition::DualEquality => &self.de,
            Condition::DualBound => &self.db,
        }
    }

    fn slot(&mut self, condition: Condition) -> &mut ConditionCheck {
        match condition {
            Condition::PrimalEquality => &mut self.pe,
            Condition::PrimalBound => &mut self.pb,
            Condition::DualEquality => &mut self.de,
            Condition::DualBound => &mut self.db,
        }
    }

    /// `pe=H pb=M ...` for the given categories, `-` for unchecked ones
    fn summary(&self, conditions: &[Condition]) -> String {
        conditions
            .iter()
            .map(|&condition| {
                let code = self.condition(condition).quality().map_or('-', Quality::code);
                format!("{}={}", condition.tag(), code)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    // ---------- primal equality ----------

    pub fn pe_ae_max(&self) -> f64 {
        self.pe.ae_max()
    }

    /// Row with the largest absolute error
    pub fn pe_ae_row(&self) -> usize {
        self.pe.ae_ind()
    }

    pub fn pe_re_max(&self) -> f64 {
        self.pe.re_max()
    }

    /// Row with the largest relative error
    pub fn pe_re_row(&self) -> usize {
        self.pe.re_ind()
    }

    /// Quality of the primal solution: 'H', 'M', 'L' or '?'
    pub fn pe_quality(&self) -> Option<char> {
        self.pe.quality().map(Quality::code)
    }

    // ---------- primal bound ----------

    pub fn pb_ae_max(&self) -> f64 {
        self.pb.ae_max()
    }

    /// Variable with the largest absolute error
    pub fn pb_ae_ind(&self) -> usize {
        self.pb.ae_ind()
    }

    pub fn pb_re_max(&self) -> f64 {
        self.pb.re_max()
    }

    /// Variable with the largest relative error
    pub fn pb_re_ind(&self) -> usize {
        self.pb.re_ind()
    }

    /// Quality of primal feasibility: 'H', 'M', 'L' or '?'
    pub fn pb_quality(&self) -> Option<char> {
        self.pb.quality().map(Quality::code)
    }

    // ---------- dual equality ----------

    pub fn de_ae_max(&self) -> f64 {
        self.de.ae_max()
    }

    /// Column with the largest absolute error
    pub fn de_ae_col(&self) -> usize {
        self.de.ae_ind()
    }

    pub fn de_re_max(&self) -> f64 {
        self.de.re_max()
    }

    /// Column with the largest relative error
    pub fn de_re_col(&self) -> usize {
        self.de.re_ind()
    }

    /// Quality of the dual solution: 'H', 'M', 'L' or '?'
    pub fn de_quality(&self) -> Option<char> {
        self.de.quality().map(Quality::code)
    }

    // ---------- dual bound ----------

    pub fn db_ae_max(&self) -> f64 {
        self.db.ae_max()
    }

    /// Variable with the largest absolute error
    pub fn db_ae_ind(&self) -> usize {
        self.db.ae_ind()
    }

    pub fn db_re_max(&self) -> f64 {
        self.db.re_max()
    }

    /// Variable with the largest relative error
    pub fn db_re_ind(&self) -> usize {
        self.db.re_ind()
    }

    /// Quality of dual feasibility: 'H', 'M', 'L' or '?'
    pub fn db_quality(&self) -> Option<char> {
        self.db.quality().map(Quality::code)
    }
}

/// Shared handle to a [`Kkt`].
///
/// Checks through the handle are serialized by its lock. Readers get a copy
/// of the current fields.
#[derive(Debug, Clone, Default)]
pub struct KktHandle {
    inner: Arc<RwLock<Kkt>>,
}

impl KktHandle {
    pub fn new() -> Self {
        KktHandle::default()
    }

    pub fn check_continuous<P: KktProvider + ?Sized>(&self, problem: &P, scaled: bool) {
        self.inner.write().check_continuous(problem, scaled);
    }

    pub fn check_integer<P: KktProvider + ?Sized>(&self, problem: &P) {
        self.inner.write().check_integer(problem);
    }

    pub fn snapshot(&self) -> Kkt {
        *self.inner.read()
    }

    pub fn downgrade(&self) -> WeakKktHandle {
        WeakKktHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

/// Non-owning handle; stops resolving once every [`KktHandle`] is dropped
#[derive(Debug, Clone, Default)]
pub struct WeakKktHandle {
    inner: Weak<RwLock<Kkt>>,
}

impl WeakKktHandle {
    pub fn upgrade(&self) -> Option<KktHandle> {
        self.inner.upgrade().map(|inner| KktHandle { inner })
    }
}
