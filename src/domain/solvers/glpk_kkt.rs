use std::os::raw::c_int;

use glpk_kkt_sys::*;

use crate::domain::provider::{Condition, KktProvider, RawCheck, SolutionKind};
use crate::domain::solvers::Problem;

fn glpk_condition(condition: Condition) -> c_int {
    match condition {
        Condition::PrimalEquality => GLP_KKT_PE,
        Condition::PrimalBound => GLP_KKT_PB,
        Condition::DualEquality => GLP_KKT_DE,
        Condition::DualBound => GLP_KKT_DB,
    }
}

fn glpk_solution(solution: SolutionKind) -> c_int {
    match solution {
        SolutionKind::Basic => GLP_SOL,
        SolutionKind::Integer => GLP_MIP,
    }
}

/// KKT checks through `glp_check_kkt` (GLPK 4.49 and later).
///
/// The library always works on the current solution in its own internal
/// scaling, so the `scaled` flag has no effect here.
impl KktProvider for Problem {
    fn num_rows(&self) -> usize {
        Problem::num_rows(self)
    }

    fn check(&self, solution: SolutionKind, condition: Condition, _scaled: bool) -> RawCheck {
        let mut ae_max: f64 = 0.0;
        let mut ae_ind: c_int = 0;
        let mut re_max: f64 = 0.0;
        let mut re_ind: c_int = 0;

        unsafe {
            glp_check_kkt(
                self.as_ptr(),
                glpk_solution(solution),
                glpk_condition(condition),
                &mut ae_max,
                &mut ae_ind,
                &mut re_max,
                &mut re_ind,
            );
        }

        RawCheck {
            ae_max,
            ae_ind: ae_ind.max(0) as usize,
            re_max,
            re_ind: re_ind.max(0) as usize,
        }
    }

    fn name(&self) -> &str {
        "GLPK"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kkt::Kkt;

    /// min x + 2y  s.t.  x + y <= 10,  -x - y <= -2,  x, y in [0, 5]
    fn solved_lp() -> Problem {
        let mut lp = Problem::new().unwrap();
        lp.set_maximize(false);
        lp.add_rows(2);
        lp.add_cols(2);
        lp.set_row_upper(0, 10.0);
        lp.set_row_upper(1, -2.0);
        lp.set_col_bounds(0, Some(0.0), Some(5.0));
        lp.set_col_bounds(1, Some(0.0), Some(5.0));
        lp.set_obj_coef(0, 1.0);
        lp.set_obj_coef(1, 2.0);
        lp.load_matrix(&[(0, 0, 1.0), (0, 1, 1.0), (1, 0, -1.0), (1, 1, -1.0)]);
        lp.simplex().unwrap();
        lp
    }

    #[test]
    fn test_exact_lp_has_high_quality() {
        let lp = solved_lp();
        let mut kkt = Kkt::new();
        kkt.check_continuous(&lp, false);

        assert_eq!(kkt.pe_quality(), Some('H'));
        assert_eq!(kkt.pb_quality(), Some('H'));
        assert_eq!(kkt.de_quality(), Some('H'));
        assert_eq!(kkt.db_quality(), Some('H'));
        assert!(kkt.de_ae_col() < lp.num_cols());
    }

    #[test]
    fn test_repeated_check_is_identical() {
        let lp = solved_lp();
        let mut first = Kkt::new();
        first.check_continuous(&lp, false);
        let mut second = Kkt::new();
        second.check_continuous(&lp, true);

        assert_eq!(first, second);
    }
}
