use std::os::raw::c_int;

use glpk_kkt_sys::*;

use crate::domain::provider::{Condition, KktProvider, RawCheck, SolutionKind};
use crate::domain::solvers::Problem;

fn location(ind: c_int) -> usize {
    ind.max(0) as usize
}

/// Column-relative 1-based location to the combined row+column space,
/// keeping `0` as "none"
fn combined_location(col: c_int, num_rows: usize) -> usize {
    match location(col) {
        0 => 0,
        col => col + num_rows,
    }
}

/// KKT checks through `lpx_check_kkt` / `lpx_check_int` (GLPK before 4.49).
///
/// The legacy routines fill every category at once; the requested one is
/// picked out of the block. A continuous check therefore runs
/// `lpx_check_kkt` once per category, four scans of the solution in total.
/// Their dual equality columns are already column-relative, so they are
/// shifted back into the combined row+column space the provider contract
/// promises.
impl KktProvider for Problem {
    fn num_rows(&self) -> usize {
        Problem::num_rows(self)
    }

    fn check(&self, solution: SolutionKind, condition: Condition, scaled: bool) -> RawCheck {
        let mut kkt = LPXKKT::default();
        unsafe {
            match solution {
                SolutionKind::Basic => lpx_check_kkt(self.as_ptr(), scaled as c_int, &mut kkt),
                SolutionKind::Integer => lpx_check_int(self.as_ptr(), &mut kkt),
            }
        }

        match condition {
            Condition::PrimalEquality => RawCheck {
                ae_max: kkt.pe_ae_max,
                ae_ind: location(kkt.pe_ae_row),
                re_max: kkt.pe_re_max,
                re_ind: location(kkt.pe_re_row),
            },
            Condition::PrimalBound => RawCheck {
                ae_max: kkt.pb_ae_max,
                ae_ind: location(kkt.pb_ae_ind),
                re_max: kkt.pb_re_max,
                re_ind: location(kkt.pb_re_ind),
            },
            Condition::DualEquality => {
                let m = Problem::num_rows(self);
                RawCheck {
                    ae_max: kkt.de_ae_max,
                    ae_ind: combined_location(kkt.de_ae_col, m),
                    re_max: kkt.de_re_max,
                    re_ind: combined_location(kkt.de_re_col, m),
                }
            }
            Condition::DualBound => RawCheck {
                ae_max: kkt.db_ae_max,
                ae_ind: location(kkt.db_ae_ind),
                re_max: kkt.db_re_max,
                re_ind: location(kkt.db_re_ind),
            },
        }
    }

    fn name(&self) -> &str {
        "GLPK (legacy)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kkt::tests::ScriptedProvider;
    use crate::kkt::Kkt;

    #[test]
    fn test_combined_location_keeps_none() {
        assert_eq!(combined_location(0, 7), 0);
        assert_eq!(combined_location(-1, 7), 0);
    }

    #[test]
    fn test_combined_location_adds_row_count() {
        assert_eq!(combined_location(1, 0), 1);
        assert_eq!(combined_location(3, 4), 7);
    }

    #[test]
    fn test_legacy_column_reads_back_zero_based() {
        let (col, rows) = (3, 4);
        let provider = ScriptedProvider::new(rows).with(
            SolutionKind::Basic,
            Condition::DualEquality,
            RawCheck {
                ae_max: 1e-4,
                ae_ind: combined_location(col, rows),
                re_max: 1e-4,
                re_ind: combined_location(0, rows),
            },
        );

        let mut kkt = Kkt::new();
        kkt.check_continuous(&provider, true);

        assert_eq!(kkt.de_ae_col(), col as usize - 1);
        assert_eq!(kkt.de_re_col(), 0);
    }
}
