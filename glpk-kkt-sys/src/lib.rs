#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(dead_code)]

//! Low-level FFI bindings to GLPK
//!
//! Covers the subset of the GLPK C API needed to build a problem, solve it
//! and run the Karush-Kuhn-Tucker checks on the result. All functions are
//! unsafe; the `glpk-kkt-api` crate wraps them.

use std::os::raw::{c_double, c_int};

/// Opaque GLPK problem object
#[repr(C)]
pub struct glp_prob {
    _private: [u8; 0],
}

// optimization direction
pub const GLP_MIN: c_int = 1;
pub const GLP_MAX: c_int = 2;

// column kind
pub const GLP_CV: c_int = 1;
pub const GLP_IV: c_int = 2;
pub const GLP_BV: c_int = 3;

// bound type
pub const GLP_FR: c_int = 1;
pub const GLP_LO: c_int = 2;
pub const GLP_UP: c_int = 3;
pub const GLP_DB: c_int = 4;
pub const GLP_FX: c_int = 5;

// solution status
pub const GLP_UNDEF: c_int = 1;
pub const GLP_FEAS: c_int = 2;
pub const GLP_INFEAS: c_int = 3;
pub const GLP_NOFEAS: c_int = 4;
pub const GLP_OPT: c_int = 5;
pub const GLP_UNBND: c_int = 6;

// solution indicator
pub const GLP_SOL: c_int = 1;
pub const GLP_IPT: c_int = 2;
pub const GLP_MIP: c_int = 3;

// KKT condition
pub const GLP_KKT_PE: c_int = 1;
pub const GLP_KKT_PB: c_int = 2;
pub const GLP_KKT_DE: c_int = 3;
pub const GLP_KKT_DB: c_int = 4;
pub const GLP_KKT_CS: c_int = 5;

// terminal output switch
pub const GLP_OFF: c_int = 0;
pub const GLP_ON: c_int = 1;

extern "C" {
    pub fn glp_create_prob() -> *mut glp_prob;
    pub fn glp_delete_prob(P: *mut glp_prob);

    pub fn glp_set_obj_dir(P: *mut glp_prob, dir: c_int);
    pub fn glp_add_rows(P: *mut glp_prob, nrs: c_int) -> c_int;
    pub fn glp_add_cols(P: *mut glp_prob, ncs: c_int) -> c_int;
    pub fn glp_set_row_bnds(P: *mut glp_prob, i: c_int, type_: c_int, lb: c_double, ub: c_double);
    pub fn glp_set_col_bnds(P: *mut glp_prob, j: c_int, type_: c_int, lb: c_double, ub: c_double);
    pub fn glp_set_obj_coef(P: *mut glp_prob, j: c_int, coef: c_double);
    pub fn glp_set_col_kind(P: *mut glp_prob, j: c_int, kind: c_int);
    pub fn glp_load_matrix(
        P: *mut glp_prob,
        ne: c_int,
        ia: *const c_int,
        ja: *const c_int,
        ar: *const c_double,
    );

    pub fn glp_get_num_rows(P: *mut glp_prob) -> c_int;
    pub fn glp_get_num_cols(P: *mut glp_prob) -> c_int;

    // `parm` may be null, in which case GLPK uses its defaults
    pub fn glp_simplex(P: *mut glp_prob, parm: *const std::ffi::c_void) -> c_int;
    pub fn glp_intopt(P: *mut glp_prob, parm: *const std::ffi::c_void) -> c_int;

    pub fn glp_get_status(P: *mut glp_prob) -> c_int;
    pub fn glp_get_obj_val(P: *mut glp_prob) -> c_double;
    pub fn glp_get_col_prim(P: *mut glp_prob, j: c_int) -> c_double;
    pub fn glp_mip_status(P: *mut glp_prob) -> c_int;
    pub fn glp_mip_obj_val(P: *mut glp_prob) -> c_double;
    pub fn glp_mip_col_val(P: *mut glp_prob, j: c_int) -> c_double;

    pub fn glp_term_out(flag: c_int) -> c_int;
}

#[cfg(not(feature = "legacy"))]
extern "C" {
    pub fn glp_check_kkt(
        P: *mut glp_prob,
        sol: c_int,
        cond: c_int,
        ae_max: *mut c_double,
        ae_ind: *mut c_int,
        re_max: *mut c_double,
        re_ind: *mut c_int,
    );
}

/// Result block filled by `lpx_check_kkt` / `lpx_check_int`
#[cfg(feature = "legacy")]
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct LPXKKT {
    pub pe_ae_max: c_double,
    pub pe_ae_row: c_int,
    pub pe_re_max: c_double,
    pub pe_re_row: c_int,
    pub pe_quality: c_int,

    pub pb_ae_max: c_double,
    pub pb_ae_ind: c_int,
    pub pb_re_max: c_double,
    pub pb_re_ind: c_int,
    pub pb_quality: c_int,

    pub de_ae_max: c_double,
    pub de_ae_col: c_int,
    pub de_re_max: c_double,
    pub de_re_col: c_int,
    pub de_quality: c_int,

    pub db_ae_max: c_double,
    pub db_ae_ind: c_int,
    pub db_re_max: c_double,
    pub db_re_ind: c_int,
    pub db_quality: c_int,

    pub cs_ae_max: c_double,
    pub cs_ae_ind: c_int,
    pub cs_re_max: c_double,
    pub cs_re_ind: c_int,
    pub cs_quality: c_int,
}

#[cfg(feature = "legacy")]
extern "C" {
    pub fn lpx_check_kkt(lp: *mut glp_prob, scaled: c_int, kkt: *mut LPXKKT);
    pub fn lpx_check_int(lp: *mut glp_prob, kkt: *mut LPXKKT);
}
