// src/llg/mod.rs
//
// Landau–Lifshitz–Gilbert right-hand sides.
//
//   dS/dt = -γ/(1+α²) [ S × H + α S × (S × H) ]
//
// Written with the perpendicular field H⊥ = |S|² H - (S·H) S, for which
// S × (S × H) = -H⊥ and S × H⊥ = |S|² S × H:
//
//   dS/dt = -γ/(1+α²) [ S × H⊥ - α H⊥ ]
//
// After the torque a norm-restoring term c (1 - |S|²) S is added (see
// `NormCorrection`). Pinned sites always get an exactly zero derivative.
//
// All kernels take an already-summed effective field and overwrite their
// output buffer; nothing is accumulated across calls.

pub mod stt;
pub mod thermal;

use rayon::prelude::*;

use crate::config::use_parallel;
use crate::params::{LlgParams, NormCorrection};
use crate::vec3::{add, axpy, cross, dot, scale, sub};
use crate::vector_field::{fill_sites, Vec3View};

#[inline]
pub(crate) fn is_pinned(pins: &[i32], i: usize) -> bool {
    pins[i] != 0
}

/// Precession + damping torque at one site, without norm correction.
#[inline]
pub(crate) fn llg_torque(
    m: [f64; 3],
    h: [f64; 3],
    alpha: f64,
    gamma: f64,
    do_precession: bool,
) -> [f64; 3] {
    let coeff = -gamma / (1.0 + alpha * alpha);
    let mm = dot(m, m);
    let mh = dot(m, h);
    let h_perp = sub(scale(h, mm), scale(m, mh));

    let precession = if do_precession { cross(m, h_perp) } else { [0.0; 3] };
    scale(axpy(precession, -alpha, h_perp), coeff)
}

#[inline]
pub(crate) fn with_norm_correction(
    dm_dt: [f64; 3],
    m: [f64; 3],
    correction: NormCorrection,
) -> [f64; 3] {
    let c = correction.coefficient(dm_dt);
    axpy(dm_dt, c * (1.0 - dot(m, m)), m)
}

/// Base LLG: writes dS/dt for every site into `dm_dt` (3N).
///
/// `alpha` and `pins` have one entry per site; nonzero pin = fixed spin.
pub fn llg_rhs(
    dm_dt: &mut [f64],
    spin: &[f64],
    h: &[f64],
    alpha: &[f64],
    pins: &[i32],
    params: &LlgParams,
) {
    let m = Vec3View::new(spin);
    let h = Vec3View::new(h);
    debug_assert_eq!(h.len(), m.len());
    debug_assert_eq!(alpha.len(), m.len());
    debug_assert_eq!(pins.len(), m.len());

    fill_sites(dm_dt, |i| {
        if is_pinned(pins, i) {
            return [0.0; 3];
        }
        let mi = m.get(i);
        let dm = llg_torque(mi, h.get(i), alpha[i], params.gamma, params.do_precession);
        with_norm_correction(dm, mi, params.norm_correction)
    });
}

/// LLG for spins whose length may relax: [`llg_rhs`] plus a longitudinal
/// term γ χ_i (S·H) S along the spin, with χ the per-site longitudinal
/// susceptibility. χ = 0 reproduces [`llg_rhs`] exactly.
pub fn llg_s_rhs(
    dm_dt: &mut [f64],
    spin: &[f64],
    h: &[f64],
    alpha: &[f64],
    chi: &[f64],
    pins: &[i32],
    params: &LlgParams,
) {
    let m = Vec3View::new(spin);
    let h = Vec3View::new(h);
    debug_assert_eq!(h.len(), m.len());
    debug_assert_eq!(chi.len(), m.len());
    debug_assert_eq!(pins.len(), m.len());

    fill_sites(dm_dt, |i| {
        if is_pinned(pins, i) {
            return [0.0; 3];
        }
        let (mi, hi) = (m.get(i), h.get(i));
        let dm = llg_torque(mi, hi, alpha[i], params.gamma, params.do_precession);
        let dm = axpy(dm, params.gamma * chi[i] * dot(mi, hi), mi);
        with_norm_correction(dm, mi, params.norm_correction)
    });
}

/// Jacobian-vector product of [`llg_rhs`].
///
/// Returns, per site, the derivative of the LLG right-hand side along the
/// perturbation `mp` of the spins and the induced perturbation `hp` of the
/// effective field. The norm correction is linearised only for
/// `NormCorrection::Fixed`; with `Adaptive` the correction term is left out
/// of the product altogether.
#[allow(clippy::too_many_arguments)]
pub fn llg_rhs_jtimes(
    jtn: &mut [f64],
    spin: &[f64],
    h: &[f64],
    mp: &[f64],
    hp: &[f64],
    alpha: &[f64],
    pins: &[i32],
    params: &LlgParams,
) {
    let m = Vec3View::new(spin);
    let h = Vec3View::new(h);
    let mp = Vec3View::new(mp);
    let hp = Vec3View::new(hp);
    debug_assert_eq!(mp.len(), m.len());
    debug_assert_eq!(hp.len(), m.len());

    fill_sites(jtn, |i| {
        if is_pinned(pins, i) {
            return [0.0; 3];
        }
        let (mi, hi, mpi, hpi) = (m.get(i), h.get(i), mp.get(i), hp.get(i));
        let a = alpha[i];
        let coeff = -params.gamma / (1.0 + a * a);

        let mm = dot(mi, mi);
        let mh = dot(mi, hi);
        let mmp = dot(mi, mpi);
        let mph = dot(mpi, hi);
        let mhp = dot(mi, hpi);

        // d[|m|² (m × h)]
        let mut j = [0.0; 3];
        if params.do_precession {
            j = add(
                scale(cross(mi, hi), 2.0 * mmp),
                scale(add(cross(mpi, hi), cross(mi, hpi)), mm),
            );
        }

        // d[H⊥] = 2(m·mp) h + |m|² hp - (mp·h + m·hp) m - (m·h) mp
        let mut dh_perp = axpy(scale(hi, 2.0 * mmp), mm, hpi);
        dh_perp = axpy(dh_perp, -(mph + mhp), mi);
        dh_perp = axpy(dh_perp, -mh, mpi);

        j = scale(axpy(j, -a, dh_perp), coeff);

        if let NormCorrection::Fixed(c) = params.norm_correction {
            // d[c (1 - |m|²) m]
            j = axpy(j, c * (1.0 - mm), mpi);
            j = axpy(j, -2.0 * c * mmp, mi);
        }
        j
    });
}

/// Rescale every unpinned spin to unit length, in place.
///
/// A zero-length spin becomes NaN; that is left for the caller to notice.
pub fn normalise(spin: &mut [f64], pins: &[i32]) {
    debug_assert_eq!(spin.len(), 3 * pins.len());

    let apply = |(s, &pin): (&mut [f64], &i32)| {
        if pin != 0 {
            return;
        }
        let inv = 1.0 / (s[0] * s[0] + s[1] * s[1] + s[2] * s[2]).sqrt();
        s[0] *= inv;
        s[1] *= inv;
        s[2] *= inv;
    };

    if use_parallel(pins.len()) {
        spin.par_chunks_mut(3).zip_eq(pins.par_iter()).for_each(apply);
    } else {
        spin.chunks_mut(3).zip(pins.iter()).for_each(apply);
    }
}
