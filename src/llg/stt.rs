// src/llg/stt.rs
//
// Spin-transfer-torque right-hand sides.
//
// Both variants add a torque of the same shape to the base LLG terms. For a
// driving vector v (the spatial derivative (j·∇)S for current-in-plane, the
// polarisation p for current-perpendicular):
//
//   τ = k / (1+α²) [ (1+αβ) a v⊥ + (β-α) b S × v ]
//
// with v⊥ = |S|² v - (S·v) S and β the non-adiabaticity. Both parts are
// perpendicular to S, so the torque leaves |S| unchanged.

use crate::neighbours::{Direction, Neighbours};
use crate::params::{LlgParams, ZhangLi};
use crate::vec3::{add, axpy, cross, dot, scale, sub};
use crate::vector_field::{fill_sites, Vec3View};

use super::{is_pinned, llg_torque, with_norm_correction};

/// (1+αβ) v⊥ - (β-α) S × v, without the prefactor.
#[inline]
fn torque_shape(m: [f64; 3], v: [f64; 3], alpha: f64, beta: f64) -> [f64; 3] {
    let v_perp = sub(scale(v, dot(m, m)), scale(m, dot(m, v)));
    axpy(scale(v_perp, 1.0 + alpha * beta), -(beta - alpha), cross(m, v))
}

/// One-sided where a neighbour is missing, zero where both are.
#[inline]
fn derivative(
    s: &Vec3View,
    ngbs: &Neighbours,
    i: usize,
    minus: Direction,
    plus: Direction,
    spacing: f64,
) -> [f64; 3] {
    match (ngbs.dir(i, minus), ngbs.dir(i, plus)) {
        (Some(a), Some(b)) => scale(sub(s.get(b), s.get(a)), 0.5 / spacing),
        (Some(a), None) => scale(sub(s.get(i), s.get(a)), 1.0 / spacing),
        (None, Some(b)) => scale(sub(s.get(b), s.get(i)), 1.0 / spacing),
        (None, None) => [0.0; 3],
    }
}

/// Current-driven field (j·∇)S on a cubic neighbour array.
///
/// `jx`, `jy` are the in-plane current density components per site; `dx`,
/// `dy` the lattice spacings.
pub fn compute_stt_field(
    spin: &[f64],
    ngbs: &Neighbours,
    jx: &[f64],
    jy: &[f64],
    dx: f64,
    dy: f64,
    field: &mut [f64],
) {
    let s = Vec3View::new(spin);
    debug_assert_eq!(jx.len(), s.len());
    debug_assert_eq!(jy.len(), s.len());

    fill_sites(field, |i| {
        let ddx = derivative(&s, ngbs, i, Direction::MinusX, Direction::PlusX, dx);
        let ddy = derivative(&s, ngbs, i, Direction::MinusY, Direction::PlusY, dy);
        add(scale(ddx, jx[i]), scale(ddy, jy[i]))
    });
}

/// LLG with Zhang–Li torque, `h_stt` from [`compute_stt_field`].
///
/// The torque is -u0/(1+α²) [(1+αβ) h_stt⊥ - (β-α) S × h_stt], i.e. the
/// Gilbert-form term -u0 (j·∇)S + β u0 S × (j·∇)S: with α = β a texture is
/// carried rigidly along the current.
#[allow(clippy::too_many_arguments)]
pub fn llg_stt_rhs(
    dm_dt: &mut [f64],
    spin: &[f64],
    h: &[f64],
    h_stt: &[f64],
    alpha: &[f64],
    pins: &[i32],
    stt: &ZhangLi,
    params: &LlgParams,
) {
    let m = Vec3View::new(spin);
    let h = Vec3View::new(h);
    let hs = Vec3View::new(h_stt);
    debug_assert_eq!(hs.len(), m.len());

    fill_sites(dm_dt, |i| {
        if is_pinned(pins, i) {
            return [0.0; 3];
        }
        let mi = m.get(i);
        let a = alpha[i];
        let dm = llg_torque(mi, h.get(i), a, params.gamma, params.do_precession);
        let tau = torque_shape(mi, hs.get(i), a, stt.beta);
        let dm = axpy(dm, -stt.u0 / (1.0 + a * a), tau);
        with_norm_correction(dm, mi, params.norm_correction)
    });
}

/// LLG with Slonczewski (current-perpendicular-to-plane) torque.
///
/// `p` is the polarisation direction per site (3N), `a_j` the torque
/// amplitude per site. For a_J > 0 the damping-like part turns S toward p:
/// γ a_J/(1+α²) [(1+αβ) p⊥ - (β-α) S × p].
#[allow(clippy::too_many_arguments)]
pub fn llg_stt_cpp(
    dm_dt: &mut [f64],
    spin: &[f64],
    h: &[f64],
    p: &[f64],
    alpha: &[f64],
    pins: &[i32],
    a_j: &[f64],
    beta: f64,
    params: &LlgParams,
) {
    let m = Vec3View::new(spin);
    let h = Vec3View::new(h);
    let p = Vec3View::new(p);
    debug_assert_eq!(p.len(), m.len());
    debug_assert_eq!(a_j.len(), m.len());

    fill_sites(dm_dt, |i| {
        if is_pinned(pins, i) {
            return [0.0; 3];
        }
        let mi = m.get(i);
        let a = alpha[i];
        let dm = llg_torque(mi, h.get(i), a, params.gamma, params.do_precession);
        let tau = torque_shape(mi, p.get(i), a, beta);
        let dm = axpy(dm, params.gamma * a_j[i] / (1.0 + a * a), tau);
        with_norm_correction(dm, mi, params.norm_correction)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::NormCorrection;
    use crate::random::SpinRng;
    use approx::assert_relative_eq;

    const NO_CORRECTION: LlgParams = LlgParams {
        gamma: 1.0,
        do_precession: true,
        norm_correction: NormCorrection::Fixed(0.0),
    };

    // Open chain of four sites along x.
    fn chain4() -> Vec<i32> {
        let mut ids = vec![-1; 24];
        for i in 0..4 {
            if i > 0 {
                ids[6 * i] = i as i32 - 1;
            }
            if i < 3 {
                ids[6 * i + 1] = i as i32 + 1;
            }
        }
        ids
    }

    #[test]
    fn stt_field_uses_central_and_one_sided_differences() {
        // S_z = 0, 1, 4, 9 along the chain (not normalised; the stencil does not care)
        let spin = [
            0.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, //
            0.0, 0.0, 4.0, //
            0.0, 0.0, 9.0,
        ];
        let ids = chain4();
        let ngbs = Neighbours::cubic(&ids);
        let mut field = vec![0.0; 12];
        compute_stt_field(&spin, &ngbs, &[2.0; 4], &[5.0; 4], 0.5, 1.0, &mut field);

        // forward at 0: (1-0)/0.5 = 2, central at 1: (4-0)/1 = 4, at 2: (9-1)/1 = 8,
        // backward at 3: (9-4)/0.5 = 10; all times jx = 2. No y neighbours.
        let z: Vec<f64> = field.chunks(3).map(|c| c[2]).collect();
        assert_eq!(z, vec![4.0, 8.0, 16.0, 20.0]);
    }

    #[test]
    fn stt_field_y_stencil_honours_spacing() {
        // Open chain of three sites along y, S_z = 0, 1, 3, dy = 2.
        let mut ids = vec![-1; 18];
        for i in 0..3 {
            if i > 0 {
                ids[6 * i + 2] = i as i32 - 1;
            }
            if i < 2 {
                ids[6 * i + 3] = i as i32 + 1;
            }
        }
        let spin = [
            0.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, //
            0.0, 0.0, 3.0,
        ];
        let mut field = vec![0.0; 9];
        let ngbs = Neighbours::cubic(&ids);
        compute_stt_field(&spin, &ngbs, &[7.0; 3], &[1.0; 3], 1.0, 2.0, &mut field);

        // forward (1-0)/2, central (3-0)/4, backward (3-1)/2; no x neighbours
        let z: Vec<f64> = field.chunks(3).map(|c| c[2]).collect();
        assert_eq!(z, vec![0.5, 0.75, 1.0]);
        assert!(field.chunks(3).all(|c| c[0] == 0.0 && c[1] == 0.0));
    }

    #[test]
    fn pinned_sites_feel_no_spin_torque() {
        let n = 12;
        let mut rng = SpinRng::new(21);
        let mut spin = vec![0.0; 3 * n];
        let mut h = vec![0.0; 3 * n];
        let mut v = vec![0.0; 3 * n];
        rng.random_spin_uniform(&mut spin);
        rng.gauss_random_vec(&mut h);
        rng.gauss_random_vec(&mut v);
        let alpha = vec![0.2; n];
        let pins: Vec<i32> = (0..n).map(|i| (i % 2 == 0) as i32).collect();
        let params = LlgParams::default();

        let mut dm_zl = vec![1.0; 3 * n];
        let stt = ZhangLi { beta: 0.1, u0: 4.0 };
        llg_stt_rhs(&mut dm_zl, &spin, &h, &v, &alpha, &pins, &stt, &params);

        let mut dm_cpp = vec![1.0; 3 * n];
        llg_stt_cpp(&mut dm_cpp, &spin, &h, &v, &alpha, &pins, &vec![2.0; n], 0.1, &params);

        for i in 0..n {
            let (a, b) = (&dm_zl[3 * i..3 * i + 3], &dm_cpp[3 * i..3 * i + 3]);
            if pins[i] != 0 {
                assert_eq!(a, &[0.0; 3]);
                assert_eq!(b, &[0.0; 3]);
            } else {
                assert!(a.iter().any(|&x| x != 0.0));
                assert!(b.iter().any(|&x| x != 0.0));
            }
        }
    }

    #[test]
    fn equal_alpha_beta_gives_pure_advection() {
        // dS/dt = -u0 v when v ⊥ S, α = β, no field
        let mut dm = vec![0.0; 3];
        let stt = ZhangLi { beta: 0.3, u0: 2.0 };
        llg_stt_rhs(
            &mut dm,
            &[0.0, 0.0, 1.0],
            &[0.0; 3],
            &[0.5, -0.25, 0.0],
            &[0.3],
            &[0],
            &stt,
            &NO_CORRECTION,
        );
        assert_relative_eq!(dm[0], -1.0, epsilon = 1e-14);
        assert_relative_eq!(dm[1], 0.5, epsilon = 1e-14);
        assert_relative_eq!(dm[2], 0.0, epsilon = 1e-14);
    }

    #[test]
    fn cpp_damping_like_torque_turns_spin_toward_polarisation() {
        let mut dm = vec![0.0; 3];
        llg_stt_cpp(
            &mut dm,
            &[1.0, 0.0, 0.0],
            &[0.0; 3],
            &[0.0, 0.0, 1.0],
            &[0.0],
            &[0],
            &[0.5],
            0.0,
            &NO_CORRECTION,
        );
        assert_eq!(dm, vec![0.0, 0.0, 0.5]);
    }

    #[test]
    fn spin_torques_are_perpendicular_to_spin() {
        let n = 32;
        let mut rng = SpinRng::new(9);
        let mut spin = vec![0.0; 3 * n];
        let mut h = vec![0.0; 3 * n];
        let mut v = vec![0.0; 3 * n];
        rng.random_spin_uniform(&mut spin);
        rng.gauss_random_vec(&mut h);
        rng.gauss_random_vec(&mut v);
        let alpha = vec![0.0; n];
        let pins = vec![0; n];

        let mut dm_zl = vec![0.0; 3 * n];
        let stt = ZhangLi { beta: 0.2, u0: 3.0 };
        llg_stt_rhs(&mut dm_zl, &spin, &h, &v, &alpha, &pins, &stt, &NO_CORRECTION);

        let mut dm_cpp = vec![0.0; 3 * n];
        llg_stt_cpp(&mut dm_cpp, &spin, &h, &v, &alpha, &pins, &vec![1.5; n], 0.2, &NO_CORRECTION);

        for i in 0..n {
            let s = [spin[3 * i], spin[3 * i + 1], spin[3 * i + 2]];
            let a = [dm_zl[3 * i], dm_zl[3 * i + 1], dm_zl[3 * i + 2]];
            let b = [dm_cpp[3 * i], dm_cpp[3 * i + 1], dm_cpp[3 * i + 2]];
            assert!(dot(a, s).abs() < 1e-12);
            assert!(dot(b, s).abs() < 1e-12);
        }
    }
}
