// src/effective_field/demag.rs
//
// Dipolar (demagnetising) field by direct summation over all pairs.
//
//   H_i = scale_i Σ_{j≠i} mu_s_j [3 (S_j·r̂) r̂ - S_j] / r^3,   r = x_i - x_j
//   E_i = -½ mu_s_i H_i · S_i
//
// Every site sees every other site, so one call costs O(N^2). This is the
// reference path; a Fourier-accelerated replacement can take over this
// function's contract without touching the neighbour-local kernels.

use std::time::Instant;

use tracing::debug;

use crate::vec3::{axpy, dot, scale, sub};
use crate::vector_field::{fill_sites_with_energy, Vec3View};

/// Dense dipolar field.
///
/// - `coords`: site positions (3N), same length unit as the intended 1/r^3
/// - `mu_s`: moment magnitude per site (N)
/// - `mu_s_scale`: per-site prefactor applied to the summed field (N),
///   e.g. mu0 / 4π in the caller's units
pub fn compute_demag_full(
    spin: &[f64],
    coords: &[f64],
    mu_s: &[f64],
    mu_s_scale: &[f64],
    field: &mut [f64],
    energy: &mut [f64],
) {
    let s = Vec3View::new(spin);
    let x = Vec3View::new(coords);
    let n = s.len();
    debug_assert_eq!(x.len(), n);
    debug_assert_eq!(mu_s.len(), n);
    debug_assert_eq!(mu_s_scale.len(), n);

    let t0 = Instant::now();

    fill_sites_with_energy(field, energy, |i| {
        let xi = x.get(i);
        let mut h = [0.0; 3];
        for j in 0..n {
            if j == i {
                continue;
            }
            let r = sub(xi, x.get(j));
            let r2 = dot(r, r);
            let r_n = r2.sqrt();
            let inv_r3 = 1.0 / (r2 * r_n);
            let r_hat = scale(r, 1.0 / r_n);
            let sj = scale(s.get(j), mu_s[j]);
            h = axpy(h, 3.0 * dot(sj, r_hat) * inv_r3, r_hat);
            h = axpy(h, -inv_r3, sj);
        }
        let h = scale(h, mu_s_scale[i]);
        (h, -0.5 * mu_s[i] * dot(h, s.get(i)))
    });

    debug!(
        n_sites = n,
        elapsed_us = t0.elapsed().as_micros() as u64,
        "dense dipolar field"
    );
}
