// src/monte_carlo.rs
//
// Single-site Metropolis sweep.
//
// Site energy for a trial direction s, with everything else held fixed:
//
//   E_i(s) = -s · H_loc,   H_loc = J Σ_j S_j + D Σ_j r̂_ij × S_j + h_i
//
// (nearest-neighbour exchange, bulk DMI, applied field). The field kernels use
// the same Hamiltonian, so summing their per-site energies gives the total
// energy this sweep descends at low temperature.
//
// Sites are visited in order and updated in place, so a sweep is inherently
// sequential.

use tracing::debug;

use crate::neighbours::{Neighbours, CUBIC_ARITY, CUBIC_BOND_DIRECTIONS};
use crate::params::{McParams, K_B};
use crate::random::SpinRng;
use crate::vec3::{axpy, cross, dot, sub};
use crate::vector_field::{set3, Vec3View};

/// Outcome of one sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct McSweep {
    pub attempted: usize,
    pub accepted: usize,
}

impl McSweep {
    pub fn acceptance_rate(&self) -> f64 {
        if self.attempted == 0 {
            return 0.0;
        }
        self.accepted as f64 / self.attempted as f64
    }
}

/// Field on site `i` from its neighbours (exchange + bulk DMI) plus the
/// applied field.
#[inline]
fn local_field(
    spin: &[f64],
    ngbs: &Neighbours,
    h: &Vec3View,
    params: &McParams,
    i: usize,
) -> [f64; 3] {
    let s = Vec3View::new(spin);
    let mut field = h.get(i);
    for (slot, nb) in ngbs.iter(i) {
        let sj = s.get(nb);
        field = axpy(field, params.j, sj);
        field = axpy(field, params.d, cross(CUBIC_BOND_DIRECTIONS[slot], sj));
    }
    field
}

/// Metropolis acceptance for an energy change `delta_e` at temperature `t`.
///
/// Downhill (or flat) moves always pass; uphill moves pass when `u` is below
/// exp(-ΔE / k_B T). At T = 0 no uphill move passes.
#[inline]
pub fn metropolis_accept(delta_e: f64, temperature: f64, u: f64) -> bool {
    delta_e <= 0.0 || u < (-delta_e / (K_B * temperature)).exp()
}

/// One full sweep: propose a uniformly random new direction at every site in
/// turn and accept it by the Metropolis rule. `spin` is updated in place.
///
/// `h` is the applied field per site (3N), already in energy units.
pub fn run_step_mc(
    spin: &mut [f64],
    ngbs: &Neighbours,
    h: &[f64],
    params: &McParams,
    rng: &mut SpinRng,
) -> McSweep {
    debug_assert_eq!(ngbs.arity(), CUBIC_ARITY);
    let n = ngbs.n_sites();
    debug_assert_eq!(spin.len(), 3 * n);
    let h = Vec3View::new(h);

    let mut trial = vec![0.0; 3 * n];
    rng.random_spin_uniform(&mut trial);
    let trial = Vec3View::new(&trial);

    let mut sweep = McSweep::default();
    for i in 0..n {
        let field = local_field(spin, ngbs, &h, params, i);
        let old = Vec3View::new(spin).get(i);
        let new = trial.get(i);
        let delta_e = -dot(sub(new, old), field);

        sweep.attempted += 1;
        if metropolis_accept(delta_e, params.temperature, rng.single_random()) {
            set3(&mut spin[3 * i..3 * i + 3], new);
            sweep.accepted += 1;
        }
    }

    debug!(
        attempted = sweep.attempted,
        accepted = sweep.accepted,
        temperature = params.temperature,
        "monte carlo sweep"
    );
    sweep
}
