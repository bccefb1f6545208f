// src/effective_field/exchange.rs
//
// Nearest-neighbour exchange.
//
// Hamiltonian (each pair <i,j> once):
//   E = - Σ_<i,j> J_ij S_i · S_j
// Field at site i:
//   H_i = Σ_j J_ij S_j
// The per-site energy carries a factor ½ so that summing over all sites
// counts each pair once.

use crate::neighbours::Neighbours;
use crate::vec3::dot;
use crate::vector_field::{fill_sites_with_energy, Vec3View};

/// Exchange with one coupling per Cartesian component, shared by all bonds.
///
/// `j = [Jx, Jy, Jz]` scales the matching component of every neighbour spin.
pub fn compute_exchange_field(
    spin: &[f64],
    ngbs: &Neighbours,
    j: [f64; 3],
    field: &mut [f64],
    energy: &mut [f64],
) {
    let s = Vec3View::new(spin);
    debug_assert_eq!(s.len(), ngbs.n_sites());

    fill_sites_with_energy(field, energy, |i| {
        let mut h = [0.0; 3];
        for (_, nb) in ngbs.iter(i) {
            let sj = s.get(nb);
            h[0] += j[0] * sj[0];
            h[1] += j[1] * sj[1];
            h[2] += j[2] * sj[2];
        }
        (h, -0.5 * dot(h, s.get(i)))
    });
}

/// Exchange with a coupling per (site, neighbour slot).
///
/// `coupling` has the same length and layout as the neighbour array; entries
/// paired with an absent neighbour are ignored.
pub fn compute_exchange_field_spatial(
    spin: &[f64],
    ngbs: &Neighbours,
    coupling: &[f64],
    field: &mut [f64],
    energy: &mut [f64],
) {
    let s = Vec3View::new(spin);
    let arity = ngbs.arity();
    debug_assert_eq!(coupling.len(), arity * ngbs.n_sites());

    fill_sites_with_energy(field, energy, |i| {
        let mut h = [0.0; 3];
        for (slot, nb) in ngbs.iter(i) {
            let jij = coupling[arity * i + slot];
            let sj = s.get(nb);
            h[0] += jij * sj[0];
            h[1] += jij * sj[1];
            h[2] += jij * sj[2];
        }
        (h, -0.5 * dot(h, s.get(i)))
    });
}
