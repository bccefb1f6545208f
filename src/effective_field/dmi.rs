// src/effective_field/dmi.rs
//
// Dzyaloshinskii–Moriya interaction on a neighbour list.
//
// Hamiltonian (each pair <i,j> once):
//   E = Σ_<i,j> D_ij · (S_i × S_j)
// Field at site i:
//   H_i = Σ_j D_ij × S_j
// with the usual ½ on the per-site energy.
//
// The two flavours differ only in where D_ij comes from:
// - bulk:        D_ij = D r̂_ij, r̂_ij the bond direction of the slot
// - interfacial: D_ij = D (r̂_ij × ẑ), supplied per slot by the caller

use crate::neighbours::{Neighbours, CUBIC_ARITY, CUBIC_BOND_DIRECTIONS};
use crate::vec3::{axpy, cross, dot, norm};
use crate::vector_field::{fill_sites_with_energy, Vec3View};

/// Bulk DMI on a cubic lattice.
///
/// `d` holds one strength per (site, slot), laid out like the neighbour
/// array, so the strength can vary across the sample or between bonds.
pub fn compute_bulk_dmi_field(
    spin: &[f64],
    ngbs: &Neighbours,
    d: &[f64],
    field: &mut [f64],
    energy: &mut [f64],
) {
    debug_assert_eq!(ngbs.arity(), CUBIC_ARITY, "bulk DMI needs the cubic slot order");
    debug_assert_eq!(d.len(), ngbs.arity() * ngbs.n_sites());
    let s = Vec3View::new(spin);

    fill_sites_with_energy(field, energy, |i| {
        let mut h = [0.0; 3];
        for (slot, nb) in ngbs.iter(i) {
            let dij = d[CUBIC_ARITY * i + slot];
            h = axpy(h, dij, cross(CUBIC_BOND_DIRECTIONS[slot], s.get(nb)));
        }
        (h, -0.5 * dot(h, s.get(i)))
    });
}

/// Interfacial DMI for any lattice.
///
/// `dmi_vectors[slot]` is the DMI unit vector of that neighbour slot; its
/// length fixes the arity read from `ngbs`. `d` is a single strength.
pub fn compute_interfacial_dmi_field(
    spin: &[f64],
    ngbs: &Neighbours,
    d: f64,
    dmi_vectors: &[[f64; 3]],
    field: &mut [f64],
    energy: &mut [f64],
) {
    debug_assert_eq!(dmi_vectors.len(), ngbs.arity());
    let s = Vec3View::new(spin);

    fill_sites_with_energy(field, energy, |i| {
        let mut h = [0.0; 3];
        for (slot, nb) in ngbs.iter(i) {
            h = axpy(h, d, cross(dmi_vectors[slot], s.get(nb)));
        }
        (h, -0.5 * dot(h, s.get(i)))
    });
}

/// DMI unit vectors r̂ × ẑ for the given bond directions.
///
/// Out-of-plane bonds (parallel to z) get the zero vector, so an
/// interfacial film never couples across layers.
pub fn interfacial_dmi_vectors(bond_directions: &[[f64; 3]]) -> Vec<[f64; 3]> {
    const Z: [f64; 3] = [0.0, 0.0, 1.0];
    bond_directions
        .iter()
        .map(|&r| {
            let v = cross(r, Z);
            let n = norm(v);
            if n == 0.0 {
                [0.0; 3]
            } else {
                [v[0] / n, v[1] / n, v[2] / n]
            }
        })
        .collect()
}
