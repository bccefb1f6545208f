// src/energy.rs
//
// Closed-form total energies on a dense grid.
//
// These walk (nx, ny, nz) directly instead of going through a neighbour array
// and count each bond exactly once (to +x, +y, +z). They are an independent
// check on the neighbour-list kernels: on the same lattice and periodicity the
// totals must agree with the summed per-site energies.
//
// x and y wrap only when the grid says so; z never wraps.

use crate::grid::Grid3D;
use crate::vec3::{cross, dot};
use crate::vector_field::Vec3View;

/// Visit every bond (site, +neighbour, axis) once. axis 0 = x, 1 = y, 2 = z.
fn for_each_bond<F>(grid: &Grid3D, mut f: F)
where
    F: FnMut(usize, usize, usize),
{
    let Grid3D { nx, ny, nz, .. } = *grid;
    for k in 0..nz {
        for j in 0..ny {
            for i in 0..nx {
                let id = grid.idx(i, j, k);

                if i + 1 < nx || grid.periodic_x {
                    f(id, grid.idx((i + 1) % nx, j, k), 0);
                }
                if j + 1 < ny || grid.periodic_y {
                    f(id, grid.idx(i, (j + 1) % ny, k), 1);
                }
                if k + 1 < nz {
                    f(id, grid.idx(i, j, k + 1), 2);
                }
            }
        }
    }
}

/// E = -Σ_bonds (Jx Sx_i Sx_j + Jy Sy_i Sy_j + Jz Sz_i Sz_j)
pub fn total_exchange_energy(spin: &[f64], j: [f64; 3], grid: &Grid3D) -> f64 {
    let s = Vec3View::new(spin);
    debug_assert_eq!(s.len(), grid.n_sites());

    let mut energy = 0.0;
    for_each_bond(grid, |a, b, _| {
        let sa = s.get(a);
        let sb = s.get(b);
        energy += j[0] * sa[0] * sb[0] + j[1] * sa[1] * sb[1] + j[2] * sa[2] * sb[2];
    });
    -energy
}

/// E = Σ_bonds D ê_axis · (S_i × S_j), with j the +axis neighbour of i.
pub fn total_dmi_energy(spin: &[f64], d: f64, grid: &Grid3D) -> f64 {
    let s = Vec3View::new(spin);
    debug_assert_eq!(s.len(), grid.n_sites());

    let mut energy = 0.0;
    for_each_bond(grid, |a, b, axis| {
        // ê_axis · v is just component `axis` of v.
        energy += d * cross(s.get(a), s.get(b))[axis];
    });
    energy
}

/// Plain sum of a per-site energy buffer.
pub fn sum_energy(energy: &[f64]) -> f64 {
    energy.iter().sum()
}
