// src/topological.rs
//
// Topological diagnostics for single-layer (x-y) spin textures.
//
// Discrete skyrmion number ("finite spin chirality"). Around site i:
//
//                  X  (+y)
//                  |
//       (-x) X-----O-----X (+x)
//                  |
//                  X  (-y)
//
// two triangles are used, (i, -x, -y) and (i, +x, +y):
//
//   q_i = [ S_i · (S_-x × S_-y) + S_i · (S_+x × S_+y) ] / 8π
//
// Summed over the lattice every plaquette is covered by exactly two such
// triangles, and for a smooth texture Σ q_i → ±1 per isolated skyrmion.

use std::f64::consts::PI;

use crate::grid::Grid3D;
use crate::neighbours::{Direction, NeighbourSkip, Neighbours};
use crate::vec3::{scale, sub, triple};
use crate::vector_field::{fill_sites, Vec3View};

/// Per-site charge density into `charge` (one entry per site of the layer);
/// returns the total skyrmion number.
///
/// Absent neighbours contribute a zero vector, so edge triangles vanish
/// rather than wrap. `skip` picks the absent-neighbour rule; use
/// `NeighbourSkip::Negative` unless reproducing results that ignored site 0.
pub fn skyrmion_number(
    spin: &[f64],
    ngbs: &Neighbours,
    skip: NeighbourSkip,
    charge: &mut [f64],
) -> f64 {
    let s = Vec3View::new(spin);
    debug_assert!(s.len() >= charge.len());
    debug_assert!(ngbs.n_sites() >= charge.len());

    let nb = |i: usize, d: Direction| s.get_or_zero(ngbs.get_with(i, d.slot(), skip));

    for (i, q) in charge.iter_mut().enumerate() {
        let si = s.get(i);
        let lower = triple(si, nb(i, Direction::MinusX), nb(i, Direction::MinusY));
        let upper = triple(si, nb(i, Direction::PlusX), nb(i, Direction::PlusY));
        *q = (lower + upper) / (8.0 * PI);
    }
    charge.iter().sum()
}

/// First derivatives ∂S/∂x and ∂S/∂y in lattice units, (S₊ - S₋)/2, on every
/// layer. Both in-plane directions wrap unconditionally, whatever the grid's
/// periodicity flags say.
pub fn compute_px_py(spin: &[f64], grid: &Grid3D, px: &mut [f64], py: &mut [f64]) {
    let s = Vec3View::new(spin);
    debug_assert_eq!(s.len(), grid.n_sites());
    let Grid3D { nx, ny, .. } = *grid;

    let coords = |id: usize| (id % nx, (id / nx) % ny, id / (nx * ny));

    fill_sites(px, |id| {
        let (i, j, k) = coords(id);
        let plus = s.get(grid.idx((i + 1) % nx, j, k));
        let minus = s.get(grid.idx((i + nx - 1) % nx, j, k));
        scale(sub(plus, minus), 0.5)
    });
    fill_sites(py, |id| {
        let (i, j, k) = coords(id);
        let plus = s.get(grid.idx(i, (j + 1) % ny, k));
        let minus = s.get(grid.idx(i, (j + ny - 1) % ny, k));
        scale(sub(plus, minus), 0.5)
    });
}

/// Chirality-weighted centroid (Rx, Ry) of layer k = 0, in lattice indices.
///
/// Uses the same two triangles as [`skyrmion_number`] but indexes the dense
/// grid directly and never wraps. With zero net charge the result is
/// NaN or infinite; callers must check the charge first.
pub fn guiding_center(spin: &[f64], grid: &Grid3D) -> [f64; 2] {
    let s = Vec3View::new(spin);
    debug_assert!(s.len() >= grid.nx * grid.ny);
    let Grid3D { nx, ny, .. } = *grid;

    let at = |i: usize, j: usize| s.get(grid.idx(i, j, 0));
    let (mut sum, mut rx, mut ry) = (0.0, 0.0, 0.0);

    for j in 0..ny {
        for i in 0..nx {
            let si = at(i, j);

            let left = if i > 0 { at(i - 1, j) } else { [0.0; 3] };
            let down = if j > 0 { at(i, j - 1) } else { [0.0; 3] };
            let right = if i + 1 < nx { at(i + 1, j) } else { [0.0; 3] };
            let up = if j + 1 < ny { at(i, j + 1) } else { [0.0; 3] };

            let q = triple(si, left, down) + triple(si, right, up);
            sum += q;
            rx += i as f64 * q;
            ry += j as f64 * q;
        }
    }

    [rx / sum, ry / sum]
}
