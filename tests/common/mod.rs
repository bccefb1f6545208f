// tests/common/mod.rs
//
// Shared helpers: a reference cubic neighbour-array builder (the real one
// lives with the mesh code, outside this crate) and analytic test textures.

#![allow(dead_code)]

use llg_atomistic::grid::Grid3D;

/// Cubic neighbour array in `-x, +x, -y, +y, -z, +z` order, -1 at open
/// edges, wrapped where the grid is periodic. z never wraps.
pub fn cubic_neighbours(grid: &Grid3D) -> Vec<i32> {
    let Grid3D { nx, ny, nz, .. } = *grid;
    let mut ids = vec![-1i32; 6 * grid.n_sites()];

    let step = |c: usize, n: usize, periodic: bool, up: bool| -> Option<usize> {
        if up {
            if c + 1 < n {
                Some(c + 1)
            } else if periodic {
                Some(0)
            } else {
                None
            }
        } else if c > 0 {
            Some(c - 1)
        } else if periodic {
            Some(n - 1)
        } else {
            None
        }
    };

    for k in 0..nz {
        for j in 0..ny {
            for i in 0..nx {
                let id = grid.idx(i, j, k);
                let slots = [
                    step(i, nx, grid.periodic_x, false).map(|x| grid.idx(x, j, k)),
                    step(i, nx, grid.periodic_x, true).map(|x| grid.idx(x, j, k)),
                    step(j, ny, grid.periodic_y, false).map(|y| grid.idx(i, y, k)),
                    step(j, ny, grid.periodic_y, true).map(|y| grid.idx(i, y, k)),
                    step(k, nz, false, false).map(|z| grid.idx(i, j, z)),
                    step(k, nz, false, true).map(|z| grid.idx(i, j, z)),
                ];
                for (s, nb) in slots.into_iter().enumerate() {
                    if let Some(nb) = nb {
                        ids[6 * id + s] = nb as i32;
                    }
                }
            }
        }
    }
    ids
}

/// Skyrmion profile θ(r) = 2 atan(exp((r0 - r)/Δ)), core along -z, centred
/// on lattice point (cx, cy) of every layer. `helicity` 0 = Néel.
pub fn skyrmion(grid: &Grid3D, cx: f64, cy: f64, r0: f64, delta: f64, helicity: f64) -> Vec<f64> {
    let mut spin = vec![0.0; 3 * grid.n_sites()];
    for k in 0..grid.nz {
        for j in 0..grid.ny {
            for i in 0..grid.nx {
                let dx = i as f64 - cx;
                let dy = j as f64 - cy;
                let r = (dx * dx + dy * dy).sqrt();
                let theta = 2.0 * ((r0 - r) / delta).exp().atan();
                let phi = dy.atan2(dx) + helicity;
                let id = grid.idx(i, j, k);
                spin[3 * id] = theta.sin() * phi.cos();
                spin[3 * id + 1] = theta.sin() * phi.sin();
                spin[3 * id + 2] = theta.cos();
            }
        }
    }
    spin
}

/// Flip every z component (reverses the skyrmion polarity and its charge).
pub fn flip_z(spin: &mut [f64]) {
    for s in spin.chunks_exact_mut(3) {
        s[2] = -s[2];
    }
}

pub fn random_spins(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = llg_atomistic::random::SpinRng::new(seed);
    let mut spin = vec![0.0; 3 * n];
    rng.random_spin_uniform(&mut spin);
    spin
}
