// src/vector_field.rs
//
// Flat 3-vector buffers and the per-site loop every kernel goes through.
//
// All site data lives in caller-owned `[x0, y0, z0, x1, y1, z1, ...]` slices.
// `Vec3View` replaces raw `3*i` arithmetic on the read side; `fill_sites*`
// hand each site its own output chunk, so no two sites ever write the same
// location and the loop can be split across threads freely.

use rayon::prelude::*;

use crate::config::use_parallel;

/// Read-only view over an interleaved 3-vector buffer.
#[derive(Debug, Clone, Copy)]
pub struct Vec3View<'a> {
    data: &'a [f64],
}

impl<'a> Vec3View<'a> {
    #[inline]
    pub fn new(data: &'a [f64]) -> Self {
        debug_assert_eq!(data.len() % 3, 0, "vector buffer length not a multiple of 3");
        Self { data }
    }

    /// Number of 3-vectors (sites).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize) -> [f64; 3] {
        let c = &self.data[3 * i..3 * i + 3];
        [c[0], c[1], c[2]]
    }

    /// Vector at `i`, or zero when `i` is `None`.
    #[inline]
    pub fn get_or_zero(&self, i: Option<usize>) -> [f64; 3] {
        i.map_or([0.0; 3], |i| self.get(i))
    }

    #[inline]
    pub fn as_slice(&self) -> &'a [f64] {
        self.data
    }
}

#[inline]
pub fn set3(chunk: &mut [f64], v: [f64; 3]) {
    chunk[0] = v[0];
    chunk[1] = v[1];
    chunk[2] = v[2];
}

/// Overwrite every site of `out` (length 3N) with `f(site)`.
pub fn fill_sites<F>(out: &mut [f64], f: F)
where
    F: Fn(usize) -> [f64; 3] + Sync + Send,
{
    debug_assert_eq!(out.len() % 3, 0);
    if use_parallel(out.len() / 3) {
        out.par_chunks_mut(3)
            .enumerate()
            .for_each(|(i, c)| set3(c, f(i)));
    } else {
        out.chunks_mut(3).enumerate().for_each(|(i, c)| set3(c, f(i)));
    }
}

/// Overwrite `field` (3N) and `energy` (N) with `f(site) = (field_i, energy_i)`.
pub fn fill_sites_with_energy<F>(field: &mut [f64], energy: &mut [f64], f: F)
where
    F: Fn(usize) -> ([f64; 3], f64) + Sync + Send,
{
    debug_assert_eq!(field.len(), 3 * energy.len(), "field/energy buffers disagree");
    if use_parallel(energy.len()) {
        field
            .par_chunks_mut(3)
            .zip_eq(energy.par_iter_mut())
            .enumerate()
            .for_each(|(i, (c, e))| {
                let (h, en) = f(i);
                set3(c, h);
                *e = en;
            });
    } else {
        for (i, (c, e)) in field.chunks_mut(3).zip(energy.iter_mut()).enumerate() {
            let (h, en) = f(i);
            set3(c, h);
            *e = en;
        }
    }
}
