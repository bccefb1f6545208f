// src/grid.rs

/// Dense (nx, ny, nz) lattice shape with in-plane periodicity flags.
///
/// Used only by the paths that index sites by Cartesian offset (closed-form
/// energies, gradient fields, guiding center). Neighbour-list kernels never
/// look at this type. z is never periodic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid3D {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
    pub periodic_x: bool,
    pub periodic_y: bool,
}

impl Grid3D {
    /// Open boundaries in every direction.
    pub fn new(nx: usize, ny: usize, nz: usize) -> Self {
        Self {
            nx,
            ny,
            nz,
            periodic_x: false,
            periodic_y: false,
        }
    }

    pub fn with_periodicity(mut self, periodic_x: bool, periodic_y: bool) -> Self {
        self.periodic_x = periodic_x;
        self.periodic_y = periodic_y;
        self
    }

    /// Total number of sites.
    pub fn n_sites(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Flat site index, x fastest: i + nx * (j + ny * k).
    #[inline]
    pub fn idx(&self, i: usize, j: usize, k: usize) -> usize {
        debug_assert!(i < self.nx && j < self.ny && k < self.nz);
        i + self.nx * (j + self.ny * k)
    }
}
