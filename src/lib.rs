// src/lib.rs
//
// Per-site kernels for atomistic spin lattices: effective fields and
// energies, LLG right-hand sides, topological diagnostics and Monte Carlo.
// The caller owns every buffer; kernels read spins and neighbour arrays and
// overwrite the output slices they are handed.

pub mod config;
pub mod effective_field;
pub mod energy;
pub mod grid;
pub mod llg;
pub mod monte_carlo;
pub mod neighbours;
pub mod params;
pub mod random;
pub mod topological;
pub mod vec3;
pub mod vector_field;
