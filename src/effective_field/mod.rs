// src/effective_field/mod.rs
//
// Per-site field kernels. Every kernel has the same shape:
//
//   compute_*(spin, <geometry/couplings>, field, energy)
//
// and overwrites `field` (3N) and `energy` (N). Kernels never accumulate; the
// caller sums the interactions it wants into one effective field. A pinned
// site still acts on its neighbours, so no kernel looks at the pin mask.
//
// Fields are in the units of the couplings passed in (for exchange,
// H_i = Σ J S_j), and the per-site energies sum to the total energy.

pub mod anisotropy;
pub mod demag;
pub mod dmi;
pub mod exchange;
pub mod zeeman;

pub use anisotropy::compute_anisotropy_field;
pub use demag::compute_demag_full;
pub use dmi::{compute_bulk_dmi_field, compute_interfacial_dmi_field, interfacial_dmi_vectors};
pub use exchange::{compute_exchange_field, compute_exchange_field_spatial};
pub use zeeman::compute_zeeman_field;
