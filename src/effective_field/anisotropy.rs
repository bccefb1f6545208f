// src/effective_field/anisotropy.rs

use crate::vec3::{dot, scale};
use crate::vector_field::{fill_sites_with_energy, Vec3View};

/// Uniaxial anisotropy with per-site strength and axis.
///
/// For E_i = -Ku_i (S_i · u_i)^2:
///   H_i = 2 Ku_i (S_i · u_i) u_i
///
/// `ku` has one entry per site, `axis` one unit vector per site (3N).
pub fn compute_anisotropy_field(
    spin: &[f64],
    ku: &[f64],
    axis: &[f64],
    field: &mut [f64],
    energy: &mut [f64],
) {
    let s = Vec3View::new(spin);
    let u = Vec3View::new(axis);
    debug_assert_eq!(ku.len(), s.len());
    debug_assert_eq!(u.len(), s.len());

    fill_sites_with_energy(field, energy, |i| {
        let ui = u.get(i);
        let m_u = dot(s.get(i), ui);
        (scale(ui, 2.0 * ku[i] * m_u), -ku[i] * m_u * m_u)
    });
}
