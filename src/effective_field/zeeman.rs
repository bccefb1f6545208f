// src/effective_field/zeeman.rs

use crate::vec3::dot;
use crate::vector_field::{fill_sites_with_energy, Vec3View};

/// Copy the applied field `h` (3N, already scaled by the moment) into `field`
/// and write the single-site energy E_i = -h_i · S_i.
pub fn compute_zeeman_field(spin: &[f64], h: &[f64], field: &mut [f64], energy: &mut [f64]) {
    let s = Vec3View::new(spin);
    let h = Vec3View::new(h);
    debug_assert_eq!(h.len(), s.len());

    fill_sites_with_energy(field, energy, |i| {
        let hi = h.get(i);
        (hi, -dot(hi, s.get(i)))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligned_spin_has_negative_energy() {
        let spin = [0.0, 0.0, 1.0, 0.0, 0.0, -1.0];
        let h = [0.0, 0.0, 2.0, 0.0, 0.0, 2.0];
        let mut field = vec![0.0; 6];
        let mut energy = vec![0.0; 2];
        compute_zeeman_field(&spin, &h, &mut field, &mut energy);
        assert_eq!(field, h.to_vec());
        assert_eq!(energy, vec![-2.0, 2.0]);
    }
}
