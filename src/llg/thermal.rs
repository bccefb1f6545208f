// src/llg/thermal.rs
//
// Stochastic LLG for finite-temperature (domain-wall) runs.
//
// The thermal field is built from a Gaussian buffer supplied by the caller:
//
//   H_th,i = η_i sqrt( 2 α_i k_B T_i / (γ μ_s,i dt) )
//
// so unlike the other right-hand sides this one depends on the step size.
// The caller redraws η once per step (e.g. `SpinRng::gauss_random_vec`).

use crate::params::{LlgParams, K_B};
use crate::vec3::axpy;
use crate::vector_field::{fill_sites, Vec3View};

use super::{is_pinned, llg_torque, with_norm_correction};

/// Per-step thermal inputs.
#[derive(Debug, Clone, Copy)]
pub struct ThermalBath<'a> {
    /// Temperature per site (K).
    pub temperature: &'a [f64],
    /// 1 / μ_s per site.
    pub mu_s_inv: &'a [f64],
    /// Standard normal samples, one 3-vector per site.
    pub noise: &'a [f64],
    /// Integrator step size.
    pub dt: f64,
}

impl ThermalBath<'_> {
    /// Thermal field amplitude at site `i`.
    #[inline]
    pub fn amplitude(&self, i: usize, alpha: f64, gamma: f64) -> f64 {
        (2.0 * alpha * K_B * self.temperature[i] * self.mu_s_inv[i] / (gamma * self.dt)).sqrt()
    }
}

/// LLG with thermal fluctuations and per-site moment scaling.
pub fn llg_rhs_thermal(
    dm_dt: &mut [f64],
    spin: &[f64],
    h: &[f64],
    alpha: &[f64],
    pins: &[i32],
    bath: &ThermalBath,
    params: &LlgParams,
) {
    let m = Vec3View::new(spin);
    let h = Vec3View::new(h);
    let eta = Vec3View::new(bath.noise);
    debug_assert_eq!(eta.len(), m.len());
    debug_assert_eq!(bath.temperature.len(), m.len());
    debug_assert_eq!(bath.mu_s_inv.len(), m.len());

    fill_sites(dm_dt, |i| {
        if is_pinned(pins, i) {
            return [0.0; 3];
        }
        let mi = m.get(i);
        let k = bath.amplitude(i, alpha[i], params.gamma);
        let h_total = axpy(h.get(i), k, eta.get(i));
        let dm = llg_torque(mi, h_total, alpha[i], params.gamma, params.do_precession);
        with_norm_correction(dm, mi, params.norm_correction)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llg::llg_rhs;
    use crate::random::SpinRng;

    fn inputs(n: usize, seed: u64) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let mut rng = SpinRng::new(seed);
        let mut spin = vec![0.0; 3 * n];
        let mut h = vec![0.0; 3 * n];
        let mut eta = vec![0.0; 3 * n];
        rng.random_spin_uniform(&mut spin);
        rng.gauss_random_vec(&mut h);
        rng.gauss_random_vec(&mut eta);
        (spin, h, eta)
    }

    #[test]
    fn zero_temperature_reduces_to_base_llg() {
        let n = 16;
        let (spin, h, eta) = inputs(n, 1);
        let alpha = vec![0.1; n];
        let pins = vec![0; n];
        let params = LlgParams::default();
        let bath = ThermalBath {
            temperature: &vec![0.0; n],
            mu_s_inv: &vec![1.0 / 9.274e-24; n],
            noise: &eta,
            dt: 1e-15,
        };

        let mut thermal = vec![0.0; 3 * n];
        llg_rhs_thermal(&mut thermal, &spin, &h, &alpha, &pins, &bath, &params);
        let mut base = vec![0.0; 3 * n];
        llg_rhs(&mut base, &spin, &h, &alpha, &pins, &params);
        assert_eq!(thermal, base);
    }

    #[test]
    fn noise_amplitude_scales_with_sqrt_temperature_over_dt() {
        let temperature = [100.0, 400.0];
        let mu_s_inv = [1.0, 1.0];
        let noise = [0.0; 6];
        let bath = ThermalBath {
            temperature: &temperature,
            mu_s_inv: &mu_s_inv,
            noise: &noise,
            dt: 1e-3,
        };
        let a0 = bath.amplitude(0, 0.5, 1.0);
        let a1 = bath.amplitude(1, 0.5, 1.0);
        assert!((a1 / a0 - 2.0).abs() < 1e-12);

        let coarse = ThermalBath { dt: 4e-3, ..bath };
        assert!((a0 / coarse.amplitude(0, 0.5, 1.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn hot_pinned_sites_stay_fixed() {
        let n = 4;
        let (spin, h, eta) = inputs(n, 2);
        let bath = ThermalBath {
            temperature: &[300.0; 4],
            mu_s_inv: &[1e23; 4],
            noise: &eta,
            dt: 1e-14,
        };
        let mut dm = vec![0.0; 3 * n];
        llg_rhs_thermal(&mut dm, &spin, &h, &[0.5; 4], &[1, 0, 1, 0], &bath, &LlgParams::default());
        assert_eq!(&dm[0..3], &[0.0; 3]);
        assert_eq!(&dm[6..9], &[0.0; 3]);
        assert!(dm[3..6].iter().any(|&x| x != 0.0));
    }
}
