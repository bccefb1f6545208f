// src/params.rs
//
// Physical constants and the small parameter sets shared by the LLG and Monte
// Carlo kernels. Interaction strengths are passed to the field kernels
// directly; everything is already in the caller's units.

use serde::{Deserialize, Serialize};

/// Boltzmann constant (J/K).
pub const K_B: f64 = 1.380_650_5e-23;

/// Electron gyromagnetic ratio (rad / (s T)).
pub const GAMMA_E: f64 = 1.760_859_644e11;

/// How the LLG kernels pull |S| back towards 1 between normalisations.
///
/// The correction `c (1 - |S|²) S` is added after the torque terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NormCorrection {
    /// c = 6 |dS/dt| per site.
    #[default]
    Adaptive,
    /// Fixed c; `Fixed(0.0)` turns the correction off.
    Fixed(f64),
}

impl NormCorrection {
    #[inline]
    pub fn coefficient(self, dm_dt: [f64; 3]) -> f64 {
        match self {
            NormCorrection::Adaptive => 6.0 * crate::vec3::norm(dm_dt),
            NormCorrection::Fixed(c) => c,
        }
    }
}

/// Parameters common to the LLG right-hand-side family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlgParams {
    pub gamma: f64,
    /// false drops the S × H term (pure relaxation).
    pub do_precession: bool,
    pub norm_correction: NormCorrection,
}

impl Default for LlgParams {
    fn default() -> Self {
        Self {
            gamma: GAMMA_E,
            do_precession: true,
            norm_correction: NormCorrection::Adaptive,
        }
    }
}

/// Zhang–Li (current-in-plane) spin-transfer torque.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ZhangLi {
    /// Non-adiabaticity.
    pub beta: f64,
    /// Spin-drift velocity scale.
    pub u0: f64,
}

/// Couplings and temperature of a Monte Carlo sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct McParams {
    /// Isotropic nearest-neighbour exchange.
    pub j: f64,
    /// Bulk DMI strength along each bond.
    pub d: f64,
    /// Kelvin; the acceptance uses k_B T.
    pub temperature: f64,
}
