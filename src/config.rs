// src/config.rs
//
// Runtime knobs. There is no configuration file: the only setting is when the
// per-site loops switch from a serial pass to rayon. Both paths produce
// identical output, so the threshold is purely a performance choice.

use std::sync::OnceLock;

use tracing::trace;

static PAR_THRESHOLD: OnceLock<usize> = OnceLock::new();
pub const DEFAULT_PAR_THRESHOLD: usize = 4096;

/// Site count at or above which kernels run in parallel.
///
/// Read once from `LLG_ATOMISTIC_PAR_THRESHOLD`; falls back to
/// [`DEFAULT_PAR_THRESHOLD`] when unset or unparsable.
pub fn par_threshold() -> usize {
    *PAR_THRESHOLD.get_or_init(|| {
        let threshold = std::env::var("LLG_ATOMISTIC_PAR_THRESHOLD")
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_PAR_THRESHOLD);
        trace!(threshold, "per-site parallel threshold");
        threshold
    })
}

#[inline]
pub fn use_parallel(n_sites: usize) -> bool {
    n_sites >= par_threshold()
}
