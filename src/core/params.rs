use serde::{Deserialize, Serialize};

/// Fit-stage settings suitable for config files and presets.
///
/// `Default` yields exactly the documented CLI defaults; the builder
/// copies these values into the processor parameter map without
/// re-deriving anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitParams {
    /// Lower bound of the iterative fit range.
    pub xmin: i64,
    /// Minimum entries per bin required to attempt a fit.
    pub min_stats: i64,
    /// Number of points used for the second-derivative estimate.
    pub n_points: i64,
    /// Histogram rebin factor.
    pub rebin: i64,
    /// `baseline<#><hybrid_name>` tokens selecting the channels to fit,
    /// in the order given on the command line.
    pub hybrids: Vec<String>,
    /// RMS threshold above which a channel is classified noisy.
    pub noisy: i64,
    /// RMS threshold below which a channel is classified dead.
    pub dead_rms: i64,
}

impl Default for FitParams {
    fn default() -> Self {
        Self {
            xmin: 50,
            min_stats: 8500,
            n_points: 3,
            rebin: 1,
            hybrids: Vec::new(),
            noisy: 400,
            dead_rms: 150,
        }
    }
}
