//! Reconstruction configuration.

use serde::{Deserialize, Serialize};
use tc_core::{Error, Result};

fn default_top_mass_low() -> f64 {
    100.0
}

fn default_top_mass_high() -> f64 {
    300.0
}

fn default_chi2_cut() -> f64 {
    5.0
}

fn default_top_mass_ref() -> f64 {
    172.9
}

fn default_sigma_top() -> f64 {
    17.8
}

fn default_w_mass_ref() -> f64 {
    80.4
}

fn default_sigma_w() -> f64 {
    11.0
}

/// Configuration for [`TopMassReconstructor`](crate::TopMassReconstructor).
///
/// Immutable for the reconstructor's lifetime. All masses and resolutions
/// are in GeV.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoConfig {
    /// Lower edge of the monitoring top-mass window. Never gates acceptance.
    #[serde(default = "default_top_mass_low")]
    pub top_mass_low: f64,

    /// Upper edge of the monitoring top-mass window. Never gates acceptance.
    #[serde(default = "default_top_mass_high")]
    pub top_mass_high: f64,

    /// Maximum chi-square for the best candidate to count as passed.
    #[serde(default = "default_chi2_cut")]
    pub chi2_cut: f64,

    /// Reference top mass entering the chi-square.
    #[serde(default = "default_top_mass_ref")]
    pub top_mass_ref: f64,

    /// Top-mass resolution normalizing the top term, must be finite and > 0.
    #[serde(default = "default_sigma_top")]
    pub sigma_top: f64,

    /// Reference W mass entering the chi-square.
    #[serde(default = "default_w_mass_ref")]
    pub w_mass_ref: f64,

    /// W-mass resolution normalizing the W term, must be finite and > 0.
    #[serde(default = "default_sigma_w")]
    pub sigma_w: f64,
}

impl Default for RecoConfig {
    fn default() -> Self {
        Self {
            top_mass_low: default_top_mass_low(),
            top_mass_high: default_top_mass_high(),
            chi2_cut: default_chi2_cut(),
            top_mass_ref: default_top_mass_ref(),
            sigma_top: default_sigma_top(),
            w_mass_ref: default_w_mass_ref(),
            sigma_w: default_sigma_w(),
        }
    }
}

impl RecoConfig {
    /// Parse and validate a configuration from a JSON document.
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: RecoConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that indicate a programming or config mistake.
    pub fn validate(&self) -> Result<()> {
        if !self.sigma_top.is_finite() || self.sigma_top <= 0.0 {
            return Err(Error::Configuration(format!(
                "sigma_top must be finite and > 0, got {}",
                self.sigma_top
            )));
        }
        if !self.sigma_w.is_finite() || self.sigma_w <= 0.0 {
            return Err(Error::Configuration(format!(
                "sigma_w must be finite and > 0, got {}",
                self.sigma_w
            )));
        }
        if !self.top_mass_ref.is_finite() || self.top_mass_ref <= 0.0 {
            return Err(Error::Configuration(format!(
                "top_mass_ref must be finite and > 0, got {}",
                self.top_mass_ref
            )));
        }
        if !self.w_mass_ref.is_finite() || self.w_mass_ref <= 0.0 {
            return Err(Error::Configuration(format!(
                "w_mass_ref must be finite and > 0, got {}",
                self.w_mass_ref
            )));
        }
        if !self.chi2_cut.is_finite() || self.chi2_cut < 0.0 {
            return Err(Error::Configuration(format!(
                "chi2_cut must be finite and >= 0, got {}",
                self.chi2_cut
            )));
        }
        if !self.top_mass_low.is_finite()
            || !self.top_mass_high.is_finite()
            || self.top_mass_low > self.top_mass_high
        {
            return Err(Error::Configuration(format!(
                "invalid top-mass window: expected low <= high, got ({}, {})",
                self.top_mass_low, self.top_mass_high
            )));
        }
        Ok(())
    }
}
