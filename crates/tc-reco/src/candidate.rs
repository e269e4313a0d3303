//! Candidate and result records for the top-mass reconstruction.

use serde::{Deserialize, Serialize};
use tc_core::FourMomentum;

/// One jet-triplet assignment evaluated during the combinatorial scan.
///
/// Transient: only the minimum-chi-square candidate survives the scan, as
/// the kinematic part of [`RecoResult`].
#[derive(Debug, Clone, Copy)]
pub struct TopCandidate {
    /// W candidate four-momentum (sum of the two light jets).
    pub w_p4: FourMomentum,
    /// Top candidate four-momentum (W plus b-jet).
    pub top_p4: FourMomentum,
    /// W candidate invariant mass.
    pub w_mass: f64,
    /// Top candidate invariant mass.
    pub top_mass: f64,
    /// Chi-square distance to the reference masses.
    pub chi2: f64,
    /// Indices of the two light jets in the source collection, ascending.
    pub light_indices: (usize, usize),
    /// Index of the b-jet in the source collection.
    pub bjet_index: usize,
}

/// Per-event reconstruction outcome.
///
/// The kinematic fields always describe the minimum-chi-square candidate
/// when one exists; `passed` separately reports whether that candidate
/// satisfies the chi-square cut. Jet indices refer into the collection
/// passed to [`reconstruct`](crate::TopMassReconstructor::reconstruct) and
/// stay meaningful only as long as that collection is unchanged.
///
/// When no valid combination exists (fewer than two jets, no b-jets, or
/// only non-finite kinematics), the masses and chi-square are NaN, the
/// four-momenta are zero and the indices are `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoResult {
    /// Whether the best candidate satisfies the chi-square cut.
    pub passed: bool,
    /// Best-candidate top mass.
    pub top_mass: f64,
    /// Best-candidate W mass.
    pub w_mass: f64,
    /// Best-candidate chi-square.
    pub chi2: f64,
    /// Best-candidate top four-momentum.
    pub top_p4: FourMomentum,
    /// Best-candidate W four-momentum.
    pub w_p4: FourMomentum,
    /// Index of the selected b-jet in the source collection.
    pub bjet_index: Option<usize>,
    /// Indices of the selected light jets, ascending.
    pub light_indices: Option<(usize, usize)>,
    /// Whether the best-candidate top mass falls in the monitoring window.
    /// Monitoring information only, never part of the verdict.
    pub in_mass_window: bool,
    /// Number of jet-triplet combinations evaluated.
    pub n_combinations: u64,
}

impl RecoResult {
    /// The benign no-candidate outcome.
    pub(crate) fn no_candidate(n_combinations: u64) -> Self {
        Self {
            passed: false,
            top_mass: f64::NAN,
            w_mass: f64::NAN,
            chi2: f64::NAN,
            top_p4: FourMomentum::default(),
            w_p4: FourMomentum::default(),
            bjet_index: None,
            light_indices: None,
            in_mass_window: false,
            n_combinations,
        }
    }

    /// Whether the scan found any valid combination.
    pub fn has_candidate(&self) -> bool {
        self.bjet_index.is_some()
    }
}
