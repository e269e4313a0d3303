//! Chi-square selection of the hadronic-top jet triplet.

use crate::candidate::{RecoResult, TopCandidate};
use crate::config::RecoConfig;
use tc_core::{btagged_indices, Error, Jet, Result};

/// Reconstructs the hadronic top decay `t -> W b -> (j j) b` for one event.
///
/// Stateless per call: the only state is the immutable configuration, so a
/// single reconstructor can serve independent events from multiple threads.
#[derive(Debug, Clone)]
pub struct TopMassReconstructor {
    config: RecoConfig,
}

impl TopMassReconstructor {
    /// Build a reconstructor, rejecting invalid configuration up front.
    pub fn new(config: RecoConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &RecoConfig {
        &self.config
    }

    /// Reconstruct the best top candidate from `jets` and the b-tagged
    /// subset given as indices into `jets`.
    ///
    /// Light jets are drawn from the full collection (b-tagged jets
    /// included); the b-jet of a candidate is drawn from `bjets` and never
    /// coincides with either light jet. Fewer than two jets or an empty
    /// `bjets` is a normal outcome and yields the no-candidate result, not
    /// an error. The only error is a `bjets` entry that does not index into
    /// `jets`.
    pub fn reconstruct(&self, jets: &[Jet], bjets: &[usize]) -> Result<RecoResult> {
        if let Some(&bad) = bjets.iter().find(|&&b| b >= jets.len()) {
            return Err(Error::Validation(format!(
                "b-jet index out of range: {bad} >= {}",
                jets.len()
            )));
        }
        Ok(self.scan(jets, bjets))
    }

    /// Reconstruct using the jets' own b-tag flags as the b-jet selection.
    pub fn reconstruct_tagged(&self, jets: &[Jet]) -> Result<RecoResult> {
        self.reconstruct(jets, &btagged_indices(jets))
    }

    /// Exhaustive scan over unordered light-jet pairs times b-jets.
    ///
    /// Iteration order is fixed (outer jet index ascending, inner jet index
    /// ascending over later indices, b-jet list order ascending) and ties
    /// keep the first-encountered candidate, so repeated calls select
    /// bit-identical results.
    fn scan(&self, jets: &[Jet], bjets: &[usize]) -> RecoResult {
        let mut best: Option<TopCandidate> = None;
        let mut n_combinations = 0u64;

        for i in 0..jets.len() {
            for j in (i + 1)..jets.len() {
                let w_p4 = jets[i].p4 + jets[j].p4;
                let w_mass = w_p4.mass();
                for &b in bjets {
                    if b == i || b == j {
                        continue;
                    }
                    n_combinations += 1;
                    let top_p4 = w_p4 + jets[b].p4;
                    let top_mass = top_p4.mass();
                    let chi2 = self.chi2(top_mass, w_mass);
                    if !chi2.is_finite() {
                        continue;
                    }
                    if best.is_none_or(|c| chi2 < c.chi2) {
                        best = Some(TopCandidate {
                            w_p4,
                            top_p4,
                            w_mass,
                            top_mass,
                            chi2,
                            light_indices: (i, j),
                            bjet_index: b,
                        });
                    }
                }
            }
        }

        match best {
            Some(candidate) => {
                let passed = candidate.chi2 <= self.config.chi2_cut;
                log::debug!(
                    "best candidate: m_top={:.2} m_W={:.2} chi2={:.3} passed={} ({} combinations)",
                    candidate.top_mass,
                    candidate.w_mass,
                    candidate.chi2,
                    passed,
                    n_combinations
                );
                RecoResult {
                    passed,
                    top_mass: candidate.top_mass,
                    w_mass: candidate.w_mass,
                    chi2: candidate.chi2,
                    top_p4: candidate.top_p4,
                    w_p4: candidate.w_p4,
                    bjet_index: Some(candidate.bjet_index),
                    light_indices: Some(candidate.light_indices),
                    in_mass_window: candidate.top_mass >= self.config.top_mass_low
                        && candidate.top_mass <= self.config.top_mass_high,
                    n_combinations,
                }
            }
            None => {
                log::debug!(
                    "no top candidate: {} jets, {} b-jets, {} combinations",
                    jets.len(),
                    bjets.len(),
                    n_combinations
                );
                RecoResult::no_candidate(n_combinations)
            }
        }
    }

    fn chi2(&self, top_mass: f64, w_mass: f64) -> f64 {
        let zt = (top_mass - self.config.top_mass_ref) / self.config.sigma_top;
        let zw = (w_mass - self.config.w_mass_ref) / self.config.sigma_w;
        zt * zt + zw * zw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tc_core::FourMomentum;

    fn jet(pt: f64, eta: f64, phi: f64, m: f64, btag: bool) -> Jet {
        Jet::new(FourMomentum::from_pt_eta_phi_m(pt, eta, phi, m), btag)
    }

    fn reconstructor(chi2_cut: f64) -> TopMassReconstructor {
        let config = RecoConfig {
            chi2_cut,
            top_mass_ref: 173.0,
            sigma_top: 20.0,
            w_mass_ref: 80.0,
            sigma_w: 15.0,
            ..RecoConfig::default()
        };
        TopMassReconstructor::new(config).unwrap()
    }

    #[test]
    fn test_too_few_jets_is_no_candidate() {
        let reco = reconstructor(5.0);
        let jets = vec![jet(50.0, 0.0, 0.0, 0.0, true)];
        let result = reco.reconstruct(&jets, &[0]).unwrap();
        assert!(!result.passed);
        assert!(!result.has_candidate());
        assert!(result.top_mass.is_nan());
        assert_eq!(result.n_combinations, 0);
    }

    #[test]
    fn test_no_bjets_is_no_candidate() {
        let reco = reconstructor(5.0);
        let jets = vec![jet(50.0, 0.0, 0.0, 0.0, false), jet(40.0, 0.0, 1.0, 0.0, false)];
        let result = reco.reconstruct(&jets, &[]).unwrap();
        assert!(!result.has_candidate());
        assert_eq!(result.n_combinations, 0);
    }

    #[test]
    fn test_two_jets_sharing_the_only_bjet_is_no_candidate() {
        // The b-jet is one of the two jets, so no valid triplet exists.
        let reco = reconstructor(5.0);
        let jets = vec![jet(50.0, 0.0, 0.0, 0.0, true), jet(40.0, 0.0, 1.0, 0.0, false)];
        let result = reco.reconstruct(&jets, &[0]).unwrap();
        assert!(!result.has_candidate());
        assert_eq!(result.n_combinations, 0);
    }

    #[test]
    fn test_single_combination_kinematics() {
        // jets = [j1(50,0,0,0), j2(40,0,1,0)], bjets = [b(60,0,2,4.8)]:
        // exactly one combination.
        let reco = reconstructor(5.0);
        let jets = vec![
            jet(50.0, 0.0, 0.0, 0.0, false),
            jet(40.0, 0.0, 1.0, 0.0, false),
            jet(60.0, 0.0, 2.0, 4.8, true),
        ];
        let result = reco.reconstruct(&jets, &[2]).unwrap();
        assert_eq!(result.n_combinations, 1);
        assert_eq!(result.light_indices, Some((0, 1)));
        assert_eq!(result.bjet_index, Some(2));
        assert_relative_eq!(result.w_mass, 42.8811, max_relative = 1e-4);
        assert_relative_eq!(result.top_mass, 112.2487, max_relative = 1e-4);
        assert_relative_eq!(result.chi2, 15.3504, max_relative = 1e-3);
        // chi2 ~ 15.35: fails a cut of 5, passes a cut of 16.
        assert!(!result.passed);
        let loose = reconstructor(16.0).reconstruct(&jets, &[2]).unwrap();
        assert!(loose.passed);
        assert_eq!(loose.chi2.to_bits(), result.chi2.to_bits());
    }

    #[test]
    fn test_w_mass_matches_pair_mass() {
        let reco = reconstructor(1e9);
        let jets = vec![
            jet(55.0, 0.2, 0.3, 0.0, false),
            jet(45.0, -0.5, 1.4, 0.0, false),
            jet(70.0, 0.8, -2.0, 4.8, true),
        ];
        let result = reco.reconstruct(&jets, &[2]).unwrap();
        let (i, j) = result.light_indices.unwrap();
        assert_eq!(result.w_mass.to_bits(), (jets[i].p4 + jets[j].p4).mass().to_bits());
        assert_eq!(
            result.top_mass.to_bits(),
            (jets[i].p4 + jets[j].p4 + jets[2].p4).mass().to_bits()
        );
    }

    #[test]
    fn test_tie_break_keeps_first_encountered() {
        // Jets B and C are kinematically identical, so (A,B,D) and (A,C,D)
        // give bit-equal chi2. The ascending-index scan must keep (A,B,D).
        let a = jet(50.0, 0.0, 0.0, 0.0, false);
        let b = jet(40.0, 0.0, 1.0, 0.0, false);
        let c = jet(40.0, 0.0, 1.0, 0.0, false);
        let d = jet(60.0, 0.5, 2.0, 4.8, true);
        let reco = reconstructor(5.0);
        let result = reco.reconstruct(&[a, b, c, d], &[3]).unwrap();
        assert_eq!(result.light_indices, Some((0, 1)));
        assert_eq!(result.bjet_index, Some(3));
    }

    #[test]
    fn test_btagged_light_jets_are_allowed() {
        // Light jets may themselves be b-tagged; only identity with the
        // chosen b-jet is excluded.
        let jets = vec![
            jet(50.0, 0.0, 0.0, 0.0, true),
            jet(40.0, 0.0, 1.0, 0.0, true),
            jet(60.0, 0.0, 2.0, 4.8, true),
        ];
        let reco = reconstructor(1e9);
        let result = reco.reconstruct_tagged(&jets).unwrap();
        // 3 pairs x 3 b-jets minus the 6 overlapping assignments.
        assert_eq!(result.n_combinations, 3);
        assert!(result.has_candidate());
    }

    #[test]
    fn test_out_of_range_bjet_index_is_rejected() {
        let reco = reconstructor(5.0);
        let jets = vec![jet(50.0, 0.0, 0.0, 0.0, false), jet(40.0, 0.0, 1.0, 0.0, false)];
        assert!(matches!(reco.reconstruct(&jets, &[2]), Err(Error::Validation(_))));
    }

    #[test]
    fn test_non_finite_jets_never_win() {
        let mut jets = vec![
            jet(50.0, 0.0, 0.0, 0.0, false),
            jet(40.0, 0.0, 1.0, 0.0, false),
            jet(60.0, 0.0, 2.0, 4.8, true),
        ];
        jets.push(Jet::new(FourMomentum::new(f64::NAN, 0.0, 0.0, 0.0), false));
        let reco = reconstructor(1e9);
        let result = reco.reconstruct(&jets, &[2]).unwrap();
        assert_eq!(result.light_indices, Some((0, 1)));

        // An event with only non-finite kinematics degrades to no-candidate.
        let broken = vec![
            Jet::new(FourMomentum::new(f64::NAN, 0.0, 0.0, 0.0), false),
            Jet::new(FourMomentum::new(0.0, f64::INFINITY, 0.0, f64::INFINITY), false),
            Jet::new(FourMomentum::new(1.0, 1.0, f64::NAN, 2.0), true),
        ];
        let result = reco.reconstruct(&broken, &[2]).unwrap();
        assert!(!result.has_candidate());
        assert_eq!(result.n_combinations, 1);
    }

    #[test]
    fn test_mass_window_flag_is_monitoring_only() {
        let jets = vec![
            jet(50.0, 0.0, 0.0, 0.0, false),
            jet(40.0, 0.0, 1.0, 0.0, false),
            jet(60.0, 0.0, 2.0, 4.8, true),
        ];
        // Window excludes the ~112 GeV candidate; the verdict is untouched.
        let config = RecoConfig {
            chi2_cut: 16.0,
            top_mass_ref: 173.0,
            sigma_top: 20.0,
            w_mass_ref: 80.0,
            sigma_w: 15.0,
            top_mass_low: 150.0,
            top_mass_high: 200.0,
        };
        let reco = TopMassReconstructor::new(config).unwrap();
        let result = reco.reconstruct(&jets, &[2]).unwrap();
        assert!(result.passed);
        assert!(!result.in_mass_window);
    }

    #[test]
    fn test_invalid_configuration_fails_construction() {
        let config = RecoConfig { sigma_top: f64::NAN, ..RecoConfig::default() };
        assert!(matches!(TopMassReconstructor::new(config), Err(Error::Configuration(_))));
    }
}
