//! Batched per-event reconstruction.
//!
//! The reconstructor is stateless per call, so independent events can be
//! scanned in parallel. This module provides the rayon entry point; results
//! preserve input order.

use crate::candidate::RecoResult;
use crate::reconstructor::TopMassReconstructor;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tc_core::{Jet, Result};

/// Jet inputs for one event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventJets {
    /// All selected jets in the event.
    pub jets: Vec<Jet>,
    /// Indices into `jets` of the b-tagged subset.
    pub bjets: Vec<usize>,
}

impl EventJets {
    /// Build the per-event input, deriving the b-jet indices from the jets'
    /// own b-tag flags.
    pub fn from_tagged(jets: Vec<Jet>) -> Self {
        let bjets = tc_core::btagged_indices(&jets);
        Self { jets, bjets }
    }
}

impl TopMassReconstructor {
    /// Reconstruct a batch of independent events in parallel.
    ///
    /// Fails on the first event whose b-jet indices do not index into its
    /// jet collection; degenerate events still produce their benign
    /// no-candidate results.
    pub fn reconstruct_batch(&self, events: &[EventJets]) -> Result<Vec<RecoResult>> {
        events.par_iter().map(|event| self.reconstruct(&event.jets, &event.bjets)).collect()
    }
}
