//! Reconstructed jets.
//!
//! A [`Jet`] is the unit of input for the top reconstruction: a
//! four-momentum plus the b-tagging decision made upstream. Collections are
//! plain slices; b-jet selections are index lists into the jet slice, so
//! jet identity is index equality and the references stay valid exactly as
//! long as the source collection does.

use crate::p4::FourMomentum;
use serde::{Deserialize, Serialize};

/// A reconstructed jet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Jet {
    /// Jet four-momentum.
    pub p4: FourMomentum,
    /// Whether the jet passed the b-tagging working point.
    pub btag: bool,
    /// Raw b-tag discriminator value, when the producer supplies one.
    #[serde(default)]
    pub discriminator: Option<f64>,
}

impl Jet {
    /// Create a jet from its four-momentum and b-tag decision.
    pub fn new(p4: FourMomentum, btag: bool) -> Self {
        Self { p4, btag, discriminator: None }
    }

    /// Attach the raw b-tag discriminator value.
    pub fn with_discriminator(mut self, value: f64) -> Self {
        self.discriminator = Some(value);
        self
    }

    /// Transverse momentum.
    pub fn pt(&self) -> f64 {
        self.p4.pt()
    }

    /// Invariant mass.
    pub fn mass(&self) -> f64 {
        self.p4.mass()
    }
}

/// Indices of the b-tagged jets in a collection, in collection order.
pub fn btagged_indices(jets: &[Jet]) -> Vec<usize> {
    jets.iter().enumerate().filter(|(_, j)| j.btag).map(|(i, _)| i).collect()
}
