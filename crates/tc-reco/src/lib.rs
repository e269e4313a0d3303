//! # tc-reco
//!
//! Hadronic top-quark reconstruction by chi-square minimization.
//!
//! This crate provides:
//! - A configurable [`TopMassReconstructor`] that scans jet-triplet
//!   assignments (two light jets forming a W candidate plus one b-jet) and
//!   keeps the combination closest to the reference W and top masses.
//! - Per-event [`RecoResult`] records separating the pass/fail verdict from
//!   the always-populated best-candidate kinematics.
//! - A rayon-parallel batch entry point for independent events.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod batch;
pub mod candidate;
pub mod config;
pub mod reconstructor;

pub use batch::EventJets;
pub use candidate::{RecoResult, TopCandidate};
pub use config::RecoConfig;
pub use reconstructor::TopMassReconstructor;
