//! # tc-core
//!
//! Shared types for the topchi workspace.
//!
//! This crate provides:
//! - Minkowski four-momentum arithmetic ([`FourMomentum`]).
//! - The reconstructed-jet record ([`Jet`]) consumed by `tc-reco`.
//! - The workspace error type ([`Error`]) and [`Result`] alias.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod jet;
pub mod p4;

pub use error::{Error, Result};
pub use jet::{btagged_indices, Jet};
pub use p4::FourMomentum;
