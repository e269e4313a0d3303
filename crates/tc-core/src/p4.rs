//! Minkowski four-momentum arithmetic.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Energy-momentum four-vector `(px, py, pz, E)` in GeV.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FourMomentum {
    /// Momentum x component.
    pub px: f64,
    /// Momentum y component.
    pub py: f64,
    /// Momentum z component (beam axis).
    pub pz: f64,
    /// Energy.
    pub e: f64,
}

impl FourMomentum {
    /// Create from Cartesian components.
    pub fn new(px: f64, py: f64, pz: f64, e: f64) -> Self {
        Self { px, py, pz, e }
    }

    /// Create from collider coordinates `(pT, eta, phi, m)`.
    ///
    /// The energy is derived as `sqrt(|p|^2 + m^2)`.
    pub fn from_pt_eta_phi_m(pt: f64, eta: f64, phi: f64, m: f64) -> Self {
        let px = pt * phi.cos();
        let py = pt * phi.sin();
        let pz = pt * eta.sinh();
        let e = (px * px + py * py + pz * pz + m * m).sqrt();
        Self { px, py, pz, e }
    }

    /// Squared three-momentum `|p|^2`.
    pub fn p2(&self) -> f64 {
        self.px * self.px + self.py * self.py + self.pz * self.pz
    }

    /// Three-momentum magnitude.
    pub fn p(&self) -> f64 {
        self.p2().sqrt()
    }

    /// Transverse momentum.
    pub fn pt(&self) -> f64 {
        self.px.hypot(self.py)
    }

    /// Pseudorapidity `asinh(pz / pT)`.
    ///
    /// Not finite for momenta along the beam axis (`pT = 0`).
    pub fn eta(&self) -> f64 {
        (self.pz / self.pt()).asinh()
    }

    /// Azimuthal angle in `(-pi, pi]`.
    pub fn phi(&self) -> f64 {
        self.py.atan2(self.px)
    }

    /// Squared invariant mass `E^2 - |p|^2`.
    ///
    /// May come out slightly negative from floating-point roundoff on
    /// massless inputs.
    pub fn mass2(&self) -> f64 {
        self.e * self.e - self.p2()
    }

    /// Invariant mass. Roundoff-negative `mass2` clamps to zero.
    pub fn mass(&self) -> f64 {
        let m2 = self.mass2();
        if m2 > 0.0 {
            m2.sqrt()
        } else {
            0.0
        }
    }

    /// Whether all four components are finite.
    pub fn is_finite(&self) -> bool {
        self.px.is_finite() && self.py.is_finite() && self.pz.is_finite() && self.e.is_finite()
    }
}

impl Add for FourMomentum {
    type Output = FourMomentum;

    fn add(self, rhs: FourMomentum) -> FourMomentum {
        FourMomentum {
            px: self.px + rhs.px,
            py: self.py + rhs.py,
            pz: self.pz + rhs.pz,
            e: self.e + rhs.e,
        }
    }
}

impl AddAssign for FourMomentum {
    fn add_assign(&mut self, rhs: FourMomentum) {
        self.px += rhs.px;
        self.py += rhs.py;
        self.pz += rhs.pz;
        self.e += rhs.e;
    }
}

impl Sum for FourMomentum {
    fn sum<I: Iterator<Item = FourMomentum>>(iter: I) -> FourMomentum {
        iter.fold(FourMomentum::default(), |acc, p| acc + p)
    }
}
