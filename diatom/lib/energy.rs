//! Closed-form energy estimates for the rigid rotor / harmonic oscillator
//! picture of the molecule.
//!
//! These are the textbook approximations shown alongside the numerical
//! spectrum; they ignore anharmonicity and rotation-vibration coupling.

use std::f64::consts::TAU;
use crate::{ constants::Molecule, params::Params };

/// Schematic spacing between electronic states.
pub const ELEC_GAP: f64 = 100.0;

/// Rigid-rotor energy `B l (l + 1)`.
pub fn rotational(l: u32, molecule: &Molecule) -> f64 {
    let l = f64::from(l);
    molecule.rot_const() * l * (l + 1.0)
}

/// Harmonic oscillator energy `(v + 1/2) ħ ω` with `ω = sqrt(k / μ)`.
pub fn vibrational(v: u32, k: f64, molecule: &Molecule) -> f64 {
    (f64::from(v) + 0.5) * molecule.hbar * molecule.omega(k)
}

/// Schematic electronic energy `n * ELEC_GAP`.
pub fn electronic(n: u8) -> f64 { f64::from(n) * ELEC_GAP }

/// Breakdown of the total energy into its three contributions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Energies {
    /// Rotational energy.
    pub rot: f64,
    /// Vibrational energy.
    pub vib: f64,
    /// Electronic energy.
    pub elec: f64,
    /// Sum of the above.
    pub total: f64,
}

impl Energies {
    /// Compute all contributions for a parameter snapshot.
    pub fn of(params: &Params, molecule: &Molecule) -> Self {
        let rot = rotational(params.l(), molecule);
        let vib = vibrational(params.v(), params.k(), molecule);
        let elec = electronic(params.n());
        Self { rot, vib, elec, total: rot + vib + elec }
    }
}

/// Classical phase-space orbit of a harmonic oscillator carrying the energy of
/// level `v`.
///
/// The orbit is the ellipse `x = A cos θ`, `p = -p_max sin θ` with
/// `A = sqrt(2 E / k)` and `p_max = μ ω A`, where `x` is the displacement from
/// equilibrium.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Orbit {
    /// Turning-point displacement.
    pub amplitude: f64,
    /// Largest momentum.
    pub p_max: f64,
}

impl Orbit {
    /// Compute the orbit for a parameter snapshot.
    pub fn of(params: &Params, molecule: &Molecule) -> Self {
        let k = params.k();
        let e = vibrational(params.v(), k, molecule);
        let amplitude = (2.0 * e / k).sqrt();
        let p_max = molecule.reduced_mass() * molecule.omega(k) * amplitude;
        Self { amplitude, p_max }
    }

    /// Point on the orbit at phase angle `theta`.
    pub fn point(&self, theta: f64) -> (f64, f64) {
        (self.amplitude * theta.cos(), -self.p_max * theta.sin())
    }

    /// `npoints + 1` evenly spaced points around the full orbit, closing the
    /// curve.
    pub fn trace(&self, npoints: usize) -> Vec<(f64, f64)> {
        let npoints = npoints.max(1);
        (0..=npoints)
            .map(|i| self.point(TAU * i as f64 / npoints as f64))
            .collect()
    }
}
