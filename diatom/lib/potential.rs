//! Pointwise potential energy terms and their superposition.
//!
//! ```
//! use diatom::{ grid::Grid, potential::{ PotentialModel, Term } };
//!
//! let grid = Grid::new(100, 0.5, 2.5).unwrap();
//! let model = PotentialModel::new()
//!     .with(Term::Harmonic { k: 1.0, x0: 1.13 })
//!     .with(Term::Centrifugal { l: 2, mu: 48.0 / 7.0, hbar: 1.0 });
//! let V = model.sample(&grid);
//! assert_eq!(V.len(), grid.len());
//! assert!(V.iter().all(|Vk| *Vk > 0.0));
//! ```

use ndarray as nd;
use crate::{ constants::Molecule, grid::Grid };

/// Harmonic well `0.5 k (x - x0)²`.
pub fn harmonic(x: f64, k: f64, x0: f64) -> f64 {
    0.5 * k * (x - x0).powi(2)
}

/// Morse well `D_e (1 - exp(-a (x - x0)))²`, zero at `x0`, approaching `D_e`
/// as `x → ∞`.
pub fn morse(x: f64, De: f64, a: f64, x0: f64) -> f64 {
    De * (1.0 - (-a * (x - x0)).exp()).powi(2)
}

/// Centrifugal barrier `ħ² l (l + 1) / (2 μ x²)`.
///
/// Identically zero for `l = 0`; diverges at `x = 0` otherwise.
pub fn centrifugal(x: f64, l: u32, mu: f64, hbar: f64) -> f64 {
    if l == 0 { return 0.0; }
    let l = f64::from(l);
    hbar.powi(2) * l * (l + 1.0) / (2.0 * mu * x.powi(2))
}

/// A single additive contribution to the effective potential.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Term {
    /// [`harmonic`]
    Harmonic {
        /// Stiffness.
        k: f64,
        /// Equilibrium position.
        x0: f64,
    },
    /// [`morse`]
    Morse {
        /// Well depth.
        De: f64,
        /// Width parameter.
        a: f64,
        /// Equilibrium position.
        x0: f64,
    },
    /// [`centrifugal`]
    Centrifugal {
        /// Rotational quantum number.
        l: u32,
        /// Reduced mass.
        mu: f64,
        /// Reduced Planck constant.
        hbar: f64,
    },
}

impl Term {
    /// Evaluate the term at a single point.
    pub fn eval(&self, x: f64) -> f64 {
        match *self {
            Self::Harmonic { k, x0 } => harmonic(x, k, x0),
            Self::Morse { De, a, x0 } => morse(x, De, a, x0),
            Self::Centrifugal { l, mu, hbar } => centrifugal(x, l, mu, hbar),
        }
    }

    /// Return `true` if `self` is `Centrifugal`.
    pub fn is_centrifugal(&self) -> bool {
        matches!(self, Self::Centrifugal { .. })
    }

    /// Morse well for electronic state `n` of `molecule`.
    ///
    /// Higher states are shallower, wider, and shifted outward:
    /// | `n` | `D_e` | `a` | `x0` |
    /// |:---:|:-----:|:---:|:----:|
    /// | 0 | 10.0 | 1.5 | `r_eq` |
    /// | 1 | 7.0 | 1.2 | `r_eq + 0.3` |
    /// | ≥2 | 4.0 | 1.0 | `r_eq + 0.6` |
    pub fn electronic(n: u8, molecule: &Molecule) -> Self {
        let r_eq = molecule.r_eq;
        match n {
            0 => Self::Morse { De: 10.0, a: 1.5, x0: r_eq },
            1 => Self::Morse { De: 7.0, a: 1.2, x0: r_eq + 0.3 },
            _ => Self::Morse { De: 4.0, a: 1.0, x0: r_eq + 0.6 },
        }
    }
}

/// Sum of zero or more [`Term`]s, evaluated independently at each point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PotentialModel {
    terms: Vec<Term>,
}

impl PotentialModel {
    /// Create an empty (identically zero) model.
    pub fn new() -> Self { Self::default() }

    /// Add a term, returning the extended model.
    pub fn with(mut self, term: Term) -> Self {
        self.push(term);
        self
    }

    /// Add a term in place.
    pub fn push(&mut self, term: Term) { self.terms.push(term); }

    /// Get the terms making up the model.
    pub fn terms(&self) -> &[Term] { &self.terms }

    /// Return `true` if any term diverges at the origin.
    pub fn is_singular(&self) -> bool {
        self.terms.iter()
            .any(|term| matches!(term, Term::Centrifugal { l, .. } if *l > 0))
    }

    /// Evaluate the total potential at a single point.
    pub fn eval(&self, x: f64) -> f64 {
        self.terms.iter().map(|term| term.eval(x)).sum()
    }

    /// Sample the total potential on every point of `grid`.
    pub fn sample(&self, grid: &Grid) -> nd::Array1<f64> {
        grid.map(|x| self.eval(x))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use super::*;

    #[test]
    fn term_values() {
        assert_abs_diff_eq!(harmonic(3.0, 2.0, 1.0), 4.0);
        assert_abs_diff_eq!(morse(1.13, 10.0, 1.5, 1.13), 0.0);
        assert_abs_diff_eq!(
            morse(2.0, 10.0, 1.5, 1.0),
            10.0 * (1.0 - (-1.5_f64).exp()).powi(2),
            epsilon = 1e-14,
        );
        assert_abs_diff_eq!(centrifugal(2.0, 1, 0.5, 1.0), 0.5);
        assert_eq!(centrifugal(0.0, 0, 0.5, 1.0), 0.0);
    }

    #[test]
    fn morse_approaches_depth() {
        assert_abs_diff_eq!(morse(50.0, 7.0, 1.2, 1.43), 7.0, epsilon = 1e-12);
    }

    #[test]
    fn superposition_is_pointwise_sum() {
        let model = PotentialModel::new()
            .with(Term::Morse { De: 10.0, a: 1.5, x0: 1.13 })
            .with(Term::Centrifugal { l: 3, mu: 2.0, hbar: 1.0 });
        let x = 0.9;
        assert_abs_diff_eq!(
            model.eval(x),
            morse(x, 10.0, 1.5, 1.13) + 12.0 / (4.0 * 0.81),
            epsilon = 1e-13,
        );
        assert!(model.is_singular());
        assert!(!PotentialModel::new().is_singular());
        assert_eq!(PotentialModel::new().eval(1.0), 0.0);
    }

    #[test]
    fn electronic_presets() {
        let co = Molecule::carbon_monoxide();
        assert_eq!(
            Term::electronic(1, &co),
            Term::Morse { De: 7.0, a: 1.2, x0: co.r_eq + 0.3 },
        );
        // each excited well is shallower than the one below it
        let depth = |n| match Term::electronic(n, &co) {
            Term::Morse { De, .. } => De,
            _ => unreachable!(),
        };
        assert!(depth(0) > depth(1) && depth(1) > depth(2));
    }
}
