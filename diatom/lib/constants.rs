#![allow(non_upper_case_globals)]

//! Physical constants and simulation configuration in reduced units.
//!
//! Units are chosen so that *ħ* = 1, masses are relative atomic masses, and
//! lengths are of order one ångström. Energies are then in an effective unit
//! set by these choices; nothing here refers to SI values.

use crate::{
    error::XError,
    grid::Grid,
    DEF_MAXSWEEPS,
};

/// reduced Planck constant
pub const hbar: f64 = 1.0;

/// relative atomic mass of carbon
pub const mC: f64 = 12.0;

/// relative atomic mass of oxygen
pub const mO: f64 = 16.0;

/// equilibrium bond length of CO (≈ ångström)
pub const r_eq: f64 = 1.13;

/// A two-atom molecule described by its nuclear masses and equilibrium bond
/// length.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Molecule {
    /// Mass of the first atom.
    pub m1: f64,
    /// Mass of the second atom.
    pub m2: f64,
    /// Equilibrium bond length.
    pub r_eq: f64,
    /// Reduced Planck constant in the working unit system.
    pub hbar: f64,
}

impl Default for Molecule {
    fn default() -> Self { Self::carbon_monoxide() }
}

impl Molecule {
    /// Carbon monoxide in reduced units.
    pub fn carbon_monoxide() -> Self {
        Self { m1: mC, m2: mO, r_eq, hbar }
    }

    /// Reduced mass `m1 m2 / (m1 + m2)`.
    pub fn reduced_mass(&self) -> f64 {
        self.m1 * self.m2 / (self.m1 + self.m2)
    }

    /// Rigid-rotor rotational constant.
    ///
    /// ```text
    /// B = ħ² / (2 μ r_eq²)
    /// ```
    pub fn rot_const(&self) -> f64 {
        self.hbar.powi(2) / (2.0 * self.reduced_mass() * self.r_eq.powi(2))
    }

    /// Harmonic angular frequency `sqrt(k / μ)` for bond stiffness `k`.
    pub fn omega(&self, k: f64) -> f64 {
        (k / self.reduced_mass()).sqrt()
    }
}

/// Sampling and integration settings shared by every recompute.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Config {
    /// Number of grid points.
    pub grid_points: usize,
    /// Smallest bond length sampled; must be positive.
    pub x_min: f64,
    /// Largest bond length sampled.
    pub x_max: f64,
    /// Animation time step.
    pub time_step: f64,
    /// Cap on QL sweeps per eigenvalue.
    pub max_sweeps: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_points: 200,
            x_min: 0.5,
            x_max: 2.5,
            time_step: 0.01,
            max_sweeps: DEF_MAXSWEEPS,
        }
    }
}

impl Config {
    /// Check every field, returning the first violated precondition.
    pub fn validate(&self) -> Result<(), XError> {
        Grid::check(self.grid_points, self.x_min, self.x_max)?;
        XError::check_time_step(self.time_step)?;
        XError::check_max_sweeps(self.max_sweeps)?;
        Ok(())
    }

    /// Build the radial grid described by `self`.
    pub fn grid(&self) -> Result<Grid, XError> {
        Ok(Grid::new(self.grid_points, self.x_min, self.x_max)?)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use super::*;

    #[test]
    fn co_reduced_mass() {
        let co = Molecule::carbon_monoxide();
        assert_relative_eq!(co.reduced_mass(), 48.0 / 7.0, max_relative = 1e-14);
        assert_relative_eq!(
            co.rot_const(),
            1.0 / (2.0 * 48.0 / 7.0 * 1.13 * 1.13),
            max_relative = 1e-14,
        );
    }

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        let grid = config.grid().unwrap();
        assert_eq!(grid.len(), 200);
    }

    #[test]
    fn rejects_bad_config() {
        let config = Config { x_min: 0.0, ..Config::default() };
        assert!(matches!(config.validate(), Err(XError::Grid(_))));
        let config = Config { time_step: -1.0, ..Config::default() };
        assert!(matches!(config.validate(), Err(XError::BadTimeStep(_))));
        let config = Config { max_sweeps: 0, ..Config::default() };
        assert!(matches!(config.validate(), Err(XError::BadMaxSweeps(0))));
    }
}
