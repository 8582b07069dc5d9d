//! Animation state for the classical picture of a vibrating, rotating
//! molecule.
//!
//! The state is a plain value advanced by [`Motion::step`]; a renderer reads a
//! copy each frame and never shares it with the numerical solver.

use crate::params::Params;

/// Equilibrium bond length used for display.
pub const R_DISPLAY: f64 = 3.0;

/// Display angular frequency per unit `sqrt(k)`, per millisecond.
const OMEGA_PER_ROOT_K: f64 = 0.005;

/// Display amplitude per unit `sqrt(v + 1/2)`.
const AMPLITUDE_PER_ROOT_V: f64 = 0.2;

/// Rotation per frame per unit `l`, at 60 frames per second.
const ROT_PER_L: f64 = 0.02;

/// Displayed rotation and bond length of the molecule at one instant.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Motion {
    /// Accumulated rotation about the viewing axis (radians).
    pub rotation_angle: f64,
    /// Accumulated vibration phase (radians).
    pub vibration_phase: f64,
    /// Instantaneous bond length.
    pub r_current: f64,
}

impl Default for Motion {
    fn default() -> Self {
        Self { rotation_angle: 0.0, vibration_phase: 0.0, r_current: R_DISPLAY }
    }
}

impl Motion {
    /// Advance by `dt` seconds under `params`, returning the new state.
    pub fn step(self, params: &Params, dt: f64) -> Self {
        let omega = params.k().sqrt() * OMEGA_PER_ROOT_K;
        let amplitude = AMPLITUDE_PER_ROOT_V * (f64::from(params.v()) + 0.5).sqrt();
        let vibration_phase = self.vibration_phase + omega * dt * 1000.0;
        let r_current = R_DISPLAY + amplitude * vibration_phase.sin();
        let rotation_angle
            = self.rotation_angle + ROT_PER_L * f64::from(params.l()) * 60.0 * dt;
        Self { rotation_angle, vibration_phase, r_current }
    }

    /// Apply [`Self::step`] `nsteps` times with a fixed `dt`.
    pub fn advance(self, params: &Params, dt: f64, nsteps: usize) -> Self {
        (0..nsteps).fold(self, |state, _| state.step(params, dt))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use crate::params::Change;
    use super::*;

    #[test]
    fn nonrotating_molecule_does_not_turn() {
        let p = Params::default();
        let m = Motion::default().advance(&p, 0.01, 100);
        assert_eq!(m.rotation_angle, 0.0);
        assert_abs_diff_eq!(m.vibration_phase, 0.005 * 1000.0, epsilon = 1e-10);
    }

    #[test]
    fn single_step() {
        let p = Params::new(2, 0, 1.0, 0).unwrap();
        let m = Motion::default().step(&p, 0.1);
        assert_abs_diff_eq!(m.vibration_phase, 0.5, epsilon = 1e-15);
        assert_abs_diff_eq!(m.rotation_angle, 0.02 * 2.0 * 6.0, epsilon = 1e-15);
        assert_abs_diff_eq!(
            m.r_current, 3.0 + 0.2 * 0.5_f64.sqrt() * 0.5_f64.sin(), epsilon = 1e-15);
    }

    #[test]
    fn amplitude_bounds_bond_length() {
        let p = Params::default().with(Change::V(10)).unwrap();
        let amp = 0.2 * 10.5_f64.sqrt();
        let mut m = Motion::default();
        for _ in 0..500 {
            m = m.step(&p, 0.01);
            assert!((m.r_current - R_DISPLAY).abs() <= amp + 1e-12);
        }
    }
}
