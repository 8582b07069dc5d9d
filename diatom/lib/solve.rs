//! Functions to compute solutions to the one-dimensional, time-independent
//! Schrödinger equation (TISE) for conservative potentials by direct
//! diagonalization of the finite-difference Hamiltonian.
//!
//! ```
//! use diatom::{ grid::Grid, potential::{ PotentialModel, Term }, solve::System };
//!
//! let grid = Grid::new(200, 0.13, 2.13).unwrap();
//! let model = PotentialModel::new().with(Term::Harmonic { k: 3.2, x0: 1.13 });
//! let sys = System::new(grid, &model);
//! let spec = sys.solve(1.0, 200.0).unwrap();
//! assert_eq!(spec.len(), 200);
//! // ħω / 2
//! let e0 = 0.5 * (3.2_f64 / 200.0).sqrt();
//! assert!((spec[0].e - e0).abs() < 1e-4);
//! ```

use ndarray as nd;
use crate::{
    Arr1,
    error::{ LengthError, XError },
    grid::Grid,
    hamiltonian::assemble,
    potential::PotentialModel,
    spectrum::{ collect, Spectrum },
    tql::eigh_tridiagonal,
    DEF_MAXSWEEPS,
};

pub type XResult<T> = Result<T, XError>;

/// Solver settings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Maximum number of QL sweeps per eigenvalue (default: `30`).
    pub max_sweeps: usize,
}

impl Default for Options {
    fn default() -> Self { Self { max_sweeps: DEF_MAXSWEEPS } }
}

/// Compute the full (grid resolution-limited) spectrum of
/// `-ħ²/2μ ∂²/∂x² + V(x)` for `V` sampled on a uniform grid of spacing `dx`.
///
/// Returns exactly `V.len()` eigenpairs, sorted by energy and normalized so
/// that `dx * Σ wf[i]² = 1`.
pub fn solve<S>(dx: f64, V: &Arr1<S>, hbar: f64, mu: f64)
    -> XResult<Spectrum>
where S: nd::Data<Elem = f64>
{
    solve_with(dx, V, hbar, mu, &Options::default())
}

/// Like [`solve`], but with explicit [`Options`].
///
/// An eigenvalue that fails to converge within `opts.max_sweeps` sweeps does
/// not cause an error; check [`Spectrum::convergence`] instead.
pub fn solve_with<S>(dx: f64, V: &Arr1<S>, hbar: f64, mu: f64, opts: &Options)
    -> XResult<Spectrum>
where S: nd::Data<Elem = f64>
{
    XError::check_max_sweeps(opts.max_sweeps)?;
    let H = assemble(dx, V, hbar, mu)?;
    let (d, z, report) = eigh_tridiagonal(H, opts.max_sweeps);
    if !report.is_converged() {
        log::warn!(
            "solve::solve_with: {} of {} eigenvalues hit the sweep cap",
            report.nonconverged.len(),
            d.len(),
        );
    }
    let pairs = collect(&d, &z, dx);
    Ok(Spectrum::new(pairs, dx, report))
}

/// Simple record to keep track of coordinate and potential arrays.
///
/// Arrays borrowed from this type are guaranteed to have the same length and to
/// be sampled on a coordinate grid with uniform spacing.
#[derive(Clone, Debug)]
pub struct System {
    // coordinate grid
    grid: Grid,
    // potential array
    V: nd::Array1<f64>,
}

impl System {
    /// Create a new `System` by sampling `model` on `grid`.
    pub fn new(grid: Grid, model: &PotentialModel) -> Self {
        let V = model.sample(&grid);
        Self { grid, V }
    }

    /// Create a new `System` from a grid and a pointwise potential function.
    pub fn new_fn<F>(grid: Grid, V: F) -> Self
    where F: FnMut(f64) -> f64
    {
        let V = grid.map(V);
        Self { grid, V }
    }

    /// Create a new `System` from a grid and a bare potential array.
    pub fn new_arrays(grid: Grid, V: nd::Array1<f64>) -> XResult<Self> {
        LengthError::check(grid.points(), &V)?;
        Ok(Self { grid, V })
    }

    /// Get a reference to the coordinate grid.
    pub fn get_grid(&self) -> &Grid { &self.grid }

    /// Get a reference to the coordinate array.
    pub fn get_x(&self) -> &nd::Array1<f64> { self.grid.points() }

    /// Get a reference to the potential array.
    pub fn get_V(&self) -> &nd::Array1<f64> { &self.V }

    /// Get the coordinate array grid spacing.
    pub fn get_dx(&self) -> f64 { self.grid.dx() }

    /// Get the length of the coordinate and potential arrays.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.grid.len() }

    /// Thin interface to [`solve`].
    pub fn solve(&self, hbar: f64, mu: f64) -> XResult<Spectrum> {
        solve(self.grid.dx(), &self.V, hbar, mu)
    }

    /// Thin interface to [`solve_with`].
    pub fn solve_with(&self, hbar: f64, mu: f64, opts: &Options)
        -> XResult<Spectrum>
    {
        solve_with(self.grid.dx(), &self.V, hbar, mu, opts)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use super::*;

    #[test]
    fn flat_box_levels() {
        // particle in a box of width L = (N + 1) dx with hard walls just past
        // the grid; the finite-difference levels are exact for this stencil:
        // E_j = 2 scale (1 - cos(j π / (N + 1)))
        let n = 50;
        let dx = 0.1;
        let V: nd::Array1<f64> = nd::Array1::zeros(n);
        let spec = solve(dx, &V, 1.0, 0.5).unwrap();
        let scale = 1.0 / (2.0 * 0.5 * dx * dx);
        spec.iter().enumerate()
            .for_each(|(j, pair)| {
                let theta = (j + 1) as f64 * std::f64::consts::PI / (n + 1) as f64;
                assert_abs_diff_eq!(
                    pair.e, 2.0 * scale * (1.0 - theta.cos()), epsilon = 1e-9);
            });
    }

    #[test]
    fn rejects_zero_sweep_cap() {
        let V: nd::Array1<f64> = nd::Array1::zeros(4);
        let opts = Options { max_sweeps: 0 };
        assert!(matches!(
            solve_with(0.1, &V, 1.0, 1.0, &opts),
            Err(XError::BadMaxSweeps(0)),
        ));
    }

    #[test]
    fn system_length_mismatch() {
        let grid = Grid::new(10, 0.5, 2.5).unwrap();
        let res = System::new_arrays(grid, nd::Array1::zeros(9));
        assert!(matches!(res, Err(XError::Length(LengthError(10, 9)))));
    }

    #[test]
    fn system_constructors_agree() {
        let grid = Grid::new(20, 0.5, 2.5).unwrap();
        let model = PotentialModel::new()
            .with(crate::potential::Term::Harmonic { k: 2.0, x0: 1.5 });
        let a = System::new(grid.clone(), &model);
        let b = System::new_fn(grid, |x| 0.5 * 2.0 * (x - 1.5).powi(2));
        assert_eq!(a.get_V(), b.get_V());
        assert_eq!(a.len(), 20);
    }
}
