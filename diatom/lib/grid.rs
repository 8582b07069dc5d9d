//! Uniform one-dimensional sampling grids.

use ndarray as nd;
use crate::error::GridError;

/// Ordered, uniformly spaced set of sample points.
///
/// Grids built by [`Grid::new`] are guaranteed to have at least two points,
/// strictly positive spacing, and a strictly positive left edge, so that a
/// centrifugal term `~ 1/x²` is finite everywhere on the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    // sample points
    x: nd::Array1<f64>,
    // spacing
    dx: f64,
}

impl Grid {
    pub(crate) fn check(n: usize, x_min: f64, x_max: f64)
        -> Result<(), GridError>
    {
        GridError::check_points(n)?;
        GridError::check_interval(x_min, x_max)?;
        GridError::check_origin(x_min)?;
        Ok(())
    }

    /// Create a radial grid of `n` points spanning `[x_min, x_max]`
    /// inclusively.
    ///
    /// Point `i` is `x_min + i * dx` with `dx = (x_max - x_min) / (n - 1)`.
    pub fn new(n: usize, x_min: f64, x_max: f64) -> Result<Self, GridError> {
        Self::check(n, x_min, x_max)?;
        Ok(Self::build(n, x_min, x_max))
    }

    /// Like [`Self::new`], but allow the grid to extend through the origin.
    ///
    /// Use this only for potentials without a centrifugal term.
    pub fn new_unbounded(n: usize, x_min: f64, x_max: f64)
        -> Result<Self, GridError>
    {
        GridError::check_points(n)?;
        GridError::check_interval(x_min, x_max)?;
        Ok(Self::build(n, x_min, x_max))
    }

    fn build(n: usize, x_min: f64, x_max: f64) -> Self {
        let dx = (x_max - x_min) / (n - 1) as f64;
        let x: nd::Array1<f64>
            = (0..n).map(|i| x_min + i as f64 * dx).collect();
        Self { x, dx }
    }

    /// Get a reference to the sample points.
    pub fn points(&self) -> &nd::Array1<f64> { &self.x }

    /// Get the grid spacing.
    pub fn dx(&self) -> f64 { self.dx }

    /// Get the number of sample points.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.x.len() }

    /// Get the first sample point.
    pub fn x_min(&self) -> f64 { self.x[0] }

    /// Get the last sample point.
    pub fn x_max(&self) -> f64 { self.x[self.x.len() - 1] }

    /// Evaluate `f` at every sample point.
    pub fn map<F>(&self, f: F) -> nd::Array1<f64>
    where F: FnMut(f64) -> f64
    {
        self.x.mapv(f)
    }
}
