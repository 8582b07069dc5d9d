//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned when a grid or Hamiltonian is requested with invalid dimensions.
#[derive(Debug, Error)]
pub enum GridError {
    /// Fewer than two grid points were requested.
    #[error("grids must have at least 2 points; got {0}")]
    TooFewPoints(usize),

    /// The interval bounds are non-finite or not strictly increasing.
    #[error("grid interval must satisfy x_min < x_max with finite bounds; got [{0}, {1}]")]
    BadInterval(f64, f64),

    /// The left edge of a radial grid is not strictly positive.
    #[error("radial grids must start at x_min > 0; got {0}")]
    NonPositiveOrigin(f64),

    /// The grid spacing is not strictly positive.
    #[error("grid spacing must be greater than 0; got {0}")]
    BadSpacing(f64),
}

impl GridError {
    pub(crate) fn check_points(n: usize) -> Result<(), Self> {
        (n >= 2).then_some(()).ok_or(Self::TooFewPoints(n))
    }

    pub(crate) fn check_interval(x_min: f64, x_max: f64) -> Result<(), Self> {
        (x_min.is_finite() && x_max.is_finite() && x_min < x_max)
            .then_some(())
            .ok_or(Self::BadInterval(x_min, x_max))
    }

    pub(crate) fn check_origin(x_min: f64) -> Result<(), Self> {
        (x_min > 0.0).then_some(()).ok_or(Self::NonPositiveOrigin(x_min))
    }

    pub(crate) fn check_spacing(dx: f64) -> Result<(), Self> {
        (dx.is_finite() && dx > 0.0).then_some(()).ok_or(Self::BadSpacing(dx))
    }
}

/// Returned when a parameter update falls outside its allowed range.
#[derive(Debug, Error)]
pub enum ParamError {
    /// Rotational quantum number outside `0..=20`.
    #[error("rotational quantum number l must be in 0..=20; got {0}")]
    BadL(u32),

    /// Vibrational index outside `0..=10`.
    #[error("vibrational index v must be in 0..=10; got {0}")]
    BadV(u32),

    /// Bond stiffness outside `[0.5, 3.0]`.
    #[error("bond stiffness k must be in [0.5, 3.0]; got {0}")]
    BadK(f64),

    /// Electronic index other than 0, 1, or 2.
    #[error("electronic index n must be 0, 1, or 2; got {0}")]
    BadN(u8),
}

/// Returned from spatial wavefunction solver functions.
#[derive(Debug, Error)]
pub enum XError {
    /// Returned when a non-positive `hbar` value is encountered.
    #[error("hbar must be greater than 0; got {0}")]
    BadHbar(f64),

    /// Returned when a non-positive reduced mass is encountered.
    #[error("reduced mass must be greater than 0; got {0}")]
    BadMass(f64),

    /// Returned when a zero sweep cap is encountered.
    #[error("max_sweeps must be greater than 0; got {0}")]
    BadMaxSweeps(usize),

    /// Returned when a non-positive animation time step is encountered.
    #[error("time step must be greater than 0; got {0}")]
    BadTimeStep(f64),

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),

    /// [`GridError`]
    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    /// [`ParamError`]
    #[error("parameter error: {0}")]
    Param(#[from] ParamError),
}

impl XError {
    pub(crate) fn check_hbar(hbar: f64) -> Result<(), Self> {
        (hbar.is_finite() && hbar > 0.0).then_some(()).ok_or(Self::BadHbar(hbar))
    }

    pub(crate) fn check_mass(mu: f64) -> Result<(), Self> {
        (mu.is_finite() && mu > 0.0).then_some(()).ok_or(Self::BadMass(mu))
    }

    pub(crate) fn check_max_sweeps(max_sweeps: usize) -> Result<(), Self> {
        (max_sweeps != 0).then_some(()).ok_or(Self::BadMaxSweeps(max_sweeps))
    }

    pub(crate) fn check_time_step(dt: f64) -> Result<(), Self> {
        (dt.is_finite() && dt > 0.0).then_some(()).ok_or(Self::BadTimeStep(dt))
    }
}
