//! Finite-difference discretization of the one-dimensional Hamiltonian.
//!
//! The central-difference stencil for the kinetic operator couples only
//! nearest neighbors, so the Hamiltonian is symmetric tridiagonal and is stored
//! implicitly as its diagonal and first off-diagonal.

use ndarray as nd;
use crate::{
    Arr1,
    error::{ GridError, LengthError, XError },
};

pub type HResult<T> = Result<T, XError>;

/// Symmetric tridiagonal matrix.
///
/// `e[i]` couples rows `i` and `i + 1`; the last element of `e` is always zero.
#[derive(Clone, Debug, PartialEq)]
pub struct Tridiagonal {
    /// Diagonal.
    pub d: nd::Array1<f64>,
    /// Off-diagonal, padded with a trailing zero.
    pub e: nd::Array1<f64>,
}

impl Tridiagonal {
    /// Create from a diagonal and an off-diagonal of equal length.
    ///
    /// The last element of `e` is overwritten with zero.
    pub fn new(d: nd::Array1<f64>, mut e: nd::Array1<f64>)
        -> Result<Self, LengthError>
    {
        LengthError::check(&d, &e)?;
        let n = e.len();
        if n > 0 { e[n - 1] = 0.0; }
        Ok(Self { d, e })
    }

    /// Get the matrix dimension.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.d.len() }

    /// Return the dense `N × N` form of the matrix.
    pub fn to_dense(&self) -> nd::Array2<f64> {
        let n = self.len();
        let mut H: nd::Array2<f64> = nd::Array2::from_diag(&self.d);
        if n < 2 { return H; }
        let off = self.e.slice(nd::s![0..n - 1]);
        H.slice_mut(nd::s![1..n, 0..n - 1]).diag_mut().assign(&off);
        H.slice_mut(nd::s![0..n - 1, 1..n]).diag_mut().assign(&off);
        H
    }

    /// Compute the matrix-vector product `H q`.
    ///
    /// *Panics if `q` does not have length `N`*.
    pub fn apply<S>(&self, q: &Arr1<S>) -> nd::Array1<f64>
    where S: nd::Data<Elem = f64>
    {
        let n = self.len();
        assert_eq!(q.len(), n);
        let mut Hq: nd::Array1<f64> = &self.d * q;
        for i in 0..n.saturating_sub(1) {
            Hq[i] += self.e[i] * q[i + 1];
            Hq[i + 1] += self.e[i] * q[i];
        }
        Hq
    }
}

/// Assemble the Hamiltonian `-ħ²/2μ ∂²/∂x² + V(x)` on a grid of spacing `dx`.
///
/// With `scale = ħ² / (2 μ dx²)`:
/// ```text
/// d[i] = 2 scale + V[i]
/// e[i] = -scale        (i < N - 1)
/// ```
/// The wavefunction is implicitly zero just outside both ends of the grid.
pub fn assemble<S>(dx: f64, V: &Arr1<S>, hbar: f64, mu: f64)
    -> HResult<Tridiagonal>
where S: nd::Data<Elem = f64>
{
    let n = V.len();
    GridError::check_points(n)?;
    GridError::check_spacing(dx)?;
    XError::check_hbar(hbar)?;
    XError::check_mass(mu)?;
    let scale = hbar.powi(2) / (2.0 * mu * dx.powi(2));
    let d: nd::Array1<f64> = V.mapv(|Vk| 2.0 * scale + Vk);
    let mut e: nd::Array1<f64> = nd::Array1::from_elem(n, -scale);
    e[n - 1] = 0.0;
    Ok(Tridiagonal { d, e })
}
