//! Eigenvalues and eigenvectors of a real symmetric tridiagonal matrix by QL
//! iteration with implicit shifts.
//!
//! The eigenvalues are found one at a time from the top of the matrix. For each
//! index `l`, the off-diagonal is scanned for the first negligible element at
//! `m ≥ l`, which splits off an unreduced block `l..=m`. Sweeps of plane
//! rotations, each preceded by a shift taken from the leading 2×2 block, are
//! applied to this block until `e[l]` is negligible, at which point `d[l]` has
//! converged and the search moves on to `l + 1`. Every rotation is also applied
//! to the columns of a transform matrix `z`, so that if `z` starts as the
//! identity its columns end up holding the eigenvectors.
//!
//! ```
//! use ndarray as nd;
//! use diatom::{ hamiltonian::Tridiagonal, tql };
//!
//! // [ 2 -1  0 ]
//! // [-1  2 -1 ]  has eigenvalues 2 - √2, 2, 2 + √2
//! // [ 0 -1  2 ]
//! let H = Tridiagonal::new(nd::array![2.0, 2.0, 2.0], nd::array![-1.0, -1.0, 0.0])
//!     .unwrap();
//! let (d, _z, report) = tql::eigh_tridiagonal(H, 30);
//! assert!(report.is_converged());
//! let mut d = d.to_vec();
//! d.sort_by(|a, b| a.total_cmp(b));
//! let expected = [2.0 - 2.0_f64.sqrt(), 2.0, 2.0 + 2.0_f64.sqrt()];
//! assert!(d.iter().zip(expected).all(|(dk, ek)| (dk - ek).abs() < 1e-12));
//! ```

use ndarray as nd;
use crate::{ Arr1, Arr2, hamiltonian::Tridiagonal };

/// Relative threshold below which an off-diagonal element is treated as zero.
pub const EPS: f64 = f64::EPSILON;

/// Record of how a [`tql2`] call went.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Convergence {
    /// Total number of implicit-shift sweeps performed over all indices.
    pub sweeps: usize,
    /// Indices (into the unsorted eigenvalue array) that reached the sweep cap
    /// before their off-diagonal element became negligible.
    pub nonconverged: Vec<usize>,
}

impl Convergence {
    /// Return `true` if every eigenvalue converged within the sweep cap.
    pub fn is_converged(&self) -> bool { self.nonconverged.is_empty() }
}

// first m >= l such that e[m] is negligible; e[n - 1] is always zero so this
// always exists for a prepared off-diagonal
fn deflation_point<S>(e: &Arr1<S>, l: usize, tol: f64) -> usize
where S: nd::Data<Elem = f64>
{
    let n = e.len();
    (l..n).find(|&m| e[m].abs() <= tol).unwrap_or(n - 1)
}

// apply the rotation (c, s) to columns i and i + 1 of z
fn rotate_columns<U>(z: &mut Arr2<U>, i: usize, c: f64, s: f64)
where U: nd::DataMut<Elem = f64>
{
    let (mut zi, mut zip1)
        = z.multi_slice_mut((nd::s![.., i], nd::s![.., i + 1]));
    nd::Zip::from(&mut zi).and(&mut zip1)
        .for_each(|zki, zkip1| {
            let h = *zkip1;
            *zkip1 = s * *zki + c * h;
            *zki = c * *zki - s * h;
        });
}

// perform a single implicit-shift QL sweep over the unreduced block l..=m and
// return the shift that was subtracted from the trailing diagonal
//
// requires l < m and |e[l]| > 0
fn ql_sweep<S, T, U>(
    d: &mut Arr1<S>,
    e: &mut Arr1<T>,
    z: &mut Arr2<U>,
    l: usize,
    m: usize,
) -> f64
where
    S: nd::DataMut<Elem = f64>,
    T: nd::DataMut<Elem = f64>,
    U: nd::DataMut<Elem = f64>,
{
    let n = d.len();

    // shift from the leading 2×2 block; r takes the sign of p so that p + r
    // never cancels
    let g = d[l];
    let mut p = (d[l + 1] - g) / (2.0 * e[l]);
    let mut r = p.hypot(1.0);
    if p < 0.0 { r = -r; }
    d[l] = e[l] / (p + r);
    d[l + 1] = e[l] * (p + r);
    let dl1 = d[l + 1];
    let shift = g - d[l];
    d.slice_mut(nd::s![l + 2..n]).map_inplace(|dk| { *dk -= shift; });

    // chase the bulge from the bottom of the block back up to l
    p = d[m];
    let mut c: f64 = 1.0;
    let mut c2: f64 = 1.0;
    let mut c3: f64 = 1.0;
    let el1 = e[l + 1];
    let mut s: f64 = 0.0;
    let mut s2: f64 = 0.0;
    for i in (l..m).rev() {
        c3 = c2;
        c2 = c;
        s2 = s;
        let g = c * e[i];
        let h = c * p;
        r = p.hypot(e[i]);
        e[i + 1] = s * r;
        s = e[i] / r;
        c = p / r;
        p = c * d[i] - s * g;
        d[i + 1] = h + s * (c * g + s * d[i]);
        rotate_columns(z, i, c, s);
    }

    // the cascade leaves a residual coupling in the first row of the block
    p = -s * s2 * c3 * el1 * e[l] / dl1;
    e[l] = s * p;
    d[l] = c * p;
    shift
}

/// Diagonalize a symmetric tridiagonal matrix in place.
///
/// On entry, `d` holds the diagonal and `e[i]` the element coupling rows `i`
/// and `i + 1` (`e[N - 1]` is ignored). Every plane rotation is accumulated
/// into the columns of `z`, which must have `N` columns and any number of
/// rows; pass the identity to obtain eigenvectors of the matrix itself.
///
/// On exit, `d` holds the eigenvalues in no particular order, column `i` of `z`
/// holds the eigenvector for `d[i]`, and `e` is destroyed.
///
/// Each eigenvalue is allowed at most `max_sweeps` sweeps. Running out is not
/// fatal: a warning is logged, the offending index is recorded in the returned
/// [`Convergence`], and the current approximation is kept.
///
/// *Panics if `e` does not have length `N` or `z` does not have `N` columns*.
pub fn tql2<S, T, U>(
    d: &mut Arr1<S>,
    e: &mut Arr1<T>,
    z: &mut Arr2<U>,
    max_sweeps: usize,
) -> Convergence
where
    S: nd::DataMut<Elem = f64>,
    T: nd::DataMut<Elem = f64>,
    U: nd::DataMut<Elem = f64>,
{
    let n = d.len();
    assert_eq!(e.len(), n);
    assert_eq!(z.ncols(), n);
    let mut report = Convergence::default();
    if n == 0 { return report; }

    // the sweep below reads the coupling of rows i and i + 1 from e[i]; shift
    // it down one place and clear the unused tail
    for i in 1..n { e[i - 1] = e[i]; }
    e[n - 1] = 0.0;

    let mut f: f64 = 0.0;
    let mut tst1: f64 = 0.0;
    for l in 0..n {
        tst1 = tst1.max(d[l].abs() + e[l].abs());
        let m = deflation_point(e, l, EPS * tst1);
        if m > l {
            let mut sweeps: usize = 0;
            loop {
                if sweeps >= max_sweeps {
                    log::warn!(
                        "tql::tql2: eigenvalue {l} did not converge after \
                        {sweeps} sweeps (|e| = {:.3e}); keeping current \
                        approximation",
                        e[l].abs(),
                    );
                    report.nonconverged.push(l);
                    break;
                }
                sweeps += 1;
                f += ql_sweep(d, e, z, l, m);
                if e[l].abs() <= EPS * tst1 { break; }
            }
            report.sweeps += sweeps;
        }
        d[l] += f;
        e[l] = 0.0;
    }
    report
}

/// Diagonalize `H`, returning its (unsorted) eigenvalues, the matrix whose
/// columns are the corresponding eigenvectors, and the convergence record.
///
/// The coupling convention of [`Tridiagonal`] (`e[i]` couples `i` and `i + 1`)
/// is translated to the one expected by [`tql2`] before solving.
pub fn eigh_tridiagonal(H: Tridiagonal, max_sweeps: usize)
    -> (nd::Array1<f64>, nd::Array2<f64>, Convergence)
{
    let Tridiagonal { mut d, e: off } = H;
    let n = d.len();
    // tql2 expects the coupling of rows i - 1 and i in e[i]
    let mut e: nd::Array1<f64> = nd::Array1::zeros(n);
    if n > 1 {
        e.slice_mut(nd::s![1..n]).assign(&off.slice(nd::s![0..n - 1]));
    }
    let mut z: nd::Array2<f64> = nd::Array2::eye(n);
    let report = tql2(&mut d, &mut e, &mut z, max_sweeps);
    log::debug!(
        "tql::eigh_tridiagonal: n = {n}, sweeps = {}, nonconverged = {}",
        report.sweeps,
        report.nonconverged.len(),
    );
    (d, z, report)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use crate::utils::argsort;
    use super::*;

    fn sorted(d: &nd::Array1<f64>) -> Vec<f64> {
        argsort(d).into_iter().map(|i| d[i]).collect()
    }

    fn laplacian(n: usize) -> Tridiagonal {
        Tridiagonal::new(
            nd::Array1::from_elem(n, 2.0),
            nd::Array1::from_elem(n, -1.0),
        ).unwrap()
    }

    #[test]
    fn five_point_laplacian() {
        // eigenvalues of tridiag(-1, 2, -1) are 2 - 2 cos(kπ/6), k = 1..5
        let (d, _, report) = eigh_tridiagonal(laplacian(5), 30);
        assert!(report.is_converged());
        let s3 = 3.0_f64.sqrt();
        let expected = [2.0 - s3, 1.0, 2.0, 3.0, 2.0 + s3];
        sorted(&d).into_iter().zip(expected)
            .for_each(|(dk, ek)| assert_abs_diff_eq!(dk, ek, epsilon = 1e-9));
    }

    #[test]
    fn columns_are_eigenvectors() {
        let H = Tridiagonal::new(
            nd::array![4.0, 1.0, 3.0, 2.0, 5.0, -1.0],
            nd::array![1.0, 0.5, -2.0, 1.5, 0.25, 0.0],
        ).unwrap();
        let dense = H.to_dense();
        let (d, z, report) = eigh_tridiagonal(H, 30);
        assert!(report.is_converged());
        let n = d.len();
        for (i, col) in z.columns().into_iter().enumerate() {
            let Hv = dense.dot(&col);
            (0..n).for_each(|k| {
                assert_abs_diff_eq!(Hv[k], d[i] * col[k], epsilon = 1e-10);
            });
        }
        let ztz = z.t().dot(&z);
        assert_abs_diff_eq!(
            ztz.iter().zip(nd::Array2::<f64>::eye(n).iter())
                .map(|(a, b)| (a - b).abs())
                .fold(0.0, f64::max),
            0.0,
            epsilon = 1e-12,
        );
        // trace is invariant
        assert_abs_diff_eq!(d.sum(), dense.diag().sum(), epsilon = 1e-12);
    }

    #[test]
    fn diagonal_input_is_untouched() {
        let H = Tridiagonal::new(nd::array![3.0, -1.0, 2.0], nd::array![0.0, 0.0, 0.0])
            .unwrap();
        let (d, z, report) = eigh_tridiagonal(H, 30);
        assert_eq!(report, Convergence::default());
        assert_eq!(d, nd::array![3.0, -1.0, 2.0]);
        assert_eq!(z, nd::Array2::<f64>::eye(3));
    }

    #[test]
    fn two_by_two_closed_form() {
        let H = Tridiagonal::new(nd::array![1.0, 3.0], nd::array![2.0, 0.0]).unwrap();
        let (d, _, _) = eigh_tridiagonal(H, 30);
        let r = 5.0_f64.sqrt();
        let d = sorted(&d);
        assert_abs_diff_eq!(d[0], 2.0 - r, epsilon = 1e-12);
        assert_abs_diff_eq!(d[1], 2.0 + r, epsilon = 1e-12);
    }

    #[test]
    fn raw_convention_shifts_off_diagonal() {
        // same matrix as `five_point_laplacian`, but with the couplings stored
        // in e[1..n] as tql2 expects on entry
        let mut d = nd::Array1::from_elem(5, 2.0);
        let mut e = nd::array![0.0, -1.0, -1.0, -1.0, -1.0];
        let mut z = nd::Array2::eye(5);
        let report = tql2(&mut d, &mut e, &mut z, 30);
        assert!(report.is_converged());
        assert!(e.iter().all(|ek| *ek == 0.0));
        assert_abs_diff_eq!(sorted(&d)[0], 2.0 - 3.0_f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn sweep_cap_is_not_fatal() {
        let H = Tridiagonal::new(
            nd::array![4.0, 1.0, 3.0, 2.0, 5.0],
            nd::array![1.0, 1.0, 1.0, 1.0, 0.0],
        ).unwrap();
        let (d, z, report) = eigh_tridiagonal(H, 1);
        assert!(!report.is_converged());
        assert!(report.nonconverged.iter().all(|&l| l < 5));
        assert_eq!(d.len(), 5);
        assert_eq!(z.dim(), (5, 5));
        assert!(d.iter().all(|dk| dk.is_finite()));
    }

    #[test]
    fn near_degenerate_block() {
        let n = 8;
        let d: nd::Array1<f64>
            = (0..n).map(|i| 1.0 + 1e-13 * i as f64).collect();
        let e: nd::Array1<f64> = nd::Array1::from_elem(n, 1e-9);
        let H = Tridiagonal::new(d, e).unwrap();
        let (d, z, _) = eigh_tridiagonal(H, crate::DEF_MAXSWEEPS);
        assert_eq!(d.len(), n);
        d.iter().for_each(|dk| assert_abs_diff_eq!(*dk, 1.0, epsilon = 1e-8));
        let ztz = z.t().dot(&z);
        (0..n).for_each(|i| assert_abs_diff_eq!(ztz[[i, i]], 1.0, epsilon = 1e-10));
    }

    #[test]
    fn nan_coupling_exhausts_default_cap() {
        let H = Tridiagonal::new(
            nd::array![1.0, 2.0, 3.0, 4.0],
            nd::array![1.0, f64::NAN, 1.0, 0.0],
        ).unwrap();
        let (d, z, report) = eigh_tridiagonal(H, crate::DEF_MAXSWEEPS);
        assert!(!report.is_converged());
        assert!(report.nonconverged.contains(&0));
        assert!(report.sweeps >= crate::DEF_MAXSWEEPS);
        assert_eq!(d.len(), 4);
        assert_eq!(z.dim(), (4, 4));
    }
}
