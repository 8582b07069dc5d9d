//! Sorted, normalized eigenpairs of a discretized Hamiltonian.

use ndarray as nd;
use crate::{
    Arr1,
    Arr2,
    tql::Convergence,
    utils::{ argsort, wf_normalized },
};

/// A single solution to the discretized Schrödinger equation.
///
/// This struct is usually only returned by a solver function; you probably
/// won't ever instantiate it yourself.
#[derive(Clone, Debug, PartialEq)]
pub struct Eigenpair {
    /// Energy
    pub e: f64,
    /// Wavefunction, normalized so that `dx * Σ wf[i]² = 1`
    pub wf: nd::Array1<f64>,
}

impl Eigenpair {
    /// Probability density `|wf|²`.
    pub fn density(&self) -> nd::Array1<f64> {
        self.wf.mapv(|q| q * q)
    }
}

/// Pair each eigenvalue in `d` with its column of `z`, sort ascending by
/// eigenvalue, and normalize every vector on a grid of spacing `dx`.
///
/// Equal eigenvalues keep the order of their columns in `z`.
///
/// *Panics if `z` does not have `d.len()` columns*.
pub fn collect<S, T>(d: &Arr1<S>, z: &Arr2<T>, dx: f64) -> Vec<Eigenpair>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    assert_eq!(z.ncols(), d.len());
    argsort(d).into_iter()
        .map(|idx| Eigenpair { e: d[idx], wf: wf_normalized(&z.column(idx), dx) })
        .collect()
}

/// Full set of bound and box states returned by the solver.
///
/// Eigenpairs are ordered by non-decreasing energy; `self[v]` is the state with
/// `v` nodes for a well-resolved, single-well potential.
#[derive(Clone, Debug, PartialEq)]
pub struct Spectrum {
    pairs: Vec<Eigenpair>,
    dx: f64,
    convergence: Convergence,
}

impl Spectrum {
    pub(crate) fn new(pairs: Vec<Eigenpair>, dx: f64, convergence: Convergence)
        -> Self
    {
        Self { pairs, dx, convergence }
    }

    /// Get the number of eigenpairs.
    pub fn len(&self) -> usize { self.pairs.len() }

    /// Return `true` if there are no eigenpairs.
    pub fn is_empty(&self) -> bool { self.pairs.is_empty() }

    /// Get the grid spacing used for normalization.
    pub fn dx(&self) -> f64 { self.dx }

    /// Get the solver's convergence record.
    pub fn convergence(&self) -> &Convergence { &self.convergence }

    /// Get the eigenpair of rank `v`, if it exists.
    pub fn get(&self, v: usize) -> Option<&Eigenpair> { self.pairs.get(v) }

    /// Get all eigenpairs.
    pub fn pairs(&self) -> &[Eigenpair] { &self.pairs }

    /// Iterate over eigenpairs in ascending order of energy.
    pub fn iter(&self) -> std::slice::Iter<'_, Eigenpair> { self.pairs.iter() }

    /// Iterate over the eigenpairs with energy strictly below `e_max`.
    pub fn below(&self, e_max: f64) -> impl Iterator<Item = &Eigenpair> + '_ {
        self.pairs.iter().take_while(move |pair| pair.e < e_max)
    }

    /// Return all energies in ascending order.
    pub fn energies(&self) -> nd::Array1<f64> {
        self.pairs.iter().map(|pair| pair.e).collect()
    }

    /// Return all eigenvectors as the rows of a matrix, index-aligned with
    /// [`Self::energies`].
    pub fn vectors(&self) -> nd::Array2<f64> {
        let m = self.pairs.first().map_or(0, |pair| pair.wf.len());
        let mut out: nd::Array2<f64> = nd::Array2::zeros((self.pairs.len(), m));
        out.outer_iter_mut().zip(&self.pairs)
            .for_each(|(mut row, pair)| { row.assign(&pair.wf); });
        out
    }

    /// Consume `self`, returning the eigenpairs.
    pub fn into_pairs(self) -> Vec<Eigenpair> { self.pairs }
}

impl std::ops::Index<usize> for Spectrum {
    type Output = Eigenpair;

    fn index(&self, v: usize) -> &Eigenpair { &self.pairs[v] }
}

impl<'a> IntoIterator for &'a Spectrum {
    type Item = &'a Eigenpair;
    type IntoIter = std::slice::Iter<'a, Eigenpair>;

    fn into_iter(self) -> Self::IntoIter { self.pairs.iter() }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use crate::utils::wf_norm;
    use super::*;

    #[test]
    fn sorts_and_normalizes() {
        let d = nd::array![2.0, -1.0, 0.5];
        let z = nd::array![
            [1.0, 0.0, 0.0],
            [0.0, 3.0, 0.0],
            [0.0, 0.0, 0.5],
        ];
        let pairs = collect(&d, &z, 0.25);
        let e: Vec<f64> = pairs.iter().map(|pair| pair.e).collect();
        assert_eq!(e, vec![-1.0, 0.5, 2.0]);
        assert_eq!(pairs[0].wf, nd::array![0.0, 2.0, 0.0]);
        pairs.iter()
            .for_each(|pair| assert_abs_diff_eq!(wf_norm(&pair.wf, 0.25), 1.0));
    }

    #[test]
    fn ties_keep_column_order() {
        let d = nd::array![1.0, 1.0];
        let z = nd::array![[1.0, 0.0], [0.0, 1.0]];
        let pairs = collect(&d, &z, 1.0);
        assert_eq!(pairs[0].wf, nd::array![1.0, 0.0]);
        assert_eq!(pairs[1].wf, nd::array![0.0, 1.0]);
    }

    #[test]
    fn spectrum_accessors() {
        let d = nd::array![3.0, 1.0];
        let z = nd::array![[1.0, 0.0], [0.0, 1.0]];
        let spec = Spectrum::new(collect(&d, &z, 1.0), 1.0, Convergence::default());
        assert_eq!(spec.len(), 2);
        assert_eq!(spec.energies(), nd::array![1.0, 3.0]);
        assert_eq!(spec.vectors(), nd::array![[0.0, 1.0], [1.0, 0.0]]);
        assert_eq!(spec.below(2.0).count(), 1);
        assert_eq!(spec[1].density(), nd::array![1.0, 0.0]);
        assert!(spec.get(2).is_none());
    }
}
