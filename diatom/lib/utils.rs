//! Miscellaneous tools.
//!
//! Wavefunction norms and inner products here use the plain rectangle rule,
//! `dx * Σ f[i] g[i]`, with every sample weighted equally.

use ndarray::{ self as nd, Ix1 };
use num_traits::Float;

/// Calculate the squared norm of a wavefunction, `dx * Σ q[i]²`.
pub fn wf_norm<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    dx * q.iter().fold(A::zero(), |acc, qk| acc + *qk * *qk)
}

/// Calculate the inner product of two wavefunctions, `dx * Σ q[i] p[i]`.
///
/// Arrays of unequal length are truncated to the shorter one.
pub fn wf_dot<S, T, A>(
    q: &nd::ArrayBase<S, Ix1>,
    p: &nd::ArrayBase<T, Ix1>,
    dx: A,
) -> A
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Float,
{
    dx * q.iter().zip(p).fold(A::zero(), |acc, (qk, pk)| acc + *qk * *pk)
}

/// Return a normalized copy of a wavefunction.
pub fn wf_normalized<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A)
    -> nd::Array1<A>
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let norm = wf_norm(q, dx).sqrt();
    q.mapv(|qk| qk / norm)
}

/// Return the permutation that sorts `a` in ascending order.
///
/// The sort is stable, so equal values keep their original relative order.
/// NaNs are placed after every other value.
pub fn argsort<S, A>(a: &nd::ArrayBase<S, Ix1>) -> Vec<usize>
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let mut idx: Vec<usize> = (0..a.len()).collect();
    idx.sort_by(|&i, &j| {
        match a[i].partial_cmp(&a[j]) {
            Some(ord) => ord,
            None => a[i].is_nan().cmp(&a[j].is_nan()),
        }
    });
    idx
}

/// Count the sign changes in a sampled wavefunction, ignoring exact zeros.
pub fn node_count<S, A>(q: &nd::ArrayBase<S, Ix1>) -> usize
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let mut last: Option<bool> = None;
    let mut nodes: usize = 0;
    for qk in q.iter().filter(|qk| !qk.is_zero()) {
        let pos = qk.is_sign_positive();
        if last.is_some_and(|prev| prev != pos) { nodes += 1; }
        last = Some(pos);
    }
    nodes
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use super::*;

    #[test]
    fn rectangle_rule_norm() {
        let q = nd::array![1.0, 2.0, 2.0];
        assert_abs_diff_eq!(wf_norm(&q, 0.5), 4.5);
        let qn = wf_normalized(&q, 0.5);
        assert_abs_diff_eq!(wf_norm(&qn, 0.5), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn dot_product() {
        let q = nd::array![1.0, -1.0, 0.0];
        let p = nd::array![1.0, 1.0, 5.0];
        assert_abs_diff_eq!(wf_dot(&q, &p, 0.1), 0.0);
        assert_abs_diff_eq!(wf_dot(&p, &p, 0.1), wf_norm(&p, 0.1));
    }

    #[test]
    fn argsort_is_stable() {
        let a = nd::array![3.0, 1.0, 2.0, 1.0, f64::NAN, 0.0];
        assert_eq!(argsort(&a), vec![5, 1, 3, 2, 0, 4]);
    }

    #[test]
    fn counts_nodes() {
        assert_eq!(node_count(&nd::array![0.0, 1.0, 2.0, 1.0, 0.0]), 0);
        assert_eq!(node_count(&nd::array![0.0, 1.0, 0.0, -1.0, 0.0]), 1);
        assert_eq!(node_count(&nd::array![1.0, -1.0, 1.0, -1.0]), 3);
    }
}
