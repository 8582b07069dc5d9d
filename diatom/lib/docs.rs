//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Radial wavefunctions](#radial-wavefunctions)
//! - [Discretization](#discretization)
//! - [QL iteration](#ql-iteration)
//! - [Normalization](#normalization)
//!
//! # Background
//! The nuclei of a diatomic molecule move in an effective potential *V*(*r*)
//! set by the electrons, where *r* is the bond length. For a given electronic
//! state, the vibrational levels are the bound solutions of the
//! one-dimensional, time-independent Schrödinger equation (TISE)
//! ```text
//!    ħ² ∂²
//! - --- --- ψ(r) + V(r) ψ(r) = E ψ(r)
//!   2 μ ∂r²
//! ```
//! where *μ* = *m*₁ *m*₂ / (*m*₁ + *m*₂) is the reduced mass of the pair.
//! Two model potentials are provided. The harmonic well
//! ```text
//! V(r) = k (r - r₀)² / 2
//! ```
//! has the exactly known spectrum *E*<sub>*v*</sub> = (*v* + 1/2) *ħ* *ω* with
//! *ω* = √(*k*/*μ*), and is used as a reference. The Morse well
//! ```text
//! V(r) = D_e (1 - exp(-a (r - r₀)))²
//! ```
//! is zero at *r*₀, approaches the dissociation energy *D*<sub>e</sub> at large
//! *r*, and rises steeply for *r* < *r*₀; its levels bunch together as they
//! approach *D*<sub>e</sub>, which the harmonic picture cannot reproduce.
//!
//! # Radial wavefunctions
//! For a rotating molecule, the total wavefunction separates into radial and
//! angular components *ψ*(*r*, *θ*, *φ*) = *R*(*r*) *Y*<sub>*l*</sub>(*θ*,
//! *φ*). Writing *u*(*r*) ≡ *r* *R*(*r*), the radial equation becomes
//! ```text
//!    ħ² ∂²u               l (l + 1) ħ²
//! - --- --- + V(r) u(r) + ------------ u(r) = E u(r)
//!   2 μ ∂r²                  2 μ r²
//! ```
//! which is the one-dimensional TISE again once the centrifugal term is
//! absorbed into an effective potential. This term diverges at *r* = 0, so the
//! grid must start at some *r*<sub>min</sub> > 0; it also pushes the levels
//! up, so that for fixed *V* the ground-state energy grows with *l*.
//!
//! # Discretization
//! On a uniform grid
//! ```text
//! x[i] = x₀ + i δx, i ∊ {0, ..., N - 1}
//! ```
//! the second derivative is replaced by the central difference
//! ```text
//!  ∂²f     f[i + 1] - 2 f[i] + f[i - 1]
//! ---- ≈ ------------------------------
//! ∂x²                 δx²
//! ```
//! which has an *O*(*δx*²) error term. Requiring the wavefunction to vanish just
//! outside the grid turns the TISE into the *N*×*N* eigenvalue problem *H* *f*
//! = *E* *f* with
//! ```text
//! H[i, i]     = 2 s + V(x[i])
//! H[i, i ± 1] = -s
//! s = ħ² / (2 μ δx²)
//! ```
//! *H* is real, symmetric, and tridiagonal, so it has *N* real eigenvalues with
//! an orthogonal set of eigenvectors, and no reduction step is needed before
//! diagonalizing it. For the harmonic well the leading error in level *v* is
//! ```text
//! δE ≈ -ħ ω (δx / σ)² (2 v² + 2 v + 1) / 32,  σ = (ħ² / μ k)^(1/4)
//! ```
//! so levels are slightly too low and the error grows with *v*.
//!
//! # QL iteration
//! The eigenvalues are found with the QL algorithm[^1]: the matrix is
//! repeatedly factored as *H* − *σ* *I* = *Q* *L*, with *Q* orthogonal and *L*
//! lower-triangular, and replaced by *L* *Q* + *σ* *I*, which is similar to *H*
//! and remains symmetric tridiagonal. With a good shift *σ*, the first
//! off-diagonal element of the current unreduced block goes to zero (cubically,
//! for symmetric matrices), isolating an eigenvalue in the top corner. The
//! factorization is never formed explicitly; instead each sweep applies a
//! sequence of plane rotations from the bottom of the block to the top, with
//! the shift introduced implicitly through the first rotation[^2].
//!
//! The shift is taken from the eigenvalue of the leading 2×2 block closest to
//! its first diagonal element,
//! ```text
//!      d[l + 1] - d[l]
//! p = ----------------,  r = ±√(p² + 1),  σ = d[l] - e[l] / (p + r)
//!         2 e[l]
//! ```
//! with the sign of *r* taken from *p* so that *p* + *r* never suffers
//! cancellation. An off-diagonal element is negligible when it is smaller than
//! machine epsilon times the largest |*d*[*i*]| + |*e*[*i*]| seen so far, at
//! which point the matrix splits into independent blocks.
//!
//! Every rotation applied to *H* is also applied to the columns of a matrix *Z*
//! that starts as the identity, so that at the end *Z*ᵀ *H* *Z* is diagonal and
//! the columns of *Z* are the (orthonormal) eigenvectors. Each sweep costs
//! *O*(*N*) for *H* and *O*(*N*²) for *Z*, and usually one to three sweeps
//! suffice per eigenvalue.
//!
//! # Normalization
//! The columns of *Z* have unit Euclidean norm. To approximate wavefunctions
//! with unit *L*² norm instead, they are rescaled so that
//! ```text
//! δx Σ_i f[i]² = 1
//! ```
//! which is the rectangle rule applied to ∫ |*f*|² d*x*. Bound states have
//! decayed to nearly zero at both ends of the grid, so the difference from the
//! trapezoidal rule is negligible for them.
//!
//! [^1]: J. H. Wilkinson and C. Reinsch, *Handbook for Automatic Computation,
//! Vol. II: Linear Algebra*, Springer (1971), contribution II/3.
//!
//! [^2]: G. H. Golub and C. F. Van Loan, *Matrix Computations*, 4th ed., Johns
//! Hopkins University Press (2013), §8.3.
