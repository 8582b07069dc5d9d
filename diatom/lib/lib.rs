#![allow(non_snake_case)]

//! Provides functions and higher-level constructs for computing the bound
//! vibrational spectrum of a diatomic molecule by direct diagonalization of the
//! finite-difference Hamiltonian on a uniform one-dimensional grid.
//!
//! The pipeline is:
//! - [`grid`]: uniform coordinate grid over a bond-length interval
//! - [`potential`]: harmonic, Morse, and centrifugal potential terms
//! - [`hamiltonian`]: assembly of the symmetric tridiagonal Hamiltonian
//! - [`tql`]: implicit-shift QL eigensolver with eigenvector accumulation
//! - [`spectrum`]: sorting and normalization of the resulting eigenpairs
//!
//! with [`solve`] tying these together. [`params`], [`energy`], and [`motion`]
//! provide the parameter snapshot and derived quantities consumed by a
//! visualization layer.
//!
//! See [`docs`] for theoretical background.

pub mod constants;
pub mod energy;
pub mod error;
pub mod grid;
pub mod hamiltonian;
pub mod motion;
pub mod params;
pub mod potential;
pub mod solve;
pub mod spectrum;
pub mod tql;
pub mod utils;

pub mod docs;

/// Default cap on implicit-shift sweeps per eigenvalue.
pub const DEF_MAXSWEEPS: usize = 30;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
