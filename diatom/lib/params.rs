//! Validated parameter snapshots and change notification.
//!
//! A [`Params`] value is an immutable snapshot of the four quantum numbers and
//! couplings that govern the molecule. Updates go through a [`Store`], which
//! validates each [`Change`], drops no-ops, and notifies every registered
//! [`Listener`] with the new snapshot. Recomputation happens on the listener's
//! side and always works from the snapshot it was handed.
//!
//! ```
//! use diatom::params::{ Change, Params, Store };
//!
//! let mut store = Store::new(Params::default());
//! let rx = store.channel();
//! assert!(store.set(Change::L(3)).unwrap());
//! assert!(!store.set(Change::L(3)).unwrap()); // unchanged; nobody notified
//! assert!(store.set(Change::L(21)).is_err());
//! let (change, snapshot) = rx.try_recv().unwrap();
//! assert_eq!(change, Change::L(3));
//! assert_eq!(snapshot.l(), 3);
//! assert!(rx.try_recv().is_err());
//! ```

use std::sync::mpsc;
use crate::{
    constants::{ Config, Molecule },
    error::ParamError,
    potential::{ PotentialModel, Term },
    solve::{ Options, System, XResult },
    spectrum::Spectrum,
};

/// Largest allowed rotational quantum number.
pub const L_MAX: u32 = 20;

/// Largest allowed vibrational index.
pub const V_MAX: u32 = 10;

/// Allowed range of bond stiffness.
pub const K_RANGE: (f64, f64) = (0.5, 3.0);

/// Number of modelled electronic states.
pub const N_STATES: u8 = 3;

/// Immutable snapshot of the governing parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Params {
    l: u32,
    v: u32,
    k: f64,
    n: u8,
}

impl Default for Params {
    fn default() -> Self { Self { l: 0, v: 0, k: 1.0, n: 0 } }
}

impl Params {
    /// Create a new snapshot, checking every field against its range.
    pub fn new(l: u32, v: u32, k: f64, n: u8) -> Result<Self, ParamError> {
        Self::default()
            .with(Change::L(l))?
            .with(Change::V(v))?
            .with(Change::K(k))?
            .with(Change::N(n))
    }

    /// Rotational quantum number.
    pub fn l(&self) -> u32 { self.l }

    /// Vibrational index.
    pub fn v(&self) -> u32 { self.v }

    /// Bond stiffness.
    pub fn k(&self) -> f64 { self.k }

    /// Electronic state index.
    pub fn n(&self) -> u8 { self.n }

    /// Return a copy of `self` with `change` applied.
    pub fn with(self, change: Change) -> Result<Self, ParamError> {
        change.check()?;
        let mut new = self;
        match change {
            Change::L(l) => { new.l = l; },
            Change::V(v) => { new.v = v; },
            Change::K(k) => { new.k = k; },
            Change::N(n) => { new.n = n; },
        }
        Ok(new)
    }

    /// Effective potential: the Morse well of the current electronic state
    /// plus the centrifugal barrier for the current `l`.
    pub fn potential(&self, molecule: &Molecule) -> PotentialModel {
        let mut model = PotentialModel::new()
            .with(Term::electronic(self.n, molecule));
        if self.l > 0 {
            model.push(Term::Centrifugal {
                l: self.l,
                mu: molecule.reduced_mass(),
                hbar: molecule.hbar,
            });
        }
        model
    }

    /// Sample the effective potential on the grid described by `config` and
    /// solve for its spectrum.
    pub fn spectrum(&self, molecule: &Molecule, config: &Config)
        -> XResult<Spectrum>
    {
        config.validate()?;
        let sys = System::new(config.grid()?, &self.potential(molecule));
        let opts = Options { max_sweeps: config.max_sweeps };
        sys.solve_with(molecule.hbar, molecule.reduced_mass(), &opts)
    }
}

/// A single-field update to a [`Params`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Change {
    /// Set the rotational quantum number.
    L(u32),
    /// Set the vibrational index.
    V(u32),
    /// Set the bond stiffness.
    K(f64),
    /// Set the electronic state index.
    N(u8),
}

impl Change {
    fn check(&self) -> Result<(), ParamError> {
        match *self {
            Self::L(l) => (l <= L_MAX).then_some(()).ok_or(ParamError::BadL(l)),
            Self::V(v) => (v <= V_MAX).then_some(()).ok_or(ParamError::BadV(v)),
            Self::K(k) => {
                (K_RANGE.0..=K_RANGE.1).contains(&k)
                    .then_some(())
                    .ok_or(ParamError::BadK(k))
            },
            Self::N(n) => (n < N_STATES).then_some(()).ok_or(ParamError::BadN(n)),
        }
    }

    /// Return `true` if the change alters the effective potential, and hence
    /// the computed spectrum.
    ///
    /// The vibrational index only selects which level is of interest, and the
    /// stiffness only enters the harmonic estimates in [`crate::energy`].
    pub fn affects_spectrum(&self) -> bool {
        matches!(self, Self::L(_) | Self::N(_))
    }
}

/// Receives every accepted [`Change`] along with the resulting snapshot.
pub trait Listener {
    fn on_change(&mut self, change: Change, params: &Params);
}

impl<F> Listener for F
where F: FnMut(Change, &Params)
{
    fn on_change(&mut self, change: Change, params: &Params) {
        self(change, params)
    }
}

/// Owner of the current [`Params`], broadcasting accepted changes.
#[derive(Default)]
pub struct Store {
    params: Params,
    listeners: Vec<Box<dyn Listener>>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("params", &self.params)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Store {
    /// Create a new store with no listeners.
    pub fn new(params: Params) -> Self {
        Self { params, listeners: Vec::new() }
    }

    /// Get the current snapshot.
    pub fn get(&self) -> Params { self.params }

    /// Register a listener, notified in registration order.
    pub fn subscribe<L>(&mut self, listener: L)
    where L: Listener + 'static
    {
        self.listeners.push(Box::new(listener));
    }

    /// Register a listener that forwards every change into a channel and return
    /// the receiving end.
    pub fn channel(&mut self) -> mpsc::Receiver<(Change, Params)> {
        let (tx, rx) = mpsc::channel();
        self.subscribe(move |change: Change, params: &Params| {
            // a dropped receiver just means nobody is listening anymore
            tx.send((change, *params)).ok();
        });
        rx
    }

    /// Apply `change`, notifying listeners if the snapshot actually changed.
    ///
    /// Returns `Ok(false)` without notifying anyone if `change` is a no-op.
    pub fn set(&mut self, change: Change) -> Result<bool, ParamError> {
        let new = self.params.with(change)?;
        if new == self.params { return Ok(false); }
        self.params = new;
        self.listeners.iter_mut()
            .for_each(|listener| listener.on_change(change, &new));
        Ok(true)
    }
}
