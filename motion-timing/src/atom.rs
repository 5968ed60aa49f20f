use alloc::string::String;
use alloc::vec::Vec;

use crate::{AtomPhase, CompositeMode, FillMode, Iterations};

/// The smallest timed effect: opaque samples plus the timing the composers work with.
///
/// Only `delay_ms` and `duration_ms` are ever read by this crate. `None` is treated as `0`
/// everywhere. The remaining timing fields are carried through untouched for the rendering
/// layer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Atom<S> {
    pub samples: Vec<S>,
    /// Offset from the start of the enclosing collection.
    pub delay_ms: Option<u64>,
    pub duration_ms: Option<u64>,
    pub iterations: Option<Iterations>,
    pub fill: Option<FillMode>,
    pub composite: Option<CompositeMode>,
    pub easing: Option<String>,
}

impl<S> Atom<S> {
    pub fn new(samples: Vec<S>) -> Self {
        Self {
            samples,
            delay_ms: None,
            duration_ms: None,
            iterations: None,
            fill: None,
            composite: None,
            easing: None,
        }
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = Some(delay_ms);
        self
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn with_iterations(mut self, iterations: Iterations) -> Self {
        self.iterations = Some(iterations);
        self
    }

    pub fn with_fill(mut self, fill: FillMode) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_composite(mut self, composite: CompositeMode) -> Self {
        self.composite = Some(composite);
        self
    }

    pub fn with_easing(mut self, easing: impl Into<String>) -> Self {
        self.easing = Some(easing.into());
        self
    }

    pub fn delay(&self) -> u64 {
        self.delay_ms.unwrap_or(0)
    }

    pub fn duration(&self) -> u64 {
        self.duration_ms.unwrap_or(0)
    }

    /// The instant (relative to the enclosing collection) at which this atom stops playing.
    pub fn end_time(&self) -> u64 {
        self.delay().saturating_add(self.duration())
    }

    /// Samples the atom's phase at `elapsed_ms` after the start of its collection.
    ///
    /// Iterations are not taken into account: a single pass over `duration_ms` is assumed.
    pub fn phase_at(&self, elapsed_ms: u64) -> AtomPhase {
        let delay = self.delay();
        if elapsed_ms < delay {
            return AtomPhase::Pending;
        }
        let local = elapsed_ms - delay;
        let duration = self.duration();
        if local >= duration {
            return AtomPhase::Finished;
        }
        AtomPhase::Active {
            progress: local as f32 / duration as f32,
        }
    }
}

/// Whether a [`Collection`] was produced by [`crate::group`] or [`crate::sequence`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CollectionKind {
    Group,
    Sequence,
}

/// A flat bag of atoms produced by composition.
///
/// A collection never contains another collection; composing flattens its inputs, so `atoms`
/// only ever holds base atoms. For sequences, the order of `atoms` is the order of placement.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Collection<S> {
    pub kind: CollectionKind,
    pub atoms: Vec<Atom<S>>,
}

impl<S> Collection<S> {
    pub fn new(kind: CollectionKind) -> Self {
        Self {
            kind,
            atoms: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Atom<S>> {
        self.atoms.iter()
    }

    /// The instant at which the last-finishing atom completes (`0` for an empty collection).
    pub fn end_time(&self) -> u64 {
        self.atoms.iter().map(Atom::end_time).max().unwrap_or(0)
    }

    /// Samples every atom's phase at `elapsed_ms`, in atom order.
    pub fn phases_at(&self, elapsed_ms: u64) -> impl Iterator<Item = AtomPhase> + '_ {
        self.atoms.iter().map(move |a| a.phase_at(elapsed_ms))
    }

    /// Returns `true` while at least one atom is still pending or playing.
    pub fn is_running_at(&self, elapsed_ms: u64) -> bool {
        elapsed_ms < self.end_time()
    }

    pub fn into_atoms(self) -> Vec<Atom<S>> {
        self.atoms
    }
}

impl<S> IntoIterator for Collection<S> {
    type Item = Atom<S>;
    type IntoIter = alloc::vec::IntoIter<Atom<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.into_iter()
    }
}

impl<'a, S> IntoIterator for &'a Collection<S> {
    type Item = &'a Atom<S>;
    type IntoIter = core::slice::Iter<'a, Atom<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.iter()
    }
}

/// A composer input: either a bare atom or an already-composed collection.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Motion<S> {
    Atom(Atom<S>),
    Collection(Collection<S>),
}

impl<S> Motion<S> {
    pub fn is_collection(&self) -> bool {
        matches!(self, Self::Collection(_))
    }

    /// The instant at which this input finishes: the atom's end, or the collection's
    /// last-finishing atom.
    pub fn end_time(&self) -> u64 {
        match self {
            Self::Atom(atom) => atom.end_time(),
            Self::Collection(collection) => collection.end_time(),
        }
    }
}

impl<S> From<Atom<S>> for Motion<S> {
    fn from(atom: Atom<S>) -> Self {
        Self::Atom(atom)
    }
}

impl<S> From<Collection<S>> for Motion<S> {
    fn from(collection: Collection<S>) -> Self {
        Self::Collection(collection)
    }
}
