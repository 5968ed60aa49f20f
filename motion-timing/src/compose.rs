//! Group (parallel) and sequence (serial) composition.
//!
//! Both composers take their inputs by value and return a freshly allocated [`Collection`].
//! To place the same atom in more than one composition, clone it first.

use crate::{Atom, Collection, CollectionKind, Motion};

/// Composes inputs to play together.
///
/// Collections are flattened into the output; bare atoms are appended. No delay is changed.
pub fn group<S, I>(items: I) -> Collection<S>
where
    I: IntoIterator,
    I::Item: Into<Motion<S>>,
{
    let mut out = Collection::new(CollectionKind::Group);
    for item in items {
        match item.into() {
            Motion::Atom(atom) => out.atoms.push(atom),
            Motion::Collection(collection) => out.atoms.extend(collection.atoms),
        }
    }
    mtrace!(atoms = out.atoms.len(), "group");
    out
}

/// Composes inputs to play one after another.
///
/// Every input after the first is shifted so it starts when the previous input ends:
/// `next.delay = prev.delay + next.delay + prev.duration`. A collection is shifted as a whole
/// (each of its atoms keeps its offset relative to its siblings), and the input after a
/// collection starts once that collection's last-finishing atom completes.
///
/// ```
/// use motion_timing::{Atom, Collection, sequence};
///
/// let a = Atom::<()>::new(vec![]).with_delay(100).with_duration(100);
/// let b = Atom::<()>::new(vec![]).with_delay(200).with_duration(200);
/// let c = Atom::<()>::new(vec![]).with_delay(300).with_duration(300);
///
/// let seq: Collection<()> = sequence([a, b, c]);
/// let delays: Vec<_> = seq.iter().map(|a| a.delay()).collect();
/// assert_eq!(delays, [100, 400, 900]);
/// ```
pub fn sequence<S, I>(items: I) -> Collection<S>
where
    I: IntoIterator,
    I::Item: Into<Motion<S>>,
{
    let mut out = Collection::new(CollectionKind::Sequence);
    // End of the previous step; `None` until the first input has been placed.
    let mut prev_end: Option<u64> = None;

    for item in items {
        let motion = item.into();
        let end = match motion {
            Motion::Atom(mut atom) => {
                if let Some(offset) = prev_end {
                    shift(&mut atom, offset);
                }
                let end = atom.end_time();
                out.atoms.push(atom);
                end
            }
            Motion::Collection(collection) => {
                let mut end = 0u64;
                for mut atom in collection.atoms {
                    if let Some(offset) = prev_end {
                        shift(&mut atom, offset);
                    }
                    end = end.max(atom.end_time());
                    out.atoms.push(atom);
                }
                // An empty collection ends at 0, so whatever follows it is not shifted by the
                // steps placed before it.
                end
            }
        };
        prev_end = Some(end);
    }

    mtrace!(
        atoms = out.atoms.len(),
        end = out.end_time(),
        "sequence"
    );
    out
}

fn shift<S>(atom: &mut Atom<S>, offset: u64) {
    atom.delay_ms = Some(offset.saturating_add(atom.delay()));
}

/// Builds a [`crate::group`] from a comma-separated list of atoms and collections.
#[macro_export]
macro_rules! group {
    ($($item:expr),* $(,)?) => {
        $crate::group([$($crate::Motion::from($item)),*])
    };
}

/// Builds a [`crate::sequence`] from a comma-separated list of atoms and collections.
#[macro_export]
macro_rules! sequence {
    ($($item:expr),* $(,)?) => {
        $crate::sequence([$($crate::Motion::from($item)),*])
    };
}
