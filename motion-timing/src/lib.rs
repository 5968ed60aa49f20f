//! A headless motion-timing engine.
//!
//! For adapter-level utilities (a shareable frame queue, a frame-driven controller), see the
//! `motion-timing-adapter` crate.
//!
//! This crate decides *when* animated items run, never *how* they look:
//! - [`group`] and [`sequence`] compose timed effects ([`Atom`]s) into flat [`Collection`]s,
//!   computing the delay of every atom so nested compositions behave as if flattened.
//! - [`evaluate_stagger_at_time`] computes which items of a staggered set are visible at an
//!   elapsed time.
//! - [`StaggerScheduler`] runs that function once per animation frame from a [`FrameClock`].
//!
//! It is UI-agnostic. A rendering layer is expected to provide:
//! - the keyframe samples carried by each atom (opaque to this crate)
//! - frame timestamps for running staggers
//! - the mapping from each visibility flag to a concrete element
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod atom;
mod clock;
mod compose;
mod options;
mod scheduler;
mod stagger;
mod state;
mod types;


pub use atom::{Atom, Collection, CollectionKind, Motion};
pub use clock::{FrameClock, FrameToken};
pub use compose::{group, sequence};
pub use options::{OnChangeCallback, OnCompleteCallback, StaggerOptions};
pub use scheduler::StaggerScheduler;
pub use stagger::{
    DEFAULT_ITEM_DELAY_MS, DEFAULT_ITEM_DURATION_MS, StaggerConfig, StaggerResult,
    evaluate_stagger_at_time, initial_visibility, item_delays, settled_visibility,
};
pub use state::StaggerSnapshot;
pub use types::{AtomPhase, CompositeMode, Direction, FillMode, Iterations, StaggerMode};
