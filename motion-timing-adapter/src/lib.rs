//! Adapter utilities for the `motion-timing` crate.
//!
//! The `motion-timing` crate is UI-agnostic and focuses on the timing math and state. This
//! crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A deterministic frame queue that implements `FrameClock` and can be shared by many
//!   schedulers (e.g. one per list on screen)
//! - A controller that drives one stagger from an adapter's per-frame tick
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod frames;

#[cfg(test)]
mod tests;

pub use controller::StaggerController;
pub use frames::{FrameQueue, SharedFrameQueue};
