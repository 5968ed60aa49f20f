use alloc::vec::Vec;

/// A lightweight, serializable snapshot of a scheduler's observable state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaggerSnapshot {
    pub visibility: Vec<bool>,
    /// Bumped each time the direction changes.
    pub epoch: u64,
    /// Whether a frame is currently requested.
    pub running: bool,
}
