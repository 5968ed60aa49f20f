/// Whether a transition reveals (`Enter`) or hides (`Exit`) its items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    Enter,
    Exit,
}

impl Direction {
    /// Visibility every item rests in once a transition in this direction completes.
    pub fn settled(self) -> bool {
        matches!(self, Self::Enter)
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Enter => Self::Exit,
            Self::Exit => Self::Enter,
        }
    }
}

/// How a [`crate::StaggerScheduler`] produces visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StaggerMode {
    /// Visibility is stepped over elapsed time with a frame clock.
    #[default]
    Timing,
    /// Visibility is driven externally (e.g. items are mounted/unmounted with per-item delays).
    /// The scheduler only publishes settled snapshots and never subscribes to the clock.
    Settled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Iterations {
    Count(u32),
    Infinite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillMode {
    None,
    Forwards,
    Backwards,
    Both,
    Auto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompositeMode {
    Replace,
    Add,
    Accumulate,
}

/// Where an atom is relative to its enclosing collection's clock.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AtomPhase {
    /// `elapsed < delay`.
    Pending,
    /// Playing; `progress` is linear in `[0, 1)`.
    Active { progress: f32 },
    Finished,
}

impl AtomPhase {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }
}
