use alloc::sync::Arc;

use crate::{DEFAULT_ITEM_DELAY_MS, DEFAULT_ITEM_DURATION_MS, Direction, StaggerConfig, StaggerMode};

/// A callback fired whenever the scheduler publishes a new visibility array.
pub type OnChangeCallback = Arc<dyn Fn(&[bool]) + Send + Sync>;

/// A callback fired once per completed transition (including the initial settle).
pub type OnCompleteCallback = Arc<dyn Fn() + Send + Sync>;

/// Configuration for [`crate::StaggerScheduler`].
///
/// Cheap to clone: callbacks are stored in `Arc`s, so adapters can tweak a field and call
/// `StaggerScheduler::set_options` every frame without reallocating closures.
pub struct StaggerOptions {
    pub item_count: usize,
    pub item_delay_ms: u64,
    pub item_duration_ms: u64,
    pub direction: Direction,
    pub reversed: bool,
    pub mode: StaggerMode,

    /// Fired with the new visibility array each time it is published.
    pub on_change: Option<OnChangeCallback>,

    /// Fired once when a transition settles. Cancelled transitions never fire it.
    pub on_complete: Option<OnCompleteCallback>,
}

impl Clone for StaggerOptions {
    fn clone(&self) -> Self {
        Self {
            item_count: self.item_count,
            item_delay_ms: self.item_delay_ms,
            item_duration_ms: self.item_duration_ms,
            direction: self.direction,
            reversed: self.reversed,
            mode: self.mode,
            on_change: self.on_change.clone(),
            on_complete: self.on_complete.clone(),
        }
    }
}

impl StaggerOptions {
    pub fn new(item_count: usize, direction: Direction) -> Self {
        Self {
            item_count,
            item_delay_ms: DEFAULT_ITEM_DELAY_MS,
            item_duration_ms: DEFAULT_ITEM_DURATION_MS,
            direction,
            reversed: false,
            mode: StaggerMode::Timing,
            on_change: None,
            on_complete: None,
        }
    }

    /// The pure timing parameters, as consumed by [`crate::evaluate_stagger_at_time`].
    pub fn config(&self) -> StaggerConfig {
        StaggerConfig {
            item_count: self.item_count,
            item_delay_ms: self.item_delay_ms,
            item_duration_ms: self.item_duration_ms,
            direction: self.direction,
            reversed: self.reversed,
        }
    }

    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    pub fn with_item_delay(mut self, item_delay_ms: u64) -> Self {
        self.item_delay_ms = item_delay_ms;
        self
    }

    pub fn with_item_duration(mut self, item_duration_ms: u64) -> Self {
        self.item_duration_ms = item_duration_ms;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    pub fn with_mode(mut self, mode: StaggerMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&[bool]) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_complete(
        mut self,
        on_complete: Option<impl Fn() + Send + Sync + 'static>,
    ) -> Self {
        self.on_complete = on_complete.map(|f| Arc::new(f) as _);
        self
    }
}

impl From<StaggerConfig> for StaggerOptions {
    fn from(config: StaggerConfig) -> Self {
        Self::new(config.item_count, config.direction)
            .with_item_delay(config.item_delay_ms)
            .with_item_duration(config.item_duration_ms)
            .with_reversed(config.reversed)
    }
}

impl core::fmt::Debug for StaggerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StaggerOptions")
            .field("item_count", &self.item_count)
            .field("item_delay_ms", &self.item_delay_ms)
            .field("item_duration_ms", &self.item_duration_ms)
            .field("direction", &self.direction)
            .field("reversed", &self.reversed)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
