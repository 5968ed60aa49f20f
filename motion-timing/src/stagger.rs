use alloc::vec;
use alloc::vec::Vec;

use crate::Direction;

pub const DEFAULT_ITEM_DELAY_MS: u64 = 100;
pub const DEFAULT_ITEM_DURATION_MS: u64 = 200;

/// Parameters of one staggered transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaggerConfig {
    pub item_count: usize,
    /// Time between two consecutive items starting. `0` steps every item at once.
    pub item_delay_ms: u64,
    pub item_duration_ms: u64,
    pub direction: Direction,
    /// Steps items from the last index to the first.
    pub reversed: bool,
}

impl StaggerConfig {
    pub fn new(item_count: usize, direction: Direction) -> Self {
        Self {
            item_count,
            item_delay_ms: DEFAULT_ITEM_DELAY_MS,
            item_duration_ms: DEFAULT_ITEM_DURATION_MS,
            direction,
            reversed: false,
        }
    }

    pub fn with_item_delay(mut self, item_delay_ms: u64) -> Self {
        self.item_delay_ms = item_delay_ms;
        self
    }

    pub fn with_item_duration(mut self, item_duration_ms: u64) -> Self {
        self.item_duration_ms = item_duration_ms;
        self
    }

    pub fn with_reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    /// Time from the first item starting to the last item finishing.
    ///
    /// `item_delay * (count - 1) + item_duration`, or `0` when there are no items.
    pub fn total_duration(&self) -> u64 {
        match self.item_count {
            0 => 0,
            1 => self.item_duration_ms,
            n => self
                .item_delay_ms
                .saturating_mul((n - 1) as u64)
                .saturating_add(self.item_duration_ms),
        }
    }
}

impl Default for StaggerConfig {
    fn default() -> Self {
        Self::new(0, Direction::Enter)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaggerResult {
    /// One entry per item; always `item_count` long.
    pub items_visibility: Vec<bool>,
    pub total_duration: u64,
}

/// Computes which items of a staggered set are visible `elapsed_ms` after the transition
/// started.
///
/// Entering reveals one more item every `item_delay_ms`, with the first item already shown at
/// `elapsed_ms == 0`. Exiting hides one more item every `item_delay_ms`, but every item is
/// still shown at `elapsed_ms == 0`. This boundary asymmetry is intentional: nothing has been
/// dismissed yet at the instant the hide starts. Any elapsed time past the end yields the
/// settled state.
pub fn evaluate_stagger_at_time(config: &StaggerConfig, elapsed_ms: u64) -> StaggerResult {
    let count = config.item_count;
    if count == 0 {
        return StaggerResult::default();
    }

    let total_duration = config.total_duration();

    let completed_steps = if config.item_delay_ms == 0 {
        count
    } else {
        let offset = match config.direction {
            Direction::Enter => 1,
            Direction::Exit => 0,
        };
        let steps = (elapsed_ms / config.item_delay_ms).saturating_add(offset);
        usize::try_from(steps).unwrap_or(usize::MAX).min(count)
    };

    let items_visibility = (0..count)
        .map(|idx| {
            let from_start = idx < completed_steps;
            let from_end = idx >= count - completed_steps;
            let stepped = if config.reversed { from_end } else { from_start };
            match config.direction {
                Direction::Enter => stepped,
                Direction::Exit => !stepped,
            }
        })
        .collect();

    StaggerResult {
        items_visibility,
        total_duration,
    }
}

/// The visibility every item rests in once a transition in `direction` has completed.
pub fn settled_visibility(item_count: usize, direction: Direction) -> Vec<bool> {
    vec![direction.settled(); item_count]
}

/// The visibility a transition in `direction` animates *from*: hidden for enter, shown for exit.
pub fn initial_visibility(item_count: usize, direction: Direction) -> Vec<bool> {
    vec![!direction.settled(); item_count]
}

/// Per-item start offsets for consumers that delay each item themselves instead of toggling
/// visibility over time.
pub fn item_delays(config: &StaggerConfig) -> Vec<u64> {
    let count = config.item_count;
    (0..count)
        .map(|idx| {
            let step = if config.reversed { count - 1 - idx } else { idx };
            config.item_delay_ms.saturating_mul(step as u64)
        })
        .collect()
}
