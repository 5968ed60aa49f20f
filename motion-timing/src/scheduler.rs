use alloc::vec::Vec;

use crate::{
    Direction, FrameClock, FrameToken, StaggerConfig, StaggerMode, StaggerOptions, StaggerSnapshot,
    evaluate_stagger_at_time, initial_visibility, settled_visibility,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Constructed, first settle not yet applied.
    Uninitialized,
    Idle,
    Running {
        token: FrameToken,
        /// Timestamp of the first delivered frame of this run.
        start_ms: Option<u64>,
    },
}

/// Drives a staggered transition across animation frames.
///
/// The scheduler owns the visibility array and is the only thing that mutates it:
/// - Construction settles immediately for the starting direction and reports completion. No
///   frame is requested, since there is no previous state to animate from.
/// - Changing `direction` bumps the epoch, resets visibility to the state the transition
///   animates from, and starts a fresh run (cancelling any run in flight).
/// - Changing only `item_count` resizes the array in place (new slots take the settled value
///   for the current direction) without starting a run.
///
/// The host delivers frames with [`Self::on_frame`]. Frames whose token is not the one
/// currently pending are ignored, so a cancelled run can never publish again.
pub struct StaggerScheduler<C: FrameClock> {
    options: StaggerOptions,
    clock: C,
    visibility: Vec<bool>,
    epoch: u64,
    phase: Phase,
}

impl<C: FrameClock> StaggerScheduler<C> {
    pub fn new(options: StaggerOptions, clock: C) -> Self {
        mdebug!(
            item_count = options.item_count,
            item_delay_ms = options.item_delay_ms,
            item_duration_ms = options.item_duration_ms,
            "StaggerScheduler::new"
        );
        let mut s = Self {
            options,
            clock,
            visibility: Vec::new(),
            epoch: 0,
            phase: Phase::Uninitialized,
        };
        s.settle_initial();
        s
    }

    fn settle_initial(&mut self) {
        debug_assert_eq!(self.phase, Phase::Uninitialized);
        self.visibility = settled_visibility(self.options.item_count, self.options.direction);
        self.phase = Phase::Idle;
        self.notify();
        self.complete();
    }

    pub fn options(&self) -> &StaggerOptions {
        &self.options
    }

    pub fn config(&self) -> StaggerConfig {
        self.options.config()
    }

    /// The current visibility, one entry per item.
    pub fn visibility(&self) -> &[bool] {
        &self.visibility
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    /// The frame this scheduler is waiting for, if a run is in progress.
    pub fn pending_frame(&self) -> Option<FrameToken> {
        match self.phase {
            Phase::Running { token, .. } => Some(token),
            _ => None,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn snapshot(&self) -> StaggerSnapshot {
        StaggerSnapshot {
            visibility: self.visibility.clone(),
            epoch: self.epoch,
            running: self.is_running(),
        }
    }

    /// Applies new options, deciding from the previous options what has to happen.
    pub fn set_options(&mut self, options: StaggerOptions) {
        let prev_direction = self.options.direction;
        let prev_count = self.options.item_count;
        self.options = options;
        mtrace!(
            item_count = self.options.item_count,
            reversed = self.options.reversed,
            "StaggerScheduler::set_options"
        );

        if self.options.direction != prev_direction {
            self.epoch = self.epoch.wrapping_add(1);
            mdebug!(epoch = self.epoch, direction = ?self.options.direction, "stagger epoch");
            self.cancel();
            match self.options.mode {
                StaggerMode::Timing => {
                    self.visibility =
                        initial_visibility(self.options.item_count, self.options.direction);
                    self.notify();
                    self.start_run();
                }
                StaggerMode::Settled => {
                    self.visibility =
                        settled_visibility(self.options.item_count, self.options.direction);
                    self.notify();
                    self.complete();
                }
            }
            return;
        }

        if self.options.mode == StaggerMode::Settled {
            let settled = settled_visibility(self.options.item_count, self.options.direction);
            if self.is_running() || self.visibility != settled {
                let was_running = self.is_running();
                self.cancel();
                self.visibility = settled;
                self.notify();
                // Items jump straight to the state the run was heading for, so the transition
                // did finish. A run stopped earlier with `cancel` stays unreported.
                if was_running {
                    self.complete();
                }
            }
            return;
        }

        if self.options.item_count != prev_count {
            mtrace!(
                from = prev_count,
                to = self.options.item_count,
                "stagger resize"
            );
            self.visibility
                .resize(self.options.item_count, self.options.direction.settled());
            self.notify();
        }
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut StaggerOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        self.update_options(|o| o.item_count = item_count);
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.update_options(|o| o.direction = direction);
    }

    fn start_run(&mut self) {
        debug_assert!(!self.is_running(), "previous run must be cancelled first");
        let token = self.clock.request_frame();
        mdebug!(token = token.get(), epoch = self.epoch, "stagger run start");
        self.phase = Phase::Running {
            token,
            start_ms: None,
        };
    }

    /// Delivers an animation frame.
    ///
    /// Returns `true` when the frame belonged to the current run and new visibility was
    /// published. Stale or unknown tokens are ignored.
    pub fn on_frame(&mut self, token: FrameToken, now_ms: u64) -> bool {
        let (pending, start_ms) = match self.phase {
            Phase::Running {
                token: pending,
                start_ms,
            } => (pending, start_ms),
            _ => {
                mtrace!(token = token.get(), "stale frame (idle)");
                return false;
            }
        };
        if pending != token {
            mtrace!(
                token = token.get(),
                pending = pending.get(),
                "stale frame"
            );
            return false;
        }

        let start_ms = start_ms.unwrap_or(now_ms);
        let elapsed = now_ms.saturating_sub(start_ms);
        let result = evaluate_stagger_at_time(&self.options.config(), elapsed);
        self.visibility = result.items_visibility;
        self.notify();

        if elapsed < result.total_duration {
            let next = self.clock.request_frame();
            if next == token {
                mwarn!(token = next.get(), "FrameClock reused a delivered token");
                debug_assert_ne!(next, token, "FrameClock reused a delivered token");
            }
            self.phase = Phase::Running {
                token: next,
                start_ms: Some(start_ms),
            };
        } else {
            mdebug!(elapsed, epoch = self.epoch, "stagger run finished");
            self.phase = Phase::Idle;
            self.complete();
        }
        true
    }

    /// Cancels the run in flight, if any. The completion callback is not fired.
    pub fn cancel(&mut self) {
        if let Phase::Running { token, .. } = self.phase {
            mdebug!(token = token.get(), "stagger run cancelled");
            self.phase = Phase::Idle;
            self.clock.cancel_frame(token);
        }
    }

    fn notify(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(&self.visibility);
        }
    }

    fn complete(&self) {
        if let Some(cb) = &self.options.on_complete {
            cb();
        }
    }
}

impl<C: FrameClock> Drop for StaggerScheduler<C> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<C: FrameClock> core::fmt::Debug for StaggerScheduler<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StaggerScheduler")
            .field("options", &self.options)
            .field("visibility", &self.visibility)
            .field("epoch", &self.epoch)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}
