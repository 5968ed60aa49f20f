use motion_timing::{Direction, StaggerOptions, StaggerScheduler};

use crate::SharedFrameQueue;

/// A framework-neutral controller that wraps a `motion_timing::StaggerScheduler` and its frame
/// source.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `enter` / `exit` / `toggle` when the presence of the item set changes
/// - `set_item_count` when items are added or removed
/// - `tick(now_ms)` each animation frame while `is_animating()` is true
///
/// Controllers created with [`Self::with_frames`] share one [`SharedFrameQueue`]; each still
/// claims only its own frames, so a host can tick all of them from one loop.
#[derive(Debug)]
pub struct StaggerController {
    s: StaggerScheduler<SharedFrameQueue>,
    frames: SharedFrameQueue,
}

impl StaggerController {
    pub fn new(options: StaggerOptions) -> Self {
        Self::with_frames(options, SharedFrameQueue::new())
    }

    pub fn with_frames(options: StaggerOptions, frames: SharedFrameQueue) -> Self {
        Self {
            s: StaggerScheduler::new(options, frames.clone()),
            frames,
        }
    }

    pub fn scheduler(&self) -> &StaggerScheduler<SharedFrameQueue> {
        &self.s
    }

    pub fn scheduler_mut(&mut self) -> &mut StaggerScheduler<SharedFrameQueue> {
        &mut self.s
    }

    pub fn frames(&self) -> &SharedFrameQueue {
        &self.frames
    }

    pub fn visibility(&self) -> &[bool] {
        self.s.visibility()
    }

    pub fn direction(&self) -> Direction {
        self.s.options().direction
    }

    pub fn is_animating(&self) -> bool {
        self.s.is_running()
    }

    /// Stops the transition in flight, leaving visibility where it is. No completion is reported.
    pub fn cancel_animation(&mut self) {
        self.s.cancel();
    }

    pub fn enter(&mut self) {
        self.s.set_direction(Direction::Enter);
    }

    pub fn exit(&mut self) {
        self.s.set_direction(Direction::Exit);
    }

    pub fn toggle(&mut self) {
        let next = self.direction().opposite();
        self.s.set_direction(next);
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        self.s.set_item_count(item_count);
    }

    pub fn set_reversed(&mut self, reversed: bool) {
        self.s.update_options(|o| o.reversed = reversed);
    }

    pub fn set_options(&mut self, options: StaggerOptions) {
        self.s.set_options(options);
    }

    /// Advances the controller.
    ///
    /// - If a frame is pending for this controller, delivers it and returns the new visibility.
    /// - Otherwise (idle, or the frame was already claimed elsewhere), returns `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<&[bool]> {
        let token = self.s.pending_frame()?;
        if !self.frames.deliver(token) {
            atrace!(token = token.get(), "tick: frame already claimed");
            return None;
        }
        self.s.on_frame(token, now_ms);
        Some(self.s.visibility())
    }
}
