/// Identifies one requested animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameToken(u64);

impl FrameToken {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// A source of "next animation frame" callbacks.
///
/// The scheduler requests one frame at a time and chains the next request from inside its frame
/// handler. The host delivers each requested frame by calling
/// [`crate::StaggerScheduler::on_frame`] with the returned token and the frame timestamp.
///
/// Tokens must be unique per clock for as long as they are pending, so several schedulers can
/// share one clock without observing each other's frames.
pub trait FrameClock {
    fn request_frame(&mut self) -> FrameToken;

    /// Cancels a pending frame. Called at most once per token.
    fn cancel_frame(&mut self, token: FrameToken);
}

impl<C: FrameClock + ?Sized> FrameClock for &mut C {
    fn request_frame(&mut self) -> FrameToken {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        (**self).cancel_frame(token)
    }
}
