use alloc::collections::BTreeSet;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use motion_timing::{FrameClock, FrameToken};

/// A deterministic frame clock that only records requests.
///
/// The host decides when a frame happens: it either drains every pending token with
/// [`FrameQueue::take_pending`] and routes each to its owner, or lets each owner claim its own
/// token with [`FrameQueue::deliver`]. Tokens are never reused, so a cancelled request can never
/// be mistaken for a live one.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameQueue {
    next_id: u64,
    pending: BTreeSet<FrameToken>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, token: FrameToken) -> bool {
        self.pending.contains(&token)
    }

    /// Claims a pending token for delivery.
    ///
    /// Returns `false` if the token was cancelled, already delivered, or never requested.
    pub fn deliver(&mut self, token: FrameToken) -> bool {
        self.pending.remove(&token)
    }

    /// Drains every pending token in request order.
    pub fn take_pending(&mut self) -> Vec<FrameToken> {
        core::mem::take(&mut self.pending).into_iter().collect()
    }
}

impl FrameClock for FrameQueue {
    fn request_frame(&mut self) -> FrameToken {
        self.next_id = self.next_id.wrapping_add(1);
        let token = FrameToken::new(self.next_id);
        self.pending.insert(token);
        atrace!(token = token.get(), "request_frame");
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        if !self.pending.remove(&token) {
            awarn!(token = token.get(), "cancel_frame: token is not pending");
        }
    }
}

/// A cloneable handle to a [`FrameQueue`], so several schedulers can share one frame source.
///
/// Each scheduler still receives its own tokens; cancelling one never touches another's.
#[derive(Clone, Debug, Default)]
pub struct SharedFrameQueue {
    inner: Rc<RefCell<FrameQueue>>,
}

impl SharedFrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_pending(&self) -> bool {
        self.inner.borrow().has_pending()
    }

    pub fn pending_len(&self) -> usize {
        self.inner.borrow().pending_len()
    }

    pub fn is_pending(&self, token: FrameToken) -> bool {
        self.inner.borrow().is_pending(token)
    }

    pub fn deliver(&self, token: FrameToken) -> bool {
        self.inner.borrow_mut().deliver(token)
    }

    pub fn take_pending(&self) -> Vec<FrameToken> {
        self.inner.borrow_mut().take_pending()
    }
}

impl FrameClock for SharedFrameQueue {
    fn request_frame(&mut self) -> FrameToken {
        self.inner.borrow_mut().request_frame()
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.inner.borrow_mut().cancel_frame(token)
    }
}
