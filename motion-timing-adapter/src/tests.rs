use crate::*;

use alloc::sync::Arc;
use core::sync::atomic::{AtomicUsize, Ordering};

use motion_timing::{Direction, FrameClock, StaggerOptions};

fn options(item_count: usize, direction: Direction) -> StaggerOptions {
    StaggerOptions::new(item_count, direction)
        .with_item_delay(100)
        .with_item_duration(200)
}

#[test]
fn frame_queue_tracks_requests_and_cancellation() {
    let mut q = FrameQueue::new();
    let a = q.request_frame();
    let b = q.request_frame();
    let c = q.request_frame();
    assert_ne!(a, b);
    assert_eq!(q.pending_len(), 3);

    q.cancel_frame(b);
    assert!(!q.is_pending(b));
    assert!(q.deliver(a));
    assert!(!q.deliver(a));
    assert_eq!(q.take_pending(), [c]);
    assert!(!q.has_pending());

    // Tokens are not reused after being drained.
    let d = q.request_frame();
    assert!(d > c);
}

#[test]
fn controller_tick_drives_enter_to_completion() {
    let done = Arc::new(AtomicUsize::new(0));
    let done2 = Arc::clone(&done);
    let mut c = StaggerController::new(options(3, Direction::Exit).with_on_complete(Some(
        move || {
            done2.fetch_add(1, Ordering::SeqCst);
        },
    )));
    assert_eq!(c.visibility(), [false, false, false]);
    assert_eq!(c.tick(0), None);

    c.enter();
    assert!(c.is_animating());
    assert_eq!(c.frames().pending_len(), 1);

    let mut seen = std::vec::Vec::new();
    for now_ms in [1_000u64, 1_016, 1_100, 1_200, 1_300, 1_400] {
        if let Some(v) = c.tick(now_ms) {
            seen.push(v.to_vec());
        }
    }
    assert_eq!(seen[0], [true, false, false]);
    assert_eq!(seen[2], [true, true, false]);
    assert_eq!(seen.last().unwrap(), &[true, true, true]);
    assert_eq!(seen.len(), 6);
    assert!(!c.is_animating());
    assert!(!c.frames().has_pending());
    assert_eq!(done.load(Ordering::SeqCst), 2);
    assert_eq!(c.tick(2_000), None);
}

#[test]
fn controllers_sharing_frames_do_not_interfere() {
    let frames = SharedFrameQueue::new();
    let mut a = StaggerController::with_frames(options(2, Direction::Exit), frames.clone());
    let mut b = StaggerController::with_frames(options(4, Direction::Enter), frames.clone());

    a.enter();
    b.exit();
    assert_eq!(frames.pending_len(), 2);

    b.cancel_animation();
    assert_eq!(frames.pending_len(), 1);
    assert_eq!(b.tick(0), None);
    assert_eq!(b.visibility(), [true, true, true, true]);

    assert_eq!(a.tick(0).map(|v| v.to_vec()), Some(std::vec![true, false]));
    assert_eq!(frames.pending_len(), 1);
    assert!(a.is_animating());
}

#[test]
fn host_can_route_drained_frames() {
    let frames = SharedFrameQueue::new();
    let mut a = StaggerController::with_frames(options(2, Direction::Exit), frames.clone());
    a.enter();

    let drained = frames.take_pending();
    assert_eq!(drained.len(), 1);
    // Once drained, the controller cannot claim the frame itself...
    assert_eq!(a.tick(0), None);
    // ...but the host can deliver it directly to the owning scheduler.
    assert!(a.scheduler_mut().on_frame(drained[0], 0));
    assert_eq!(a.visibility(), [true, false]);
}

#[test]
fn toggle_restarts_from_the_opposite_state() {
    let mut c = StaggerController::new(options(3, Direction::Enter));
    c.toggle();
    assert_eq!(c.direction(), Direction::Exit);
    assert_eq!(c.visibility(), [true, true, true]);
    c.tick(0);
    c.tick(100);
    assert_eq!(c.visibility(), [false, true, true]);

    c.toggle();
    assert_eq!(c.direction(), Direction::Enter);
    assert_eq!(c.scheduler().epoch(), 2);
    assert_eq!(c.visibility(), [false, false, false]);
    assert_eq!(c.frames().pending_len(), 1);
}

#[test]
fn item_count_and_reversed_changes_keep_the_run() {
    let mut c = StaggerController::new(options(2, Direction::Exit));
    c.enter();
    c.tick(0);
    c.set_item_count(3);
    assert_eq!(c.visibility(), [true, false, true]);
    c.set_reversed(true);
    assert!(c.is_animating());
    assert_eq!(c.tick(100).map(|v| v.to_vec()), Some(std::vec![false, true, true]));
}

#[test]
fn dropping_a_controller_releases_its_frame() {
    let frames = SharedFrameQueue::new();
    {
        let mut c = StaggerController::with_frames(options(2, Direction::Exit), frames.clone());
        c.enter();
        assert!(frames.has_pending());
    }
    assert!(!frames.has_pending());
}

#[cfg(feature = "serde")]
#[test]
fn frame_queue_is_serializable() {
    fn assert_serde<T: serde::Serialize + serde::de::DeserializeOwned>() {}
    assert_serde::<FrameQueue>();
}
