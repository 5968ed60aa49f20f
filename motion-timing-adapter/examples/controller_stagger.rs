// Example: two lists on screen share one frame queue; the host ticks both each frame.
use motion_timing::{Direction, StaggerOptions};
use motion_timing_adapter::{SharedFrameQueue, StaggerController};

fn main() {
    let frames = SharedFrameQueue::new();

    let mut menu = StaggerController::with_frames(
        StaggerOptions::new(4, Direction::Exit).with_item_delay(50),
        frames.clone(),
    );
    let mut toasts = StaggerController::with_frames(
        StaggerOptions::new(3, Direction::Enter)
            .with_item_delay(80)
            .with_reversed(true),
        frames.clone(),
    );

    menu.enter();
    toasts.exit();

    let mut now_ms = 0u64;
    while frames.has_pending() {
        if let Some(v) = menu.tick(now_ms) {
            println!("t={now_ms}ms menu={v:?}");
        }
        if let Some(v) = toasts.tick(now_ms) {
            println!("t={now_ms}ms toasts={v:?}");
        }

        // Simulate the user closing the menu mid-animation.
        if now_ms == 96 {
            menu.exit();
        }
        now_ms += 16;
    }

    println!("menu={:?} toasts={:?}", menu.visibility(), toasts.visibility());
}
