// Example: drive a stagger scheduler from a simulated 60fps frame loop.
use motion_timing::{
    Direction, FrameClock, FrameToken, StaggerOptions, StaggerScheduler, evaluate_stagger_at_time,
};

#[derive(Default)]
struct Frames {
    next: u64,
    pending: Option<FrameToken>,
}

impl FrameClock for Frames {
    fn request_frame(&mut self) -> FrameToken {
        self.next += 1;
        let token = FrameToken::new(self.next);
        self.pending = Some(token);
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        if self.pending == Some(token) {
            self.pending = None;
        }
    }
}

fn main() {
    // The pure function alone, e.g. for snapshotting.
    let config = StaggerOptions::new(5, Direction::Enter).config();
    for t in [0, 100, 250, 500] {
        println!("t={t}ms {:?}", evaluate_stagger_at_time(&config, t));
    }

    let options = StaggerOptions::new(5, Direction::Exit)
        .with_item_delay(60)
        .with_item_duration(120)
        .with_on_complete(Some(|| println!("settled")));
    let mut s = StaggerScheduler::new(options, Frames::default());

    s.set_direction(Direction::Enter);
    let mut now_ms = 0u64;
    while let Some(token) = s.clock_mut().pending.take() {
        s.on_frame(token, now_ms);
        println!("t={now_ms}ms {:?}", s.visibility());
        now_ms += 16;
    }
}
