// Example: build a nested group/sequence and inspect what plays when.
use motion_timing::{Atom, AtomPhase, Collection, FillMode, Motion, group, sequence};

fn fade(delay: u64, duration: u64) -> Atom<&'static str> {
    Atom::new(vec!["opacity: 0", "opacity: 1"])
        .with_delay(delay)
        .with_duration(duration)
        .with_fill(FillMode::Both)
}

fn main() {
    // Two overlapping fades play together, then a third follows once both are done.
    let together: Collection<&str> = group([fade(0, 150), fade(50, 200)]);
    let motion: Collection<&str> = sequence([
        Motion::from(fade(0, 100)),
        Motion::from(together),
        Motion::from(fade(0, 300)),
    ]);

    for (i, atom) in motion.iter().enumerate() {
        println!(
            "atom {i}: delay={} duration={} end={}",
            atom.delay(),
            atom.duration(),
            atom.end_time()
        );
    }
    println!("total={}", motion.end_time());

    for t in (0..=motion.end_time()).step_by(100) {
        let active: Vec<String> = motion
            .phases_at(t)
            .map(|p| match p {
                AtomPhase::Pending => "-".to_string(),
                AtomPhase::Active { progress } => format!("{:.2}", progress),
                AtomPhase::Finished => "x".to_string(),
            })
            .collect();
        println!("t={t}ms {active:?}");
    }
}
