//! Run a built-in demo scenario through a fresh session.

use stresscam_session::{generate_scenario, DemoScenario, StressSession};

pub fn run(scenario: DemoScenario, frames: usize) -> anyhow::Result<()> {
    println!("Running demo scenario: {scenario} ({frames} frames)");
    println!();

    let mut session = StressSession::with_defaults();
    for frame in generate_scenario(scenario, frames) {
        let reading = session.observe(&frame);
        let marker = if frame.has_faces() { " " } else { "*" };
        println!(
            "  frame {:>4}{marker} score={:>3}  smoothed={:>3}  {:<8}  dominant={}",
            frame.frame_index,
            reading.instantaneous,
            reading.smoothed,
            reading.level.to_string(),
            reading.dominant.display_name()
        );
    }

    let stats = session.stats();
    println!();
    println!(
        "  {} frames, face detected in {} ({:.1}%)",
        stats.frames_seen,
        stats.frames_scored,
        stats.detection_rate()
    );
    if let Some(reading) = session.last_reading() {
        println!("  Final stress level: {}", reading.level);
    }
    println!("\nDemo complete. (* marks frames with no face detected)");

    Ok(())
}
