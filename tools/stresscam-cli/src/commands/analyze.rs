//! Score a recorded observation stream.

use std::path::PathBuf;

use stresscam_common::config::AppConfig;
use stresscam_scoring_core::{DominantFacePolicy, NoFacePolicy, ScoringConfig};
use stresscam_session::StressSession;

pub fn run(
    path: PathBuf,
    capacity: Option<usize>,
    append_zero: bool,
    last_face_dominant: bool,
    json: bool,
) -> anyhow::Result<()> {
    if !json {
        println!("Analyzing observations at: {}", path.display());
    }

    let stream = super::load_stream(&path)?;
    if stream.frames.is_empty() {
        println!("  No frames to analyze.");
        return Ok(());
    }

    // Saved config provides the baseline; flags override it.
    let app = AppConfig::load();
    app.scoring.validate()?;
    let mut config = ScoringConfig::from_defaults(&app.scoring);
    if append_zero {
        config.no_face_policy = NoFacePolicy::AppendZero;
    }
    if last_face_dominant {
        config.dominant_policy = DominantFacePolicy::LastFace;
    }
    let capacity = capacity.unwrap_or(app.scoring.history_capacity);

    let mut session = StressSession::new(config, capacity);
    for frame in &stream.frames {
        let reading = session.observe(frame);
        if json {
            println!("{}", serde_json::to_string(&reading)?);
        }
    }

    if json {
        return Ok(());
    }

    let stats = session.stats();
    println!("  Frames: {}", stats.frames_seen);
    println!(
        "  Faces detected: {} frames ({:.1}%)",
        stats.frames_scored,
        stats.detection_rate()
    );

    // stream.frames is non-empty, so a reading exists
    if let Some(reading) = session.last_reading() {
        println!();
        println!("  Current score:  {}", reading.instantaneous);
        println!("  Smoothed score: {}", reading.smoothed);
        println!("  Stress level:   {}", reading.level);
        println!("  Dominant emotion: {}", reading.dominant.display_name());
    }

    println!();
    println!("  Trend (oldest to newest):");
    println!("  {}", sparkline(&session.trend()));
    println!("\nAnalysis complete.");

    Ok(())
}

/// Render scores as a unicode bar chart, one glyph per history slot.
fn sparkline(scores: &[u8]) -> String {
    const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    scores
        .iter()
        .map(|&s| BARS[(s as usize * (BARS.len() - 1)) / 100])
        .collect()
}
