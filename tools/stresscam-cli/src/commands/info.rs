//! Show observation stream information.

use std::path::PathBuf;

use stresscam_emotion_model::EmotionLabel;

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Observation stream: {}", path.display());

    let stream = super::load_stream(&path)?;

    match &stream.header {
        Some(header) => {
            println!("  Schema version: {}", header.schema_version);
            println!("  Source: {:?}", header.source);
            println!("  Started: {}", header.started_wall);
            if let Some(rate) = header.frame_rate_hint {
                println!("  Frame rate hint: {rate} fps");
            }
        }
        None => println!("  Header: none"),
    }

    let total_faces: usize = stream.frames.iter().map(|f| f.faces.len()).sum();
    let faceless = stream.frames.iter().filter(|f| !f.has_faces()).count();
    println!("  Frames: {}", stream.frames.len());
    println!("  Faces: {total_faces} ({faceless} frames with no face)");

    // Per-face dominant emotion distribution
    let mut counts = [0usize; EmotionLabel::ALL.len()];
    for frame in &stream.frames {
        for face in &frame.faces {
            let (label, _) = face.emotions.dominant();
            counts[label as usize] += 1;
        }
    }
    if total_faces > 0 {
        println!("  Dominant emotions:");
        for label in EmotionLabel::ALL {
            let count = counts[label as usize];
            if count > 0 {
                println!(
                    "    {:<10} {count:>5} ({:.1}%)",
                    label.display_name(),
                    count as f64 / total_faces as f64 * 100.0
                );
            }
        }
    }

    Ok(())
}
