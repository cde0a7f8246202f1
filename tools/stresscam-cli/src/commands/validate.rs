//! Validate an observation stream.

use std::path::PathBuf;

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Validating observations at: {}", path.display());

    let stream = super::load_stream(&path)?;
    println!("  Frames: {}", stream.frames.len());

    let mut issues = Vec::new();

    let mut last_index: Option<u64> = None;
    for frame in &stream.frames {
        if let Some(previous) = last_index {
            if frame.frame_index <= previous {
                issues.push(format!(
                    "frame index {} follows {} (indices must be strictly increasing)",
                    frame.frame_index, previous
                ));
            }
        }
        last_index = Some(frame.frame_index);

        for (face_index, face) in frame.faces.iter().enumerate() {
            if face.emotions.has_out_of_range() {
                issues.push(format!(
                    "frame {}, face {face_index}: emotion probability outside [0, 1]",
                    frame.frame_index
                ));
            }
            if let Some(region) = face.region {
                let in_range = |v: f64| v.is_finite() && (0.0..=1.0).contains(&v);
                if !(in_range(region.x)
                    && in_range(region.y)
                    && in_range(region.w)
                    && in_range(region.h))
                {
                    issues.push(format!(
                        "frame {}, face {face_index}: region coordinates outside [0, 1]",
                        frame.frame_index
                    ));
                }
            }
        }
    }

    if issues.is_empty() {
        println!("\nStream is valid.");
    } else {
        println!("\nValidation issues:");
        for issue in &issues {
            println!("  - {issue}");
        }
        println!("\n{} issue(s) found.", issues.len());
    }

    Ok(())
}
