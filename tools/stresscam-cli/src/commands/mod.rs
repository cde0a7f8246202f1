//! CLI command implementations.

pub mod analyze;
pub mod config;
pub mod demo;
pub mod info;
pub mod validate;

use std::path::Path;

use stresscam_common::StresscamError;
use stresscam_emotion_model::ObservationStream;

/// Read and parse an observation stream, mapping failures to user-facing
/// errors.
fn load_stream(path: &Path) -> anyhow::Result<ObservationStream> {
    let content = std::fs::read_to_string(path).map_err(|_| StresscamError::FileNotFound {
        path: path.to_path_buf(),
    })?;
    let stream = ObservationStream::parse(&content)
        .map_err(|e| StresscamError::stream(e.to_string()))?;
    tracing::debug!(
        frames = stream.frames.len(),
        has_header = stream.header.is_some(),
        "Parsed observation stream"
    );
    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reports_file_not_found() {
        let err = load_stream(Path::new("/nonexistent/observations.jsonl")).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_garbage_content_reports_stream_error() {
        let dir = std::env::temp_dir().join(format!("stresscam-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.jsonl");
        std::fs::write(&path, "not json\n").unwrap();

        let err = load_stream(&path).unwrap_err();
        assert!(err.to_string().contains("Observation stream error"));
        std::fs::remove_dir_all(&dir).ok();
    }
}
