use anyhow::{Context, Result};
use std::path::Path;

pub mod formatters;

pub use formatters::*;

/// Save rendered subtitles to file, creating the parent directory if needed
pub fn save_to_file(track: &SubtitleTrack, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
    }

    fs_err::write(path, &track.content).context("Failed to write subtitle file")?;
    tracing::info!("Wrote {} caption(s) to {}", track.count, path.display());
    Ok(())
}

/// Print rendered subtitles to console
pub fn print_to_console(track: &SubtitleTrack) {
    print!("{}", track.content);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_to_file_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result").join("captions.srt");
        let track = SubtitleTrack {
            content: "1\n00:00:00,000 --> 00:00:01,000\nHi\n\n".to_string(),
            count: 1,
        };

        save_to_file(&track, &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), track.content);
    }
}
