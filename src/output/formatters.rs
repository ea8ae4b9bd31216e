use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::extractors::Caption;

const MICROS_PER_MILLI: u64 = 1_000;
const MICROS_PER_SECOND: u64 = 1_000_000;

/// Rendered SRT text together with the number of caption blocks it holds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleTrack {
    pub content: String,
    pub count: usize,
}

impl SubtitleTrack {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Format microseconds as an SRT timestamp (`HH:MM:SS,mmm`).
///
/// Every component is truncated, never rounded, and hours are not wrapped at 24.
pub fn format_timestamp(micros: u64) -> String {
    let total_seconds = micros / MICROS_PER_SECOND;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    let millis = (micros % MICROS_PER_SECOND) / MICROS_PER_MILLI;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}

/// Render captions as SRT, ordered by start time.
///
/// The sort is stable, so captions sharing a start time keep their discovery order.
pub fn format_as_srt(captions: &[Caption]) -> SubtitleTrack {
    let mut ordered: Vec<&Caption> = captions.iter().collect();
    ordered.sort_by_key(|caption| caption.start_time);

    let mut content = String::new();
    for (i, caption) in ordered.iter().enumerate() {
        // Writing into a String cannot fail
        let _ = write!(
            content,
            "{}\n{} --> {}\n{}\n\n",
            i + 1,
            format_timestamp(caption.start_time),
            format_timestamp(caption.end_time),
            caption.text
        );
    }

    SubtitleTrack {
        content,
        count: ordered.len(),
    }
}
