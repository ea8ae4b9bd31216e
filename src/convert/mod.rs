use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use std::path::Path;

use crate::draft::{self, FRAGMENT_LIST_KEY};
use crate::extractors::{extract_caption, Caption};
use crate::output::{format_as_srt, SubtitleTrack};
use crate::ConverterError;

/// Result of converting one draft document
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// Number of fragments found in the draft
    pub fragments: usize,

    /// Rendered subtitles
    pub track: SubtitleTrack,

    /// Latest caption end time, in microseconds
    pub last_end_time: Option<u64>,
}

/// Draft to SRT conversion pipeline.
///
/// Holds no per-document state, so one pipeline can convert any number of drafts.
#[derive(Debug, Clone, Default)]
pub struct CaptionPipeline {
    show_progress: bool,
}

impl CaptionPipeline {
    pub fn new(show_progress: bool) -> Self {
        Self { show_progress }
    }

    /// Load a draft from disk and convert it
    pub fn convert_file(&self, input: &Path) -> Result<ConversionReport, ConverterError> {
        tracing::info!("Reading draft: {}", input.display());
        let document = draft::load_document(input)?;
        self.convert_document(&document)
    }

    /// Convert an already parsed draft.
    ///
    /// Fails when the fragment list is missing or yields no captions.
    pub fn convert_document(&self, document: &Value) -> Result<ConversionReport, ConverterError> {
        let fragments = draft::find_fragment_list(document)?;
        tracing::info!("Found {} entries in {}", fragments.len(), FRAGMENT_LIST_KEY);

        let captions = self.extract_captions(fragments);
        if captions.is_empty() {
            return Err(ConverterError::NoCaptions {
                fragments: fragments.len(),
            });
        }

        let last_end_time = captions.iter().map(|c| c.end_time).max();
        let track = format_as_srt(&captions);

        Ok(ConversionReport {
            fragments: fragments.len(),
            track,
            last_end_time,
        })
    }

    /// Extract every usable caption, in discovery order
    pub fn extract_captions(&self, fragments: &[Value]) -> Vec<Caption> {
        let progress = self.progress_bar(fragments.len() as u64);

        let captions: Vec<Caption> = fragments
            .iter()
            .enumerate()
            .filter_map(|(index, fragment)| {
                progress.inc(1);
                match extract_caption(fragment) {
                    Ok(caption) => Some(caption),
                    Err(reason) => {
                        tracing::debug!("Skipping fragment #{}: {}", index, reason);
                        None
                    }
                }
            })
            .collect();

        progress.finish_and_clear();
        tracing::info!(
            "Extracted {} caption(s), skipped {}",
            captions.len(),
            fragments.len() - captions.len()
        );

        captions
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.show_progress || len == 0 {
            return ProgressBar::hidden();
        }

        let progress = ProgressBar::new(len);
        if let Ok(style) = ProgressStyle::default_bar().template("{spinner:.green} [{bar:30}] {pos}/{len} fragments") {
            progress.set_style(style);
        }
        progress
    }
}
