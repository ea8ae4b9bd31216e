//! CapCut SRT - A Rust CLI tool for turning CapCut draft captions into subtitles
//!
//! This library locates the caption fragment list inside a CapCut `draft_info.json`,
//! decodes the embedded sentence data, and renders it as SubRip (SRT) subtitles
//! together with a ready-to-paste translation prompt.

pub mod cli;
pub mod config;
pub mod convert;
pub mod draft;
pub mod extractors;
pub mod output;
pub mod prompt;
pub mod sink;
pub mod utils;

use std::path::PathBuf;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use convert::{CaptionPipeline, ConversionReport};
pub use extractors::Caption;
pub use output::SubtitleTrack;
pub use prompt::PromptTemplate;
pub use sink::{ClipboardSink, PromptSink};

/// Result type used throughout the library
pub type Result<T> = anyhow::Result<T>;

/// Error types specific to the converter
#[derive(thiserror::Error, Debug)]
pub enum ConverterError {
    #[error("Field `{key}` not found in the draft document")]
    StructureNotFound { key: String },

    #[error("Could not read draft file {}: {source}", path.display())]
    DocumentUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Draft file {} is not valid JSON: {source}", path.display())]
    DocumentMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No captions found in {fragments} fragment(s)")]
    NoCaptions { fragments: usize },

    #[error("Prompt delivery failed: {0}")]
    SinkDeliveryFailed(String),
}
