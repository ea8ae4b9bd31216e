use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "capcut-srt",
    about = "CapCut SRT - Convert CapCut draft captions into SRT subtitles and a translation prompt",
    version,
    long_about = "Extracts the captions stored in a CapCut project's draft_info.json, writes them as an SRT file and copies a ready-to-use translation prompt to the clipboard."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a config file
    #[arg(long, global = true, value_name = "FILE", env = "CAPCUT_SRT_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a draft's captions into an SRT file
    Convert {
        /// Path to a draft_info.json (resolved from the drafts directory and project if omitted)
        #[arg(value_name = "DRAFT_FILE")]
        input: Option<PathBuf>,

        /// Project directory name inside the CapCut drafts directory
        #[arg(short, long, value_name = "NAME", conflicts_with = "input")]
        project: Option<String>,

        /// Output file path (timestamped file in the output directory if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print subtitles to the console instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Target language for the translation prompt
        #[arg(short, long, value_name = "LANG")]
        language: Option<String>,

        /// Do not copy the translation prompt to the clipboard
        #[arg(long)]
        no_clipboard: bool,

        /// Print the translation prompt
        #[arg(long)]
        print_prompt: bool,
    },

    /// Show or create the configuration file
    Config {
        /// Show current configuration
        #[arg(short, long)]
        show: bool,
    },
}
