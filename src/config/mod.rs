use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::prompt::PromptTemplate;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where CapCut keeps its drafts
    pub capcut: CapcutConfig,

    /// Subtitle output settings
    pub output: OutputConfig,

    /// Translation prompt settings
    pub prompt: PromptConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CapcutConfig {
    /// CapCut drafts directory (platform default when unset)
    pub drafts_dir: Option<PathBuf>,

    /// Project converted when none is given on the command line
    pub default_project: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for generated subtitle files
    pub dir: PathBuf,

    /// File name prefix, followed by a timestamp
    pub file_prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Language the subtitles should be translated into
    pub target_language: String,

    /// Copy the prompt to the system clipboard
    pub copy_to_clipboard: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("result"),
            file_prefix: "captions".to_string(),
        }
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            target_language: PromptTemplate::DEFAULT_TARGET_LANGUAGE.to_string(),
            copy_to_clipboard: true,
        }
    }
}

impl Config {
    /// Load configuration from an explicit path, the usual locations, or defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Self::config_path() {
            Ok(path) if path.exists() => Self::load_from(&path),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load and validate a config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs_err::read_to_string(path)
            .context("Failed to read config file")?;

        let config: Config = serde_yaml::from_str(&content)
            .context("Failed to parse config file")?;

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)
            .context("Failed to serialize config")?;

        fs_err::write(path, content)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Get configuration file path
    pub fn config_path() -> Result<PathBuf> {
        // First try current directory for easy testing
        let local_config = PathBuf::from("config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?;

        Ok(config_dir.join("capcut-srt").join("config.yaml"))
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        if self.output.dir.as_os_str().is_empty() {
            anyhow::bail!("output.dir must not be empty");
        }

        if self.output.file_prefix.trim().is_empty() {
            anyhow::bail!("output.file_prefix must not be empty");
        }

        if self.prompt.target_language.trim().is_empty() {
            anyhow::bail!("prompt.target_language must not be empty");
        }

        Ok(())
    }

    /// Drafts directory, falling back to CapCut's default location under the home directory
    pub fn drafts_dir(&self) -> Result<PathBuf> {
        match &self.capcut.drafts_dir {
            Some(dir) => Ok(dir.clone()),
            None => crate::utils::default_drafts_dir()
                .context("Could not determine the CapCut drafts directory; set capcut.drafts_dir"),
        }
    }

    /// Display current configuration
    pub fn display(&self) {
        println!("Current Configuration:");
        match self.drafts_dir() {
            Ok(dir) => println!("  Drafts Directory: {}", dir.display()),
            Err(_) => println!("  Drafts Directory: (unset)"),
        }
        if let Some(project) = &self.capcut.default_project {
            println!("  Default Project: {}", project);
        }
        println!("  Output Directory: {}", self.output.dir.display());
        println!("  File Prefix: {}", self.output.file_prefix);
        println!("  Target Language: {}", self.prompt.target_language);
        println!("  Copy To Clipboard: {}", self.prompt.copy_to_clipboard);
    }
}
