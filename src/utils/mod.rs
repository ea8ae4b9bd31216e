use std::path::{Path, PathBuf};

/// File CapCut writes inside every project directory
pub const DRAFT_INFO_FILE: &str = "draft_info.json";

/// Format file size in human-readable format
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1024.0;

    if bytes == 0 {
        return "0 B".to_string();
    }

    let bytes_f = bytes as f64;
    let unit_index = (bytes_f.log10() / THRESHOLD.log10()).floor() as usize;
    let unit_index = unit_index.min(UNITS.len() - 1);

    let size = bytes_f / THRESHOLD.powi(unit_index as i32);

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

/// Format a microsecond span in human-readable format
pub fn format_duration(micros: u64) -> String {
    let total_seconds = micros / 1_000_000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

/// Sanitize filename for safe filesystem usage
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            match c {
                // Keep alphanumeric characters, spaces, hyphens, underscores, and dots
                c if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' || c == '.' => c,
                // Replace everything else with underscore
                _ => '_',
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Generate `<prefix>_<YYYYmmdd_HHMMSS>.<extension>` from the local clock
pub fn timestamped_filename(prefix: &str, extension: &str) -> String {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    format!("{}_{}.{}", sanitize_filename(prefix), timestamp, extension)
}

/// CapCut's default drafts directory under the user's home
pub fn default_drafts_dir() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(
        home.join("Movies")
            .join("CapCut")
            .join("User Data")
            .join("Projects")
            .join("com.lveditor.draft"),
    )
}

/// Path of a project's `draft_info.json`
pub fn draft_info_path(drafts_dir: &Path, project: &str) -> PathBuf {
    drafts_dir.join(project).join(DRAFT_INFO_FILE)
}
