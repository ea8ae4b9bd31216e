//! End-to-end tests for the capcut-srt binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SINGLE_CAPTION_DRAFT: &str = r#"{"a":{"subtitle_fragment_info_list":[{"start_time":1500000,"end_time":3250000,"subtitle_cache_info":"{\"sentence_list\":[{\"text\":\"Hello\"},{\"text\":\"world\"}]}"}]}}"#;

const MIXED_DRAFT: &str = r#"{
    "materials": {
        "texts": [],
        "subtitle_fragment_info_list": [
            {"start_time": 4000000, "end_time": 5000000, "subtitle_cache_info": "{\"sentence_list\":[{\"text\":\"Second\"}]}"},
            {"start_time": 0, "end_time": 1000000, "subtitle_cache_info": ""},
            {"start_time": 2000000, "end_time": 3000000, "subtitle_cache_info": "{\"sentence_list\":[{\"text\":\"First\"}]}"}
        ]
    }
}"#;

/// Temp workspace with an isolated config file
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let workspace = Self { dir };
        workspace.write_config(&format!(
            "capcut:\n  drafts_dir: {}\noutput:\n  dir: {}\nprompt:\n  copy_to_clipboard: false\n",
            workspace.path("drafts").display(),
            workspace.path("result").display()
        ));
        workspace
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn write_config(&self, content: &str) {
        fs::write(self.path("config.yaml"), content).unwrap();
    }

    fn write_draft(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("capcut-srt").unwrap();
        cmd.current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.path("config.yaml"));
        cmd
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_convert_writes_srt_file() {
    let ws = Workspace::new();
    let draft = ws.write_draft("draft_info.json", SINGLE_CAPTION_DRAFT);
    let out = ws.path("out.srt");

    ws.cmd()
        .args(["convert", "--no-clipboard", "-o"])
        .arg(&out)
        .arg(&draft)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 captions"));

    assert_eq!(read(&out), "1\n00:00:01,500 --> 00:00:03,250\nHello world\n\n");
}

#[test]
fn test_convert_skips_empty_fragments_and_sorts() {
    let ws = Workspace::new();
    let draft = ws.write_draft("draft_info.json", MIXED_DRAFT);
    let out = ws.path("out.srt");

    ws.cmd()
        .args(["convert", "--no-clipboard", "-o"])
        .arg(&out)
        .arg(&draft)
        .assert()
        .success();

    assert_eq!(
        read(&out),
        "1\n00:00:02,000 --> 00:00:03,000\nFirst\n\n2\n00:00:04,000 --> 00:00:05,000\nSecond\n\n"
    );
}

#[test]
fn test_convert_to_stdout() {
    let ws = Workspace::new();
    let draft = ws.write_draft("draft_info.json", SINGLE_CAPTION_DRAFT);

    ws.cmd()
        .args(["convert", "--stdout", "--no-clipboard"])
        .arg(&draft)
        .assert()
        .success()
        .stdout("1\n00:00:01,500 --> 00:00:03,250\nHello world\n\n");
}

#[test]
fn test_stdout_stays_pure_srt_with_prompt() {
    let ws = Workspace::new();
    let draft = ws.write_draft("draft_info.json", SINGLE_CAPTION_DRAFT);

    ws.cmd()
        .args(["convert", "--stdout", "--print-prompt", "--no-clipboard"])
        .arg(&draft)
        .assert()
        .success()
        .stdout("1\n00:00:01,500 --> 00:00:03,250\nHello world\n\n")
        .stderr(predicate::str::contains("Translate the subtitles into English"));
}

#[test]
fn test_convert_by_project_uses_timestamped_output() {
    let ws = Workspace::new();
    ws.write_draft("drafts/0824/draft_info.json", SINGLE_CAPTION_DRAFT);

    ws.cmd()
        .args(["convert", "--project", "0824", "--no-clipboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subtitles saved to:"));

    let files: Vec<_> = fs::read_dir(ws.path("result"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("captions_"));
    assert!(files[0].ends_with(".srt"));
}

#[test]
fn test_print_prompt_uses_requested_language() {
    let ws = Workspace::new();
    let draft = ws.write_draft("draft_info.json", SINGLE_CAPTION_DRAFT);

    ws.cmd()
        .args(["convert", "--no-clipboard", "--print-prompt", "--language", "German", "-o"])
        .arg(ws.path("out.srt"))
        .arg(&draft)
        .assert()
        .success()
        .stdout(predicate::str::contains("Translate the subtitles into German"))
        .stdout(predicate::str::contains("00:00:01,500 --> 00:00:03,250\nHello world"));
}

#[test]
fn test_missing_fragment_list_fails() {
    let ws = Workspace::new();
    let draft = ws.write_draft("draft_info.json", r#"{"tracks": [{"segments": []}]}"#);

    ws.cmd()
        .args(["convert", "--no-clipboard", "-o"])
        .arg(ws.path("out.srt"))
        .arg(&draft)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Conversion failed."))
        .stderr(predicate::str::contains("subtitle_fragment_info_list"));

    assert!(!ws.path("out.srt").exists());
}

#[test]
fn test_no_captions_fails() {
    let ws = Workspace::new();
    let draft = ws.write_draft(
        "draft_info.json",
        r#"{"subtitle_fragment_info_list": [{"start_time": 0, "end_time": 1, "subtitle_cache_info": ""}]}"#,
    );

    ws.cmd()
        .args(["convert", "--no-clipboard"])
        .arg(&draft)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No captions found"));
}

#[test]
fn test_unreadable_draft_fails() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["convert", "--no-clipboard"])
        .arg(ws.path("missing/draft_info.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not read draft file"));
}

#[test]
fn test_malformed_draft_fails() {
    let ws = Workspace::new();
    let draft = ws.write_draft("draft_info.json", "{\"subtitle_fragment_info_list\": [");

    ws.cmd()
        .args(["convert", "--no-clipboard"])
        .arg(&draft)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not valid JSON"));
}

#[test]
fn test_config_command_creates_file() {
    let ws = Workspace::new();
    let target = ws.path("fresh/config.yaml");

    Command::cargo_bin("capcut-srt")
        .unwrap()
        .current_dir(ws.dir.path())
        .arg("--config")
        .arg(&target)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config file"));

    assert!(read(&target).contains("target_language: English"));
}

#[test]
fn test_config_show() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["config", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Copy To Clipboard: false"));
}
