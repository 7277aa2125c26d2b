//! Common test utilities for glog integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A test workspace for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a workspace with a fully seeded config so no prompt fires
    pub fn seeded() -> Self {
        let ws = Self::new();
        ws.write_config("prepend");
        ws
    }

    /// Command for the real glog binary, pointed at this workspace
    #[allow(deprecated)]
    pub fn glog_cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("glog").expect("glog binary built");
        cmd.arg("--workspace").arg(&self.path);
        cmd
    }

    /// Write a glog.toml with identity filled in and zeroed counters
    pub fn write_config(&self, policy: &str) {
        let config = format!(
            "[app]\n\
             app_title = \"GSLogger\"\n\
             version_number = [0, 0, 0]\n\
             build_number = 0\n\
             atf_pattern = \".txt\"\n\
             future_count = 0\n\
             changelog_policy = \"{policy}\"\n\
             \n\
             [dev]\n\
             developer = \"alice\"\n\
             dev_link = \"https://example.com/alice\"\n\
             dev_email = \"alice@example.com\"\n"
        );
        self.write_file("glog.toml", &config);
    }

    /// Drop a pending artifact file directly into ch-logs
    pub fn write_artifact(&self, stamp: &str, kind: &str, message: &str, author: &str) {
        let name = format!("ch-logs/{stamp}-{kind}.txt");
        let body = format!("{stamp}\n{kind}\n{message}\n{author}\n");
        self.write_file(&name, &body);
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Rendered changelog content
    pub fn changelog(&self) -> String {
        self.read_file("ch-logs/changelog.md")
    }

    /// Count pending artifact files (matching .txt) in ch-logs
    pub fn pending_artifacts(&self) -> usize {
        let dir = self.path.join("ch-logs");
        if !dir.exists() {
            return 0;
        }
        std::fs::read_dir(&dir)
            .expect("Failed to read ch-logs")
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".txt"))
            .count()
    }
}
