//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use layoutlab::constants::{CONFIG_DIR_ENV, CUSTOM_LAYOUTS_KEY};
use layoutlab::models::{CustomLayout, CustomLayouts, LayoutFamily};
use tempfile::TempDir;

/// Path to the layoutlab binary built for this test run.
pub fn layoutlab_bin() -> &'static str {
    env!("CARGO_BIN_EXE_layoutlab")
}

/// An isolated config directory; every command run through it sees only
/// that directory.
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    /// Creates an empty config directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// The isolated config directory.
    pub fn config_dir(&self) -> &Path {
        self.dir.path()
    }

    /// File holding the persisted custom layouts (default data directory).
    pub fn custom_layouts_file(&self) -> PathBuf {
        self.dir.path().join(format!("{CUSTOM_LAYOUTS_KEY}.json"))
    }

    /// Writes a custom layouts snapshot the way the store persists it.
    pub fn write_custom_layouts(&self, layouts: &CustomLayouts) {
        let json = serde_json::to_string(layouts).expect("serialize layouts");
        std::fs::write(self.custom_layouts_file(), json).expect("write layouts");
    }

    /// Reads back the persisted custom layouts as JSON.
    pub fn read_custom_layouts(&self) -> serde_json::Value {
        let raw = std::fs::read_to_string(self.custom_layouts_file()).expect("read layouts");
        serde_json::from_str(&raw).expect("layouts are JSON")
    }

    /// Builds a command running in this environment.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(layoutlab_bin());
        cmd.env(CONFIG_DIR_ENV, self.dir.path());
        cmd.env_remove("RUST_LOG");
        cmd.args(args);
        cmd
    }

    /// Runs a command and collects its output.
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute command")
    }

    /// Runs a command with `input` on stdin.
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn command");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");
        child.wait_with_output().expect("Failed to wait for command")
    }
}

/// Asserts the exit code, printing stderr on mismatch.
pub fn assert_exit(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "unexpected exit code. stdout: {} stderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Parses stdout as JSON.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

/// A snapshot with only the grid layout filled in.
pub fn grid_only_layouts() -> CustomLayouts {
    CustomLayouts::default().with(
        LayoutFamily::Grid,
        CustomLayout::new(
            "<div class=\"g\">X</div>",
            ".g { display: grid; }",
        ),
    )
}
