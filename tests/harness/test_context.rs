//! Shared testing harness for atlas-apply-action integration tests.

use assert_cmd::Command;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fake_atlas::FakeAtlas;

/// Isolated runner environment: a workspace, a fake atlas and an output file.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    atlas: FakeAtlas,
}

impl TestContext {
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        let atlas = FakeAtlas::install(&root.path().join("atlas"));

        Self { root, work_dir, atlas }
    }

    /// Path to the workspace directory atlas runs in.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub(crate) fn atlas(&self) -> &FakeAtlas {
        &self.atlas
    }

    /// Fixture migrations shipped with the tests.
    pub(crate) fn fixture_migrations() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/migrations")
    }

    /// Copy the fixture migrations to `rel` inside the workspace.
    pub(crate) fn copy_migrations(&self, rel: &str) -> PathBuf {
        let target = self.work_dir.join(rel);
        super::copy_dir(&Self::fixture_migrations(), &target);
        target
    }

    /// File the binary writes step outputs to.
    pub(crate) fn output_file(&self) -> PathBuf {
        self.root.path().join("github_output")
    }

    /// Parse the step outputs written so far.
    pub(crate) fn read_outputs(&self) -> BTreeMap<String, String> {
        let content = fs::read_to_string(self.output_file()).unwrap_or_default();
        parse_output_file(&content)
    }

    /// Build a command for the action binary in a clean runner environment.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("atlas-apply-action").expect("Failed to find binary");
        cmd.env_clear()
            .env("PATH", std::env::var_os("PATH").unwrap_or_default())
            .env("HOME", self.root.path())
            .env("ATLAS_BIN", self.atlas.bin())
            .env("GITHUB_OUTPUT", self.output_file())
            .current_dir(&self.work_dir);
        cmd
    }
}

fn parse_output_file(content: &str) -> BTreeMap<String, String> {
    let mut outputs = BTreeMap::new();
    let mut lines = content.lines();
    while let Some(line) = lines.next() {
        if let Some((name, delimiter)) = line.split_once("<<") {
            let mut value = Vec::new();
            for next in lines.by_ref() {
                if next == delimiter {
                    break;
                }
                value.push(next);
            }
            outputs.insert(name.to_string(), value.join("\n"));
        } else if let Some((name, value)) = line.split_once('=') {
            outputs.insert(name.to_string(), value.to_string());
        }
    }
    outputs
}
