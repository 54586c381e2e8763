//! Shared testing utilities for mulepack CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project and output root for CLI
/// exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    base: PathBuf,
    target: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create an isolated environment with a minimal mule-application
    /// project: one flow under src/main/mule, a pom.xml, a
    /// mule-artifact.json, and a stale target/ output directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let base = root.path().join("project");
        let target = root.path().join("out");

        fs::create_dir_all(base.join("src/main/mule"))
            .expect("Failed to create project source folder");
        fs::write(base.join("src/main/mule/flow.xml"), "<mule><flow name=\"main\"/></mule>")
            .expect("Failed to write flow.xml");
        fs::write(base.join("pom.xml"), "<project><artifactId>connector</artifactId></project>")
            .expect("Failed to write pom.xml");
        fs::write(base.join("mule-artifact.json"), "{\"minMuleVersion\": \"4.1.1\"}")
            .expect("Failed to write mule-artifact.json");
        fs::create_dir_all(base.join("target")).expect("Failed to create target folder");
        fs::write(base.join("target/stale.jar"), "stale").expect("Failed to write stale output");

        Self { root, base, target }
    }

    /// Path to the project base folder.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Path to the assembly output root.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Add a test suite under src/test/munit in the project.
    pub fn add_test_sources(&self) {
        let munit = self.base.join("src/test/munit");
        fs::create_dir_all(&munit).expect("Failed to create munit folder");
        fs::write(munit.join("suite.xml"), "<munit/>").expect("Failed to write suite.xml");
    }

    /// Build a command invoking the compiled `mulepack` binary.
    pub fn cli(&self) -> Command {
        Command::cargo_bin("mulepack").expect("Failed to locate mulepack binary")
    }

    /// Build an `assemble` command with the default acme coordinates.
    pub fn assemble_cmd(&self) -> Command {
        let mut cmd = self.cli();
        cmd.args([
            "assemble",
            "--group-id",
            "com.acme",
            "--artifact-id",
            "connector",
            "--artifact-version",
            "1.0.0",
        ])
        .arg("--base")
        .arg(self.base())
        .arg("--target")
        .arg(self.target());
        cmd
    }

    /// Assert the fixed descriptor layout exists under the output root.
    pub fn assert_descriptor_layout_exists(&self) {
        let maven = self.target.join("META-INF/maven/com.acme/connector");
        assert!(maven.join("pom.xml").exists(), "pom.xml should be copied");
        assert!(maven.join("pom.properties").exists(), "pom.properties should be generated");
        assert!(
            self.target.join("META-INF/mule-artifact/mule-artifact.json").exists(),
            "packaging descriptor should be copied"
        );
    }

    /// Assert the mule-src mirror exists and carries no target/ entry.
    pub fn assert_mule_src_mirror_exists(&self) {
        let mirror = self.target.join("META-INF/mule-src/connector");
        assert!(mirror.join("pom.xml").exists(), "mirror should contain pom.xml");
        assert!(
            mirror.join("src/main/mule/flow.xml").exists(),
            "mirror should contain the sources"
        );
        assert!(!mirror.join("target").exists(), "mirror should exclude target/");
    }

    /// Read the generated pom.properties.
    pub fn read_pom_properties(&self) -> String {
        fs::read_to_string(self.target.join("META-INF/maven/com.acme/connector/pom.properties"))
            .expect("Failed to read pom.properties")
    }
}
