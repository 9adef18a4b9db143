//! Common test utilities for pylaunch integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// Interpreter stand-in driven by marker files in the application root
///
/// - `.version_fails` present: the version query exits nonzero
/// - `.installed` present: `pip show` succeeds
/// - `.install_fails` present: `pip install` fails, otherwise creates `.installed`
/// - `.app_exit` holds the entry point's exit code (default 0)
#[allow(dead_code)]
const FAKE_INTERPRETER: &str = r#"#!/bin/sh
echo "$*" >> calls.log
case "$1" in
  --version)
    [ -f .version_fails ] && exit 9009
    echo "Python 3.11.4"
    exit 0
    ;;
  -m)
    case "$3" in
      show)
        [ -f .installed ] && exit 0
        exit 1
        ;;
      install)
        [ -f .install_fails ] && exit 1
        touch .installed
        exit 0
        ;;
    esac
    ;;
esac
echo "app running"
exit "$(cat .app_exit 2>/dev/null || echo 0)"
"#;

/// A temporary application root for integration tests
pub struct TestApp {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the application root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestApp {
    /// Create an application root with an entry point and manifest
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        let app = Self { temp, path };
        app.write_file("main.py", "print('hello')\n");
        app.write_file("requirements.txt", "PySide6\n");
        app
    }

    /// Write a file in the application root
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the application root
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the application root
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write pylaunch.yaml using `interpreter` plus extra YAML lines
    pub fn write_config(&self, interpreter: &str, extra: &str) {
        self.write_file(
            "pylaunch.yaml",
            &format!("interpreter: '{interpreter}'\nsuccess_delay_secs: 0\n{extra}"),
        );
    }

    /// Install the fake interpreter next to the root and point the config at it
    #[cfg(unix)]
    pub fn with_fake_interpreter(&self, extra: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let bin_dir = self.path.join(".bin");
        std::fs::create_dir_all(&bin_dir).expect("Failed to create bin directory");
        let script = bin_dir.join("fake-python");
        std::fs::write(&script, FAKE_INTERPRETER).expect("Failed to write interpreter");
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make interpreter executable");

        self.write_config(&script.to_string_lossy(), extra);
        script
    }

    /// Recorded interpreter invocations, one per line
    pub fn calls(&self) -> Vec<String> {
        if !self.file_exists("calls.log") {
            return Vec::new();
        }
        self.read_file("calls.log")
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the pylaunch binary with ambient configuration cleared
#[allow(dead_code)]
#[allow(deprecated)]
pub fn pylaunch_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("pylaunch").expect("pylaunch binary");
    cmd.env_remove("PYLAUNCH_ROOT")
        .env_remove("PYLAUNCH_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}
