/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Runs the CLI against `dir` with `--stdout` and returns (success, stdout, stderr).
fn run_stdout(dir: &Path, extra: &[&str]) -> (bool, String, String) {
    let output = cargo_bin_cmd!("deps-mapper")
        .args(["-p", dir.to_str().unwrap(), "--stdout"])
        .args(extra)
        .output()
        .unwrap();

    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_dependencies() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("deps-mapper.config.yml"),
            r#"
dependencies:
  - com.squareup.okio:okio
"#,
        );

        let (success, stdout, stderr) = run_stdout(dir.path(), &[]);

        assert!(success);
        assert!(stdout.contains("pub const Okio: &str = \"com.squareup.okio:okio\";"));
        assert!(stderr.contains("Auto-discovered config file"));
    }

    #[test]
    fn test_auto_discovery_applies_format() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("deps-mapper.config.yml"),
            r#"
format: java
root_class_name: Deps
dependencies:
  - com.squareup.okio:okio
"#,
        );

        let (success, stdout, _) = run_stdout(dir.path(), &[]);

        assert!(success);
        assert!(stdout.contains("public final class Deps {"));
    }

    #[test]
    fn test_auto_discovery_applies_output_settings() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("deps-mapper.config.yml"),
            r#"
output_dir: generated
file_name: libs.rs
dependencies:
  - com.squareup.okio:okio
"#,
        );

        cargo_bin_cmd!("deps-mapper")
            .args(["-p", dir.path().to_str().unwrap()])
            .assert()
            .success();

        let written = fs::read_to_string(dir.path().join("generated/libs.rs")).unwrap();
        assert!(written.contains("com.squareup.okio:okio"));
    }

    #[test]
    fn test_no_config_file_runs_normally() {
        let dir = TempDir::new().unwrap();

        let (success, stdout, stderr) = run_stdout(dir.path(), &["-d", "io.ktor:ktor-io"]);

        assert!(success);
        assert!(stdout.contains("pub mod Libs {"));
        assert!(!stderr.contains("Auto-discovered config file"));
    }

    #[test]
    fn test_invalid_config_is_an_application_error() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("deps-mapper.config.yml"),
            "format: kotlin\n",
        );

        cargo_bin_cmd!("deps-mapper")
            .args(["-p", dir.path().to_str().unwrap(), "--stdout"])
            .assert()
            .code(3);
    }

    #[test]
    fn test_unknown_field_warning() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("deps-mapper.config.yml"),
            "check_cve: true\n",
        );

        let (success, _, stderr) = run_stdout(dir.path(), &[]);

        assert!(success);
        assert!(stderr.contains("Unknown config field 'check_cve'"));
    }
}

// ============================================================================
// Explicit Config Path Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_toml_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("mapping.toml");
        write_config(
            &config_path,
            r#"
root_class_name = "Deps"
dependencies = ["com.squareup.okio:okio"]
"#,
        );

        let (success, stdout, _) =
            run_stdout(dir.path(), &["-c", config_path.to_str().unwrap()]);

        assert!(success);
        assert!(stdout.contains("pub mod Deps {"));
    }

    #[test]
    fn test_explicit_config_replaces_discovery() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("deps-mapper.config.yml"),
            "dependencies: [\"com.discovered:lib\"]\n",
        );
        let explicit = dir.path().join("other.yml");
        write_config(&explicit, "dependencies: [\"com.explicit:lib\"]\n");

        let (success, stdout, _) = run_stdout(dir.path(), &["-c", explicit.to_str().unwrap()]);

        assert!(success);
        assert!(stdout.contains("com.explicit:lib"));
        assert!(!stdout.contains("com.discovered:lib"));
    }

    #[test]
    fn test_explicit_config_missing_file() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("deps-mapper")
            .args(["-p", dir.path().to_str().unwrap()])
            .args(["-c", "/nonexistent/deps-mapper.config.yml"])
            .assert()
            .code(3);
    }

    #[test]
    fn test_fixture_config() {
        let config = fixtures_path().join("sample-project/deps-mapper.config.yml");
        let dir = TempDir::new().unwrap();

        let (success, stdout, _) = run_stdout(dir.path(), &["-c", config.to_str().unwrap()]);

        assert!(success);
        assert!(stdout.contains("com.squareup.retrofit2:retrofit"));
    }
}

// ============================================================================
// CLI Option Merging Tests
// ============================================================================

mod merging_tests {
    use super::*;

    #[test]
    fn test_cli_format_overrides_config() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("deps-mapper.config.yml"),
            r#"
format: java
dependencies:
  - com.squareup.okio:okio
"#,
        );

        let (success, stdout, _) = run_stdout(dir.path(), &["-f", "json"]);

        assert!(success);
        let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(json["name"], "Libs");
    }

    #[test]
    fn test_cli_dependencies_are_added_to_config() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("deps-mapper.config.yml"),
            "dependencies: [\"com.squareup.okio:okio\"]\n",
        );

        let (success, stdout, _) = run_stdout(dir.path(), &["-d", "io.ktor:ktor-io"]);

        assert!(success);
        assert!(stdout.contains("com.squareup.okio:okio"));
        assert!(stdout.contains("io.ktor:ktor-io"));
    }

    #[test]
    fn test_config_collision_policy() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("deps-mapper.config.yml"),
            r#"
collision_policy: last-write-wins
dependencies:
  - org.example.core:lib
  - org.example-core:lib
"#,
        );

        let (success, stdout, _) = run_stdout(dir.path(), &[]);

        assert!(success);
        assert!(stdout.contains("pub const Lib: &str = \"org.example-core:lib\";"));
    }

    #[test]
    fn test_cli_collision_policy_overrides_config() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("deps-mapper.config.yml"),
            r#"
collision_policy: last-write-wins
dependencies:
  - org.example.core:lib
  - org.example-core:lib
"#,
        );

        cargo_bin_cmd!("deps-mapper")
            .args(["-p", dir.path().to_str().unwrap(), "--stdout"])
            .args(["--collision-policy", "fail"])
            .assert()
            .code(1);
    }

    #[test]
    fn test_config_exclude_and_cli_exclude_combine() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("deps-mapper.config.yml"),
            r#"
exclude:
  - "*:*-debug"
dependencies:
  - com.example:lib
  - com.example:lib-debug
  - com.example:lib-test
"#,
        );

        let (success, stdout, _) = run_stdout(dir.path(), &["-e", "*:*-test"]);

        assert!(success);
        assert!(stdout.contains("\"com.example:lib\""));
        assert!(!stdout.contains("lib-debug"));
        assert!(!stdout.contains("lib-test"));
    }

    #[test]
    fn test_config_formatting_rules() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("deps-mapper.config.yml"),
            r#"
dependencies:
  - com.squareup.okhttp3:okhttp
  - androidx.core:core-ktx
formatting:
  keep_lowercase: [ktx]
  name_replacements:
    okhttp3: OkHttp
"#,
        );

        let (success, stdout, _) = run_stdout(dir.path(), &[]);

        assert!(success);
        assert!(stdout.contains("pub mod OkHttp {"));
        assert!(stdout.contains("pub const ktx: &str = \"androidx.core:core-ktx\";"));
    }

    #[test]
    fn test_config_mappings() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("deps-mapper.config.yml"),
            r#"
mappings:
  "androidx.compose.ui:ui": Compose.Ui
"#,
        );

        let (success, stdout, _) = run_stdout(dir.path(), &[]);

        assert!(success);
        assert!(stdout.contains("pub mod Compose {"));
        assert!(stdout.contains("pub const Ui: &str = \"androidx.compose.ui:ui\";"));
    }
}
