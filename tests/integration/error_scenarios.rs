use deptemplate_cli::test_utils::DependencyFixture;
use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_missing_dependency_file() {
    let project = TestProject::new().unwrap();

    project
        .run_deptemplate(&["generate", "--dependencies", "missing.toml"])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("Dependency file not found")
        .assert_stderr_contains("--dependencies");
}

#[test]
fn test_missing_artifact_field_writes_nothing() {
    let project = TestProject::new().unwrap();
    project.write_dependencies(&DependencyFixture::missing_scope()).unwrap();

    project
        .run_deptemplate(&["generate", "--dependencies", "resolved.toml", "--output-file", "deps.txt"])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("org.y:util:2.3.1 is missing required field 'scope'");

    assert!(!project.file_exists("deps.txt"));
}

#[test]
fn test_missing_field_fatal_even_when_filtered() {
    let project = TestProject::new().unwrap();
    project.write_dependencies(&DependencyFixture::missing_scope()).unwrap();

    project
        .run_deptemplate(&[
            "generate",
            "--dependencies",
            "resolved.toml",
            "--exclude-group-ids",
            "org.y",
        ])
        .unwrap()
        .assert_failure();
}

#[test]
fn test_invalid_dependency_syntax() {
    let project = TestProject::new().unwrap();
    project.write_dependencies(&DependencyFixture::invalid_syntax()).unwrap();

    project
        .run_deptemplate(&["generate", "--dependencies", "resolved.toml"])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("Invalid dependency file syntax");
}

#[test]
fn test_unreadable_template() {
    let project = TestProject::new().unwrap();
    project.write_dependencies(&DependencyFixture::basic()).unwrap();

    project
        .run_deptemplate(&[
            "generate",
            "--dependencies",
            "resolved.toml",
            "--artifact-template",
            "nope.tpl",
            "--output-file",
            "deps.txt",
        ])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("Failed to read template file");

    assert!(!project.file_exists("deps.txt"));
}

#[test]
fn test_unsupported_charset() {
    let project = TestProject::new().unwrap();
    project.write_dependencies(&DependencyFixture::basic()).unwrap();
    project.write_file("main.tpl", "{{artifacts}}").unwrap();

    project
        .run_deptemplate(&[
            "generate",
            "--dependencies",
            "resolved.toml",
            "--main-template",
            "main.tpl",
            "--charset",
            "EBCDIC",
        ])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("Unsupported charset: EBCDIC");
}

#[test]
fn test_invalid_encoding() {
    let project = TestProject::new().unwrap();
    project.write_dependencies(&DependencyFixture::basic()).unwrap();
    project.write_file("main.tpl", b"caf\xe9 {{artifacts}}").unwrap();

    project
        .run_deptemplate(&["generate", "--dependencies", "resolved.toml", "--main-template", "main.tpl"])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("is not valid UTF-8");
}

#[test]
fn test_unwritable_output() {
    let project = TestProject::new().unwrap();
    project.write_dependencies(&DependencyFixture::basic()).unwrap();
    project.write_file("blocker", "a file, not a directory").unwrap();

    project
        .run_deptemplate(&["generate", "--dependencies", "resolved.toml", "--output-file", "blocker/deps.txt"])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("Failed to write output");
}

#[test]
fn test_invalid_config_file() {
    let project = TestProject::new().unwrap();
    project.write_dependencies(&DependencyFixture::basic()).unwrap();
    project.write_file("deptemplate.toml", "output-fil = \"deps.txt\"\n").unwrap();

    project
        .command()
        .args(["generate", "--dependencies", "resolved.toml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid configuration file syntax"));
}

#[test]
fn test_verbose_and_quiet_conflict() {
    let project = TestProject::new().unwrap();

    project.command().args(["--verbose", "--quiet", "validate"]).assert().failure();
}

#[test]
fn test_quiet_suppresses_info_logs() {
    let project = TestProject::new().unwrap();
    project.write_dependencies(&DependencyFixture::basic()).unwrap();

    project
        .command()
        .args(["--quiet", "generate", "--dependencies", "resolved.toml", "--output-file", "deps.txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Artifact list size").not());
}
