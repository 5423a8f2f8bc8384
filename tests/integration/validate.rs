use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_validate_defaults() {
    let project = TestProject::new().unwrap();

    project
        .command()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Artifact template: default"))
        .stdout(predicate::str::contains("✓ Templates are valid"));
}

#[test]
fn test_validate_reports_warnings() {
    let project = TestProject::new().unwrap();
    project
        .write_file("artifact.tpl", "{{groupId}}:{{packaging}}{{ifClassifier:-}}{{ifClassifier:_}}")
        .unwrap();
    project.write_file("main.tpl", "nothing").unwrap();

    project
        .command()
        .args(["validate", "--artifact-template", "artifact.tpl", "--main-template", "main.tpl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown placeholder '{{packaging}}'"))
        .stdout(predicate::str::contains("2 distinct ifClassifier tokens"))
        .stdout(predicate::str::contains("no '{{artifacts}}' placeholder"))
        .stdout(predicate::str::contains("Templates are valid").not());
}

#[test]
fn test_validate_strict_fails() {
    let project = TestProject::new().unwrap();
    project.write_file("artifact.tpl", "{{artifactId}}{{ifClassifier:-").unwrap();

    project
        .run_deptemplate(&["validate", "--artifact-template", "artifact.tpl", "--strict"])
        .unwrap()
        .assert_failure()
        .assert_stdout_contains("never closed")
        .assert_stderr_contains("Template validation failed with 1 issue(s)");
}

#[test]
fn test_validate_json() {
    let project = TestProject::new().unwrap();
    project.write_file("artifact.tpl", "{{groupid}}").unwrap();

    let output = project
        .run_deptemplate(&["validate", "--artifact-template", "artifact.tpl", "--format", "json"])
        .unwrap();
    output.assert_success();

    let results: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(results["valid"], false);
    assert_eq!(results["issues"][0]["kind"], "unknown-placeholder");
    assert_eq!(results["issues"][0]["name"], "groupid");
    assert_eq!(results["main_template"], "default");
}

#[test]
fn test_validate_uses_config_file_templates() {
    let project = TestProject::new().unwrap();
    project.write_file("tpl/artifact.tpl", "{{version}} {{scope}}").unwrap();
    project.write_file("deptemplate.toml", "artifact-template-file = \"tpl/artifact.tpl\"\n").unwrap();

    project
        .run_deptemplate(&["validate", "--strict"])
        .unwrap()
        .assert_success()
        .assert_stdout_contains("tpl/artifact.tpl");
}
