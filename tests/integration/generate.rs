use deptemplate_cli::test_utils::{ArtifactBuilder, DependencyFixture};
use predicates::prelude::*;

use crate::common::TestProject;

const BASIC_MANIFEST: &str =
    "com.x:lib-1.0.jar\ncom.x:lib-1.0-tests.jar\norg.junit:junit-4.13.2.jar\norg.y:util-2.3.1.jar";

#[test]
fn test_generate_default_templates() {
    let project = TestProject::new().unwrap();
    project.write_dependencies(&DependencyFixture::basic()).unwrap();

    project
        .run_deptemplate(&[
            "generate",
            "--dependencies",
            "resolved.toml",
            "--output-file",
            "target/classes/dependencies.txt",
        ])
        .unwrap()
        .assert_success();

    assert_eq!(project.read_file("target/classes/dependencies.txt").unwrap(), BASIC_MANIFEST);
}

#[test]
fn test_generate_from_json() {
    let project = TestProject::new().unwrap();
    project.write_dependencies(&DependencyFixture::json()).unwrap();

    project
        .run_deptemplate(&["generate", "--dependencies", "resolved.json", "--output-file", "deps.txt"])
        .unwrap()
        .assert_success();

    assert_eq!(project.read_file("deps.txt").unwrap(), BASIC_MANIFEST);
}

#[test]
fn test_generate_print() {
    let project = TestProject::new().unwrap();
    project.write_dependencies(&DependencyFixture::basic()).unwrap();

    project
        .command()
        .args(["generate", "--dependencies", "resolved.toml", "--print", "--exclude-transitive"])
        .args(["--exclude-group-ids", "ORG.JUNIT"])
        .assert()
        .success()
        .stdout(predicate::eq("com.x:lib-1.0.jar\ncom.x:lib-1.0-tests.jar\n"))
        .stderr(predicate::str::contains("Artifact list size: 2"));
}

#[test]
fn test_generate_custom_templates_and_separator() {
    let project = TestProject::new().unwrap();
    project.write_dependencies(&DependencyFixture::basic()).unwrap();
    project.write_file("templates/artifact.tpl", "{{artifactId}}{{ifClassifier:@}}{{classifier}}").unwrap();
    project.write_file("templates/main.tpl", "deps=[{{artifacts}}] size unknown {{count}}").unwrap();

    project
        .run_deptemplate(&[
            "generate",
            "--dependencies",
            "resolved.toml",
            "--artifact-template",
            "templates/artifact.tpl",
            "--main-template",
            "templates/main.tpl",
            "--separator",
            ", ",
            "--no-line-break",
            "--output-file",
            "deps.txt",
        ])
        .unwrap()
        .assert_success();

    assert_eq!(
        project.read_file("deps.txt").unwrap(),
        "deps=[lib, lib@tests, junit, util] size unknown {{count}}"
    );
}

#[test]
fn test_generate_exclusions_are_case_insensitive_and_repeatable() {
    let project = TestProject::new().unwrap();
    project.write_dependencies(&DependencyFixture::basic()).unwrap();

    project
        .run_deptemplate(&[
            "generate",
            "--dependencies",
            "resolved.toml",
            "--exclude-classifiers",
            "TESTS",
            "--exclude-artifact-ids",
            "junit,Util",
            "--exclude-types",
            "pom",
            "--output-file",
            "deps.txt",
        ])
        .unwrap()
        .assert_success();

    assert_eq!(project.read_file("deps.txt").unwrap(), "com.x:lib-1.0.jar");
}

#[test]
fn test_generate_empty_selection() {
    let project = TestProject::new().unwrap();
    project.write_dependencies(&DependencyFixture::basic()).unwrap();
    project.write_file("main.tpl", "before|{{artifacts}}|after").unwrap();

    project
        .run_deptemplate(&[
            "generate",
            "--dependencies",
            "resolved.toml",
            "--main-template",
            "main.tpl",
            "--exclude-types",
            "jar",
            "--output-file",
            "deps.txt",
        ])
        .unwrap()
        .assert_success();

    assert_eq!(project.read_file("deps.txt").unwrap(), "before||after");
}

#[test]
fn test_generate_version_order() {
    let project = TestProject::new().unwrap();
    let versions = ["1.10", "1.9", "1.0-SNAPSHOT", "1.0"];
    let artifacts: Vec<_> =
        versions.iter().map(|v| ArtifactBuilder::new("com.x", "lib").version(v).build()).collect();
    project.write_dependencies(&DependencyFixture::from_artifacts(&artifacts, &[])).unwrap();

    project
        .command()
        .args(["generate", "--dependencies", "resolved.toml", "--print"])
        .args(["--separator", ";", "--no-line-break"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "com.x:lib-1.0-SNAPSHOT.jar;com.x:lib-1.0.jar;com.x:lib-1.9.jar;com.x:lib-1.10.jar\n",
        ));
}

#[test]
fn test_generate_config_file() {
    let project = TestProject::new().unwrap();
    project.write_dependencies(&DependencyFixture::basic()).unwrap();
    project.write_file("templates/artifact.tpl", "{{groupId}}/{{artifactId}}/{{version}}").unwrap();
    project
        .write_file(
            "deptemplate.toml",
            r#"
artifact-template-file = "templates/artifact.tpl"
exclude-transitive = true
exclude-classifiers = ["tests"]
output-file = "out/deps.txt"
separator = ","
"#,
        )
        .unwrap();

    project
        .run_deptemplate(&["generate", "--dependencies", "resolved.toml"])
        .unwrap()
        .assert_success();

    assert_eq!(project.read_file("out/deps.txt").unwrap(), "com.x/lib/1.0,\norg.junit/junit/4.13.2");
}

#[test]
fn test_generate_explicit_config_resolves_relative_to_config_dir() {
    let project = TestProject::new().unwrap();
    project.write_dependencies(&DependencyFixture::basic()).unwrap();
    project.write_file("ci/main.tpl", "[{{artifacts}}]").unwrap();
    project
        .write_file(
            "ci/deptemplate.toml",
            "main-template-file = \"main.tpl\"\noutput-file = \"deps.txt\"\nexclude-group-ids = [\"org.junit\", \"org.y\"]\n",
        )
        .unwrap();

    project
        .run_deptemplate(&["--config", "ci/deptemplate.toml", "generate", "--dependencies", "resolved.toml"])
        .unwrap()
        .assert_success();

    assert_eq!(
        project.read_file("ci/deps.txt").unwrap(),
        "[com.x:lib-1.0.jar\ncom.x:lib-1.0-tests.jar]"
    );
}

#[test]
fn test_generate_property_printed() {
    let project = TestProject::new().unwrap();
    project.write_dependencies(&DependencyFixture::basic()).unwrap();

    project
        .command()
        .args(["generate", "--dependencies", "resolved.toml", "--output-property", "deps"])
        .args(["--exclude-artifact-ids", "lib,junit"])
        .assert()
        .success()
        .stdout(predicate::eq("deps=org.y:util-2.3.1.jar\n"))
        .stderr(predicate::str::contains("Published property: deps"));
}

#[test]
fn test_generate_multiline_property_stays_on_one_line() {
    let project = TestProject::new().unwrap();
    project.write_dependencies(&DependencyFixture::basic()).unwrap();

    project
        .command()
        .args(["generate", "--dependencies", "resolved.toml", "--output-property", "deps"])
        .args(["--exclude-artifact-ids", "junit", "--exclude-classifiers", "tests"])
        .assert()
        .success()
        .stdout(predicate::eq("deps=com.x:lib-1.0.jar\\norg.y:util-2.3.1.jar\n"));
}

#[test]
fn test_generate_properties_file_merges() {
    let project = TestProject::new().unwrap();
    project.write_dependencies(&DependencyFixture::basic()).unwrap();
    project.write_file("props.json", r#"{"existing": "value"}"#).unwrap();

    project
        .run_deptemplate(&[
            "generate",
            "--dependencies",
            "resolved.toml",
            "--output-property",
            "project.dependencies",
            "--output-file",
            "deps.txt",
            "--properties-file",
            "props.json",
        ])
        .unwrap()
        .assert_success();

    let props: serde_json::Value =
        serde_json::from_str(&project.read_file("props.json").unwrap()).unwrap();
    assert_eq!(props["existing"], "value");
    assert_eq!(props["project.dependencies"], BASIC_MANIFEST);
    assert_eq!(project.read_file("deps.txt").unwrap(), BASIC_MANIFEST);
}

#[test]
fn test_generate_latin1_template() {
    let project = TestProject::new().unwrap();
    project.write_dependencies(&DependencyFixture::basic()).unwrap();
    project.write_file("main.tpl", b"D\xe9p: {{artifacts}}").unwrap();

    project
        .run_deptemplate(&[
            "generate",
            "--dependencies",
            "resolved.toml",
            "--main-template",
            "main.tpl",
            "--charset",
            "ISO-8859-1",
            "--exclude-group-ids",
            "com.x,org.junit",
            "--output-file",
            "deps.txt",
        ])
        .unwrap()
        .assert_success();

    assert_eq!(project.read_file("deps.txt").unwrap(), "Dép: org.y:util-2.3.1.jar");
}

#[test]
fn test_generate_utf16_template() {
    let project = TestProject::new().unwrap();
    project.write_dependencies(&DependencyFixture::basic()).unwrap();
    let template: Vec<u8> = "€ {{artifacts}}".encode_utf16().flat_map(u16::to_le_bytes).collect();
    project.write_file("main.tpl", template).unwrap();

    project
        .run_deptemplate(&[
            "generate",
            "--dependencies",
            "resolved.toml",
            "--main-template",
            "main.tpl",
            "--charset",
            "UTF-16LE",
            "--exclude-group-ids",
            "com.x,org.junit",
            "--output-file",
            "deps.txt",
        ])
        .unwrap()
        .assert_success();

    assert_eq!(project.read_file("deps.txt").unwrap(), "€ org.y:util-2.3.1.jar");
}

#[test]
fn test_generate_without_destination_warns() {
    let project = TestProject::new().unwrap();
    project.write_dependencies(&DependencyFixture::basic()).unwrap();

    project
        .command()
        .args(["generate", "--dependencies", "resolved.toml"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("nothing was written"));
}
