use deptemplate_cli::filter::{ArtifactFilter, ExclusionSet};
use deptemplate_cli::templating::{ManifestRenderer, apply_artifact_template, render};
use deptemplate_cli::test_utils::{ArtifactBuilder, init_test_logging};

const DEFAULT_ARTIFACT: &str =
    "{{groupId}}:{{artifactId}}-{{version}}{{ifClassifier:-}}{{classifier}}.{{type}}";

#[test]
fn test_default_template_scenarios() {
    init_test_logging(None);

    let plain = ArtifactBuilder::new("com.x", "lib").build();
    let classified = ArtifactBuilder::new("com.x", "lib").classifier("tests").build();

    assert_eq!(apply_artifact_template(&plain, DEFAULT_ARTIFACT), "com.x:lib-1.0.jar");
    assert_eq!(apply_artifact_template(&classified, DEFAULT_ARTIFACT), "com.x:lib-1.0-tests.jar");
}

#[test]
fn test_filter_then_render() {
    init_test_logging(None);

    let artifacts = vec![
        ArtifactBuilder::new("org.junit", "junit").version("4.13.2").scope("test").build(),
        ArtifactBuilder::new("com.x", "lib").classifier("sources").build(),
        ArtifactBuilder::new("com.x", "lib").build(),
        ArtifactBuilder::new("com.x", "bom").artifact_type("pom").build(),
    ];

    let filter = ArtifactFilter::new(
        ExclusionSet::from_values(["ORG.JUNIT"]),
        ExclusionSet::default(),
        ExclusionSet::from_values(["Sources"]),
        ExclusionSet::from_values(["pom"]),
    );
    let kept = filter.filter(artifacts);

    assert_eq!(render(kept, DEFAULT_ARTIFACT, "<{{artifacts}}>", ",\n"), "<com.x:lib-1.0.jar>");
}

#[test]
fn test_render_is_order_independent() {
    let a = ArtifactBuilder::new("com.x", "a").version("1.10").build();
    let b = ArtifactBuilder::new("com.x", "a").version("1.9").build();
    let c = ArtifactBuilder::new("com.w", "z").build();

    let renderer = ManifestRenderer::new("{{groupId}}:{{artifactId}}:{{version}}", "{{artifacts}}", " ");
    let expected = "com.w:z:1.0 com.x:a:1.9 com.x:a:1.10";

    assert_eq!(renderer.render(vec![a.clone(), b.clone(), c.clone()]), expected);
    assert_eq!(renderer.render(vec![c.clone(), a.clone(), b.clone()]), expected);
    assert_eq!(renderer.render(vec![b, c, a]), expected);
}

#[test]
fn test_outer_template_literal_text_preserved() {
    let lib = ArtifactBuilder::new("com.x", "lib").build();
    let text = render(
        vec![lib],
        "{{artifactId}}",
        "{{artifacts}} and again {{artifacts}}; keep {{version}} and {{ifClassifier:-}}",
        "\n",
    );
    assert_eq!(text, "lib and again lib; keep {{version}} and {{ifClassifier:-}}");
}

#[test]
fn test_values_containing_tokens_are_not_rescanned() {
    let odd = ArtifactBuilder::new("{{artifactId}}", "lib").build();
    assert_eq!(apply_artifact_template(&odd, "{{groupId}}/{{artifactId}}"), "{{artifactId}}/lib");

    let text = render(vec![odd], "{{groupId}}", "[{{artifacts}}]", "");
    assert_eq!(text, "[{{artifactId}}]");
}
