//! Loading manifests from disk in each supported format.

use pretty_assertions::assert_eq;
use splice_blocks::{Placement, TokenPair};
use splice_core::{BatchEngine, Edit, Error, FailurePolicy, JobStatus, Manifest};
use splice_test_utils::{TestWorkspace, fixtures};

const TOML_MANIFEST: &str = r#"
policy = "keep-going"

[[jobs]]
path = "src/pages/Orders.js"

[[jobs.edits]]
kind = "replace-block"
marker = '<div className="col-md-6">'
occurrence = 2
tokens = { open = "<div", close = "</div>" }
replacement = '''<div className="col-md-6">
            <h6>Amount review</h6>
          </div>'''
"#;

#[test]
fn toml_manifest_loads_and_runs() {
    let ws = TestWorkspace::new();
    ws.copy_fixture(fixtures::ORDERS, "src/pages/Orders.js");
    ws.write("jobs.toml", TOML_MANIFEST);

    let manifest = Manifest::load(&ws.normalized("jobs.toml")).unwrap();
    assert_eq!(manifest.policy, FailurePolicy::KeepGoing);
    assert_eq!(
        manifest.jobs[0].edits[0],
        Edit::ReplaceBlock {
            marker: r#"<div className="col-md-6">"#.into(),
            occurrence: 2,
            tokens: TokenPair::element("div"),
            replacement: "<div className=\"col-md-6\">\n            <h6>Amount review</h6>\n          </div>".into(),
        }
    );

    let report = BatchEngine::new(ws.normalized_root(), manifest.policy)
        .run_manifest(&manifest)
        .unwrap();
    assert_eq!(report.jobs[0].status, JobStatus::Applied);
    ws.assert_file_contains("src/pages/Orders.js", "Amount review");
}

#[test]
fn yaml_manifest_with_insert_after() {
    let ws = TestWorkspace::new();
    ws.write(
        "jobs.yaml",
        r#"
jobs:
  - path: App.js
    edits:
      - kind: insert
        marker: "{M}"
        occurrence: 2
        placement: after
        content: "Z"
"#,
    );

    let manifest = Manifest::load(&ws.normalized("jobs.yaml")).unwrap();
    assert_eq!(manifest.policy, FailurePolicy::FailFast);
    assert_eq!(
        manifest.jobs[0].edits,
        vec![Edit::Insert {
            marker: "{M}".into(),
            occurrence: 2,
            placement: Placement::After,
            content: "Z".into(),
        }]
    );
}

#[test]
fn json_manifest_with_span_edit() {
    let ws = TestWorkspace::new();
    ws.write(
        "jobs.json",
        r#"{"jobs": [{"path": "a.txt", "edits": [{"kind": "replace-span", "start": 2, "end": 4, "replacement": "XYZ"}]}]}"#,
    );
    ws.write("a.txt", "abcdef");

    let manifest = Manifest::load(&ws.normalized("jobs.json")).unwrap();
    let report = BatchEngine::new(ws.normalized_root(), manifest.policy)
        .run_manifest(&manifest)
        .unwrap();

    assert!(report.success);
    ws.assert_file_eq("a.txt", "abXYZef");
}

#[test]
fn unknown_edit_kind_is_a_parse_error() {
    let ws = TestWorkspace::new();
    ws.write(
        "jobs.toml",
        "[[jobs]]\npath = \"a.js\"\n[[jobs.edits]]\nkind = \"delete\"\nmarker = \"x\"\n",
    );

    let err = Manifest::load(&ws.normalized("jobs.toml")).unwrap_err();
    assert!(matches!(
        err,
        Error::Fs(splice_fs::Error::ConfigParse { .. })
    ));
}

#[test]
fn zero_occurrence_fails_at_run_time() {
    let ws = TestWorkspace::new();
    ws.write("a.js", "{M}");
    ws.write(
        "jobs.toml",
        "[[jobs]]\npath = \"a.js\"\n[[jobs.edits]]\nkind = \"insert\"\nmarker = \"{M}\"\noccurrence = 0\ncontent = \"x\"\n",
    );

    let manifest = Manifest::load(&ws.normalized("jobs.toml")).unwrap();
    let report = BatchEngine::new(ws.normalized_root(), manifest.policy).run(&manifest.jobs);

    assert!(!report.success);
    assert!(report.jobs[0].error.as_deref().unwrap().contains("1-based"));
}
