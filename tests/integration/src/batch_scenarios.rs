//! Manifest-driven batch runs over several documents

use pretty_assertions::assert_eq;
use splice_core::{
    ApplyOptions, BatchEngine, Edit, FailurePolicy, Job, JobStatus, Manifest,
};
use splice_fs::NormalizedPath;
use splice_test_utils::TestWorkspace;
use splice_test_utils::fixtures::{DASHBOARD, ORDERS};

const MANIFEST: &str = r#"
policy = "keep-going"

[[jobs]]
path = "src/pages/Dashboard.js"

[[jobs.edits]]
kind = "insert"
marker = "{order.discountAmount > 0 && ("
content = "{order.shippingFee > 0 && <div className=\"small\">{currency(order.shippingFee)}</div>}\n            "

[[jobs]]
path = "src/pages/Orders.js"

[[jobs.edits]]
kind = "replace-block"
marker = '<div className="col-md-6">'
occurrence = 2
replacement = '<div className="col-md-6"><h6>Summary</h6></div>'

[[jobs.edits]]
kind = "insert"
marker = "<h6>Summary</h6>"
placement = "after"
content = "<span>total</span>"
"#;

fn setup() -> TestWorkspace {
    let ws = TestWorkspace::new();
    ws.copy_fixture(DASHBOARD, "src/pages/Dashboard.js");
    ws.copy_fixture(ORDERS, "src/pages/Orders.js");
    ws
}

#[test]
fn test_manifest_edits_both_documents() {
    let ws = setup();
    let manifest_path = NormalizedPath::new(ws.write("splice.toml", MANIFEST));
    let manifest = Manifest::load(&manifest_path).unwrap();

    let engine = BatchEngine::new(ws.normalized_root(), manifest.policy);
    let report = engine.run_manifest(&manifest).unwrap();

    assert!(report.success);
    assert_eq!(report.policy, FailurePolicy::KeepGoing);
    assert_eq!(report.count(JobStatus::Applied), 2);

    ws.assert_file_contains(
        "src/pages/Dashboard.js",
        "{order.shippingFee > 0 && <div className=\"small\">{currency(order.shippingFee)}</div>}\n            {order.discountAmount > 0 && (",
    );
    ws.assert_file_contains(
        "src/pages/Orders.js",
        r#"<div className="col-md-6"><h6>Summary</h6><span>total</span></div>"#,
    );
}

#[test]
fn test_rerun_reports_unchanged_block_replacement() {
    let ws = setup();
    let manifest_path = NormalizedPath::new(ws.write("splice.toml", MANIFEST));
    let manifest = Manifest::load(&manifest_path).unwrap();
    let engine = BatchEngine::new(ws.normalized_root(), manifest.policy);

    assert!(engine.run_manifest(&manifest).unwrap().success);
    let orders = ws.read("src/pages/Orders.js");

    let report = engine.run_manifest(&manifest).unwrap();

    // Inserts are not idempotent, block replacements are.
    assert_eq!(report.jobs[0].status, JobStatus::Applied);
    assert_eq!(report.jobs[1].status, JobStatus::Unchanged);
    let outcome = report.jobs[1].outcome.as_ref().unwrap();
    assert!(!outcome.written);
    assert_eq!(outcome.checksum_before, outcome.checksum_after);
    ws.assert_file_eq("src/pages/Orders.js", &orders);
}

#[test]
fn test_dry_run_reports_without_writing() {
    let ws = setup();
    let dashboard = ws.read("src/pages/Dashboard.js");
    let manifest_path = NormalizedPath::new(ws.write("splice.json", &manifest_json()));
    let manifest = Manifest::load(&manifest_path).unwrap();

    let report = BatchEngine::new(ws.normalized_root(), FailurePolicy::FailFast)
        .with_options(ApplyOptions::dry_run())
        .run_manifest(&manifest)
        .unwrap();

    assert!(report.success);
    assert!(report.dry_run);
    let outcome = report.jobs[0].outcome.as_ref().unwrap();
    assert!(outcome.changed);
    assert!(!outcome.written);
    assert!(outcome.diff.is_some());
    ws.assert_file_eq("src/pages/Dashboard.js", &dashboard);
}

#[test]
fn test_fail_fast_leaves_later_documents_alone() {
    let ws = setup();
    let orders = ws.read("src/pages/Orders.js");

    let jobs = vec![
        Job {
            path: "src/pages/Dashboard.js".into(),
            edits: vec![Edit::insert_before("{order.missingField", "x")],
        },
        Job {
            path: "src/pages/Orders.js".into(),
            edits: vec![Edit::replace_div(r#"<div className="col-md-6">"#, 2, "<div/>")],
        },
    ];
    let report = BatchEngine::new(ws.normalized_root(), FailurePolicy::FailFast).run(&jobs);

    assert!(!report.success);
    assert_eq!(report.jobs[0].status, JobStatus::Failed);
    assert_eq!(report.jobs[1].status, JobStatus::Skipped);
    ws.assert_file_eq("src/pages/Orders.js", &orders);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["jobs"][1]["status"], "skipped");
}

fn manifest_json() -> String {
    serde_json::json!({
        "jobs": [{
            "path": "src/pages/Dashboard.js",
            "edits": [{
                "kind": "insert",
                "marker": "{order.discountAmount > 0 && (",
                "placement": "before",
                "content": "{/* fees */}\n            "
            }]
        }]
    })
    .to_string()
}
