//! Open, edit and close sequences against the dependency graph.

use std::time::{Duration, Instant};

use pawnls::project::AnalyzerConfig;
use pawnls::semantic::Workspace;

use crate::helpers::workspace_fixture::WorkspaceFixture;

#[test]
fn test_graph_empty_after_all_files_close() {
    let fx = WorkspaceFixture::new();
    fx.write("a.inc", "#include <b>\n#include <c>");
    fx.write("b.inc", "#include <c>");
    fx.write("c.inc", "#include <a>");
    let mut ws = fx.workspace();
    ws.open(fx.path("one.pwn"), "#include <a>");
    ws.open(fx.path("two.pwn"), "#include <c>");
    assert_eq!(ws.graph().len(), 3);

    ws.close(fx.path("one.pwn"));
    assert_eq!(ws.graph().len(), 3);
    ws.close(fx.path("two.pwn"));
    assert!(ws.graph().is_empty());
    assert_eq!(ws.file_count(), 0);
}

#[test]
fn test_ref_counts_match_distinct_referrers_after_edits() {
    let fx = WorkspaceFixture::new();
    fx.write("shared.inc", "");
    fx.write("wrapper.inc", "#include <shared>");
    let mut ws = fx.workspace();
    let path = fx.path("main.pwn");
    ws.open(&path, "#include <shared>");
    let shared = ws.file_id(fx.path("shared.inc")).unwrap();

    let edits = [
        "#include <shared>\n#include <wrapper>",
        "#include <wrapper>",
        "",
        "#include <shared>\n#include <shared>",
    ];
    let expected = [2, 1, 0, 1];
    for (text, count) in edits.into_iter().zip(expected) {
        ws.change(&path, text, Instant::now());
        ws.flush(&path);
        let actual = ws.graph().get_node(shared).map_or(0, |n| n.ref_count());
        assert_eq!(actual, count, "after {text:?}");
    }
}

#[test]
fn test_change_before_delay_does_not_reparse() {
    let fx = WorkspaceFixture::new();
    let mut ws = Workspace::new(fx.config().with_reparse_delay(Duration::from_millis(50)));
    let path = fx.path("main.pwn");
    let file = ws.open(&path, "new a;");
    let t0 = Instant::now();

    assert!(ws.change(&path, "new b;", t0));
    assert!(ws.poll(t0 + Duration::from_millis(49)).is_empty());
    assert!(ws.record(file).unwrap().parse().value("a").is_some());
    assert_eq!(ws.record(file).unwrap().text().as_ref(), "new b;");

    assert_eq!(ws.poll(t0 + Duration::from_millis(50)), vec![file]);
    assert!(ws.record(file).unwrap().parse().value("b").is_some());
}

#[test]
fn test_poll_reparses_files_in_id_order() {
    let fx = WorkspaceFixture::new();
    let mut ws = fx.workspace();
    let first = ws.open(fx.path("first.pwn"), "");
    let second = ws.open(fx.path("second.pwn"), "");
    let t0 = Instant::now();
    ws.change(fx.path("second.pwn"), "new y;", t0);
    ws.change(fx.path("first.pwn"), "new x;", t0);
    assert_eq!(ws.poll(t0 + Duration::from_secs(1)), vec![first, second]);
}

#[test]
fn test_unopened_paths_report_nothing_in_release_builds() {
    let mut ws = Workspace::new(AnalyzerConfig::default());
    if cfg!(debug_assertions) {
        return;
    }
    assert!(!ws.change("nowhere.pwn", "new x;", Instant::now()));
    assert!(!ws.flush("nowhere.pwn"));
    assert!(!ws.close("nowhere.pwn"));
    assert!(ws.diagnostics("nowhere.pwn").is_empty());
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "file is not open")]
fn test_unopened_path_asserts_in_debug_builds() {
    let mut ws = Workspace::new(AnalyzerConfig::default());
    ws.change("nowhere.pwn", "new x;", Instant::now());
}

#[test]
fn test_reopen_after_close_rescans_from_disk() {
    let fx = WorkspaceFixture::new();
    let inc = fx.write("dep.inc", "stock Old() {}");
    let mut ws = fx.workspace();
    let path = fx.path("main.pwn");
    ws.open(&path, "#include <dep>");
    ws.close(&path);

    std::fs::write(&inc, "stock New() {}").unwrap();
    let main = ws.open(&path, "#include <dep>");
    let merged = ws.merged_symbols(main);
    assert!(merged.callable("New").is_some());
    assert!(merged.callable("Old").is_none());
}
