//! Find references tests for the IDE layer.

use pawnls::base::Span;
use pawnls::ide::find_references;

use crate::helpers::source_fixtures::{GAMEMODE, PLAYER_INC};
use crate::helpers::workspace_fixture::{WorkspaceFixture, position_of};

fn fixture() -> WorkspaceFixture {
    let fx = WorkspaceFixture::new();
    fx.write("player.inc", PLAYER_INC);
    fx
}

fn spans(result: &pawnls::ide::ReferenceResult) -> Vec<(Span, bool)> {
    result.references.iter().map(|r| (r.span, r.is_definition)).collect()
}

#[test]
fn test_callback_references_include_quoted_occurrence() {
    let fx = fixture();
    let (ws, main) = fx.open_main(GAMEMODE);
    let position = position_of(GAMEMODE, "public OnTick", 0, 9);

    let with_decl = find_references(&ws, main, position, true);
    assert_eq!(
        spans(&with_decl),
        vec![
            (Span::on_line(4, 8, 14), true),
            (Span::on_line(6, 7, 13), false),
            (Span::on_line(7, 14, 20), false),
        ]
    );
    assert!(with_decl.references.iter().all(|r| r.file == main));

    let without_decl = find_references(&ws, main, position, false);
    assert_eq!(without_decl.len(), 2);
    assert!(without_decl.references.iter().all(|r| !r.is_definition));
    assert!(!without_decl.include_declaration);
}

#[test]
fn test_references_span_included_files_sorted_by_file() {
    let fx = fixture();
    let (ws, main) = fx.open_main(GAMEMODE);
    let player = ws.file_id(fx.path("player.inc")).unwrap();

    let result = find_references(&ws, main, position_of(GAMEMODE, "Kick(i)", 0, 1), true);
    let found: Vec<_> = result.references.iter().map(|r| (r.file, r.span, r.is_definition)).collect();
    assert_eq!(
        found,
        vec![
            (main, Span::on_line(13, 8, 12), false),
            (player, Span::on_line(19, 7, 11), true),
        ]
    );
}

#[test]
fn test_local_references_stay_in_current_file() {
    let fx = fixture();
    let (ws, main) = fx.open_main(GAMEMODE);

    let result = find_references(&ws, main, position_of(GAMEMODE, "count++", 0, 2), true);
    assert_eq!(
        spans(&result),
        vec![
            (Span::on_line(11, 8, 13), true),
            (Span::on_line(14, 8, 13), false),
            (Span::on_line(16, 14, 19), false),
        ]
    );
}

#[test]
fn test_unreadable_dependency_is_skipped() {
    let fx = WorkspaceFixture::new();
    let dep = fx.write("dep.inc", "stock Dep() {}");
    let text = "#include <dep>\nmain() {\n    Dep();\n}";
    let (ws, main) = fx.open_main(text);
    std::fs::remove_file(&dep).unwrap();

    let result = find_references(&ws, main, position_of(text, "Dep()", 0, 1), false);
    assert_eq!(result.len(), 1);
    assert_eq!(result.references[0].file, main);

    // The declaration is still reported from the cached symbols.
    let result = find_references(&ws, main, position_of(text, "Dep()", 0, 1), true);
    assert_eq!(result.len(), 2);
    assert!(result.references.iter().any(|r| r.is_definition && r.file != main));
}

#[test]
fn test_no_references_for_include_or_blank() {
    let fx = fixture();
    let (ws, main) = fx.open_main(GAMEMODE);
    assert!(find_references(&ws, main, pawnls::base::Position::new(0, 12), true).is_empty());
    assert!(find_references(&ws, main, pawnls::base::Position::new(1, 0), true).is_empty());
}
