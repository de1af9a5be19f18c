//! Document and workspace symbol tests for the IDE layer.

use pawnls::base::Span;
use pawnls::hir::SymbolKind;
use pawnls::ide::{document_symbols, workspace_symbols};

use crate::helpers::source_fixtures::{GAMEMODE, PLAYER_INC};
use crate::helpers::workspace_fixture::WorkspaceFixture;

#[test]
fn test_document_symbols_in_source_order() {
    let fx = WorkspaceFixture::new();
    fx.write("player.inc", PLAYER_INC);
    let (ws, main) = fx.open_main(GAMEMODE);

    let symbols: Vec<(String, SymbolKind, Span)> = document_symbols(&ws, main)
        .into_iter()
        .map(|s| (s.name.to_string(), s.kind, s.span))
        .collect();
    assert_eq!(
        symbols,
        vec![
            ("gPlayers".to_string(), SymbolKind::Variable, Span::on_line(2, 4, 12)),
            ("OnTick".to_string(), SymbolKind::Function, Span::on_line(4, 8, 14)),
            ("OnTick".to_string(), SymbolKind::Function, Span::on_line(6, 7, 13)),
            ("main".to_string(), SymbolKind::Function, Span::on_line(10, 0, 4)),
        ]
    );
}

#[test]
fn test_document_symbols_of_open_include_keep_statics() {
    let fx = WorkspaceFixture::new();
    let path = fx.write("player.inc", PLAYER_INC);
    let mut ws = fx.workspace();
    let file = ws.open(&path, PLAYER_INC);

    let symbols = document_symbols(&ws, file);
    assert!(symbols.iter().any(|s| s.name.as_ref() == "Helper"));
    let health = symbols.iter().find(|s| s.name.as_ref() == "E_HEALTH").unwrap();
    assert_eq!(health.container.as_deref(), Some("E_PLAYER"));
    assert_eq!(symbols.iter().filter(|s| s.name.as_ref() == "MAX_PLAYER_NAME").count(), 1);
}

#[test]
fn test_workspace_symbols_query_is_case_insensitive() {
    let fx = WorkspaceFixture::new();
    fx.write("player.inc", PLAYER_INC);
    let (ws, _main) = fx.open_main(GAMEMODE);

    let names: Vec<String> = workspace_symbols(&ws, Some("health"))
        .into_iter()
        .map(|s| s.name.to_string())
        .collect();
    assert_eq!(names, vec!["E_HEALTH", "GetHealth"]);

    let all = workspace_symbols(&ws, None);
    assert!(all.iter().any(|s| s.name.as_ref() == "main"));
    assert!(all.iter().all(|s| s.name.as_ref() != "Helper"));
}
