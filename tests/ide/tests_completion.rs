//! Completion tests for the IDE layer.

use pawnls::base::Position;
use pawnls::ide::{CompletionKind, completions};

use crate::helpers::source_fixtures::PLAYER_INC;
use crate::helpers::workspace_fixture::WorkspaceFixture;

fn labels_at(text: &str, position: Position) -> Vec<(String, CompletionKind)> {
    let fx = WorkspaceFixture::new();
    fx.write("player.inc", PLAYER_INC);
    let (ws, main) = fx.open_main(text);
    let mut labels: Vec<(String, CompletionKind)> = completions(&ws, main, position)
        .into_iter()
        .map(|item| (item.label.to_string(), item.kind))
        .collect();
    labels.sort_by(|a, b| a.0.cmp(&b.0));
    labels
}

#[test]
fn test_prefix_filters_functions() {
    let labels = labels_at("#include <player>\nmain() {\n    Get\n}", Position::new(2, 7));
    assert_eq!(labels, vec![("GetHealth".to_string(), CompletionKind::Function)]);
}

#[test]
fn test_enum_type_and_members() {
    let labels = labels_at("#include <player>\nmain() {\n    E_\n}", Position::new(2, 6));
    assert_eq!(
        labels,
        vec![
            ("E_HEALTH".to_string(), CompletionKind::EnumMember),
            ("E_ID".to_string(), CompletionKind::EnumMember),
            ("E_NAME".to_string(), CompletionKind::EnumMember),
            ("E_PLAYER".to_string(), CompletionKind::Enum),
        ]
    );
}

#[test]
fn test_constant_macro_offered_once() {
    let labels = labels_at("#include <player>\nnew x = MAX\n", Position::new(1, 11));
    assert_eq!(labels, vec![("MAX_PLAYER_NAME".to_string(), CompletionKind::Macro)]);
}

#[test]
fn test_statics_of_includes_not_offered() {
    let labels = labels_at("#include <player>\nmain() {\n    Hel\n}", Position::new(2, 7));
    assert!(labels.is_empty());
    let labels = labels_at("#include <player>\nmain() {\n    gIn\n}", Position::new(2, 7));
    assert!(labels.is_empty());
}

#[test]
fn test_items_carry_detail_and_documentation() {
    let fx = WorkspaceFixture::new();
    fx.write("player.inc", PLAYER_INC);
    let (ws, main) = fx.open_main("#include <player>\nmain() {\n    Kic\n}");
    let items = completions(&ws, main, Position::new(2, 7));
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].detail.as_deref(), Some("native Kick(playerid)"));
    assert_eq!(items[0].documentation.as_deref(), Some("Kick a player from the server."));
    assert_eq!(items[0].kind.to_lsp(), 3);
}
