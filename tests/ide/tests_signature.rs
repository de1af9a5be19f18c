//! Signature help tests for the IDE layer.

use pawnls::base::Position;
use pawnls::ide::signature_help;

use crate::helpers::source_fixtures::PLAYER_INC;
use crate::helpers::workspace_fixture::WorkspaceFixture;

fn open(text: &str) -> (WorkspaceFixture, pawnls::semantic::Workspace, pawnls::base::FileId) {
    let fx = WorkspaceFixture::new();
    fx.write("player.inc", PLAYER_INC);
    let (ws, main) = fx.open_main(text);
    (fx, ws, main)
}

#[test]
fn test_active_parameter_follows_commas() {
    let (_fx, ws, main) = open("#include <player>\nmain() {\n    GetHealth(1, \n}");
    let help = signature_help(&ws, main, Position::new(2, 17)).unwrap();
    assert_eq!(help.label.as_ref(), "stock Float:GetHealth(playerid, bool:clamp = true)");
    assert_eq!(help.parameters.len(), 2);
    assert_eq!(help.active_parameter, 1);
    assert!(help.doc.is_none());
}

#[test]
fn test_nested_call_uses_innermost() {
    let (_fx, ws, main) = open("#include <player>\nmain() {\n    GetHealth(Kick(\n}");
    let help = signature_help(&ws, main, Position::new(2, 19)).unwrap();
    assert_eq!(help.label.as_ref(), "native Kick(playerid)");
    assert_eq!(help.active_parameter, 0);
    assert_eq!(help.doc.as_deref(), Some("Kick a player from the server."));
}

#[test]
fn test_macro_signature() {
    let (_fx, ws, main) = open("#include <player>\nmain() {\n    if (IsValid(x\n}");
    let help = signature_help(&ws, main, Position::new(2, 17)).unwrap();
    assert_eq!(help.label.as_ref(), "#define IsValid(%0)");
}

#[test]
fn test_no_help_outside_calls_or_for_unknown_callee() {
    let (_fx, ws, main) = open("#include <player>\nmain() {\n    Kick(1);\n    Unknown(\n}");
    assert!(signature_help(&ws, main, Position::new(2, 12)).is_none());
    assert!(signature_help(&ws, main, Position::new(3, 12)).is_none());
}
