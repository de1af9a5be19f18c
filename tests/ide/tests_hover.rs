//! Hover tests for the IDE layer.

use pawnls::base::{Position, Span};
use pawnls::ide::hover;

use crate::helpers::source_fixtures::{GAMEMODE, PLAYER_INC};
use crate::helpers::workspace_fixture::{WorkspaceFixture, position_of};

fn fixture() -> WorkspaceFixture {
    let fx = WorkspaceFixture::new();
    fx.write("player.inc", PLAYER_INC);
    fx
}

#[test]
fn test_hover_native_shows_prototype_and_doc() {
    let fx = fixture();
    let (ws, main) = fx.open_main(GAMEMODE);

    let result = hover(&ws, main, position_of(GAMEMODE, "Kick(i)", 0, 0)).unwrap();
    assert_eq!(
        result.contents,
        "```pawn\nnative Kick(playerid)\n```\n\nKick a player from the server."
    );
    assert_eq!(result.span, Span::on_line(13, 8, 12));
}

#[test]
fn test_hover_constant_shows_literal() {
    let fx = fixture();
    let text = "#include <player>\nnew id = INVALID_ID;\nnew name[MAX_PLAYER_NAME];";
    let (ws, main) = fx.open_main(text);

    let invalid = hover(&ws, main, position_of(text, "INVALID_ID", 0, 0)).unwrap();
    assert_eq!(invalid.contents, "```pawn\nconst INVALID_ID = -1\n```");

    let max = hover(&ws, main, position_of(text, "MAX_PLAYER_NAME", 0, 0)).unwrap();
    assert_eq!(max.contents, "```pawn\n#define MAX_PLAYER_NAME 24\n```");
}

#[test]
fn test_hover_variable_shows_inline_comment() {
    let fx = fixture();
    let text = "#include <player>\nnew gPlayers[64][E_PLAYER]; // roster\nmain() {\n    gPlayers[0][E_ID] = 1;\n}";
    let (ws, main) = fx.open_main(text);

    let result = hover(&ws, main, position_of(text, "gPlayers[0]", 0, 1)).unwrap();
    assert_eq!(result.contents, "```pawn\nnew gPlayers[64][E_PLAYER]\n```\n\nroster");
}

#[test]
fn test_hover_local_shows_declaration() {
    let fx = fixture();
    let (ws, main) = fx.open_main(GAMEMODE);
    let result = hover(&ws, main, position_of(GAMEMODE, "count++", 0, 0)).unwrap();
    assert_eq!(result.contents, "```pawn\nnew count\n```");
}

#[test]
fn test_hover_parameter_shows_tagged_declaration() {
    let fx = fixture();
    let text = "stock Float:Scale(Float:value, factor = 2) {\n    return value * factor;\n}";
    let (ws, main) = fx.open_main(text);
    let result = hover(&ws, main, position_of(text, "value *", 0, 0)).unwrap();
    assert_eq!(result.contents, "```pawn\nFloat:value\n```");
    let result = hover(&ws, main, position_of(text, "factor;", 0, 0)).unwrap();
    assert_eq!(result.contents, "```pawn\nfactor\n```");
}

#[test]
fn test_hover_include_shows_resolved_path() {
    let fx = fixture();
    let (ws, main) = fx.open_main(GAMEMODE);
    let result = hover(&ws, main, Position::new(0, 10)).unwrap();
    assert!(result.contents.contains("player.inc"));
    assert_eq!(result.span, Span::on_line(0, 9, 17));
}

#[test]
fn test_hover_on_keyword_is_none() {
    let fx = fixture();
    let (ws, main) = fx.open_main(GAMEMODE);
    assert!(hover(&ws, main, Position::new(12, 5)).is_none());
}
