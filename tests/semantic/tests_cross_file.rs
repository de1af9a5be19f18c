//! Symbols visible across `#include` chains.

use pawnls::hir::SymbolKind;

use crate::helpers::source_fixtures::{GAMEMODE, PLAYER_INC};
use crate::helpers::workspace_fixture::WorkspaceFixture;

#[test]
fn test_included_symbols_visible_except_statics() {
    let fx = WorkspaceFixture::new();
    fx.write("player.inc", PLAYER_INC);
    let (ws, main) = fx.open_main(GAMEMODE);

    let merged = ws.merged_symbols(main);
    for name in ["Kick", "SetTimer", "GetHealth", "IsValid", "OnTick", "main"] {
        assert!(merged.callable(name).is_some(), "{name}");
    }
    assert!(merged.callable("Helper").is_none());
    assert!(merged.value("gInternal").is_none());
    assert_eq!(merged.value("E_HEALTH").unwrap().kind(), SymbolKind::EnumMember);
    assert!(ws.diagnostics(fx.path("main.pwn")).is_empty());
}

#[test]
fn test_own_symbols_listed_before_included() {
    let fx = WorkspaceFixture::new();
    fx.write("player.inc", PLAYER_INC);
    let (ws, main) = fx.open_main(GAMEMODE);

    let merged = ws.merged_symbols(main);
    let first_included = merged
        .callables
        .iter()
        .position(|c| c.file != main)
        .unwrap();
    assert!(merged.callables[..first_included].iter().all(|c| c.file == main));
    assert!(merged.callables[first_included..].iter().all(|c| c.file != main));
}

#[test]
fn test_transitive_includes_through_subdirectories() {
    let fx = WorkspaceFixture::new();
    fx.write("lib/core.inc", "#include \"detail/impl\"\nstock Core() {}");
    fx.write("lib/detail/impl.inc", "stock Impl() {}");
    let (ws, main) = fx.open_main("#include <lib/core>");

    let merged = ws.merged_symbols(main);
    assert!(merged.callable("Core").is_some());
    assert!(merged.callable("Impl").is_some());
    assert_eq!(ws.dependency_closure(main).len(), 3);
}

#[test]
fn test_quoted_include_prefers_including_directory() {
    let fx = WorkspaceFixture::new();
    fx.write("local.inc", "stock FromRoot() {}");
    fx.write("mode/local.inc", "stock FromMode() {}");
    let mut ws = fx.workspace();
    let file = ws.open(fx.path("mode/script.pwn"), "#include \"local\"");

    let merged = ws.merged_symbols(file);
    assert!(merged.callable("FromMode").is_some());
    assert!(merged.callable("FromRoot").is_none());
}

#[test]
fn test_same_declaration_reached_twice_merged_once() {
    let fx = WorkspaceFixture::new();
    fx.write("base.inc", "stock Base() {}");
    fx.write("left.inc", "#include <base>");
    fx.write("right.inc", "#include <base>");
    let (ws, main) = fx.open_main("#include <left>\n#include <right>");

    let merged = ws.merged_symbols(main);
    assert_eq!(merged.callables.iter().filter(|c| c.name.as_ref() == "Base").count(), 1);
    let base = ws.file_id(fx.path("base.inc")).unwrap();
    assert_eq!(ws.graph().get_node(base).unwrap().ref_count(), 2);
}

#[test]
fn test_missing_dependency_of_dependency_is_tolerated() {
    let fx = WorkspaceFixture::new();
    fx.write("outer.inc", "#include <absent>\nstock Outer() {}");
    let (ws, main) = fx.open_main("#include <outer>");
    assert!(ws.merged_symbols(main).callable("Outer").is_some());
    // Only open files report include diagnostics.
    assert!(ws.diagnostics(fx.path("main.pwn")).is_empty());
}
