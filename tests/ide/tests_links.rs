//! Document link tests for the IDE layer.

use pawnls::base::Span;
use pawnls::ide::document_links;

use crate::helpers::workspace_fixture::WorkspaceFixture;

#[test]
fn test_links_for_resolved_includes_only() {
    let fx = WorkspaceFixture::new();
    let core = fx.write("core.inc", "");
    let (ws, main) = fx.open_main("#include <core>\n#tryinclude \"missing\"\n#include \"core.inc\"");

    let links = document_links(&ws, main);
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].span, Span::on_line(0, 9, 15));
    assert_eq!(links[1].span, Span::on_line(2, 9, 19));
    let core_id = ws.file_id(&core).unwrap();
    assert!(links.iter().all(|link| link.target_file == core_id));
    assert!(links[0].tooltip.contains("core.inc"));
}
