//! Syntax-shape diagnostics: codes, ranges and recovery.

use pawnls::base::{FileId, Span};
use pawnls::hir::{Severity, codes, extract};

#[test]
fn test_each_problem_reported_once_and_scanning_continues() {
    let text = "new static bad;\nnew = 5;\n#include \"unterminated\n#include <a.inc> junk\n}\nstock Ok() {}";
    let result = extract(FileId::new(3), text, false);

    let found: Vec<(&str, Span)> = result
        .diagnostics
        .iter()
        .map(|d| (d.code().unwrap_or_default(), d.span))
        .collect();
    assert_eq!(
        found,
        vec![
            (codes::INVALID_SPECIFIERS, Span::on_line(0, 4, 10)),
            (codes::EXPECTED_IDENTIFIER, Span::on_line(1, 4, 5)),
            (codes::MALFORMED_INCLUDE, Span::on_line(2, 9, 22)),
            (codes::INCLUDE_TRAILING, Span::on_line(3, 17, 21)),
            (codes::UNMATCHED_BRACE, Span::on_line(4, 0, 1)),
        ]
    );
    assert!(result.diagnostics.iter().all(|d| d.severity == Severity::Error));
    assert!(result.diagnostics.iter().all(|d| d.file == FileId::new(3)));

    assert!(result.callable("Ok").is_some());
    assert!(result.value("bad").is_none());
    assert_eq!(result.inclusions.len(), 1);
    assert_eq!(result.inclusions[0].filename.as_ref(), "a.inc");
}

#[test]
fn test_clean_file_has_no_diagnostics() {
    let text = "#include <a_samp>\n\nmain() {\n    print(\"}\");\n}\n";
    assert!(extract(FileId::new(0), text, false).diagnostics.is_empty());
}

#[test]
fn test_diagnostic_messages_name_the_problem() {
    let result = extract(FileId::new(0), "static public x;\n#tryinclude", false);
    assert!(result.diagnostics[0].message.contains("'public'"));
    assert!(result.diagnostics[1].message.contains("#tryinclude"));
}
