//! Inputs the scanner must survive without panicking or losing its place.

use pawnls::base::{FileId, Span};
use pawnls::hir::extract;
use rstest::rstest;

#[rstest]
#[case("")]
#[case("\n\n\n")]
#[case("{{{{")]
#[case("}}}}")]
#[case("/* never closed")]
#[case("\"never closed")]
#[case("enum {")]
#[case("new a[\n")]
#[case("#define\n#include\n#tryinclude <")]
#[case("stock Foo(a,\n  b) {}")]
#[case("é ü ñ 日本 = ;;; ()")]
#[case("\\\n\\\n\\")]
fn test_garbage_does_not_panic(#[case] text: &str) {
    let _ = extract(FileId::new(0), text, false);
    let _ = extract(FileId::new(0), text, true);
}

#[test]
fn test_crlf_and_lf_produce_same_symbols() {
    let lf = "/** Doc. */\nstock A() {\n}\nnew b; // note\n";
    let crlf = lf.replace('\n', "\r\n");
    assert_eq!(extract(FileId::new(0), lf, false), extract(FileId::new(0), &crlf, false));
}

#[test]
fn test_columns_count_characters_not_bytes() {
    let result = extract(FileId::new(0), "/* é */ new value;", false);
    assert_eq!(result.value("value").unwrap().span, Span::on_line(0, 12, 17));
}

#[test]
fn test_local_declarations_are_not_global() {
    let text = "main() {\n    new local;\n    static counter;\n}\nnew global;";
    let result = extract(FileId::new(0), text, false);
    let names: Vec<&str> = result.values.iter().map(|v| v.name.as_ref()).collect();
    assert_eq!(names, vec!["global"]);
}

#[test]
fn test_multiline_prototype_is_not_a_declaration() {
    let text = "stock Long(a,\n    b) {\n}\nnew after;";
    let result = extract(FileId::new(0), text, false);
    assert!(result.value("Long").is_none());
    assert!(result.value("a").is_none());
    assert!(result.value("after").is_some());
}

#[test]
fn test_operator_overloads_and_bare_declarations_keep_following_symbols() {
    let text = "\
native Float:float(value);
native Float:floatmul(Float:oper1, Float:oper2);
native Float:operator*(Float:oper1, Float:oper2) = floatmul;
stock Float:operator-(Float:oper)
    return oper^Float:cellmin;
new bool:gReady
stock bool:operator!(Float:oper)
    return (_:oper & cellmax) == 0;
forward Float:Tail();
";
    let result = extract(FileId::new(0), text, false);
    let callables: Vec<&str> = result.callables.iter().map(|c| c.name.as_ref()).collect();
    assert_eq!(
        callables,
        vec!["float", "floatmul", "operator*", "operator-", "operator!", "Tail"]
    );
    let ready = result.value("gReady").unwrap();
    assert_eq!(ready.label.as_ref(), "new bool:gReady");
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_unterminated_declaration_at_end_of_file_is_kept() {
    let result = extract(FileId::new(0), "stock First() {}\nnew const LAST = 7", false);
    assert_eq!(result.callable("First").map(|c| c.name.as_ref()), Some("First"));
    assert_eq!(result.value("LAST").unwrap().literal.as_deref(), Some("7"));
}
