use filter_model::{FilterNode, NodeKind};
use mongo_filter::compile;

#[test]
fn test_pass_through_literals() {
    let cases = [
        (NodeKind::Number, "42"),
        (NodeKind::Number, "0.123456"),
        (NodeKind::Boolean, "true"),
        (NodeKind::Guid, "01234567-89ab-cdef-0123-456789abcdef"),
        (NodeKind::Date, "2012-12-03"),
        (NodeKind::Time, "07:59:59.999"),
        (NodeKind::DateTime, "2012-12-03T07:16:23Z"),
        (NodeKind::Property, "CompanyName"),
    ];

    for (kind, text) in cases {
        let fragment = compile(&FilterNode::leaf(kind, text)).unwrap();
        assert_eq!(fragment.as_str(), text, "{kind}");
    }
}

#[test]
fn test_string_literal_strips_only_delimiters() {
    let fragment = compile(&FilterNode::leaf(NodeKind::String, "'Alfreds Futterkiste'")).unwrap();
    assert_eq!(fragment.as_str(), "Alfreds Futterkiste");

    // Internal escaping is left to the parser.
    let fragment = compile(&FilterNode::leaf(NodeKind::String, "'O''Neil'")).unwrap();
    assert_eq!(fragment.as_str(), "O''Neil");

    let fragment = compile(&FilterNode::leaf(NodeKind::String, "''")).unwrap();
    assert_eq!(fragment.as_str(), "");
}

#[test]
fn test_literal_compilation_is_idempotent() {
    let node = FilterNode::string("Milk");
    let first = compile(&node).unwrap();
    let second = compile(&node).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_list_preserves_order_and_count() {
    let list = FilterNode::list(vec![
        FilterNode::string("a"),
        FilterNode::string("b"),
        FilterNode::string("c"),
    ]);

    let fragment = compile(&list).unwrap();
    assert_eq!(fragment.as_str(), "[a, b, c]");
}

#[test]
fn test_empty_and_single_lists() {
    assert_eq!(compile(&FilterNode::list(vec![])).unwrap().as_str(), "[]");
    assert_eq!(
        compile(&FilterNode::list(vec![FilterNode::number("7")]))
            .unwrap()
            .as_str(),
        "[7]"
    );
}
