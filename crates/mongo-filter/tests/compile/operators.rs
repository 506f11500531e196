use filter_model::{FilterNode, NodeKind, cmp, func, prop, string};
use mongo_filter::compile;

#[test]
fn test_comparison_operators() {
    let cases = [
        ("eq", "{ Price: { $eq: 5 } }"),
        ("ne", "{ Price: { $ne: 5 } }"),
        ("gt", "{ Price: { $gt: 5 } }"),
        ("ge", "{ Price: { $gte: 5 } }"),
        ("lt", "{ Price: { $lt: 5 } }"),
        ("le", "{ Price: { $lte: 5 } }"),
    ];

    for (op, expected) in cases {
        let tree = cmp!(op, prop!("Price"), FilterNode::number("5"));
        assert_eq!(compile(&tree).unwrap().as_str(), expected, "{op}");
    }
}

#[test]
fn test_operands_keep_left_to_right_order() {
    let tree = cmp!("lt", FilterNode::number("1"), FilterNode::number("2"));
    let fragment = compile(&tree).unwrap().into_string();

    let left = fragment.find('1').unwrap();
    let right = fragment.find('2').unwrap();
    assert!(left < right, "{fragment}");
}

#[test]
fn test_operator_case_does_not_matter() {
    let lower = cmp!("eq", prop!("Name"), string!("Milk"));
    let upper = cmp!("EQ", prop!("Name"), string!("Milk"));
    let mixed = cmp!("Eq", prop!("Name"), string!("Milk"));

    let expected = compile(&lower).unwrap();
    assert_eq!(compile(&upper).unwrap(), expected);
    assert_eq!(compile(&mixed).unwrap(), expected);
    assert_eq!(expected.as_str(), "{ Name: { $eq: Milk } }");
}

#[test]
fn test_in_list() {
    let tree = cmp!(
        "in",
        prop!("City"),
        FilterNode::list(vec![string!("a"), string!("b"), string!("c")])
    );

    assert_eq!(
        compile(&tree).unwrap().as_str(),
        "{ City: { $in: [a, b, c] } }"
    );
}

#[test]
fn test_logical_operators() {
    let left = cmp!("gt", prop!("Price"), FilterNode::number("5"));
    let right = cmp!("eq", prop!("Name"), string!("Milk"));

    let and = FilterNode::logical("and", vec![left.clone(), right.clone()]);
    assert_eq!(
        compile(&and).unwrap().as_str(),
        "{ $and: [ { Price: { $gt: 5 } }, { Name: { $eq: Milk } } ] }"
    );

    let or = FilterNode::logical("OR", vec![left, right]);
    assert_eq!(
        compile(&or).unwrap().as_str(),
        "{ $or: [ { Price: { $gt: 5 } }, { Name: { $eq: Milk } } ] }"
    );
}

#[test]
fn test_not_embeds_child_once() {
    let child = cmp!("gt", prop!("Price"), FilterNode::number("5"));
    let child_fragment = compile(&child).unwrap().into_string();

    let fragment = compile(&FilterNode::logical("not", vec![child]))
        .unwrap()
        .into_string();

    assert_eq!(fragment.matches(&child_fragment).count(), 1);
    assert_eq!(fragment, "{ $nor: [ { Price: { $gt: 5 } } ] }");
}

#[test]
fn test_double_negation() {
    let tree = FilterNode::logical(
        "not",
        vec![FilterNode::logical("not", vec![FilterNode::boolean(true)])],
    );
    assert_eq!(
        compile(&tree).unwrap().as_str(),
        "{ $nor: [ { $nor: [ true ] } ] }"
    );
}

#[test]
fn test_string_match_functions() {
    let cases = [
        ("contains", "freds", "{ CompanyName: { $regex: /freds/ } }"),
        ("startswith", "Alfr", "{ CompanyName: { $regex: /^Alfr/ } }"),
        (
            "endswith",
            "Futterkiste",
            "{ CompanyName: { $regex: /Futterkiste$/ } }",
        ),
    ];

    for (name, needle, expected) in cases {
        let tree = func!(name, prop!("CompanyName"), string!(needle));
        assert_eq!(compile(&tree).unwrap().as_str(), expected, "{name}");
    }
}

#[test]
fn test_nested_functions_compile_inner_first() {
    let inner = func!("trim", prop!("CompanyName"));
    let inner_fragment = compile(&inner).unwrap().into_string();
    assert_eq!(inner_fragment, "{ $trim: { input: CompanyName } }");

    let fragment = compile(&func!("length", inner)).unwrap().into_string();
    assert_eq!(fragment, format!("{{ $strLenCP: {inner_fragment} }}"));
}

#[test]
fn test_length_comparison() {
    let tree = cmp!(
        "eq",
        func!("length", prop!("CompanyName")),
        FilterNode::number("19")
    );
    assert_eq!(
        compile(&tree).unwrap().as_str(),
        "{ { $strLenCP: CompanyName }: { $eq: 19 } }"
    );
}

#[test]
fn test_substring_overloads() {
    let range = func!(
        "substring",
        prop!("CompanyName"),
        FilterNode::number("1"),
        FilterNode::number("2")
    );
    assert_eq!(
        compile(&range).unwrap().as_str(),
        "{ $substrCP: [ CompanyName, 1, 2 ] }"
    );

    let from = func!("substring", prop!("CompanyName"), FilterNode::number("1"));
    assert_eq!(
        compile(&from).unwrap().as_str(),
        "{ $substrCP: [ CompanyName, 1, { $strLenCP: CompanyName } ] }"
    );
}

#[test]
fn test_substringof_searches_second_argument() {
    let tree = func!("substringof", string!("Alfreds"), prop!("CompanyName"));
    assert_eq!(
        compile(&tree).unwrap().as_str(),
        "{ $gte: [ { $indexOfCP: [ CompanyName, Alfreds ] }, 0 ] }"
    );
}

#[test]
fn test_indexof_and_concat() {
    let indexof = func!("indexof", prop!("CompanyName"), string!("lfreds"));
    assert_eq!(
        compile(&indexof).unwrap().as_str(),
        "{ $indexOfCP: [ CompanyName, lfreds ] }"
    );

    let concat = func!("concat", func!("concat", prop!("City"), string!(", ")), prop!("Country"));
    assert_eq!(
        compile(&concat).unwrap().as_str(),
        "{ $concat: [ { $concat: [ City, ,  ] }, Country ] }"
    );
}

#[test]
fn test_function_names_are_case_insensitive() {
    let tree = FilterNode::new(
        NodeKind::Function,
        "StartsWith",
        vec![prop!("CompanyName"), string!("Alfr")],
    );
    assert_eq!(
        compile(&tree).unwrap().as_str(),
        "{ CompanyName: { $regex: /^Alfr/ } }"
    );
}
