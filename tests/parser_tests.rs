use dfml::{parse, ElementKind, Node, ParseError, ValueKind};

#[test]
fn test_single_node() {
    let elements = parse("test").unwrap();

    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].kind(), ElementKind::Node);
    assert_eq!(elements[0].as_node().unwrap().name(), "test");
}

#[test]
fn test_child_nodes() {
    let elements = parse("red   {     green     blue   {  yellow  }  }  ").unwrap();

    assert_eq!(elements.len(), 1);
    let red = elements[0].as_node().unwrap();
    assert_eq!(red.name(), "red");
    assert_eq!(red.children().len(), 2);

    let green = red.children()[0].as_node().unwrap();
    let blue = red.children()[1].as_node().unwrap();
    assert_eq!(green.name(), "green");
    assert_eq!(blue.name(), "blue");
    assert_eq!(green.children().len(), 0);
    assert_eq!(blue.children().len(), 1);
    assert_eq!(blue.children()[0].as_node().unwrap().name(), "yellow");
}

#[test]
fn test_data_sequence() {
    let elements = parse("'hello' \"HELLO\" 23 5.67 true").unwrap();

    assert_eq!(elements.len(), 5);
    for element in &elements {
        assert_eq!(element.kind(), ElementKind::Data);
    }

    let values: Vec<_> = elements
        .iter()
        .map(|e| e.as_data().unwrap().value())
        .collect();

    assert_eq!(values[0].kind(), ValueKind::String);
    assert_eq!(values[0].text(), "hello");
    assert_eq!(values[1].kind(), ValueKind::String);
    assert_eq!(values[1].text(), "HELLO");
    assert_eq!(values[2].kind(), ValueKind::Integer);
    assert_eq!(values[2].text(), "23");
    assert_eq!(values[3].kind(), ValueKind::Double);
    assert_eq!(values[3].text(), "5.67");
    assert_eq!(values[4].kind(), ValueKind::Boolean);
    assert_eq!(values[4].text(), "true");
}

#[test]
fn test_number_kind_inference() {
    let value = |input: &str| {
        let elements = parse(input).unwrap();
        elements[0].as_data().unwrap().value().clone()
    };

    let v = value("40");
    assert_eq!(v.kind(), ValueKind::Integer);
    assert_eq!(v.text(), "40");

    let v = value("1.5");
    assert_eq!(v.kind(), ValueKind::Double);
    assert_eq!(v.text(), "1.5");

    let v = value("-3");
    assert_eq!(v.kind(), ValueKind::Integer);
    assert_eq!(v.text(), "-3");
}

#[test]
fn test_boolean_takes_priority_over_node_name() {
    let elements = parse("true").unwrap();

    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].kind(), ElementKind::Data);
    let value = elements[0].as_data().unwrap().value();
    assert_eq!(value.kind(), ValueKind::Boolean);
    assert_eq!(value.as_boolean(), Some(true));

    let elements = parse("false").unwrap();
    assert_eq!(elements[0].as_data().unwrap().value().text(), "false");
}

#[test]
fn test_empty_attribute_list() {
    let elements = parse("mynode()").unwrap();

    let node = elements[0].as_node().unwrap();
    assert_eq!(node.name(), "mynode");
    assert_eq!(node.attr_count(), 0);
}

#[test]
fn test_single_attribute() {
    let elements = parse("mynode(test: 'hello')").unwrap();

    let node = elements[0].as_node().unwrap();
    assert_eq!(node.attr_count(), 1);
    assert!(node.has_attr("test"));
    assert_eq!(node.attr("test").unwrap().text(), "hello");
}

#[test]
fn test_combined_attributes() {
    let elements = parse("mynode(test: 'hello', number: 40, boolean: false)").unwrap();

    let node = elements[0].as_node().unwrap();
    assert_eq!(node.name(), "mynode");
    assert_eq!(node.attr_count(), 3);

    let keys: Vec<_> = node.attr_keys().collect();
    assert_eq!(keys, vec!["test", "number", "boolean"]);

    assert_eq!(node.attr("test").unwrap().kind(), ValueKind::String);
    assert_eq!(node.attr("test").unwrap().text(), "hello");
    assert_eq!(node.attr("number").unwrap().kind(), ValueKind::Integer);
    assert_eq!(node.attr("number").unwrap().text(), "40");
    assert_eq!(node.attr("boolean").unwrap().kind(), ValueKind::Boolean);
    assert_eq!(node.attr("boolean").unwrap().text(), "false");
}

#[test]
fn test_bare_attribute_key_is_empty_string() {
    let elements = parse("node-name(attr-name) { child_name(child_attr) }").unwrap();

    let node = elements[0].as_node().unwrap();
    assert_eq!(node.name(), "node-name");
    assert!(node.has_attr("attr-name"));
    assert_eq!(node.attr("attr-name").unwrap().text(), "");

    let child = node.children()[0].as_node().unwrap();
    assert_eq!(child.name(), "child_name");
    assert!(child.has_attr("child_attr"));
}

#[test]
fn test_comment_forms_are_equivalent() {
    for input in ["#hi\n", "//hi\n", "/*hi*/"] {
        let elements = parse(input).unwrap();
        assert_eq!(elements.len(), 1, "input {:?}", input);
        assert_eq!(elements[0].kind(), ElementKind::Comment);
        assert_eq!(elements[0].as_comment().unwrap().text(), "hi");
    }
}

#[test]
fn test_comment_sequence() {
    let elements = parse("/*Hello\nWorld*/\n#Single comment\n//Another single").unwrap();

    assert_eq!(elements.len(), 3);
    assert_eq!(elements[0].as_comment().unwrap().text(), "Hello\nWorld");
    assert_eq!(elements[1].as_comment().unwrap().text(), "Single comment");
    assert_eq!(elements[2].as_comment().unwrap().text(), "Another single");
}

#[test]
fn test_block_comment_terminated_by_end_of_input() {
    let elements = parse("/*open ended").unwrap();
    assert_eq!(elements[0].as_comment().unwrap().text(), "open ended");
}

#[test]
fn test_double_attributes() {
    let input = "doubleset(double1: 30.3, double2: 3.14, double3: 0.0023)\notherset(float2: 2.0)";
    let elements = parse(input).unwrap();

    assert_eq!(elements.len(), 2);
    let doubleset = elements[0].as_node().unwrap();
    assert_eq!(doubleset.attr("double1").unwrap().kind(), ValueKind::Double);
    assert_eq!(doubleset.attr("double1").unwrap().text(), "30.3");
    assert_eq!(doubleset.attr("double2").unwrap().text(), "3.14");
    assert_eq!(doubleset.attr("double3").unwrap().text(), "0.0023");

    // Canonical text is the runtime's rendering, not a source echo.
    let otherset = elements[1].as_node().unwrap();
    assert_eq!(otherset.attr("float2").unwrap().kind(), ValueKind::Double);
    assert_eq!(otherset.attr("float2").unwrap().text(), "2");
}

#[test]
fn test_node_list() {
    let input = "supernode {\nnode1(action: 'hello') {\n\tchild() {}\n}\n\nnode2(action: 'bye') {\n\tchild() {}\n}\n\n}";
    let elements = parse(input).unwrap();

    assert_eq!(elements.len(), 1);
    let supernode = elements[0].as_node().unwrap();
    assert_eq!(supernode.children().len(), 2);

    let node1 = supernode.children()[0].as_node().unwrap();
    let node2 = supernode.children()[1].as_node().unwrap();
    assert_eq!(node1.attr("action").unwrap().text(), "hello");
    assert_eq!(node2.attr("action").unwrap().text(), "bye");
}

#[test]
fn test_empty_input_is_empty_forest() {
    assert!(parse("").unwrap().is_empty());
    assert!(parse("  \n\t \r\n").unwrap().is_empty());
}

#[test]
fn test_unmatched_closing_brace_ends_the_scope_silently() {
    let elements = parse("a } b").unwrap();

    let names: Vec<_> = elements
        .iter()
        .filter_map(|e| e.as_node().map(Node::name))
        .collect();
    assert_eq!(names, vec!["a"]);
}

#[test]
fn test_invalid_child_character() {
    let err = parse("@").unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidChildCharacter { ch: '@', line: 1 }
    );
}

#[test]
fn test_error_reports_the_detection_line() {
    let err = parse("node {\n  (\n}").unwrap_err();
    assert_eq!(err.line(), 2);
    assert!(matches!(err, ParseError::InvalidChildCharacter { .. }));
}

#[test]
fn test_duplicate_attribute_list() {
    let err = parse("mynode(a: 1)(b: 2)").unwrap_err();
    assert!(matches!(err, ParseError::DuplicateAttributeList { line: 1 }));
}

#[test]
fn test_boolean_conversion_error() {
    let err = parse("mynode(flag: yes)").unwrap_err();
    assert_eq!(
        err,
        ParseError::BooleanConversion {
            word: "yes".to_string(),
            line: 1,
        }
    );
}

#[test]
fn test_number_conversion_error() {
    let err = parse("mynode(n: 1.2.3)").unwrap_err();
    assert!(matches!(err, ParseError::NumberConversion { .. }));

    let err = parse("-").unwrap_err();
    assert_eq!(
        err,
        ParseError::NumberConversion {
            literal: "-".to_string(),
            line: 1,
        }
    );
}

#[test]
fn test_unterminated_comment() {
    let err = parse("/").unwrap_err();
    assert!(matches!(err, ParseError::UnterminatedComment { line: 1 }));

    // A '/' followed by anything other than '/' or '*' is also malformed.
    let err = parse("/-oops").unwrap_err();
    assert!(matches!(err, ParseError::UnterminatedComment { .. }));
}

#[test]
fn test_string_delimiters_do_not_nest() {
    let elements = parse("\"it's fine\" 'say \"hi\"'").unwrap();

    assert_eq!(elements.len(), 2);
    assert_eq!(elements[0].as_data().unwrap().value().text(), "it's fine");
    assert_eq!(elements[1].as_data().unwrap().value().text(), "say \"hi\"");
}

#[test]
fn test_single_line_comment_newline_still_separates_elements() {
    let elements = parse("first #note\nsecond").unwrap();

    assert_eq!(elements.len(), 3);
    assert_eq!(elements[0].as_node().unwrap().name(), "first");
    assert_eq!(elements[1].as_comment().unwrap().text(), "note");
    assert_eq!(elements[2].as_node().unwrap().name(), "second");
}
