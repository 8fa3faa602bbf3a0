use tierwise_ir::parse::{parse_descriptor, parse_type, ParseError};
use tierwise_ir::types::TypeDesc;

#[test]
fn test_parse_descriptor_from_json() {
    let json = serde_json::json!({
        "kind": "generic",
        "origin": "dict",
        "args": [
            { "kind": "scalar", "id": "str" },
            {
                "kind": "union",
                "alternatives": [
                    { "kind": "scalar", "id": "int" },
                    { "kind": "scalar", "id": "none" }
                ]
            }
        ]
    });
    let desc = parse_descriptor(&json.to_string()).unwrap();
    assert_eq!(
        desc,
        TypeDesc::dict(
            TypeDesc::str(),
            TypeDesc::union([TypeDesc::int(), TypeDesc::none()])
        )
    );
}

#[test]
fn test_parse_descriptor_generic_without_args_field() {
    let desc = parse_descriptor(r#"{ "kind": "generic", "origin": "tuple" }"#).unwrap();
    assert_eq!(desc, TypeDesc::tuple([]));
}

#[test]
fn test_parse_descriptor_invalid_json() {
    let result = parse_descriptor("not json at all");
    assert!(matches!(result, Err(ParseError::Json(_))));
}

#[test]
fn test_parse_descriptor_unknown_kind() {
    let result = parse_descriptor(r#"{ "kind": "function", "id": "f" }"#);
    assert!(result.is_err());
}

#[test]
fn test_descriptor_json_roundtrip_shape() {
    let desc = TypeDesc::list(TypeDesc::tuple([TypeDesc::int(), TypeDesc::bool()]));
    let value = serde_json::to_value(&desc).unwrap();
    assert_eq!(value["kind"], "generic");
    assert_eq!(value["origin"], "list");
    assert_eq!(value["args"][0]["args"][1]["id"], "bool");
}

#[test]
fn test_parse_type_nested_generics() {
    let desc = parse_type("dict[str, list[tuple[int, bool]]]").unwrap();
    assert_eq!(
        desc,
        TypeDesc::dict(
            TypeDesc::str(),
            TypeDesc::list(TypeDesc::tuple([TypeDesc::int(), TypeDesc::bool()]))
        )
    );
}

#[test]
fn test_parse_type_union_binds_loosest() {
    let desc = parse_type("list[int] | none").unwrap();
    assert_eq!(
        desc,
        TypeDesc::union([TypeDesc::list(TypeDesc::int()), TypeDesc::none()])
    );

    let inner = parse_type("list[int | none]").unwrap();
    assert_eq!(
        inner,
        TypeDesc::list(TypeDesc::union([TypeDesc::int(), TypeDesc::none()]))
    );
}

#[test]
fn test_parse_type_parentheses_group() {
    let desc = parse_type("(int | bool) | str").unwrap();
    assert_eq!(
        desc,
        TypeDesc::union([
            TypeDesc::union([TypeDesc::int(), TypeDesc::bool()]),
            TypeDesc::str(),
        ])
    );
}

#[test]
fn test_parse_type_display_roundtrip() {
    for text in ["int", "list[int]", "dict[str, set[float]]", "int | none", "tuple[]"] {
        let desc = parse_type(text).unwrap();
        assert_eq!(desc.to_string(), text);
        assert_eq!(parse_type(&desc.to_string()).unwrap(), desc);
    }
}

#[test]
fn test_parse_type_error_reports_offset() {
    match parse_type("list[int,, bool]") {
        Err(ParseError::Unexpected { offset, .. }) => assert_eq!(offset, 9),
        other => panic!("expected Unexpected error, got {:?}", other),
    }
}
