use cxx_records::{fmt_records, write_records, IndentOptions, SchemaErrorKind};

#[test]
fn malformed_json_is_a_parse_error() {
    let mut out = Vec::new();
    let err = write_records(r#"[{"name": "X", "#, IndentOptions::default(), &mut out).unwrap_err();

    assert!(err.is_parse());
    assert!(out.is_empty());
}

#[test]
fn missing_constants_stops_the_run() {
    let src = r#"[
        { "name": "A", "types": [], "constants": [] },
        { "name": "B", "types": [] },
        { "name": "C", "types": [], "constants": [] }
    ]"#;

    let mut out = Vec::new();
    let err = write_records(src, IndentOptions::default(), &mut out).unwrap_err();

    let schema = err.as_schema().unwrap();
    assert_eq!(schema.record, Some(1));
    assert_eq!(schema.field, "constants");
    assert_eq!(schema.kind, SchemaErrorKind::Missing);

    // the block before the failure stays, nothing after it is written
    pretty_assertions::assert_eq!(String::from_utf8(out).unwrap(), "A {\n};\n\n");
}

#[test]
fn missing_entry_fields_name_the_entry() {
    let src = r#"[{ "name": "A", "types": [{ "from": "int" }], "constants": [] }]"#;
    let err = fmt_records(src, IndentOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "Schema Error: record 0: missing field `types[0].to`");

    let src = r#"[{ "name": "A", "types": [], "constants": [{ "name": "N", "value": "1" }] }]"#;
    let err = fmt_records(src, IndentOptions::default()).unwrap_err();
    assert_eq!(err.as_schema().unwrap().field, "constants[0].type");
}

#[test]
fn missing_name_is_a_schema_error() {
    let err = fmt_records(r#"[{ "types": [], "constants": [] }]"#, IndentOptions::default())
        .unwrap_err();
    assert!(err.is_schema());
    assert_eq!(err.as_schema().unwrap().field, "name");
}

#[test]
fn non_array_documents_are_rejected() {
    let err = fmt_records(r#"{ "name": "X", "types": [], "constants": [] }"#, IndentOptions::default())
        .unwrap_err();
    let schema = err.as_schema().unwrap();
    assert_eq!(schema.record, None);
    assert_eq!(
        schema.kind,
        SchemaErrorKind::WrongType {
            expected: "an array",
            found: "an object"
        }
    );
}

#[test]
fn malformed_duplicate_is_not_an_error() {
    let src = r#"[
        { "name": "X", "types": [], "constants": [] },
        { "name": "X" }
    ]"#;

    let out = fmt_records(src, IndentOptions::default()).unwrap();
    pretty_assertions::assert_eq!(out, "X {\n};\n\n");
}
