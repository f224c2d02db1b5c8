use crate::loader::LoadError;
use crate::source::QuerySource;
use crate::test_utils;
use serde_json::json;

#[test]
fn text_source_is_collapsed() {
    let source = QuerySource::from("query {\n  page {\n    id\n  }\n}");
    assert_eq!(
        source.canonical_text().as_deref(),
        Some("query { page { id } }"),
    );
}

#[test]
fn wrapped_source_is_collapsed() {
    let source = QuerySource::wrapped("{\n\tpage { id }\n}");
    assert_eq!(source.canonical_text().as_deref(), Some("{ page { id } }"));
}

#[test]
fn document_source_has_no_canonical_text() {
    let source = QuerySource::from(test_utils::parse("{ page { id } }"));
    assert_eq!(source.canonical_text(), None);
}

#[test]
fn json_string_is_text() {
    let source = QuerySource::try_from(&json!("{ page { id } }")).unwrap();
    assert_eq!(source, QuerySource::Text("{ page { id } }".to_string()));
}

#[test]
fn json_object_with_source_is_wrapped() {
    let source = QuerySource::try_from(&json!({
        "source": "{ page { id } }",
        "name": "PageQuery",
    })).unwrap();
    assert_eq!(source, QuerySource::wrapped("{ page { id } }"));
}

#[test]
fn json_scalar_source_is_coerced_to_text() {
    let source = QuerySource::try_from(&json!({ "source": 42 })).unwrap();
    assert_eq!(source, QuerySource::wrapped("42"));

    let source = QuerySource::try_from(&json!({ "source": true })).unwrap();
    assert_eq!(source, QuerySource::wrapped("true"));
}

#[test]
fn json_object_with_falsy_source_is_unrecognized() {
    for value in [
        json!({ "source": "" }),
        json!({ "source": 0 }),
        json!({ "source": false }),
        json!({ "source": null }),
    ] {
        let result = QuerySource::try_from(&value);
        assert!(
            matches!(result, Err(LoadError::UnrecognizedInputShape { .. })),
            "Expected {value} to be an unrecognized shape, got {result:?}",
        );
    }
}

#[test]
fn json_object_without_source_is_unrecognized() {
    let value = json!({ "definitions": [] });
    assert_eq!(
        QuerySource::try_from(&value),
        Err(LoadError::UnrecognizedInputShape {
            description: r#"{"definitions":[]}"#.to_string(),
        }),
    );
}

#[test]
fn json_non_object_values_are_unrecognized() {
    for value in [json!(null), json!(7), json!(["{ a }"]), json!(true)] {
        assert!(matches!(
            QuerySource::try_from(&value),
            Err(LoadError::UnrecognizedInputShape { .. }),
        ));
    }
}
