use crate::ast;

pub(crate) fn parse(content: &str) -> ast::Document {
    ast::parse(content).unwrap()
}

/// Names of the fields selected directly under the first definition.
pub(crate) fn root_field_names(document: &ast::Document) -> Vec<&str> {
    let def = document.definitions.first().unwrap();
    ast::definition_selection_set(def)
        .items
        .iter()
        .map(|selection| match selection {
            ast::Selection::Field(field) => field.name.as_str(),
            ast::Selection::FragmentSpread(spread) => spread.fragment_name.as_str(),
            ast::Selection::InlineFragment(_) => "...",
        })
        .collect()
}

/// Compare two documents by their printed form, which ignores source
/// positions.
pub(crate) fn assert_same_document(actual: &ast::Document, expected: &str) {
    assert_eq!(actual.to_string(), parse(expected).to_string());
}
