use crate::ast;
use crate::transform::IsolationError;

type Result<T> = std::result::Result<T, IsolationError>;

/// Narrow `document` to the subtree under its top-level field `root_field`.
///
/// The first definition's selections are scanned in order and the first
/// field named `root_field` wins (aliases and fragment spreads never
/// match). That field's own selections become the definition's new top
/// level; its siblings and the field itself are discarded. Any other
/// definitions are carried over untouched.
///
/// An empty `root_field` leaves the document as it is.
pub fn isolate_root(
    document: &ast::Document,
    root_field: &str,
) -> Result<ast::Document> {
    if root_field.is_empty() {
        return Ok(document.clone());
    }

    let not_found = || IsolationError::RootFieldNotFound {
        field_name: root_field.to_string(),
    };

    let root_def = document.definitions.first().ok_or_else(not_found)?;
    let matched_field = ast::definition_selection_set(root_def)
        .items
        .iter()
        .find_map(|selection| match selection {
            ast::Selection::Field(field) if field.name == root_field => Some(field),
            _ => None,
        })
        .ok_or_else(not_found)?;

    if matched_field.selection_set.items.is_empty() {
        return Err(IsolationError::RootFieldHasNoSelections {
            field_name: root_field.to_string(),
        });
    }

    let mut definitions = Vec::with_capacity(document.definitions.len());
    let mut isolated_def = root_def.clone();
    *ast::definition_selection_set_mut(&mut isolated_def) =
        matched_field.selection_set.clone();
    definitions.push(isolated_def);
    definitions.extend(document.definitions.iter().skip(1).cloned());

    Ok(ast::Document { definitions })
}
