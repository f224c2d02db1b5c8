use thiserror::Error;

/// Reasons a query cannot be narrowed to its preview root field.
///
/// These are recoverable: the caller skips the preview re-fetch and keeps
/// rendering with the data it already has.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum IsolationError {
    #[error(
        "Failed to update query root: field `{field_name}` is a leaf and has \
        no selections to promote"
    )]
    RootFieldHasNoSelections {
        field_name: String,
    },

    #[error(
        "Failed to update query root: no top-level field named `{field_name}`"
    )]
    RootFieldNotFound {
        field_name: String,
    },
}
