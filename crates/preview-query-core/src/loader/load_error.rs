use thiserror::Error;

/// Failures that leave the rewriter without a query to work on.
///
/// These always propagate to the caller: a page that declared a malformed
/// query needs to hear about it.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum LoadError {
    #[error("Query document contains no definitions")]
    EmptyDocument,

    #[error("Could not parse query `{source_text}`: {message}")]
    ParseFailure {
        message: String,
        source_text: String,
    },

    #[error("Could not parse query: unrecognized query source shape `{description}`")]
    UnrecognizedInputShape {
        description: String,
    },
}
