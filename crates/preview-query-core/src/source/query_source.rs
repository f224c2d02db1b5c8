use crate::ast;
use crate::loader::LoadError;
use crate::source::collapse_whitespace;

/// A query as handed to the rewriter by its caller.
///
/// Page components declare their queries in a handful of shapes: plain query
/// text, an object wrapping the text in a `source` property, or a document
/// that was already parsed ahead of time.
#[derive(Clone, Debug, PartialEq)]
pub enum QuerySource {
    Document(ast::Document),
    Text(String),
    Wrapped(WrappedSource),
}
impl QuerySource {
    /// The canonical (whitespace-collapsed) query text for this source.
    ///
    /// Returns `None` for [`QuerySource::Document`], which carries no text.
    /// Callers treat that as "no query text available" rather than as an
    /// error.
    pub fn canonical_text(&self) -> Option<String> {
        match self {
            Self::Document(_) => None,
            Self::Text(text) => Some(collapse_whitespace(text)),
            Self::Wrapped(wrapped) => Some(collapse_whitespace(&wrapped.source)),
        }
    }

    pub fn wrapped(source: impl Into<String>) -> Self {
        Self::Wrapped(WrappedSource {
            source: source.into(),
        })
    }
}
impl std::convert::From<&str> for QuerySource {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
impl std::convert::From<String> for QuerySource {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
impl std::convert::From<ast::Document> for QuerySource {
    fn from(value: ast::Document) -> Self {
        Self::Document(value)
    }
}
impl std::convert::From<WrappedSource> for QuerySource {
    fn from(value: WrappedSource) -> Self {
        Self::Wrapped(value)
    }
}

/// Resolves a dynamically-typed query descriptor (e.g. one read from a JSON
/// request manifest).
///
/// A string is query text. An object with a truthy `source` member wraps
/// query text; scalar `source` values are coerced to their text form.
/// Anything else is an [`LoadError::UnrecognizedInputShape`].
impl std::convert::TryFrom<&serde_json::Value> for QuerySource {
    type Error = LoadError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        let unrecognized = || LoadError::UnrecognizedInputShape {
            description: value.to_string(),
        };

        match value {
            Value::String(text) => Ok(Self::Text(text.to_owned())),

            Value::Object(members) => {
                let source = match members.get("source") {
                    Some(Value::String(text)) if !text.is_empty() => text.to_owned(),
                    Some(Value::Number(num)) if num.as_f64() != Some(0.0) => num.to_string(),
                    Some(Value::Bool(true)) => "true".to_string(),
                    _ => return Err(unrecognized()),
                };
                Ok(Self::wrapped(source))
            },

            Value::Array(_)
                | Value::Bool(_)
                | Value::Null
                | Value::Number(_) => Err(unrecognized()),
        }
    }
}

/// Query text wrapped in an object's `source` property.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WrappedSource {
    pub source: String,
}
