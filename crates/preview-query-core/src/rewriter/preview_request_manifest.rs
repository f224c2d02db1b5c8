use crate::loader::LoadError;
use crate::rewriter::PreviewRequest;
use crate::rewriter::QueryRewriter;
use crate::source::QuerySource;

/// A JSON description of a preview rewrite, as produced by tooling that
/// sits outside of Rust:
///
/// ```json
/// {
///   "query": "query PageQuery { prismic { page { title } } }",
///   "fragments": [{ "source": "fragment F on PRISMIC_Page { id }" }],
///   "rootField": "prismic",
///   "typePrefix": "PRISMIC"
/// }
/// ```
///
/// `query` and each entry of `fragments` are kept as raw JSON until
/// [`PreviewRequestManifest::request`] resolves them, so a descriptor of an
/// unsupported shape surfaces as [`LoadError::UnrecognizedInputShape`]
/// rather than as a JSON error.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequestManifest {
    #[serde(default)]
    fragments: Vec<serde_json::Value>,
    query: serde_json::Value,
    #[serde(default)]
    root_field: String,
    #[serde(default)]
    type_prefix: String,
}

impl PreviewRequestManifest {
    pub fn from_json_str(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    pub fn request(&self) -> Result<PreviewRequest, LoadError> {
        let mut request = PreviewRequest::new(QuerySource::try_from(&self.query)?);
        for fragment in &self.fragments {
            request = request.add_fragment(QuerySource::try_from(fragment)?);
        }
        Ok(request)
    }

    pub fn rewriter(&self) -> QueryRewriter {
        QueryRewriter::new()
            .root_field(self.root_field.as_str())
            .type_prefix(self.type_prefix.as_str())
    }
}
