use crate::ast;
use crate::loader;
use crate::loader::LoadError;
use crate::rewriter::PreviewRequest;
use crate::rewriter::RewriteOutcome;
use crate::transform::DerivedFieldRule;
use crate::transform::DerivedFieldStripper;
use crate::transform::DocumentFold;
use crate::transform::TypePrefixNormalizer;
use crate::transform::isolate_root;

type Result<T> = std::result::Result<T, LoadError>;

/// Turns the query a page declared for its static build into the query
/// used to re-fetch that page's data from the live preview API.
///
/// A rewrite runs these steps on a fresh copy of the page's query:
///
/// 1. Load the query text (and fragments) into a document.
/// 2. Narrow the document to the subtree under the configured root field.
/// 3. Strip derived image fields the preview API cannot resolve.
/// 4. Remove the namespace prefix from type references.
///
/// A `QueryRewriter` holds only its configuration, so one instance can
/// serve any number of concurrent rewrites.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryRewriter {
    derived_field_stripper: DerivedFieldStripper,
    root_field: String,
    type_prefix: String,
    type_prefix_normalizer: TypePrefixNormalizer,
}

impl QueryRewriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn derived_field_rule(mut self, rule: DerivedFieldRule) -> Self {
        self.derived_field_stripper = DerivedFieldStripper::new(rule);
        self
    }

    /// Top-level field whose subtree becomes the re-fetch query. Empty
    /// means the whole query is used.
    pub fn root_field(mut self, field_name: impl Into<String>) -> Self {
        self.root_field = field_name.into();
        self
    }

    /// Namespace prefix removed from type references. Empty disables the
    /// rename.
    pub fn type_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.type_prefix = prefix.into();
        self.type_prefix_normalizer = TypePrefixNormalizer::new(&self.type_prefix);
        self
    }

    pub fn root_field_name(&self) -> &str {
        self.root_field.as_str()
    }

    pub fn type_prefix_name(&self) -> &str {
        self.type_prefix.as_str()
    }

    /// Load and rewrite a [`PreviewRequest`].
    ///
    /// Load failures are returned as errors. A query that loads but cannot
    /// be narrowed to the root field yields a skipped [`RewriteOutcome`].
    pub fn rewrite(&self, request: &PreviewRequest) -> Result<RewriteOutcome> {
        let document = loader::load_with_fragments(
            &request.query,
            &request.fragments,
        )?;
        log::debug!(
            "Loaded preview query with {} definitions.",
            document.definitions.len(),
        );
        Ok(self.rewrite_document(&document))
    }

    /// Rewrite an already-loaded document. `document` itself is left as is.
    pub fn rewrite_document(&self, document: &ast::Document) -> RewriteOutcome {
        let isolated = match isolate_root(document, &self.root_field) {
            Ok(isolated) => isolated,
            Err(err) => {
                log::warn!("{err}");
                return RewriteOutcome::skipped(err);
            },
        };

        let stripped = self.derived_field_stripper.fold_document(&isolated);
        let normalized = self.type_prefix_normalizer.fold_document(&stripped);
        RewriteOutcome::rewritten(normalized)
    }
}
