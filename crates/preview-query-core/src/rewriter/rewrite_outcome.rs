use crate::ast;
use crate::transform::IsolationError;

/// What a rewrite produced: either a query ready for the preview re-fetch,
/// or nothing plus the diagnostics explaining why the re-fetch should be
/// skipped.
#[derive(Clone, Debug, PartialEq)]
pub struct RewriteOutcome {
    diagnostics: Vec<IsolationError>,
    document: Option<ast::Document>,
}

impl RewriteOutcome {
    pub(crate) fn rewritten(document: ast::Document) -> Self {
        Self {
            diagnostics: vec![],
            document: Some(document),
        }
    }

    pub(crate) fn skipped(diagnostic: IsolationError) -> Self {
        Self {
            diagnostics: vec![diagnostic],
            document: None,
        }
    }

    pub fn diagnostics(&self) -> &[IsolationError] {
        self.diagnostics.as_slice()
    }

    pub fn document(&self) -> Option<&ast::Document> {
        self.document.as_ref()
    }

    pub fn into_document(self) -> Option<ast::Document> {
        self.document
    }

    /// `true` when no query could be built and the re-fetch should not
    /// happen.
    pub fn is_skipped(&self) -> bool {
        self.document.is_none()
    }
}
