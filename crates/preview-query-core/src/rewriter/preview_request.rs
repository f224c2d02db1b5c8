use crate::source::QuerySource;

/// The query a page declared, plus the fragments it spreads.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewRequest {
    pub(crate) fragments: Vec<QuerySource>,
    pub(crate) query: QuerySource,
}

impl PreviewRequest {
    pub fn new(query: impl Into<QuerySource>) -> Self {
        Self {
            fragments: vec![],
            query: query.into(),
        }
    }

    /// Add a fragment after any previously added fragments.
    pub fn add_fragment(mut self, fragment: impl Into<QuerySource>) -> Self {
        self.fragments.push(fragment.into());
        self
    }

    pub fn fragments(&self) -> &[QuerySource] {
        self.fragments.as_slice()
    }

    pub fn query(&self) -> &QuerySource {
        &self.query
    }
}
