pub mod ast;
pub mod loader;
pub mod rewriter;
pub mod source;
pub mod transform;

pub use loader::LoadError;
pub use rewriter::PreviewRequest;
pub use rewriter::PreviewRequestManifest;
pub use rewriter::QueryRewriter;
pub use rewriter::RewriteOutcome;
pub use source::QuerySource;
pub use transform::DerivedFieldRule;
pub use transform::IsolationError;

#[cfg(test)]
mod test_utils;
