mod preview_request;
mod preview_request_manifest;
mod query_rewriter;
mod rewrite_outcome;

pub use preview_request::PreviewRequest;
pub use preview_request_manifest::PreviewRequestManifest;
pub use query_rewriter::QueryRewriter;
pub use rewrite_outcome::RewriteOutcome;

#[cfg(test)]
mod tests;
