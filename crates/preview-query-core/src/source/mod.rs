mod query_source;
mod whitespace;

pub use query_source::QuerySource;
pub use query_source::WrappedSource;
pub use whitespace::collapse_whitespace;

#[cfg(test)]
mod tests;
