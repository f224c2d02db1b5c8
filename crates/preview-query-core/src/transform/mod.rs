mod derived_field_rule;
mod derived_field_stripper;
mod document_fold;
mod isolation_error;
mod root_isolator;
mod type_prefix_normalizer;

pub use derived_field_rule::DerivedFieldRule;
pub use derived_field_stripper::DerivedFieldStripper;
pub use derived_field_stripper::strip_derived_fields;
pub use document_fold::DocumentFold;
pub use isolation_error::IsolationError;
pub use root_isolator::isolate_root;
pub use type_prefix_normalizer::TypePrefixNormalizer;
pub use type_prefix_normalizer::normalize_type_prefix;

#[cfg(test)]
mod tests;
