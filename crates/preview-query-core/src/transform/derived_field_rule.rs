const DEFAULT_DERIVED_SUFFIX: &str = "Sharp";
const DEFAULT_NESTED_CHILD_SUFFIX: &str = "childImageSharp";

/// Recognizes fields that an image-processing build step injects into page
/// queries (e.g. `heroImageSharp`). The live preview API cannot resolve
/// them, so they must be dropped before a preview re-fetch.
///
/// Nested child image fields (e.g. `localFileChildImageSharp`) are requested
/// by the page itself and are not considered derived. A bare nested suffix
/// with nothing in front of it is.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DerivedFieldRule {
    derived_suffix: String,
    nested_child_suffix: String,
}

impl DerivedFieldRule {
    pub fn new(
        derived_suffix: impl Into<String>,
        nested_child_suffix: impl Into<String>,
    ) -> Self {
        Self {
            derived_suffix: derived_suffix.into(),
            nested_child_suffix: nested_child_suffix.into(),
        }
    }

    pub fn derived_suffix(&self) -> &str {
        self.derived_suffix.as_str()
    }

    pub fn nested_child_suffix(&self) -> &str {
        self.nested_child_suffix.as_str()
    }

    /// Whether a field with this name should be stripped.
    pub fn is_derived(&self, field_name: &str) -> bool {
        !self.derived_suffix.is_empty()
            && field_name.ends_with(self.derived_suffix.as_str())
            && !self.is_nested_child(field_name)
    }

    /// At least one character followed by the nested child suffix. The
    /// suffix's first character matches either case so that both
    /// `fileChildImageSharp` and `filechildImageSharp` qualify.
    fn is_nested_child(&self, field_name: &str) -> bool {
        let suffix = self.nested_child_suffix.as_str();
        let split_at = match field_name.len().checked_sub(suffix.len()) {
            Some(0) | None => return false,
            Some(split_at) => split_at,
        };
        let Some(tail) = field_name.get(split_at..) else {
            return false;
        };

        let mut tail_chars = tail.chars();
        let mut suffix_chars = suffix.chars();
        match (tail_chars.next(), suffix_chars.next()) {
            (Some(tail_first), Some(suffix_first)) =>
                tail_first.eq_ignore_ascii_case(&suffix_first)
                    && tail_chars.as_str() == suffix_chars.as_str(),
            _ => false,
        }
    }
}

impl std::default::Default for DerivedFieldRule {
    fn default() -> Self {
        Self::new(DEFAULT_DERIVED_SUFFIX, DEFAULT_NESTED_CHILD_SUFFIX)
    }
}
