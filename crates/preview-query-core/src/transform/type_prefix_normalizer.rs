use crate::ast;
use crate::ast::NodeKind;
use crate::transform::DocumentFold;

const PREFIX_SEPARATOR: char = '_';

/// Removes a namespace prefix from type references.
///
/// Build-time schemas namespace their types (`NS_PageInput`) while the live
/// preview schema does not (`PageInput`). Only names in type-reference
/// position are rewritten: variable types (through any list/non-null
/// wrapping) and fragment type conditions. A field that happens to be
/// called `NS_PageInput` keeps its name.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TypePrefixNormalizer {
    // `<prefix>_`, or empty when there is no prefix to remove.
    marker: String,
}

impl TypePrefixNormalizer {
    pub fn new(prefix: &str) -> Self {
        let marker =
            if prefix.is_empty() {
                String::new()
            } else {
                format!("{prefix}{PREFIX_SEPARATOR}")
            };
        Self { marker }
    }

    /// Strip the marker from the front of `type_name` for as long as it is
    /// present, never leaving the name empty. Stripping until the marker is
    /// gone makes normalizing an already-normalized document a no-op.
    pub fn normalize_type_name<'a>(&self, type_name: &'a str) -> &'a str {
        if self.marker.is_empty() {
            return type_name;
        }

        let mut normalized = type_name;
        while let Some(rest) = normalized.strip_prefix(self.marker.as_str()) {
            if rest.is_empty() {
                break;
            }
            normalized = rest;
        }
        normalized
    }
}

impl DocumentFold for TypePrefixNormalizer {
    fn fold_name(&self, name: &str, ancestors: &[NodeKind]) -> String {
        match ancestors.last() {
            Some(NodeKind::NamedType) => {
                let normalized = self.normalize_type_name(name);
                if normalized.len() != name.len() {
                    log::trace!("Renaming type reference `{name}` to `{normalized}`.");
                }
                normalized.to_owned()
            },
            _ => name.to_owned(),
        }
    }
}

/// Copy `document` with `prefix` removed from its type references.
pub fn normalize_type_prefix(
    document: &ast::Document,
    prefix: &str,
) -> ast::Document {
    TypePrefixNormalizer::new(prefix).fold_document(document)
}
