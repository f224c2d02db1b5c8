use crate::ast;
use crate::ast::NodeKind;
use crate::transform::DerivedFieldRule;
use crate::transform::DocumentFold;

/// Drops every field the [`DerivedFieldRule`] marks as derived, at any
/// depth and in every definition. Fragment spreads and inline fragments are
/// kept; fields inside inline fragments are still checked.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DerivedFieldStripper {
    rule: DerivedFieldRule,
}

impl DerivedFieldStripper {
    pub fn new(rule: DerivedFieldRule) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> &DerivedFieldRule {
        &self.rule
    }
}

impl DocumentFold for DerivedFieldStripper {
    fn retain_selection(
        &self,
        selection: &ast::Selection,
        _ancestors: &[NodeKind],
    ) -> bool {
        match selection {
            ast::Selection::Field(field) => {
                let derived = self.rule.is_derived(&field.name);
                if derived {
                    log::debug!("Stripping derived field `{}`.", field.name);
                }
                !derived
            },
            ast::Selection::FragmentSpread(_)
                | ast::Selection::InlineFragment(_) => true,
        }
    }
}

/// Copy `document` without any of the fields `rule` marks as derived.
pub fn strip_derived_fields(
    document: &ast::Document,
    rule: &DerivedFieldRule,
) -> ast::Document {
    DerivedFieldStripper::new(rule.clone()).fold_document(document)
}
