use crate::ast;
use crate::ast::NodeKind;

/// A rewrite over an executable [`ast::Document`] that builds a new tree
/// instead of editing the input.
///
/// Every hook receives the chain of [`NodeKind`]s from the document root
/// down to (and including) the node that owns the thing being decided on,
/// so eligibility never depends on traversal state held by the fold itself.
///
/// All hooks default to keeping their input, so a fold that overrides
/// nothing produces an equal copy of the document.
pub trait DocumentFold {
    /// Decide whether `selection` survives in its parent selection set.
    ///
    /// `ancestors` ends with the [`NodeKind::SelectionSet`] that contains
    /// `selection`. Dropped selections are not descended into.
    fn retain_selection(
        &self,
        _selection: &ast::Selection,
        _ancestors: &[NodeKind],
    ) -> bool {
        true
    }

    /// Produce the replacement for a name.
    ///
    /// `ancestors` ends with the kind of node the name belongs to: a
    /// [`NodeKind::Field`] for field names, a [`NodeKind::NamedType`] for
    /// type references, and so on. Field aliases, arguments and directives
    /// are copied without being offered here.
    fn fold_name(&self, name: &str, _ancestors: &[NodeKind]) -> String {
        name.to_owned()
    }

    fn fold_document(&self, document: &ast::Document) -> ast::Document
    where
        Self: Sized,
    {
        Walker::new(self).document(document)
    }
}

struct Walker<'fold, F: DocumentFold> {
    ancestors: Vec<NodeKind>,
    fold: &'fold F,
}

impl<'fold, F: DocumentFold> Walker<'fold, F> {
    fn new(fold: &'fold F) -> Self {
        Self {
            ancestors: vec![],
            fold,
        }
    }

    fn within<T>(&mut self, kind: NodeKind, f: impl FnOnce(&mut Self) -> T) -> T {
        self.ancestors.push(kind);
        let result = f(self);
        self.ancestors.pop();
        result
    }

    fn name(&self, name: &str) -> String {
        self.fold.fold_name(name, &self.ancestors)
    }

    fn document(&mut self, document: &ast::Document) -> ast::Document {
        self.within(NodeKind::Document, |walker| ast::Document {
            definitions: document.definitions
                .iter()
                .map(|def| walker.definition(def))
                .collect(),
        })
    }

    fn definition(&mut self, def: &ast::Definition) -> ast::Definition {
        match def {
            ast::Definition::Fragment(frag_def) => ast::Definition::Fragment(
                self.within(NodeKind::FragmentDefinition, |walker| {
                    walker.fragment_definition(frag_def)
                }),
            ),

            ast::Definition::Operation(op_def) => ast::Definition::Operation(
                self.within(NodeKind::OperationDefinition, |walker| {
                    walker.operation_definition(op_def)
                }),
            ),
        }
    }

    fn fragment_definition(
        &mut self,
        frag_def: &ast::FragmentDefinition,
    ) -> ast::FragmentDefinition {
        ast::FragmentDefinition {
            position: frag_def.position,
            name: self.name(&frag_def.name),
            type_condition: self.type_condition(&frag_def.type_condition),
            directives: frag_def.directives.clone(),
            selection_set: self.selection_set(&frag_def.selection_set),
        }
    }

    fn operation_definition(
        &mut self,
        op_def: &ast::OperationDefinition,
    ) -> ast::OperationDefinition {
        use graphql_parser::query::Mutation;
        use graphql_parser::query::Query;
        use graphql_parser::query::Subscription;
        use ast::OperationDefinition as OpDef;

        match op_def {
            OpDef::SelectionSet(selection_set) =>
                OpDef::SelectionSet(self.selection_set(selection_set)),

            OpDef::Query(query) => OpDef::Query(Query {
                position: query.position,
                name: query.name.as_deref().map(|name| self.name(name)),
                variable_definitions: self.variable_definitions(
                    &query.variable_definitions,
                ),
                directives: query.directives.clone(),
                selection_set: self.selection_set(&query.selection_set),
            }),

            OpDef::Mutation(mutation) => OpDef::Mutation(Mutation {
                position: mutation.position,
                name: mutation.name.as_deref().map(|name| self.name(name)),
                variable_definitions: self.variable_definitions(
                    &mutation.variable_definitions,
                ),
                directives: mutation.directives.clone(),
                selection_set: self.selection_set(&mutation.selection_set),
            }),

            OpDef::Subscription(sub) => OpDef::Subscription(Subscription {
                position: sub.position,
                name: sub.name.as_deref().map(|name| self.name(name)),
                variable_definitions: self.variable_definitions(
                    &sub.variable_definitions,
                ),
                directives: sub.directives.clone(),
                selection_set: self.selection_set(&sub.selection_set),
            }),
        }
    }

    fn variable_definitions(
        &mut self,
        var_defs: &[ast::VariableDefinition],
    ) -> Vec<ast::VariableDefinition> {
        var_defs.iter()
            .map(|var_def| self.within(NodeKind::VariableDefinition, |walker| {
                ast::VariableDefinition {
                    position: var_def.position,
                    name: walker.name(&var_def.name),
                    var_type: walker.type_ref(&var_def.var_type),
                    default_value: var_def.default_value.clone(),
                }
            }))
            .collect()
    }

    fn type_ref(&mut self, type_ref: &ast::Type) -> ast::Type {
        match type_ref {
            ast::Type::ListType(inner) => self.within(NodeKind::ListType, |walker| {
                ast::Type::ListType(Box::new(walker.type_ref(inner)))
            }),

            ast::Type::NamedType(name) => self.within(NodeKind::NamedType, |walker| {
                ast::Type::NamedType(walker.name(name))
            }),

            ast::Type::NonNullType(inner) => self.within(NodeKind::NonNullType, |walker| {
                ast::Type::NonNullType(Box::new(walker.type_ref(inner)))
            }),
        }
    }

    fn type_condition(
        &mut self,
        type_condition: &ast::TypeCondition,
    ) -> ast::TypeCondition {
        let ast::TypeCondition::On(type_name) = type_condition;
        self.within(NodeKind::NamedType, |walker| {
            ast::TypeCondition::On(walker.name(type_name))
        })
    }

    fn selection_set(
        &mut self,
        selection_set: &ast::SelectionSet,
    ) -> ast::SelectionSet {
        self.within(NodeKind::SelectionSet, |walker| {
            let mut items = Vec::with_capacity(selection_set.items.len());
            for selection in &selection_set.items {
                if !walker.fold.retain_selection(selection, &walker.ancestors) {
                    log::trace!(
                        "Dropping selection at depth {}.",
                        walker.ancestors.len(),
                    );
                    continue;
                }
                items.push(walker.selection(selection));
            }
            ast::SelectionSet {
                span: selection_set.span,
                items,
            }
        })
    }

    fn selection(&mut self, selection: &ast::Selection) -> ast::Selection {
        use graphql_parser::query::Field;
        use graphql_parser::query::FragmentSpread;
        use graphql_parser::query::InlineFragment;

        match selection {
            ast::Selection::Field(field) => ast::Selection::Field(
                self.within(NodeKind::Field, |walker| Field {
                    position: field.position,
                    alias: field.alias.clone(),
                    name: walker.name(&field.name),
                    arguments: field.arguments.clone(),
                    directives: field.directives.clone(),
                    selection_set: walker.selection_set(&field.selection_set),
                }),
            ),

            ast::Selection::FragmentSpread(spread) => ast::Selection::FragmentSpread(
                self.within(NodeKind::FragmentSpread, |walker| FragmentSpread {
                    position: spread.position,
                    fragment_name: walker.name(&spread.fragment_name),
                    directives: spread.directives.clone(),
                }),
            ),

            ast::Selection::InlineFragment(inline) => ast::Selection::InlineFragment(
                self.within(NodeKind::InlineFragment, |walker| InlineFragment {
                    position: inline.position,
                    type_condition: inline.type_condition
                        .as_ref()
                        .map(|type_condition| walker.type_condition(type_condition)),
                    directives: inline.directives.clone(),
                    selection_set: walker.selection_set(&inline.selection_set),
                }),
            ),
        }
    }
}
