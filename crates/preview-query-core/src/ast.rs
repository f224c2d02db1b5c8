pub use graphql_parser::query::ParseError;

pub type Definition = graphql_parser::query::Definition<'static, String>;
pub type Directive = graphql_parser::query::Directive<'static, String>;
pub type Document = graphql_parser::query::Document<'static, String>;
pub type Field = graphql_parser::query::Field<'static, String>;
pub type FragmentDefinition = graphql_parser::query::FragmentDefinition<'static, String>;
pub type FragmentSpread = graphql_parser::query::FragmentSpread<'static, String>;
pub type InlineFragment = graphql_parser::query::InlineFragment<'static, String>;
pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;
pub type Selection = graphql_parser::query::Selection<'static, String>;
pub type SelectionSet = graphql_parser::query::SelectionSet<'static, String>;
pub type Type = graphql_parser::query::Type<'static, String>;
pub type TypeCondition = graphql_parser::query::TypeCondition<'static, String>;
pub type VariableDefinition = graphql_parser::query::VariableDefinition<'static, String>;

/// Parse an executable GraphQL document into an owned AST.
pub fn parse(content: &str) -> Result<Document, ParseError> {
    Ok(graphql_parser::query::parse_query::<String>(content)?.into_static())
}

/// The kind of an AST node on the path from a [`Document`] down to the node
/// currently being visited.
///
/// Type references (variable types and fragment type conditions alike) are
/// always reported as [`NodeKind::NamedType`] once the list/non-null
/// wrappers have been unwrapped.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeKind {
    Document,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    ListType,
    NamedType,
    NonNullType,
    OperationDefinition,
    SelectionSet,
    VariableDefinition,
}

/// The selection set that sits directly under a top-level [`Definition`].
pub fn definition_selection_set(def: &Definition) -> &SelectionSet {
    use OperationDefinition as OpDef;
    match def {
        Definition::Fragment(frag_def) => &frag_def.selection_set,
        Definition::Operation(OpDef::SelectionSet(selection_set)) => selection_set,
        Definition::Operation(OpDef::Query(query)) => &query.selection_set,
        Definition::Operation(OpDef::Mutation(mutation)) => &mutation.selection_set,
        Definition::Operation(OpDef::Subscription(sub)) => &sub.selection_set,
    }
}

pub fn definition_selection_set_mut(def: &mut Definition) -> &mut SelectionSet {
    use OperationDefinition as OpDef;
    match def {
        Definition::Fragment(frag_def) => &mut frag_def.selection_set,
        Definition::Operation(OpDef::SelectionSet(selection_set)) => selection_set,
        Definition::Operation(OpDef::Query(query)) => &mut query.selection_set,
        Definition::Operation(OpDef::Mutation(mutation)) => &mut mutation.selection_set,
        Definition::Operation(OpDef::Subscription(sub)) => &mut sub.selection_set,
    }
}
