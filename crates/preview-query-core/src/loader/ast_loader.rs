use crate::ast;
use crate::loader::LoadError;
use crate::source::QuerySource;
use crate::source::collapse_whitespace;

type Result<T> = std::result::Result<T, LoadError>;

/// Load a [`QuerySource`] into a fresh [`ast::Document`].
///
/// Text sources are whitespace-collapsed and parsed. A pre-parsed document
/// is cloned through as-is so the caller's copy is never touched.
pub fn load(source: &QuerySource) -> Result<ast::Document> {
    let document = match source {
        QuerySource::Document(document) => document.clone(),
        QuerySource::Text(text) => parse_text(&collapse_whitespace(text), text)?,
        QuerySource::Wrapped(wrapped) =>
            parse_text(&collapse_whitespace(&wrapped.source), &wrapped.source)?,
    };

    if document.definitions.is_empty() {
        return Err(LoadError::EmptyDocument);
    }
    Ok(document)
}

/// Load a query together with the fragments it depends on.
///
/// Text pieces (the query first when it is text, then each text fragment in
/// order) are concatenated and parsed as one document. Definitions from
/// pre-parsed pieces are carried over by value, so the first definition of
/// the result always comes from `query`.
pub fn load_with_fragments(
    query: &QuerySource,
    fragments: &[QuerySource],
) -> Result<ast::Document> {
    if fragments.is_empty() {
        return load(query);
    }

    let mut leading_document = None;
    let mut raw_text = String::new();
    let mut text = String::new();
    let mut trailing_documents = vec![];

    match query.canonical_text() {
        Some(query_text) => {
            text.push_str(&query_text);
            raw_text.push_str(supplied_text(query));
        },
        None => leading_document = Some(load(query)?),
    }

    for fragment in fragments {
        match fragment.canonical_text() {
            Some(fragment_text) => {
                text.push_str(&fragment_text);
                raw_text.push_str(supplied_text(fragment));
            },
            None => trailing_documents.push(load(fragment)?),
        }
    }
    log::trace!(
        "Composing query from {} text bytes and {} pre-parsed documents.",
        text.len(),
        trailing_documents.len() + usize::from(leading_document.is_some()),
    );

    let mut definitions = vec![];
    if let Some(document) = leading_document {
        definitions.extend(document.definitions);
    }
    if !text.is_empty() {
        definitions.extend(parse_text(&text, &raw_text)?.definitions);
    }
    for document in trailing_documents {
        definitions.extend(document.definitions);
    }

    if definitions.is_empty() {
        return Err(LoadError::EmptyDocument);
    }
    Ok(ast::Document { definitions })
}

/// Parse canonical text, reporting failures against the text the caller
/// supplied rather than its collapsed form.
fn parse_text(canonical_text: &str, supplied: &str) -> Result<ast::Document> {
    ast::parse(canonical_text).map_err(|err| LoadError::ParseFailure {
        message: err.to_string(),
        source_text: supplied.to_string(),
    })
}

fn supplied_text(source: &QuerySource) -> &str {
    match source {
        QuerySource::Document(_) => "",
        QuerySource::Text(text) => text.as_str(),
        QuerySource::Wrapped(wrapped) => wrapped.source.as_str(),
    }
}
