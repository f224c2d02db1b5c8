use crate::ast;
use crate::loader::LoadError;
use crate::rewriter::PreviewRequest;
use crate::rewriter::QueryRewriter;
use crate::source::QuerySource;
use crate::test_utils;
use crate::transform::DerivedFieldRule;
use crate::transform::IsolationError;
use rayon::prelude::*;

const PAGE_QUERY: &str = "
    query PageQuery($uid: String!, $input: NS_PageInput) {
        site {   siteMetadata { title } }
        page(uid: $uid,    input: $input) {
            title
            heroImageSharp {
                childImageSharp { fluid { src } }
            }
            hero { url localFileChildImageSharp { fixed { src } } }
        }
    }
";

fn page_rewriter() -> QueryRewriter {
    QueryRewriter::new()
        .root_field("page")
        .type_prefix("NS")
}

#[test]
fn rewrites_page_query_end_to_end() {
    let outcome = page_rewriter()
        .rewrite(&PreviewRequest::new(PAGE_QUERY))
        .unwrap();

    assert!(outcome.diagnostics().is_empty());
    let doc = outcome.document().unwrap();
    test_utils::assert_same_document(doc, r#"
        query PageQuery($uid: String!, $input: PageInput) {
            title
            hero { url localFileChildImageSharp { fixed { src } } }
        }
    "#);

    // Parsed from whitespace-collapsed text, so everything sits on line 1.
    let root_selections = &ast::definition_selection_set(&doc.definitions[0]).items;
    let ast::Selection::Field(title) = &root_selections[0] else {
        panic!("Expected `title` field, found {root_selections:?}");
    };
    assert_eq!(title.position.line, 1);
}

#[test]
fn missing_root_field_skips_with_exactly_one_diagnostic() {
    let outcome = QueryRewriter::new()
        .root_field("prismic")
        .rewrite(&PreviewRequest::new(PAGE_QUERY))
        .unwrap();

    assert!(outcome.is_skipped());
    assert_eq!(outcome.document(), None);
    assert_eq!(
        outcome.diagnostics(),
        &[IsolationError::RootFieldNotFound {
            field_name: "prismic".to_string(),
        }],
    );
}

#[test]
fn empty_root_field_rewrites_the_whole_query() {
    let outcome = QueryRewriter::new()
        .type_prefix("NS")
        .rewrite(&PreviewRequest::new(PAGE_QUERY))
        .unwrap();

    let doc = outcome.into_document().unwrap();
    assert_eq!(test_utils::root_field_names(&doc), vec!["site", "page"]);
    assert!(!doc.to_string().contains("heroImageSharp"));
    assert!(doc.to_string().contains("$input: PageInput"));
}

#[test]
fn fragments_are_rewritten_with_the_query() {
    let request =
        PreviewRequest::new(QuerySource::wrapped(
            "query { prismic { allPages { edges { node { ...PageFields } } } } }",
        ))
        .add_fragment("fragment PageFields on PRISMIC_Page {\n  title\n  coverSharp { src }\n}");
    let outcome = QueryRewriter::new()
        .root_field("prismic")
        .type_prefix("PRISMIC")
        .rewrite(&request)
        .unwrap();

    test_utils::assert_same_document(outcome.document().unwrap(), r#"
        query { allPages { edges { node { ...PageFields } } } }
        fragment PageFields on Page { title }
    "#);
}

#[test]
fn load_failures_propagate() {
    let result = page_rewriter().rewrite(&PreviewRequest::new("query { page {"));
    assert!(matches!(result, Err(LoadError::ParseFailure { .. })));
}

#[test]
fn custom_derived_field_rule() {
    let outcome = QueryRewriter::new()
        .derived_field_rule(DerivedFieldRule::new("Thumb", "nestedThumb"))
        .rewrite(&PreviewRequest::new("{ avatarThumb { src } heroSharp { src } id }"))
        .unwrap();
    assert_eq!(
        test_utils::root_field_names(outcome.document().unwrap()),
        vec!["heroSharp", "id"],
    );
}

#[test]
fn rewriting_a_document_leaves_the_callers_copy_intact() {
    let doc = test_utils::parse(PAGE_QUERY);
    let snapshot = doc.clone();

    let rewriter = page_rewriter();
    let from_document = rewriter.rewrite_document(&doc);
    let from_request =
        rewriter.rewrite(&PreviewRequest::new(QuerySource::Document(doc.clone())))
            .unwrap();

    assert_eq!(doc, snapshot);
    assert_eq!(from_document, from_request);
}

#[test]
fn configuration_accessors() {
    let rewriter = page_rewriter();
    assert_eq!(rewriter.root_field_name(), "page");
    assert_eq!(rewriter.type_prefix_name(), "NS");
}

#[test]
fn concurrent_rewrites_do_not_interfere() {
    let rewriter = page_rewriter();
    let expected = rewriter
        .rewrite(&PreviewRequest::new(PAGE_QUERY))
        .unwrap();

    let outcomes: Vec<_> =
        (0..64)
            .into_par_iter()
            .map(|i| {
                if i % 2 == 0 {
                    rewriter.rewrite(&PreviewRequest::new(PAGE_QUERY)).unwrap()
                } else {
                    rewriter.rewrite(&PreviewRequest::new("{ other { id } }")).unwrap()
                }
            })
            .collect();

    for (i, outcome) in outcomes.iter().enumerate() {
        if i % 2 == 0 {
            assert_eq!(outcome, &expected);
        } else {
            assert!(outcome.is_skipped());
            assert_eq!(outcome.diagnostics().len(), 1);
        }
    }
}
