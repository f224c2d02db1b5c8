use crate::test_utils;
use crate::transform::DerivedFieldRule;
use crate::transform::DerivedFieldStripper;
use crate::transform::DocumentFold;
use crate::transform::strip_derived_fields;

#[test]
fn strips_derived_keeps_nested_child_and_plain_fields() {
    let doc = test_utils::parse("{ fooSharp fooChildImageSharp bar }");
    let stripped = strip_derived_fields(&doc, &DerivedFieldRule::default());
    assert_eq!(
        test_utils::root_field_names(&stripped),
        vec!["fooChildImageSharp", "bar"],
    );
}

#[test]
fn strips_at_every_depth_and_in_every_definition() {
    let doc = test_utils::parse(r#"
        query PageQuery {
            page {
                heroImageSharp { src }
                hero { url localFileChildImageSharp { fluid { src } } }
                body {
                    ... on NS_ImageSlice { imageSharp { src } caption }
                    ...Gallery
                }
            }
        }
        fragment Gallery on NS_GallerySlice { itemsSharp { src } items { url } }
    "#);

    let stripped = DerivedFieldStripper::default().fold_document(&doc);

    test_utils::assert_same_document(&stripped, r#"
        query PageQuery {
            page {
                hero { url localFileChildImageSharp { fluid { src } } }
                body {
                    ... on NS_ImageSlice { caption }
                    ...Gallery
                }
            }
        }
        fragment Gallery on NS_GallerySlice { items { url } }
    "#);
}

#[test]
fn fragment_spreads_named_like_derived_fields_are_kept() {
    let doc = test_utils::parse(r#"
        { page { ...heroSharp } }
        fragment heroSharp on Page { id }
    "#);
    let stripped = strip_derived_fields(&doc, &DerivedFieldRule::default());
    assert_eq!(stripped, doc);
}

#[test]
fn aliases_do_not_affect_matching() {
    let doc = test_utils::parse("{ heroSharp: hero { id } image: heroSharp { src } }");
    let stripped = strip_derived_fields(&doc, &DerivedFieldRule::default());
    test_utils::assert_same_document(&stripped, "{ heroSharp: hero { id } }");
}

#[test]
fn stripping_does_not_modify_the_input() {
    let doc = test_utils::parse("{ page { heroSharp { src } id } }");
    let snapshot = doc.clone();
    let stripped = strip_derived_fields(&doc, &DerivedFieldRule::default());
    assert_eq!(doc, snapshot);
    assert_ne!(stripped, doc);
}
