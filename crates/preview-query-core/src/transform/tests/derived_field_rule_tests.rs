use crate::transform::DerivedFieldRule;

#[test]
fn sharp_suffix_is_derived() {
    let rule = DerivedFieldRule::default();
    assert!(rule.is_derived("fooSharp"));
    assert!(rule.is_derived("heroImageSharp"));
    assert!(rule.is_derived("Sharp"));
}

#[test]
fn nested_child_image_fields_are_kept() {
    let rule = DerivedFieldRule::default();
    assert!(!rule.is_derived("fooChildImageSharp"));
    assert!(!rule.is_derived("localFilechildImageSharp"));
}

#[test]
fn bare_nested_child_suffix_is_derived() {
    // Nothing precedes the nested suffix, so it is not a nested child.
    let rule = DerivedFieldRule::default();
    assert!(rule.is_derived("childImageSharp"));
    assert!(rule.is_derived("ChildImageSharp"));
}

#[test]
fn unrelated_names_are_not_derived() {
    let rule = DerivedFieldRule::default();
    assert!(!rule.is_derived("bar"));
    assert!(!rule.is_derived("sharpness"));
    assert!(!rule.is_derived("fooSHARP"));
    assert!(!rule.is_derived(""));
}

#[test]
fn custom_rule() {
    let rule = DerivedFieldRule::new("Thumb", "nestedThumb");
    assert_eq!(rule.derived_suffix(), "Thumb");
    assert_eq!(rule.nested_child_suffix(), "nestedThumb");
    assert!(rule.is_derived("avatarThumb"));
    assert!(!rule.is_derived("avatarNestedThumb"));
    assert!(!rule.is_derived("avatarSharp"));
}

#[test]
fn empty_derived_suffix_matches_nothing() {
    let rule = DerivedFieldRule::new("", "");
    assert!(!rule.is_derived("fooSharp"));
    assert!(!rule.is_derived("bar"));
}
