use std::collections::HashSet;

use calchub_registry::{catalog, categories, find};

#[test]
fn catalog_is_non_empty_and_loads_once() {
    assert!(catalog().len() > 100, "catalog unexpectedly small: {}", catalog().len());
}

#[test]
fn ids_are_unique() {
    let mut seen = HashSet::new();
    for desc in catalog() {
        assert!(seen.insert(desc.id.as_str()), "duplicate id: {}", desc.id);
    }
}

#[test]
fn every_descriptor_is_fully_populated() {
    for desc in catalog() {
        assert!(!desc.id.is_empty());
        assert!(!desc.name.is_empty(), "{} has no name", desc.id);
        assert!(!desc.category.is_empty(), "{} has no category", desc.id);
        assert!(!desc.description.is_empty(), "{} has no description", desc.id);
    }
}

#[test]
fn find_resolves_known_and_rejects_unknown() {
    let bmi = find("bmi").expect("bmi should be in the catalog");
    assert_eq!(bmi.name, "BMI Calculator");
    assert!(find("not_a_real_calc").is_none());
}

#[test]
fn categories_cover_the_whole_catalog() {
    let groups = categories();
    let grouped: usize = groups.iter().map(|(_, members)| members.len()).sum();
    assert_eq!(grouped, catalog().len());
    // grouping preserves catalog order within a category
    let (first_category, members) = &groups[0];
    assert_eq!(*first_category, "Date & Time");
    assert_eq!(members[0].id, "age");
}
