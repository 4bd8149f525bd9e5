//! The catalog and the dispatcher must recognize exactly the same
//! identifiers; this is the wire contract between the listing pages and
//! the calculation endpoint.

use std::collections::HashSet;

use calchub_calculator::{Dispatcher, InputBag, NOT_IMPLEMENTED};
use calchub_registry::catalog;

#[test]
fn registry_and_dispatcher_agree_on_identifiers() {
    let dispatcher = Dispatcher::new();
    let formula_ids: HashSet<&str> = dispatcher.ids().collect();
    let catalog_ids: HashSet<&str> = catalog().iter().map(|c| c.id.as_str()).collect();

    let missing: Vec<_> = catalog_ids.difference(&formula_ids).collect();
    assert!(missing.is_empty(), "catalog ids with no formula: {missing:?}");

    let unlisted: Vec<_> = formula_ids.difference(&catalog_ids).collect();
    assert!(unlisted.is_empty(), "formulas not in the catalog: {unlisted:?}");
}

#[test]
fn every_cataloged_calculator_is_reachable() {
    let dispatcher = Dispatcher::new();
    let empty = InputBag::default();
    for descriptor in catalog() {
        let result = dispatcher.evaluate(&descriptor.id, &empty);
        assert_ne!(
            result, NOT_IMPLEMENTED,
            "{} resolves to the fallback message",
            descriptor.id
        );
        // with no inputs at all, every formula must still fail softly
        assert!(
            result.starts_with("Error:"),
            "{} accepted an empty input bag: {result}",
            descriptor.id
        );
    }
}
