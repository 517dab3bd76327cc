//! Property tests for rule references.

use proptest::prelude::*;

use metafacet::domain::value_objects::SpecificationRef;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing arbitrary input never panics
    #[test]
    fn property_parse_never_panics(input in "\\PC{0,40}") {
        let _ = SpecificationRef::parse(&input);
    }

    /// PROPERTY: a rendered reference parses back to itself
    #[test]
    fn property_rendered_reference_reparses(
        name in "[A-Za-z][A-Za-z0-9_.]{0,15}",
        args in proptest::collection::vec("[A-Za-z0-9_]{1,6}", 0..4),
    ) {
        let reference = SpecificationRef::new(name, args);
        let reparsed = SpecificationRef::parse(&reference.to_string()).unwrap();
        prop_assert_eq!(reparsed, reference);
    }
}
