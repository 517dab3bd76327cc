//! Property tests for feature identities.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;

use metafacet::domain::value_objects::{natural_name, Depth, Identifier};

fn hash_of(identifier: &Identifier) -> u64 {
    let mut hasher = DefaultHasher::new();
    identifier.hash(&mut hasher);
    hasher.finish()
}

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9_]{0,12}").unwrap()
}

fn class_name() -> impl Strategy<Value = String> {
    proptest::collection::vec(name(), 1..=3).prop_map(|segments| segments.join("."))
}

/// Narrow alphabet so pairs often share a class or member
fn identifier() -> impl Strategy<Value = Identifier> {
    let short = || proptest::string::string_regex("[ab][ab.]{0,2}").unwrap();
    (
        short(),
        short(),
        proptest::option::of(proptest::collection::vec(short(), 0..3)),
    )
        .prop_map(|(class, member, params)| match params {
            None => Identifier::property_or_collection_identifier(class.as_str(), member.as_str()),
            Some(params) => Identifier::action_identifier(
                class.as_str(),
                member.as_str(),
                params.iter().map(String::as_str),
            ),
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: equal (class, member, parameters) means equal and same hash
    #[test]
    fn property_equal_parts_mean_equal_identities(
        class in class_name(),
        member in name(),
        params in proptest::collection::vec(name(), 0..4),
    ) {
        let a = Identifier::action_identifier(class.as_str(), member.as_str(), params.iter().map(String::as_str));
        let b = Identifier::action_identifier(class.as_str(), member.as_str(), params.iter().map(String::as_str));
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
        prop_assert_eq!(a.cmp(&b), std::cmp::Ordering::Equal);
    }

    /// PROPERTY: a property and a parameterless action with the same names are equal
    ///
    /// Equality ignores the feature type; only the kind-aware rendering differs.
    #[test]
    fn property_equality_ignores_feature_type(class in class_name(), member in name()) {
        let property = Identifier::property_or_collection_identifier(class.as_str(), member.as_str());
        let action = Identifier::action_identifier(class.as_str(), member.as_str(), Vec::<String>::new());
        prop_assert_eq!(&property, &action);
        prop_assert_eq!(hash_of(&property), hash_of(&action));
        prop_assert_eq!(property.canonical_string(), action.canonical_string());
        prop_assert_ne!(property.full_identity_string(), action.full_identity_string());
    }

    /// PROPERTY: ordering follows the canonical rendering and agrees with equality
    #[test]
    fn property_ordering_matches_canonical_string(a in identifier(), b in identifier()) {
        let ordering = a.cmp(&b);
        prop_assert_eq!(ordering, a.canonical_string().cmp(b.canonical_string()));
        prop_assert_eq!(ordering, b.cmp(&a).reverse());
        prop_assert_eq!(ordering == std::cmp::Ordering::Equal, a == b);
        prop_assert_eq!(a < b, a.canonical_string() < b.canonical_string());
    }

    /// PROPERTY: parameter order is significant
    #[test]
    fn property_parameter_order_matters(
        class in class_name(),
        member in name(),
        first in name(),
        second in name(),
    ) {
        prop_assume!(first != second);
        let a = Identifier::action_identifier(class.as_str(), member.as_str(), [first.as_str(), second.as_str()]);
        let b = Identifier::action_identifier(class.as_str(), member.as_str(), [second.as_str(), first.as_str()]);
        prop_assert_ne!(a, b);
    }

    /// PROPERTY: the full rendering is the concatenation of the partial ones
    #[test]
    fn property_renderings_compose(
        class in class_name(),
        member in name(),
        params in proptest::collection::vec(name(), 0..4),
    ) {
        let action = Identifier::action_identifier(class.as_str(), member.as_str(), params.iter().map(String::as_str));
        prop_assert_eq!(
            action.to_identity_string(Depth::ClassMemberNameParms),
            format!(
                "{}{}",
                action.to_identity_string(Depth::ClassMemberName),
                action.to_identity_string(Depth::ParmsOnly)
            )
        );
        prop_assert_eq!(action.to_identity_string(Depth::Class), class.clone());
        prop_assert_eq!(action.to_identity_string(Depth::MemberNameOnly), member.clone());
        prop_assert_eq!(action.to_string(), action.canonical_string());
    }

    /// PROPERTY: natural names never panic and never lose letters
    #[test]
    fn property_natural_name_keeps_every_alphanumeric(raw in "[A-Za-z0-9]{0,24}") {
        let natural = natural_name(&raw);
        let kept: String = natural.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(kept.to_lowercase(), raw.to_lowercase());
    }
}
