//! Property tests for the built-in field mappers.

use std::sync::Arc;

use proptest::prelude::*;

use metafacet::domain::policies::MissingValuePolicy;
use metafacet::domain::ports::FieldMappingFactory;
use metafacet::domain::value_objects::{Identifier, Money, Value};
use metafacet::infrastructure::mapping::{
    MoneyValueMapperFactory, ScalarKind, ScalarValueMapperFactory,
};
use metafacet::infrastructure::MemoryRow;

fn feature(member: &str) -> Arc<Identifier> {
    Arc::new(Identifier::property_or_collection_identifier("Order", member))
}

fn round_trip(factory: &dyn FieldMappingFactory, member: &str, value: &Value) -> Option<Value> {
    let mapping = factory.create_field_mapping(feature(member));
    let row: MemoryRow = mapping
        .to_storage_columns(Some(value))
        .unwrap()
        .into_iter()
        .collect();
    mapping.from_storage_row(&row).unwrap()
}

fn scalar_value() -> impl Strategy<Value = (ScalarKind, Value)> {
    prop_oneof![
        any::<String>().prop_map(|s| (ScalarKind::Text, Value::Text(s))),
        any::<i64>().prop_map(|i| (ScalarKind::Integer, Value::Integer(i))),
        (-1.0e12f64..1.0e12).prop_map(|d| (ScalarKind::Decimal, Value::Decimal(d))),
        any::<bool>().prop_map(|b| (ScalarKind::Boolean, Value::Bool(b))),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: money written to its two columns reads back unchanged
    #[test]
    fn property_money_round_trips(
        minor_units in -1_000_000_000_000i64..1_000_000_000_000,
        currency in "[A-Z]{3}",
        member in "[a-z][A-Za-z]{0,10}",
    ) {
        let factory = MoneyValueMapperFactory::new("DECIMAL(21,2)", "VARCHAR(3)", MissingValuePolicy::Error);
        let value = Value::Money(Money::from_minor_units(minor_units, currency));
        prop_assert_eq!(round_trip(&factory, &member, &value), Some(value));
    }

    /// PROPERTY: every scalar kind reads back what it wrote
    #[test]
    fn property_scalars_round_trip((kind, value) in scalar_value()) {
        let factory = ScalarValueMapperFactory::new(kind, "ANY", MissingValuePolicy::Error);
        prop_assert_eq!(round_trip(&factory, "amount", &value), Some(value));
    }

    /// PROPERTY: column names never contain characters outside [A-Za-z0-9_]
    #[test]
    fn property_column_names_are_sql_safe(member in "\\PC{1,16}") {
        let factory = MoneyValueMapperFactory::new("DECIMAL(21,2)", "VARCHAR(3)", MissingValuePolicy::Error);
        let mapping = factory.create_field_mapping(feature(&member));
        for index in 0..mapping.column_count() {
            let name = mapping.column_name(index).unwrap();
            prop_assert!(name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
        }
    }
}
