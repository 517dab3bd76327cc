//! Scenario: persisting a money property across two columns

use metafacet::domain::entities::FeatureDescriptor;
use metafacet::domain::ports::StorageValue;
use metafacet::domain::value_objects::{Money, Value};
use metafacet::infrastructure::MemoryRow;
use metafacet::MetamodelError;

use crate::common::*;

/// SCENARIO: 12.50 USD is written to price1/price2 and read back unchanged
#[test]
fn scenario_money_round_trips_through_a_row() {
    let model = builder().build([
        FeatureDescriptor::property("Order", "price").with_value_type("money")
    ]);
    let mapping = model
        .member("Order", "price")
        .unwrap()
        .field_mapping()
        .expect("money semantics resolved");

    assert_eq!(mapping.column_count(), 2);
    assert_eq!(mapping.column_name(0), Some("price1"));
    assert_eq!(mapping.column_name(1), Some("price2"));

    let price = Value::from(Money::new(12.50, "USD"));
    let columns = mapping.to_storage_columns(Some(&price)).unwrap();
    assert_eq!(
        columns,
        vec![
            ("price1".to_string(), StorageValue::Double(12.5)),
            ("price2".to_string(), StorageValue::Text("USD".into())),
        ]
    );

    let row: MemoryRow = columns.into_iter().collect();
    assert_eq!(mapping.from_storage_row(&row).unwrap(), Some(price));
}

/// SCENARIO: no value is written as NULLs and read back as no value
#[test]
fn scenario_absent_money_is_all_null() {
    let model = builder().build([
        FeatureDescriptor::property("Order", "price").with_value_type("money")
    ]);
    let mapping = model.member("Order", "price").unwrap().field_mapping().unwrap();

    let columns = mapping.to_storage_columns(None).unwrap();
    assert!(columns.iter().all(|(_, v)| v.is_null()));

    let row: MemoryRow = columns.into_iter().collect();
    assert_eq!(mapping.from_storage_row(&row).unwrap(), None);
}

/// SCENARIO: a text value handed to the money mapper is a typed error
#[test]
fn scenario_wrong_runtime_type_is_rejected() {
    let model = builder().build([
        FeatureDescriptor::property("Order", "price").with_value_type("money")
    ]);
    let mapping = model.member("Order", "price").unwrap().field_mapping().unwrap();

    let err = mapping
        .to_storage(0, Some(&Value::from("12.50")))
        .unwrap_err();
    assert!(matches!(
        err,
        MetamodelError::MappingTypeMismatch {
            expected: "money",
            found: "text",
            ..
        }
    ));

    assert!(matches!(
        mapping.to_storage(2, None),
        Err(MetamodelError::ColumnIndexOutOfRange { index: 2, count: 2, .. })
    ));
}
