//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod declaration_repository;
pub mod event_bus;
pub mod field_mapping;
pub mod specification;

pub use declaration_repository::DeclarationRepository;
pub use event_bus::{EventBusService, NoopEventBus, PropertyChangedEvent};
pub use field_mapping::{
    out_of_range, ColumnDefinition, FieldMapping, FieldMappingFactory, FieldMappingResolver,
    StorageRow, StorageValue,
};
pub use specification::{Specification, SpecificationError, SpecificationProvider};
