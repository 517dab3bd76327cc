//! Event Bus Port
//!
//! Outbound interface to the event-publishing collaborator. Property facets
//! post through it after a set or clear; the bus itself is external.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::value_objects::{Identifier, Value};

/// Posted after a property was set or cleared
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyChangedEvent {
    /// Declared event kind (e.g. `OrderPriceChanged`)
    pub kind: String,
    /// The property that changed
    #[serde(serialize_with = "serialize_identifier")]
    pub feature: Arc<Identifier>,
    pub old_value: Option<Value>,
    pub new_value: Option<Value>,
}

fn serialize_identifier<S>(identifier: &Arc<Identifier>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(identifier.canonical_string())
}

/// Trait for receiving property-changed events
///
/// Implementations:
/// - `NoopEventBus`: drops everything
/// - `TracingEventBus`: logs each event
/// - `RecordingEventBus`: keeps events in memory
pub trait EventBusService: Send + Sync {
    fn post(&self, event: PropertyChangedEvent);
}

/// No-op event bus
pub struct NoopEventBus;

impl EventBusService for NoopEventBus {
    fn post(&self, _event: PropertyChangedEvent) {}
}
