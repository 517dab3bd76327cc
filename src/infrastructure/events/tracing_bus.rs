//! Tracing Event Bus
//!
//! Emits each property-changed event as an `info` record.

use tracing::info;

use crate::domain::ports::{EventBusService, PropertyChangedEvent};

#[derive(Debug, Default)]
pub struct TracingEventBus;

impl EventBusService for TracingEventBus {
    fn post(&self, event: PropertyChangedEvent) {
        let old_value = event.old_value.as_ref().map(ToString::to_string);
        let new_value = event.new_value.as_ref().map(ToString::to_string);
        info!(
            kind = %event.kind,
            feature = %event.feature,
            old = old_value.as_deref().unwrap_or("-"),
            new = new_value.as_deref().unwrap_or("-"),
            "property changed"
        );
    }
}
