//! Recording Event Bus
//!
//! Keeps every posted event, in order, behind a mutex.

use std::sync::Mutex;

use crate::domain::ports::{EventBusService, PropertyChangedEvent};

#[derive(Debug, Default)]
pub struct RecordingEventBus {
    events: Mutex<Vec<PropertyChangedEvent>>,
}

impl RecordingEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events posted so far
    pub fn events(&self) -> Vec<PropertyChangedEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.events().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove and return everything recorded
    pub fn take(&self) -> Vec<PropertyChangedEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl EventBusService for RecordingEventBus {
    fn post(&self, event: PropertyChangedEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}
