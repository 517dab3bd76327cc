//! Event Bus Implementations
//!
//! Concrete implementations of `EventBusService`:
//! - TracingEventBus: logs every posted event
//! - RecordingEventBus: keeps events in memory for inspection

mod recording;
mod tracing_bus;

pub use recording::RecordingEventBus;
pub use tracing_bus::TracingEventBus;
