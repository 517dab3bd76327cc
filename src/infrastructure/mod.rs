//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `declarations` - Model declaration files (TOML/YAML) to feature descriptors
//! - `specifications/` - Rule registry and built-in rules
//! - `mapping/` - Field mappers, their registry and an in-memory row
//! - `events/` - Event bus implementations (tracing, recording)

pub mod declarations;
pub mod events;
pub mod mapping;
pub mod specifications;

// Re-export for convenience
pub use declarations::{
    load_declarations, parse_declarations, DeclarationFormat, FsDeclarationRepository,
};
pub use events::{RecordingEventBus, TracingEventBus};
pub use mapping::{FieldMappingRegistry, MemoryRow};
pub use specifications::SpecificationRegistry;
