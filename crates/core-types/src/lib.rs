pub mod enums;
pub mod error;
pub mod params;

// Re-export the core types to provide a clean public API.
pub use enums::{AdvisoryCategory, Tone, Variant};
pub use error::CoreError;
pub use params::{Bounds, Parameter, ParameterSet};
