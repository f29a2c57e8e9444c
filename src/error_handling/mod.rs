//! Error handling.

mod types;

pub use types::{AnalysisError, InitializationError};
