/// Environment Reader
///
/// Captures the process environment once and exposes typed lookups:
/// - raw strings with optional defaults
/// - booleans (only a case-insensitive "true" is true)
/// - base-10 integers that fail fast on malformed input
/// - comma-separated lists
/// - port-like scalars that keep their provided type

pub mod error;

pub mod snapshot;

pub use error::{Coercion, EnvError};
pub use snapshot::{is_secret_key, EnvSnapshot, Scalar};
