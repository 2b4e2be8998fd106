pub mod catalog;
pub mod formatting;
pub mod host;
pub mod mode;
pub mod transforms;

// Re-export key types for easier usage
pub use catalog::{Bullet, Catalog, CatalogError, DEFAULT_BULLETS};
pub use formatting::{FormatError, Formatter, Group, format};
pub use host::{HostError, HostSettings, RopeBuffer, SpanEditor, TextSpan, TodoCommands};
pub use mode::FormatMode;
