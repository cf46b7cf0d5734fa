//! Loaders that read the knowledge-base artifacts from disk

pub mod file_scanner;
mod roster_loader;
mod schema_loader;
mod table_loader;

pub use file_scanner::{EVIDENCE_EXTENSION, FileScanner};
pub use roster_loader::RosterLoader;
pub use schema_loader::SchemaLoader;
pub use table_loader::TableLoader;
