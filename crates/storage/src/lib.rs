//! Storage layer for ai-audit
//!
//! The usage store is a single JSON document `{sessions, summary}`. Services
//! reach it through the [`UsageStore`] trait.

mod error;
mod json_file;
mod memory;
#[cfg(test)]
mod tests;
mod traits;

pub use error::StorageError;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::UsageStore;
