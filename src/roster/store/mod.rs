//! # Storage Layer
//!
//! Storage is split in two:
//!
//! - [`DataStore`] moves the raw persisted document in and out of a backing
//!   medium. It knows nothing about records.
//! - [`RecordStore`] owns the in-memory record collection, decodes and encodes
//!   the JSON document, assigns identifiers, validates, and persists after
//!   every successful mutation.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a single JSON file
//! - [`memory::InMemoryStore`]: in-memory document for tests, with write
//!   failure simulation
//!
//! ## Storage Format
//!
//! ```text
//! {
//!     "STU001": {
//!         "student_id": "STU001",
//!         "name": "Ada Lovelace",
//!         "age": 20,
//!         "email": "ada@example.com",
//!         "phone": "+11234567890",
//!         "course": "Mathematics",
//!         "grade": null,
//!         "enrollment_date": "2024-09-01"
//!     }
//! }
//! ```
//!
//! Key order in the file is the collection's insertion order.

use crate::error::Result;

pub mod fs;
pub mod memory;
pub mod record_store;

pub use record_store::RecordStore;

/// Abstract interface for the persisted document.
pub trait DataStore {
    /// Read the whole document. `Ok(None)` when nothing has been saved yet.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the whole document.
    fn write(&mut self, document: &str) -> Result<()>;

    /// Human-readable location, used in logs and messages.
    fn describe(&self) -> String;
}
