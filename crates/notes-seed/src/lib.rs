//! Seed data for the Mediscreen notes database.
//!
//! This crate initializes a MongoDB server with everything the notes
//! service expects at startup: an application user with `readWrite`
//! access, a schema-validated `notes` collection, a fixed set of sample
//! patient notes, and the indexes the service queries against.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use notes_seed::prelude::*;
//!
//! let client = mongodb::Client::with_uri_str("mongodb://localhost:27017").await?;
//! let report = Seeder::new(client).seed(&SeedConfig::default()).await?;
//! println!("{} notes inserted", report.document_count);
//! ```
//!
//! Seeding is strictly sequential and stops at the first failing step;
//! re-running against an already-initialized server fails on the
//! duplicate user rather than silently skipping it.

pub mod config;
pub mod db;
pub mod fixtures;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{
        BsonType, CollectionSpec, FieldSpec, IndexDirection, IndexSpec, SeedConfig, UserSpec,
    };
    pub use crate::db::{SeedError, SeedReport, Seeder};
    pub use crate::fixtures::{mediscreen_notes, NoteFixture};
}
