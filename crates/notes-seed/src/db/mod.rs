//! Database integration for seeding.
//!
//! The [`Seeder`] runs the initialization steps in order against a
//! connected MongoDB client and stops at the first failure.

mod seeder;

pub use seeder::{SeedError, SeedReport, Seeder};
