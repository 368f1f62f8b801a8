//! Literal sample data inserted by the seeder.

mod notes;

pub use notes::{mediscreen_notes, NoteFixture};
