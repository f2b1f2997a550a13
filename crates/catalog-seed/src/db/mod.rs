//! Database integration for seeding the catalog.
//!
//! The [`Seeder`] inserts each dataset with conflict-skip semantics inside a
//! single transaction and reports what it added.

mod seeder;

pub use seeder::{SeedError, Seeder};
