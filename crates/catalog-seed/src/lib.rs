//! Seed data for the driving-school catalog.
//!
//! This crate loads the fixed set of courses, pricing packages and their
//! package-course links into PostgreSQL. Inserts skip rows whose unique key
//! already exists, so a seed run can be repeated safely.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use catalog_seed::prelude::*;
//!
//! let config = SeedConfig::from_env()?;
//! let mut seeder = Seeder::connect(&config).await?;
//! let summary = seeder.seed(&Catalog::builtin()).await?;
//! println!("{summary}");
//! seeder.close().await?;
//! ```

pub mod catalog;
pub mod config;
pub mod db;
pub mod report;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::catalog::{Catalog, CatalogError, Course, Package, PackageCourse};
    pub use crate::config::{ConfigError, SeedConfig};
    pub use crate::db::{SeedError, Seeder};
    pub use crate::report::{BatchReport, InsertOutcome, SeedSummary};
}
