//! tw-core
//!
//! Domain models, the category registry and the port traits for TimeWorld.

pub mod categories;
pub mod error;
pub mod models;
pub mod traits;

// Re-exporting for easier access in other crates
pub use categories::{Category, CategoryFilter, CATEGORIES};
pub use error::*;
pub use models::*;
pub use traits::*;
