//! # Gitshelf
//!
//! An in-memory catalog of software repository records that provides:
//! - Record creation with generated identifiers and a like counter
//! - Identifier-keyed, atomic mutations (update, remove, like)
//! - Format validation for identifiers and repository URLs
//!
//! ## Core Concepts
//!
//! - **Records** hold a title, a URL, an ordered list of technologies and a
//!   like counter; the identifier is assigned at creation and never changes
//! - **The catalog** preserves insertion order and lives for the process
//!   lifetime; nothing is persisted
//! - **Mutations** look up their target by identifier under a single lock,
//!   so a concurrent removal surfaces as a not-found error rather than a
//!   write to the wrong record
//!
//! ## Example Usage
//!
//! ```rust
//! use gitshelf::{Catalog, RepositoryDraft};
//!
//! # fn example() -> Result<(), gitshelf::CatalogError> {
//! let catalog = Catalog::new();
//!
//! let record = catalog.create(RepositoryDraft {
//!     title: "gitshelf".to_string(),
//!     url: "https://github.com/gitshelf/gitshelf".to_string(),
//!     techs: vec!["Rust".to_string()],
//! })?;
//!
//! let liked = catalog.like(&record.id)?;
//! assert_eq!(liked.likes, 1);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod error;
pub mod record;
pub mod validate;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use record::{Repository, RepositoryDraft};
