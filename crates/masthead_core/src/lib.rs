//! Core domain logic for Masthead.
//! This crate is the single source of truth for business invariants.

pub mod library;
pub mod logging;
pub mod model;

pub use library::{Library, LibraryError, LibraryResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{Article, ArticleId};
pub use model::author::{Author, AuthorId};
pub use model::magazine::{Magazine, MagazineId};
pub use model::ValidationError;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
