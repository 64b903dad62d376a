//! Domain entities for the author/magazine/article relationship.
//!
//! # Responsibility
//! - Define the validated entity structs and their identifier aliases.
//! - Host the derived relationship queries exposed by each entity.
//!
//! # Invariants
//! - Every entity is identified by a stable id minted at construction.
//! - No entity can be constructed in a state that violates its string
//!   constraints.

pub mod article;
pub mod author;
pub mod magazine;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// String-constraint violation raised by entity constructors and setters.
///
/// Length variants carry the offending character count for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Author name is empty after trimming whitespace.
    EmptyAuthorName,
    /// Magazine name character count is outside [2, 16].
    MagazineNameLength { len: usize },
    /// Magazine category is empty after trimming whitespace.
    EmptyCategory,
    /// Article title character count is outside [5, 50].
    TitleLength { len: usize },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAuthorName => write!(f, "author name must be a non-empty string"),
            Self::MagazineNameLength { len } => write!(
                f,
                "magazine name must be between 2 and 16 characters, got {len}"
            ),
            Self::EmptyCategory => write!(f, "magazine category must be a non-empty string"),
            Self::TitleLength { len } => write!(
                f,
                "article title must be between 5 and 50 characters, got {len}"
            ),
        }
    }
}

impl Error for ValidationError {}
