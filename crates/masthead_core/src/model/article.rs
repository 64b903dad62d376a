//! Article domain model.
//!
//! # Responsibility
//! - Define the join entity linking one author to one magazine.
//! - Enforce the title length constraint at construction.
//!
//! # Invariants
//! - `title` is immutable and its character count is always within [5, 50].
//! - `author` and `magazine` always hold ids the owning library resolved at
//!   the time they were set.

use crate::model::author::AuthorId;
use crate::model::magazine::MagazineId;
use crate::model::ValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const TITLE_MIN_CHARS: usize = 5;
const TITLE_MAX_CHARS: usize = 50;

/// Stable identifier for an article.
pub type ArticleId = Uuid;

/// One edge of the Author x Magazine many-to-many relationship.
///
/// The referenced author and magazine are mutable; reassignment goes through
/// the library so the new id is known to be registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    id: ArticleId,
    author: AuthorId,
    magazine: MagazineId,
    title: String,
}

impl Article {
    /// Creates an article with a freshly minted id.
    ///
    /// Id resolution against the registries is the library's job; only the
    /// title constraint is checked here.
    ///
    /// # Errors
    /// - `ValidationError::TitleLength` when the title is outside [5, 50]
    ///   characters. The title is not trimmed before counting.
    pub(crate) fn new(
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let len = title.chars().count();
        if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&len) {
            return Err(ValidationError::TitleLength { len });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            author,
            magazine,
            title,
        })
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn magazine(&self) -> MagazineId {
        self.magazine
    }

    /// Title is immutable.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn set_author(&mut self, author: AuthorId) {
        self.author = author;
    }

    pub(crate) fn set_magazine(&mut self, magazine: MagazineId) {
        self.magazine = magazine;
    }
}

#[cfg(test)]
mod tests {
    use super::Article;
    use crate::model::ValidationError;
    use uuid::Uuid;

    #[test]
    fn new_enforces_title_length_bounds() {
        let author = Uuid::new_v4();
        let magazine = Uuid::new_v4();

        assert_eq!(
            Article::new(author, magazine, "Four").unwrap_err(),
            ValidationError::TitleLength { len: 4 }
        );
        let over = "x".repeat(51);
        assert_eq!(
            Article::new(author, magazine, over).unwrap_err(),
            ValidationError::TitleLength { len: 51 }
        );

        assert!(Article::new(author, magazine, "Five!").is_ok());
        assert!(Article::new(author, magazine, "y".repeat(50)).is_ok());
    }

    #[test]
    fn new_keeps_references_and_title() {
        let author = Uuid::new_v4();
        let magazine = Uuid::new_v4();
        let article = Article::new(author, magazine, "How to Wear a Scarf").unwrap();

        assert_eq!(article.author(), author);
        assert_eq!(article.magazine(), magazine);
        assert_eq!(article.title(), "How to Wear a Scarf");
        assert!(!article.id().is_nil());
    }
}
