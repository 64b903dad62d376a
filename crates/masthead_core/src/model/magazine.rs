//! Magazine domain model.
//!
//! # Responsibility
//! - Define the `Magazine` entity with validated, mutable name and category.
//! - Answer which articles, contributors and titles belong to a magazine.
//!
//! # Invariants
//! - `name` character count is always within [2, 16].
//! - `category` is never empty after trimming.
//! - `id` is stable and never reused for another magazine.

use crate::library::Library;
use crate::model::article::Article;
use crate::model::author::{Author, AuthorId};
use crate::model::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 16;

/// Articles strictly above this per-author count make a contributing author.
const CONTRIBUTING_AUTHOR_THRESHOLD: usize = 2;

/// Stable identifier for a magazine.
pub type MagazineId = Uuid;

/// A publication identified by name and category.
///
/// Both fields are mutable through validated setters; the struct can never
/// hold a value that violates the constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
}

impl Magazine {
    /// Creates a magazine with a freshly minted id.
    ///
    /// # Errors
    /// - `ValidationError::MagazineNameLength` when the name is outside
    ///   [2, 16] characters. The name is not trimmed before counting.
    /// - `ValidationError::EmptyCategory` when the category trims to nothing.
    pub(crate) fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let category = category.into();
        validate_name(&name)?;
        validate_category(&category)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            category,
        })
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Replaces the name, keeping the [2, 16] character constraint.
    ///
    /// On error the current name is left untouched.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Replaces the category, keeping the non-empty constraint.
    ///
    /// On error the current category is left untouched.
    pub fn set_category(&mut self, category: impl Into<String>) -> Result<(), ValidationError> {
        let category = category.into();
        validate_category(&category)?;
        self.category = category;
        Ok(())
    }

    /// Returns all articles published in this magazine, in registry order.
    pub fn articles<'a>(&self, library: &'a Library) -> Vec<&'a Article> {
        library
            .articles()
            .iter()
            .filter(|article| article.magazine() == self.id)
            .collect()
    }

    /// Returns the distinct authors who have written for this magazine.
    pub fn contributors<'a>(&self, library: &'a Library) -> Vec<&'a Author> {
        let mut seen: HashSet<AuthorId> = HashSet::new();
        let mut authors = Vec::new();
        for article in self.articles(library) {
            if seen.insert(article.author()) {
                if let Some(author) = library.author(article.author()) {
                    authors.push(author);
                }
            }
        }
        authors
    }

    /// Returns the titles of this magazine's articles, in registry order.
    ///
    /// # Contract
    /// - `None` when the magazine has no articles; never `Some(vec![])`.
    pub fn article_titles<'a>(&self, library: &'a Library) -> Option<Vec<&'a str>> {
        let titles: Vec<&str> = self
            .articles(library)
            .iter()
            .map(|article| article.title())
            .collect();
        if titles.is_empty() {
            None
        } else {
            Some(titles)
        }
    }

    /// Returns the authors with strictly more than 2 articles here.
    ///
    /// # Contract
    /// - `None` when no author crosses the threshold; never `Some(vec![])`.
    /// - Order follows each author's first article in this magazine.
    pub fn contributing_authors<'a>(&self, library: &'a Library) -> Option<Vec<&'a Author>> {
        let mut counts: Vec<(AuthorId, usize)> = Vec::new();
        for article in self.articles(library) {
            match counts.iter_mut().find(|(id, _)| *id == article.author()) {
                Some((_, count)) => *count += 1,
                None => counts.push((article.author(), 1)),
            }
        }

        let authors: Vec<&Author> = counts
            .iter()
            .filter(|(_, count)| *count > CONTRIBUTING_AUTHOR_THRESHOLD)
            .filter_map(|(id, _)| library.author(*id))
            .collect();
        if authors.is_empty() {
            None
        } else {
            Some(authors)
        }
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
        return Err(ValidationError::MagazineNameLength { len });
    }
    Ok(())
}

fn validate_category(category: &str) -> Result<(), ValidationError> {
    if category.trim().is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Magazine;
    use crate::model::ValidationError;

    #[test]
    fn new_enforces_name_length_bounds() {
        assert_eq!(
            Magazine::new("V", "Fashion").unwrap_err(),
            ValidationError::MagazineNameLength { len: 1 }
        );
        assert_eq!(
            Magazine::new("A name far too long", "Fashion").unwrap_err(),
            ValidationError::MagazineNameLength { len: 19 }
        );
        assert!(Magazine::new("Vo", "Fashion").is_ok());
        assert!(Magazine::new("Sixteen chars ok", "Fashion").is_ok());
    }

    #[test]
    fn name_length_counts_chars_without_trimming() {
        // Two spaces satisfy the length bound; the name is never trimmed.
        assert!(Magazine::new("  ", "Fashion").is_ok());
        // Multibyte chars count as one each.
        assert!(Magazine::new("Vögue", "Fashion").is_ok());
    }

    #[test]
    fn new_rejects_blank_category() {
        assert_eq!(
            Magazine::new("Vogue", "   ").unwrap_err(),
            ValidationError::EmptyCategory
        );
    }

    #[test]
    fn setters_validate_and_keep_old_value_on_error() {
        let mut magazine = Magazine::new("Vogue", "Fashion").unwrap();

        magazine.set_name("Teen Vogue").unwrap();
        assert_eq!(magazine.name(), "Teen Vogue");
        assert!(magazine.set_name("V").is_err());
        assert_eq!(magazine.name(), "Teen Vogue");

        magazine.set_category("Lifestyle").unwrap();
        assert_eq!(magazine.category(), "Lifestyle");
        assert!(magazine.set_category(" ").is_err());
        assert_eq!(magazine.category(), "Lifestyle");
    }
}
