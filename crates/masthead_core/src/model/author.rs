//! Author domain model.
//!
//! # Responsibility
//! - Define the `Author` entity and its name constraint.
//! - Answer which articles, magazines and topic areas belong to an author.
//!
//! # Invariants
//! - `name` is immutable and never empty after trimming.
//! - `id` is stable and never reused for another author.

use crate::library::Library;
use crate::model::article::Article;
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Stable identifier for an author.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type AuthorId = Uuid;

/// A writer identified by name.
///
/// Two authors constructed with the same name are distinct entities; identity
/// lives in `id`, never in the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    id: AuthorId,
    name: String,
}

impl Author {
    /// Creates an author with a freshly minted id.
    ///
    /// The name is stored as given; only its post-trim emptiness is checked.
    ///
    /// # Errors
    /// - `ValidationError::EmptyAuthorName` when the name trims to nothing.
    pub(crate) fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyAuthorName);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name,
        })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    /// Name is immutable.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns all articles written by this author, in registry order.
    pub fn articles<'a>(&self, library: &'a Library) -> Vec<&'a Article> {
        library
            .articles()
            .iter()
            .filter(|article| article.author() == self.id)
            .collect()
    }

    /// Returns the magazines this author has contributed to.
    ///
    /// Duplicates are collapsed by magazine id; first contribution order is
    /// kept so results are deterministic.
    pub fn magazines<'a>(&self, library: &'a Library) -> Vec<&'a Magazine> {
        let mut seen: HashSet<MagazineId> = HashSet::new();
        let mut magazines = Vec::new();
        for article in self.articles(library) {
            if seen.insert(article.magazine()) {
                if let Some(magazine) = library.magazine(article.magazine()) {
                    magazines.push(magazine);
                }
            }
        }
        magazines
    }

    /// Returns the distinct magazine categories this author has written for.
    ///
    /// # Contract
    /// - `None` when the author has no magazines; never `Some(vec![])`.
    /// - Categories reflect current magazine state at query time.
    pub fn topic_areas<'a>(&self, library: &'a Library) -> Option<Vec<&'a str>> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut areas = Vec::new();
        for magazine in self.magazines(library) {
            if seen.insert(magazine.category()) {
                areas.push(magazine.category());
            }
        }
        if areas.is_empty() {
            None
        } else {
            Some(areas)
        }
    }
}
