//! In-memory registries and the mutation surface around them.
//!
//! # Responsibility
//! - Own the append-only author/magazine/article registries.
//! - Resolve entity ids before any cross-entity write.
//!
//! # Invariants
//! - A failed add or assign leaves every registry untouched.
//! - Articles are never removed; registry order is insertion order.
//! - Every registered article's author and magazine ids resolve in the same
//!   library.

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::ValidationError;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type LibraryResult<T> = Result<T, LibraryError>;

/// Error for library-level mutations.
///
/// `Unknown*` variants mean the given id does not denote an entity of the
/// required kind in this library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryError {
    Validation(ValidationError),
    UnknownAuthor(AuthorId),
    UnknownMagazine(MagazineId),
    UnknownArticle(ArticleId),
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::UnknownAuthor(id) => write!(f, "no author registered under id {id}"),
            Self::UnknownMagazine(id) => write!(f, "no magazine registered under id {id}"),
            Self::UnknownArticle(id) => write!(f, "no article registered under id {id}"),
        }
    }
}

impl Error for LibraryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for LibraryError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// The context owning all entity registries.
///
/// Created once by the caller and threaded through every operation; there is
/// no process-global state. Registries only grow for the library's lifetime.
#[derive(Debug, Default)]
pub struct Library {
    authors: Vec<Author>,
    magazines: Vec<Magazine>,
    articles: Vec<Article>,
}

impl Library {
    /// Creates a library with empty registries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new author and returns its id.
    ///
    /// # Errors
    /// - Propagates `Author::new` validation failures.
    pub fn add_author(&mut self, name: impl Into<String>) -> LibraryResult<AuthorId> {
        let author = Author::new(name)?;
        let id = author.id();
        self.authors.push(author);
        debug!("event=author_registered module=library id={id}");
        Ok(id)
    }

    /// Registers a new magazine and returns its id.
    ///
    /// # Errors
    /// - Propagates `Magazine::new` validation failures.
    pub fn add_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> LibraryResult<MagazineId> {
        let magazine = Magazine::new(name, category)?;
        let id = magazine.id();
        self.magazines.push(magazine);
        debug!("event=magazine_registered module=library id={id}");
        Ok(id)
    }

    /// Registers a new article linking an author to a magazine.
    ///
    /// Both the direct construction path and the per-author convenience of
    /// adding an article go through here.
    ///
    /// # Errors
    /// - `UnknownAuthor` / `UnknownMagazine` when an id does not resolve
    ///   in this library.
    /// - Propagates `Article::new` title validation failures.
    pub fn add_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> LibraryResult<ArticleId> {
        if self.author(author).is_none() {
            return Err(LibraryError::UnknownAuthor(author));
        }
        if self.magazine(magazine).is_none() {
            return Err(LibraryError::UnknownMagazine(magazine));
        }
        let article = Article::new(author, magazine, title)?;
        let id = article.id();
        self.articles.push(article);
        debug!("event=article_registered module=library id={id} author={author} magazine={magazine}");
        Ok(id)
    }

    /// Reassigns an article to a different author.
    ///
    /// # Errors
    /// - `UnknownAuthor` when the new author id does not resolve here.
    /// - `UnknownArticle` when the article id does not resolve here.
    pub fn assign_author(&mut self, article: ArticleId, new_author: AuthorId) -> LibraryResult<()> {
        if self.author(new_author).is_none() {
            return Err(LibraryError::UnknownAuthor(new_author));
        }
        let entry = self
            .articles
            .iter_mut()
            .find(|candidate| candidate.id() == article)
            .ok_or(LibraryError::UnknownArticle(article))?;
        entry.set_author(new_author);
        debug!("event=article_reassigned module=library id={article} author={new_author}");
        Ok(())
    }

    /// Reassigns an article to a different magazine.
    ///
    /// # Errors
    /// - `UnknownMagazine` when the new magazine id does not resolve here.
    /// - `UnknownArticle` when the article id does not resolve here.
    pub fn assign_magazine(
        &mut self,
        article: ArticleId,
        new_magazine: MagazineId,
    ) -> LibraryResult<()> {
        if self.magazine(new_magazine).is_none() {
            return Err(LibraryError::UnknownMagazine(new_magazine));
        }
        let entry = self
            .articles
            .iter_mut()
            .find(|candidate| candidate.id() == article)
            .ok_or(LibraryError::UnknownArticle(article))?;
        entry.set_magazine(new_magazine);
        debug!("event=article_reassigned module=library id={article} magazine={new_magazine}");
        Ok(())
    }

    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.iter().find(|author| author.id() == id)
    }

    pub fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines.iter().find(|magazine| magazine.id() == id)
    }

    /// Mutable magazine lookup, for the validated name/category setters.
    pub fn magazine_mut(&mut self, id: MagazineId) -> Option<&mut Magazine> {
        self.magazines.iter_mut().find(|magazine| magazine.id() == id)
    }

    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|article| article.id() == id)
    }

    /// All authors in registration order.
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// All magazines in registration order.
    pub fn magazines(&self) -> &[Magazine] {
        &self.magazines
    }

    /// All articles in registration order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Returns the magazine with the most articles.
    ///
    /// # Contract
    /// - Stable max: on ties the magazine registered first wins.
    /// - A magazine with zero articles can win when nothing beats it.
    /// - `None` only when no magazine is registered.
    pub fn top_publisher(&self) -> Option<&Magazine> {
        let mut best: Option<(&Magazine, usize)> = None;
        for magazine in &self.magazines {
            let count = self
                .articles
                .iter()
                .filter(|article| article.magazine() == magazine.id())
                .count();
            let replace = match best {
                None => true,
                Some((_, best_count)) => count > best_count,
            };
            if replace {
                best = Some((magazine, count));
            }
        }
        best.map(|(magazine, _)| magazine)
    }
}
