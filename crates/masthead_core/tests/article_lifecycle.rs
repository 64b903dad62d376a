use masthead_core::{Library, LibraryError, ValidationError};
use uuid::Uuid;

#[test]
fn new_article_is_visible_from_both_sides() {
    let mut library = Library::new();
    let carly = library.add_author("Carly").unwrap();
    let vogue = library.add_magazine("Vogue", "Fashion").unwrap();

    let article = library.add_article(carly, vogue, "How to Wear a Tutu").unwrap();

    let by_author = library.author(carly).unwrap().articles(&library);
    assert_eq!(by_author.len(), 1);
    assert_eq!(by_author[0].id(), article);

    let by_magazine = library.magazine(vogue).unwrap().articles(&library);
    assert_eq!(by_magazine.len(), 1);
    assert_eq!(by_magazine[0].id(), article);
}

#[test]
fn failed_construction_leaves_no_trace() {
    let mut library = Library::new();
    let carly = library.add_author("Carly").unwrap();
    let vogue = library.add_magazine("Vogue", "Fashion").unwrap();

    let before = library.articles().len();
    let err = library.add_article(carly, vogue, "tiny").unwrap_err();
    assert!(matches!(
        err,
        LibraryError::Validation(ValidationError::TitleLength { len: 4 })
    ));
    assert_eq!(library.articles().len(), before);

    let stray = Uuid::new_v4();
    let err = library.add_article(carly, stray, "A valid title").unwrap_err();
    assert!(matches!(err, LibraryError::UnknownMagazine(id) if id == stray));
    assert_eq!(library.articles().len(), before);
}

#[test]
fn reassigning_author_moves_the_article() {
    let mut library = Library::new();
    let carly = library.add_author("Carly").unwrap();
    let nadia = library.add_author("Nadia").unwrap();
    let vogue = library.add_magazine("Vogue", "Fashion").unwrap();

    let article = library.add_article(carly, vogue, "Changing hands soon").unwrap();
    library.assign_author(article, nadia).unwrap();

    assert!(library.author(carly).unwrap().articles(&library).is_empty());
    let nadias = library.author(nadia).unwrap().articles(&library);
    assert_eq!(nadias.len(), 1);
    assert_eq!(nadias[0].id(), article);
}

#[test]
fn reassigning_magazine_moves_the_article() {
    let mut library = Library::new();
    let carly = library.add_author("Carly").unwrap();
    let vogue = library.add_magazine("Vogue", "Fashion").unwrap();
    let teen = library.add_magazine("Teen", "Fashion").unwrap();

    let article = library.add_article(carly, vogue, "Changing homes soon").unwrap();
    library.assign_magazine(article, teen).unwrap();

    assert!(library.magazine(vogue).unwrap().articles(&library).is_empty());
    let teens = library.magazine(teen).unwrap().articles(&library);
    assert_eq!(teens.len(), 1);
    assert_eq!(teens[0].id(), article);
}

#[test]
fn an_author_magazine_pair_can_hold_many_articles() {
    let mut library = Library::new();
    let carly = library.add_author("Carly").unwrap();
    let vogue = library.add_magazine("Vogue", "Fashion").unwrap();

    library.add_article(carly, vogue, "First of the pair").unwrap();
    library.add_article(carly, vogue, "Second of the pair").unwrap();

    assert_eq!(library.author(carly).unwrap().articles(&library).len(), 2);
    assert_eq!(library.author(carly).unwrap().magazines(&library).len(), 1);
}

#[test]
fn article_serialization_uses_expected_wire_fields() {
    let mut library = Library::new();
    let carly = library.add_author("Carly").unwrap();
    let vogue = library.add_magazine("Vogue", "Fashion").unwrap();
    let article = library.add_article(carly, vogue, "How to Wear a Tutu").unwrap();

    let json = serde_json::to_value(library.article(article).unwrap()).unwrap();
    assert_eq!(json["id"], article.to_string());
    assert_eq!(json["author"], carly.to_string());
    assert_eq!(json["magazine"], vogue.to_string());
    assert_eq!(json["title"], "How to Wear a Tutu");

    let json = serde_json::to_value(library.magazine(vogue).unwrap()).unwrap();
    assert_eq!(json["name"], "Vogue");
    assert_eq!(json["category"], "Fashion");
}
