//! The book catalog.
//!
//! Maps any accepted spelling of a book (canonical name, display name, USFM
//! or OSIS code, roman-numeral and ordinal forms, registered aliases) to its
//! [`BookDescriptor`]. The catalog is validated when it is built and is
//! read-only afterwards, so it is shared freely behind an [`Arc`].

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use lectern_foundation::{Error, ProviderId, Result};

use crate::book::BookDescriptor;
use crate::data::BOOKS;

/// Normalizes a book name into its lookup key.
///
/// Keeps alphanumeric characters only, lower-cased, so `"1 John"`, `"1john"`
/// and `"1-John."` share a key.
#[must_use]
pub fn lookup_key(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Immutable, validated set of books.
#[derive(Clone, Debug)]
pub struct Catalog {
    books: Vec<Arc<BookDescriptor>>,
    index: HashMap<String, usize>,
}

static STANDARD: LazyLock<std::result::Result<Arc<Catalog>, String>> = LazyLock::new(|| {
    Catalog::new(standard_books())
        .map(Arc::new)
        .map_err(|e| e.to_string())
});

impl Catalog {
    /// Builds and validates a catalog.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCatalog` if a canonical name is empty or duplicated, a
    /// lookup key is shared by two books, a verse count is zero, or a
    /// verse-count entry lies beyond the book's chapter count.
    pub fn new(books: Vec<BookDescriptor>) -> Result<Self> {
        let mut index: HashMap<String, usize> = HashMap::new();

        for (position, book) in books.iter().enumerate() {
            let canonical = book.canonical_name();
            if canonical.trim().is_empty() {
                return Err(Error::invalid_catalog(format!(
                    "book at position {position} has an empty canonical name"
                )));
            }
            if books[..position]
                .iter()
                .any(|other| other.canonical_name() == canonical)
            {
                return Err(Error::invalid_catalog(format!(
                    "duplicate canonical name: {canonical}"
                )));
            }

            for (chapter, count) in book.verse_counts() {
                if count == 0 {
                    return Err(Error::invalid_catalog(format!(
                        "{canonical} chapter {chapter} has a zero verse count"
                    )));
                }
                if chapter == 0 || (book.chapter_count() > 0 && chapter > book.chapter_count()) {
                    return Err(Error::invalid_catalog(format!(
                        "{canonical} lists chapter {chapter} outside 1..={}",
                        book.chapter_count()
                    )));
                }
            }
            if book.default_verse_count() == 0 {
                return Err(Error::invalid_catalog(format!(
                    "{canonical} has a zero default verse count"
                )));
            }

            let names = std::iter::once(canonical)
                .chain(std::iter::once(book.localized_name()))
                .chain(book.aliases().iter().map(String::as_str));
            for name in names {
                let key = lookup_key(name);
                if key.is_empty() {
                    continue;
                }
                match index.get(&key) {
                    Some(&existing) if existing != position => {
                        return Err(Error::invalid_catalog(format!(
                            "lookup key {key:?} is shared by {} and {canonical}",
                            books[existing].canonical_name()
                        )));
                    }
                    Some(_) => {}
                    None => {
                        index.insert(key, position);
                    }
                }
            }
        }

        Ok(Self {
            books: books.into_iter().map(Arc::new).collect(),
            index,
        })
    }

    /// Returns the shared standard catalog of the 66-book canon.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCatalog` if the static tables fail validation.
    pub fn standard() -> Result<Arc<Self>> {
        (*STANDARD).clone().map_err(Error::invalid_catalog)
    }

    /// Looks up a book by any accepted spelling.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Arc<BookDescriptor>> {
        self.index
            .get(&lookup_key(name))
            .map(|&position| Arc::clone(&self.books[position]))
    }

    /// Looks up a book, or builds an unlisted descriptor for unknown names.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Arc<BookDescriptor> {
        self.lookup(name)
            .unwrap_or_else(|| Arc::new(BookDescriptor::unlisted(name)))
    }

    /// Iterates books in canonical order.
    pub fn books(&self) -> impl Iterator<Item = &BookDescriptor> {
        self.books.iter().map(|book| &**book)
    }

    /// Number of books.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns true if the catalog has no books.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

const ORDINALS: [(&str, &[&str]); 3] = [
    ("1 ", &["i ", "first "]),
    ("2 ", &["ii ", "second "]),
    ("3 ", &["iii ", "third "]),
];

/// Builds the descriptors of the standard catalog from the static table.
///
/// Provider codes: the public endpoint takes USFM codes, the keyed API takes
/// OSIS codes, and the scrape provider searches by display name.
#[must_use]
pub fn standard_books() -> Vec<BookDescriptor> {
    BOOKS
        .iter()
        .map(|record| {
            let mut book =
                BookDescriptor::new(record.canonical, record.name, record.testament, record.genre)
                    .with_verse_counts(record.verses)
                    .with_provider_code(ProviderId::PublicEndpoint, record.usfm)
                    .with_provider_code(ProviderId::KeyedApi, record.osis)
                    .with_provider_code(ProviderId::Scrape, record.name)
                    .with_alias(record.usfm)
                    .with_alias(record.osis);

            for alias in record.aliases {
                book = book.with_alias(*alias);
            }

            for (prefix, replacements) in ORDINALS {
                if let Some(rest) = record.name.strip_prefix(prefix) {
                    for replacement in replacements {
                        book = book.with_alias(format!("{replacement}{rest}"));
                    }
                }
            }

            book
        })
        .collect()
}
