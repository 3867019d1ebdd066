//! Data models for the catalog

pub mod author;
pub mod book;
pub mod book_instance;
pub mod deck;
pub mod enums;
pub mod genre;

// Re-export commonly used types
pub use author::{Author, AuthorDetail, AuthorFields};
pub use book::{Book, BookDetail, BookFields, BookListItem, BookSummary};
pub use book_instance::{
    BookInstance, BookInstanceDetail, BookInstanceFields, BookInstanceListItem,
};
pub use deck::{Card, CardFields, Deck, DeckFields, MultipleChoice, MultipleChoiceFields};
pub use enums::InstanceStatus;
pub use genre::{Genre, GenreDetail, GenreFields};
