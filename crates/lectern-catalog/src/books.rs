//! The library's sample shelf: a fixed rotation over titles, authors and
//! genres so every run sees the same hundred books.
use chrono::NaiveDate;
use lectern_core::types::{BookFormat, BookStatus};
use lectern_core::Book;

pub const SHELF_SIZE: usize = 100;

const TITLES: [&str; 13] = [
    "To Kill a Mockingbird",
    "1984",
    "The Great Gatsby",
    "Pride and Prejudice",
    "The Catcher in the Rye",
    "To the Lighthouse",
    "Brave New World",
    "The Hobbit",
    "Lord of the Rings",
    "Dune",
    "Foundation",
    "Neuromancer",
    "Snow Crash",
];

const AUTHORS: [&str; 12] = [
    "Harper Lee",
    "George Orwell",
    "F. Scott Fitzgerald",
    "Jane Austen",
    "J.D. Salinger",
    "Virginia Woolf",
    "Aldous Huxley",
    "J.R.R. Tolkien",
    "Frank Herbert",
    "Isaac Asimov",
    "William Gibson",
    "Neal Stephenson",
];

pub const GENRES: [&str; 15] = [
    "Fiction",
    "Mystery",
    "Science Fiction",
    "Romance",
    "Fantasy",
    "Biography",
    "History",
    "Poetry",
    "Drama",
    "Children",
    "Young Adult",
    "Thriller",
    "Horror",
    "Classic",
    "Contemporary",
];

const FORMATS: [BookFormat; 4] =
    [BookFormat::Hardcover, BookFormat::Paperback, BookFormat::EBook, BookFormat::Audiobook];

const STATUSES: [BookStatus; 3] = [BookStatus::Available, BookStatus::Borrowed, BookStatus::Reserved];

pub fn generate(count: usize) -> Vec<Book> {
    (0..count).map(shelf_book).collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn shelf_book(i: usize) -> Book {
    let category = GENRES[i % GENRES.len()];
    let secondary = GENRES[(i * 7 + 3) % GENRES.len()];
    let tags = if secondary == category { Vec::new() } else { vec![secondary.to_string()] };

    let year = 1900 + ((i * 37) % 123) as i32;
    let month = ((i * 5) % 12) as u32 + 1;
    let day = ((i * 11) % 28) as u32 + 1;
    let publish_date = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default();

    Book {
        id: (i + 1) as u32,
        title: TITLES[i % TITLES.len()].to_string(),
        author: AUTHORS[i % AUTHORS.len()].to_string(),
        category: category.to_string(),
        tags,
        publish_date,
        format: FORMATS[i % FORMATS.len()],
        status: STATUSES[i % STATUSES.len()],
    }
}
