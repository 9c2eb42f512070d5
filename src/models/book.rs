use log::{debug, info};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Number of `Book` values currently alive in the process
static LIVE_BOOKS: AtomicUsize = AtomicUsize::new(0);

/// Latest publication year accepted by [`Book::set_publication_year`]
pub const MAX_PUBLICATION_YEAR: i32 = 2025;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    InvalidYear(i32),
    AlreadyBorrowed(String),
    NotBorrowed(String),
}

impl std::fmt::Display for BookError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookError::InvalidYear(year) => write!(f, "Invalid publication year: {}", year),
            BookError::AlreadyBorrowed(title) => write!(f, "'{}' is already borrowed", title),
            BookError::NotBorrowed(title) => write!(f, "'{}' is not borrowed", title),
        }
    }
}

impl std::error::Error for BookError {}

/// Library book with availability tracking
#[derive(Debug)]
pub struct Book {
    title: String,
    author: String,
    publication_year: i32,
    available: bool,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, publication_year: i32) -> Self {
        let book = Self {
            title: title.into(),
            author: author.into(),
            publication_year,
            available: true,
        };
        let live = LIVE_BOOKS.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Book '{}' created ({} live)", book.title, live);
        book
    }

    /// How many books exist right now
    pub fn live_count() -> usize {
        LIVE_BOOKS.load(Ordering::SeqCst)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn publication_year(&self) -> i32 {
        self.publication_year
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Empty titles are ignored
    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        if !title.is_empty() {
            self.title = title;
        }
    }

    /// Empty names are ignored
    pub fn set_author(&mut self, author: impl Into<String>) {
        let author = author.into();
        if !author.is_empty() {
            self.author = author;
        }
    }

    pub fn set_publication_year(&mut self, year: i32) -> Result<(), BookError> {
        if !(1..=MAX_PUBLICATION_YEAR).contains(&year) {
            return Err(BookError::InvalidYear(year));
        }
        self.publication_year = year;
        Ok(())
    }

    pub fn borrow_book(&mut self) -> Result<(), BookError> {
        if !self.available {
            return Err(BookError::AlreadyBorrowed(self.title.clone()));
        }
        self.available = false;
        info!("'{}' borrowed", self.title);
        Ok(())
    }

    pub fn return_book(&mut self) -> Result<(), BookError> {
        if self.available {
            return Err(BookError::NotBorrowed(self.title.clone()));
        }
        self.available = true;
        info!("'{}' returned", self.title);
        Ok(())
    }
}

impl Default for Book {
    fn default() -> Self {
        Self::new("Unknown title", "Unknown author", 0)
    }
}

impl Drop for Book {
    fn drop(&mut self) {
        let live = LIVE_BOOKS.fetch_sub(1, Ordering::SeqCst) - 1;
        debug!("Book '{}' dropped ({} live)", self.title, live);
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = if self.available { "available" } else { "borrowed" };
        write!(
            f,
            "{} by {} ({}) [{}]",
            self.title, self.author, self.publication_year, status
        )
    }
}
