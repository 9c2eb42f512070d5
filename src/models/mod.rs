pub mod account;
pub mod book;
pub mod dog;
pub mod vector;
pub mod vehicle;

// Re-export commonly used types
pub use account::{AccountError, BankAccount};
pub use book::{Book, BookError};
pub use dog::{Dog, DogError};
pub use vector::Vector2D;
pub use vehicle::{Car, Engine, EngineError};
