//! Infrastructure layer: upstream Zoho Books access and auth headers.

pub mod books;
pub mod token;

pub use books::{BooksClient, BooksError, BooksResult};
pub use token::{EnvTokenProvider, TokenError, TokenProvider};
