//! SQLite-backed stores for the question bank and the result log.

pub mod question;
pub mod result;

pub use question::QuestionStore;
pub use result::ResultStore;
