//! Input navigation for the parser

pub mod cursor;

pub use cursor::Cursor;
