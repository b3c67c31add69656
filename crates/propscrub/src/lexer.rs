//! Byte-level input navigation shared by the loader

pub mod cursor;

pub use cursor::Cursor;
