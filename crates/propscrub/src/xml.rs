//! XML loading and serialization

pub mod model;
pub mod parser;
pub mod writer;

pub use model::{Content, Document, Element};
pub use parser::{Config, Parser};
pub use writer::{to_string, DECLARATION};
