//! propscrub - strip blood props from variant XML documents
//!
//! A document is only rewritten when it holds at least one `<prop>` whose
//! `actor` contains `blood` (any case). Such a document then has:
//! - every matching prop removed, at any depth
//! - every `<props>` container left empty removed
//! - a `frequency="0"` default on every `<variant>` that had none
//! - empty containers, empty variants and useless groups pruned
//!
//! # Quick Start
//!
//! ```
//! use propscrub::scrub_str;
//! # fn main() -> Result<(), propscrub::Error> {
//! let input = r#"<variants>
//!   <group>
//!     <variant file="hero_skin.asset">
//!       <props><prop actor="blood_pool"/></props>
//!     </variant>
//!   </group>
//! </variants>"#;
//!
//! let output = scrub_str(input)?.unwrap_or_default();
//! assert!(output.contains(r#"<variant file="hero_skin.asset" frequency="0"/>"#));
//!
//! // Nothing to strip, nothing to write
//! assert_eq!(scrub_str("<variants><group/></variants>")?, None);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Pos, Result, Span};

pub mod lexer;

pub mod xml;
pub use xml::{
    Config as ParserConfig, Content as XmlContent, Document as XmlDocument, Element as XmlElement,
    Parser as XmlParser,
};

pub mod scrub;
pub use scrub::{scrub_bytes, scrub_document, scrub_str, Outcome, Report};

pub mod walk;
pub use walk::{WalkConfig, WalkSummary, Walker};

/// Parse XML from string
pub fn from_xml_str(s: &str) -> Result<XmlDocument> {
    let mut parser = XmlParser::new(s.as_bytes());
    parser.parse()
}

/// Parse XML from bytes
pub fn from_xml_bytes(bytes: &[u8]) -> Result<XmlDocument> {
    let mut parser = XmlParser::new(bytes);
    parser.parse()
}

/// Serialize a document with the standard declaration header
pub fn to_xml_string(doc: &XmlDocument) -> String {
    xml::to_string(doc)
}
