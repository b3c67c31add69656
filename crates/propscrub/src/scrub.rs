//! Single-document scrubbing pipeline
//!
//! Filtering is the gate: a document without disallowed props is left
//! exactly as loaded, whatever else might be normalizable in it. Once the
//! filter fires, normalization and pruning always run.

pub mod filter;
pub mod marker;
pub mod normalize;
pub mod prune;
pub mod tags;

use std::fmt;

use tracing::{debug, instrument};

use crate::error::Result;
use crate::xml::{self, Config, Document, Parser};

pub use filter::{contains_disallowed, filter, FilterReport};
pub use marker::{is_disallowed, MARKER};
pub use normalize::normalize;
pub use prune::prune;
pub use tags::Tag;

/// Counts of what a scrub changed in one document
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub props_removed: usize,
    pub containers_removed: usize,
    pub frequencies_defaulted: usize,
    pub nodes_pruned: usize,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} props removed, {} props containers dropped, {} frequencies defaulted, {} nodes pruned",
            self.props_removed, self.containers_removed, self.frequencies_defaulted, self.nodes_pruned
        )
    }
}

/// Result of running the pipeline over one document
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// No disallowed content; the tree was not touched and nothing is written
    Untouched,
    /// Disallowed content was stripped and the tree renormalized
    Scrubbed(Report),
}

impl Outcome {
    pub const fn is_scrubbed(&self) -> bool {
        matches!(self, Self::Scrubbed(_))
    }
}

/// Filter, normalize and prune `doc` in place.
pub fn scrub_document(doc: &mut Document) -> Outcome {
    let filtered = filter(&mut doc.root);
    if !filtered.found {
        return Outcome::Untouched;
    }

    let frequencies_defaulted = normalize(&mut doc.root);
    let nodes_pruned = prune(&mut doc.root);

    Outcome::Scrubbed(Report {
        props_removed: filtered.props_removed,
        containers_removed: filtered.containers_removed,
        frequencies_defaulted,
        nodes_pruned,
    })
}

/// Parse `input`, scrub it and serialize the result.
///
/// Returns `Ok(None)` when the document holds no disallowed content.
pub fn scrub_str(input: &str) -> Result<Option<String>> {
    scrub_bytes(input.as_bytes(), Config::default()).map(|scrubbed| scrubbed.map(|(text, _)| text))
}

/// Byte-level form of [`scrub_str`] with an explicit parser configuration,
/// also handing back the [`Report`].
#[instrument(level = "trace", skip(input), fields(len = input.len()))]
pub fn scrub_bytes(input: &[u8], config: Config) -> Result<Option<(String, Report)>> {
    let mut doc = Parser::with_config(input, config).parse()?;
    match scrub_document(&mut doc) {
        Outcome::Untouched => {
            debug!("no disallowed content");
            Ok(None)
        }
        Outcome::Scrubbed(report) => {
            debug!(%report, "document scrubbed");
            Ok(Some((xml::to_string(&doc), report)))
        }
    }
}
