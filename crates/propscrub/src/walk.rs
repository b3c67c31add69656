//! Directory walker: mirrors scrubbed documents into an output tree

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, instrument, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};
use crate::scrub::scrub_bytes;
use crate::xml::Config;

/// Extension of candidate documents, matched case-insensitively
pub const EXTENSION: &str = "xml";

/// Where to read from, where to write to, and how to parse
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub parser: Config,
}

impl WalkConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            parser: Config::default(),
        }
    }

    pub fn with_parser(mut self, parser: Config) -> Self {
        self.parser = parser;
        self
    }
}

/// Per-run tallies
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Candidate documents looked at
    pub scanned: usize,
    /// Documents scrubbed and written to the output tree
    pub written: usize,
    /// Documents with no disallowed content
    pub untouched: usize,
    /// Documents that could not be read or parsed
    pub failed: usize,
}

/// Walks an input tree and writes scrubbed copies under the output root
#[derive(Clone, Debug)]
pub struct Walker {
    config: WalkConfig,
}

impl Walker {
    pub const fn new(config: WalkConfig) -> Self {
        Self { config }
    }

    /// Process every candidate document below the input root.
    ///
    /// A document that cannot be read or parsed is logged and skipped.
    /// Failing to create the output root or to write a scrubbed document
    /// stops the run, as does an output root equal to the input root.
    #[instrument(skip(self), fields(input = %self.config.input.display()))]
    pub fn run(&self) -> Result<WalkSummary> {
        let input = self.input_root()?;
        fs::create_dir_all(&self.config.output).map_err(|e| Error::io(&self.config.output, &e))?;
        let output = self
            .config
            .output
            .canonicalize()
            .map_err(|e| Error::io(&self.config.output, &e))?;
        if output == input {
            let err = io::Error::new(
                io::ErrorKind::InvalidInput,
                "output is the input directory; inputs are never rewritten in place",
            );
            return Err(Error::io(&self.config.output, &err));
        }

        info!("Scanning XML files in {}", input.display());

        // A separate output root nested in the input must not be rescanned
        let skip_output = output.starts_with(&input);
        let mut summary = WalkSummary::default();

        let entries = WalkDir::new(&input)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !(skip_output && entry.path().starts_with(&output)));

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Skipping unreadable entry: {err}");
                    continue;
                }
            };
            if !is_candidate(&entry) {
                continue;
            }

            summary.scanned += 1;
            self.process(entry.path(), &input, &output, &mut summary)?;
        }

        info!(
            scanned = summary.scanned,
            written = summary.written,
            untouched = summary.untouched,
            failed = summary.failed,
            "Finished {}",
            input.display()
        );
        Ok(summary)
    }

    fn input_root(&self) -> Result<PathBuf> {
        let input = &self.config.input;
        if !input.is_dir() {
            let err = io::Error::new(io::ErrorKind::NotFound, "input is not a directory");
            return Err(Error::io(input, &err));
        }
        input.canonicalize().map_err(|e| Error::io(input, &e))
    }

    fn process(
        &self,
        path: &Path,
        input: &Path,
        output: &Path,
        summary: &mut WalkSummary,
    ) -> Result<()> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                error!("Failed to read {}: {err}", path.display());
                summary.failed += 1;
                return Ok(());
            }
        };

        let (text, report) = match scrub_bytes(&bytes, self.config.parser) {
            Ok(Some(scrubbed)) => scrubbed,
            Ok(None) => {
                debug!("Untouched: {}", path.display());
                summary.untouched += 1;
                return Ok(());
            }
            Err(err) => {
                error!("XML parsing error in {}: {err}", path.display());
                summary.failed += 1;
                return Ok(());
            }
        };

        let Some(target) = mirror_path(input, output, path) else {
            warn!("{} is outside {}", path.display(), input.display());
            summary.failed += 1;
            return Ok(());
        };
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, &e))?;
        }
        fs::write(&target, text.as_bytes()).map_err(|e| Error::io(&target, &e))?;

        summary.written += 1;
        info!(
            "Scrubbed and copied: {} -> {} ({report})",
            path.display(),
            target.display()
        );
        Ok(())
    }
}

/// Anything but a directory whose extension is `xml` in any case.
/// Symlinks are judged by their target, so a link to a file is a candidate
/// and a dangling link fails on read.
fn is_candidate(entry: &DirEntry) -> bool {
    let is_dir = if entry.path_is_symlink() {
        entry.path().is_dir()
    } else {
        entry.file_type().is_dir()
    };
    !is_dir && has_xml_extension(entry.path())
}

pub fn has_xml_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(EXTENSION))
}

/// Map `path` under `input` to the same relative location under `output`.
pub fn mirror_path(input: &Path, output: &Path, path: &Path) -> Option<PathBuf> {
    path.strip_prefix(input).ok().map(|relative| output.join(relative))
}
