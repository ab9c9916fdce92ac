//! City repository loaded once from a flat text source.
//!
//! # Responsibility
//! - Read the source file and delegate line handling to `parse`.
//! - Keep the loaded cities and the diagnostics emitted while loading.
//!
//! # Invariants
//! - `load` always returns a repository, possibly empty.
//! - An unreadable source yields exactly one `SourceUnreadable` diagnostic.
//! - Cities keep input file order.

use crate::model::city::City;
use crate::parse::{parse_lines, ParseError};
use log::{error, info, warn};
use std::fmt::{Display, Formatter};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Operator-visible message produced while building a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadDiagnostic {
    /// Source could not be opened or read. The repository is empty.
    SourceUnreadable { path: PathBuf, message: String },
    /// One line was dropped because its population did not parse.
    InvalidPopulation { line_number: usize, error: ParseError },
}

impl Display for LoadDiagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SourceUnreadable { message, .. } => write!(f, "Error reading file: {message}"),
            Self::InvalidPopulation { error, .. } => {
                write!(f, "Error parsing population: {}", error.line())
            }
        }
    }
}

/// Read-only snapshot of every city parsed from one source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CityRepository {
    cities: Vec<City>,
    diagnostics: Vec<LoadDiagnostic>,
}

impl CityRepository {
    /// Loads cities from a file path.
    ///
    /// # Side effects
    /// - Reads the whole file once.
    /// - Emits `repo_load` logging events with counts and status.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let started_at = Instant::now();
        info!(
            "event=repo_load module=repo status=start source={}",
            path.display()
        );

        match std::fs::read_to_string(path) {
            Ok(text) => {
                let repo = Self::from_text(&text);
                info!(
                    "event=repo_load module=repo status=ok duration_ms={} cities={} rejected={}",
                    started_at.elapsed().as_millis(),
                    repo.cities.len(),
                    repo.diagnostics.len()
                );
                repo
            }
            Err(err) => {
                error!(
                    "event=repo_load module=repo status=error duration_ms={} error_code=source_unreadable error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Self::unreadable(path, err.to_string())
            }
        }
    }

    /// Loads cities from any byte reader, e.g. an open file or stdin.
    ///
    /// `label` names the source in the diagnostic when reading fails.
    pub fn from_reader(mut reader: impl Read, label: impl Into<PathBuf>) -> Self {
        let mut text = String::new();
        match reader.read_to_string(&mut text) {
            Ok(_) => Self::from_text(&text),
            Err(err) => {
                let label = label.into();
                error!(
                    "event=repo_load module=repo status=error error_code=source_unreadable source={} error={}",
                    label.display(),
                    err
                );
                Self::unreadable(label, err.to_string())
            }
        }
    }

    /// Builds a repository from the full text content of a source.
    pub fn from_text(text: &str) -> Self {
        let parsed = parse_lines(text.lines());
        let diagnostics = parsed
            .rejected
            .into_iter()
            .map(|rejected| {
                warn!(
                    "event=line_reject module=repo status=dropped line_number={} reason={}",
                    rejected.line_number, rejected.error
                );
                LoadDiagnostic::InvalidPopulation {
                    line_number: rejected.line_number,
                    error: rejected.error,
                }
            })
            .collect();

        Self {
            cities: parsed.cities,
            diagnostics,
        }
    }

    /// Wraps already-built cities without any diagnostics.
    pub fn from_cities(cities: Vec<City>) -> Self {
        Self {
            cities,
            diagnostics: Vec::new(),
        }
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn diagnostics(&self) -> &[LoadDiagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    fn unreadable(path: impl Into<PathBuf>, message: String) -> Self {
        Self {
            cities: Vec::new(),
            diagnostics: vec![LoadDiagnostic::SourceUnreadable {
                path: path.into(),
                message,
            }],
        }
    }
}
