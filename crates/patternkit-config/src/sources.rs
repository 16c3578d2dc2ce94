//! Pattern definition discovery.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use walkdir::WalkDir;

use crate::error::ConfigError;
use crate::loader::ConfigLoader;
use crate::schema::Config;

/// Where a pattern definition was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternOrigin {
    /// A `*.json` file; `index` is the position within the file when it holds an array.
    File { path: PathBuf, index: Option<usize> },
    /// The `[[patterns.inline]]` entry at this position.
    Inline(usize),
}

impl std::fmt::Display for PatternOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternOrigin::File { path, index: None } => write!(f, "{}", path.display()),
            PatternOrigin::File {
                path,
                index: Some(i),
            } => write!(f, "{}[{}]", path.display(), i),
            PatternOrigin::Inline(i) => write!(f, "patterns.inline[{}]", i),
        }
    }
}

/// An untyped pattern definition and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternDefinition {
    pub origin: PatternOrigin,
    pub definition: Value,
}

/// Read every `*.json` file below `dir`, in file name order.
///
/// A file holds either one definition object or an array of them.
pub fn load_pattern_dir(dir: &Path) -> Result<Vec<PatternDefinition>, ConfigError> {
    let mut definitions = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "json") {
            continue;
        }

        let content = fs::read_to_string(path)?;
        let value: Value =
            serde_json::from_str(&content).map_err(|source| ConfigError::PatternFile {
                path: path.display().to_string(),
                source,
            })?;

        match value {
            Value::Array(items) => {
                definitions.extend(items.into_iter().enumerate().map(|(i, definition)| {
                    PatternDefinition {
                        origin: PatternOrigin::File {
                            path: path.to_path_buf(),
                            index: Some(i),
                        },
                        definition,
                    }
                }));
            }
            definition => definitions.push(PatternDefinition {
                origin: PatternOrigin::File {
                    path: path.to_path_buf(),
                    index: None,
                },
                definition,
            }),
        }
    }

    Ok(definitions)
}

impl Config {
    /// Pattern directories with `~` expanded.
    pub fn pattern_directories(&self) -> Vec<PathBuf> {
        self.patterns
            .directories
            .iter()
            .map(|dir| PathBuf::from(ConfigLoader::expand_path(dir)))
            .collect()
    }

    /// All pattern definitions: directory files first, then inline entries.
    ///
    /// Directories that do not exist are skipped; the validator warns about them.
    pub fn pattern_definitions(&self) -> Result<Vec<PatternDefinition>, ConfigError> {
        let mut definitions = Vec::new();

        for dir in self.pattern_directories() {
            if dir.is_dir() {
                definitions.extend(load_pattern_dir(&dir)?);
            }
        }

        definitions.extend(
            self.patterns
                .inline
                .iter()
                .cloned()
                .enumerate()
                .map(|(i, definition)| PatternDefinition {
                    origin: PatternOrigin::Inline(i),
                    definition,
                }),
        );

        Ok(definitions)
    }
}
