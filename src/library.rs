//! Pattern library loading.
//!
//! File format:
//!
//! ```json
//! { "prefabs": [ { "name": "Glider", "group": "Spaceships",
//!                  "grid": [[0, 1, 0], [0, 0, 1], [1, 1, 1]] } ] }
//! ```
//!
//! A broken entry is skipped; a missing or unparsable file yields an empty
//! catalog. Neither is fatal.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use macroquad::logging::{info, warn};
use serde::Deserialize;

use crate::domain::{Pattern, presets};

/// Errors that can occur while reading a pattern library.
#[derive(Debug)]
pub enum LibraryError {
    /// File system error
    Io(std::io::Error),
    /// The file is not a valid library document
    Json(serde_json::Error),
}

impl std::fmt::Display for LibraryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LibraryError::Io(e) => write!(f, "IO error: {}", e),
            LibraryError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for LibraryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LibraryError::Io(e) => Some(e),
            LibraryError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(e: std::io::Error) -> Self {
        LibraryError::Io(e)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(e: serde_json::Error) -> Self {
        LibraryError::Json(e)
    }
}

pub type LibraryResult<T> = Result<T, LibraryError>;

// Entries stay untyped until each is checked on its own, so one bad entry
// cannot fail the whole document.
#[derive(Deserialize)]
struct LibraryFile {
    #[serde(default)]
    prefabs: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct PrefabEntry {
    #[serde(default)]
    name: String,
    #[serde(default)]
    group: String,
    #[serde(default)]
    grid: Vec<Vec<u8>>,
}

impl PrefabEntry {
    fn into_pattern(self) -> Option<Pattern> {
        let rows: Vec<Vec<bool>> = self
            .grid
            .iter()
            .map(|row| row.iter().map(|&v| v != 0).collect())
            .collect();
        Pattern::from_matrix(self.name, self.group, &rows)
    }
}

/// Parse a library document, skipping malformed entries
pub fn parse_library(json: &str) -> LibraryResult<Vec<Pattern>> {
    let file: LibraryFile = serde_json::from_str(json)?;
    Ok(collect_patterns(file))
}

/// Load a library file, reporting why it could not be read
pub fn try_load_library<P: AsRef<Path>>(path: P) -> LibraryResult<Vec<Pattern>> {
    let reader = BufReader::new(File::open(path)?);
    let file: LibraryFile = serde_json::from_reader(reader)?;
    Ok(collect_patterns(file))
}

/// Load a library file; any failure degrades to an empty catalog
pub fn load_library<P: AsRef<Path>>(path: P) -> Vec<Pattern> {
    let path = path.as_ref();
    match try_load_library(path) {
        Ok(patterns) => {
            info!("loaded {} prefabs from {}", patterns.len(), path.display());
            patterns
        }
        Err(e) => {
            warn!("pattern library {} unavailable: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// The library's patterns, or the built-in presets if it has none
pub fn catalog_or_presets<P: AsRef<Path>>(path: P) -> Vec<Pattern> {
    let patterns = load_library(path);
    if patterns.is_empty() {
        presets::all_patterns()
    } else {
        patterns
    }
}

fn collect_patterns(file: LibraryFile) -> Vec<Pattern> {
    file.prefabs
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let pattern = serde_json::from_value::<PrefabEntry>(value)
                .ok()
                .and_then(PrefabEntry::into_pattern);
            if pattern.is_none() {
                warn!("skipping malformed prefab #{}", index);
            }
            pattern
        })
        .collect()
}
