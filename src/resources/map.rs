//! Prefix-to-directory resource map
//!
//! Maps URL prefixes to trusted base directories and turns request paths into
//! candidate file paths confined to those directories.

use std::io;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use super::error::ResourceError;

/// A single registered mapping
#[derive(Debug, Clone, PartialEq, Eq)]
struct Mapping {
    prefix: String,
    base: String,
}

/// File located by [`ResourceMap::resolve`]
///
/// The path has only passed the string containment check. Whether it exists,
/// is a regular file or is a symlink is for the serving layer to decide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    pub path: PathBuf,
    /// Lower-cased extension without the dot
    pub extension: Option<String>,
}

impl ResolvedFile {
    fn new(path: String) -> Self {
        let path = PathBuf::from(path);
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        Self { path, extension }
    }
}

/// Ordered prefix table, built once at start-up and read-only afterwards.
///
/// Prefixes are matched as plain string prefixes in registration order and the
/// first match wins, even when a later prefix is longer.
#[derive(Debug, Clone, Default)]
pub struct ResourceMap {
    mappings: Vec<Mapping>,
}

impl ResourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `dir` under `prefix` and return its canonical form.
    ///
    /// The directory is canonicalized (symlinks followed, trailing separators
    /// stripped). Registering an existing prefix replaces its directory but
    /// keeps its position in the table.
    pub fn register_prefix(
        &mut self,
        prefix: &str,
        dir: impl AsRef<Path>,
    ) -> Result<String, ResourceError> {
        let dir = dir.as_ref();
        let canonical = dir
            .canonicalize()
            .map_err(|source| ResourceError::InvalidDirectory {
                path: dir.to_path_buf(),
                source,
            })?;

        let Some(canonical_str) = canonical.to_str() else {
            return Err(ResourceError::NonUtf8Path { path: canonical });
        };

        let base = canonical_str.trim_end_matches(MAIN_SEPARATOR);
        if base.is_empty() {
            // Only the filesystem root collapses to nothing
            return Err(ResourceError::InvalidDirectory {
                path: dir.to_path_buf(),
                source: io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "the filesystem root cannot be mapped",
                ),
            });
        }
        let base = base.to_string();

        match self.mappings.iter_mut().find(|m| m.prefix == prefix) {
            Some(existing) => existing.base.clone_from(&base),
            None => self.mappings.push(Mapping {
                prefix: prefix.to_string(),
                base: base.clone(),
            }),
        }

        Ok(base)
    }

    /// Alias of [`register_prefix`](Self::register_prefix) used by start-up code.
    pub fn add_path_mapping(
        &mut self,
        prefix: &str,
        dir: impl AsRef<Path>,
    ) -> Result<String, ResourceError> {
        self.register_prefix(prefix, dir)
    }

    /// Resolve a path relative to the mount point.
    ///
    /// Returns `None` when no prefix matches or when the candidate is not
    /// strictly inside the matched base directory. Only the first matching
    /// prefix is ever tried.
    pub fn resolve(&self, request_path: &str) -> Option<ResolvedFile> {
        let mapping = self
            .mappings
            .iter()
            .find(|m| request_path.starts_with(m.prefix.as_str()))?;

        let relative = collapse_dots(&request_path[mapping.prefix.len()..]);
        let candidate = format!("{}{}", mapping.base, relative);

        let mut root = String::with_capacity(mapping.base.len() + 1);
        root.push_str(&mapping.base);
        root.push(MAIN_SEPARATOR);

        if !candidate.starts_with(&root) {
            return None;
        }

        Some(ResolvedFile::new(candidate))
    }

    /// Registered `(prefix, base directory)` pairs in match order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.mappings
            .iter()
            .map(|m| (m.prefix.as_str(), m.base.as_str()))
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

/// Replace every run of two or more dots with a single dot.
fn collapse_dots(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_dot = false;
    for c in path.chars() {
        if c == '.' {
            if !prev_dot {
                out.push(c);
            }
            prev_dot = true;
        } else {
            out.push(c);
            prev_dot = false;
        }
    }
    out
}
