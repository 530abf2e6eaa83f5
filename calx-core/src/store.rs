//! Storage seam for event sources.
//!
//! The engine never touches files directly; it goes through [`EventStore`],
//! which the host system can back however it likes. [`DirStore`] is the
//! directory-backed implementation: one subdirectory per scope, one `.calx`
//! file per source, source id `<scope>/<name>`.

use std::path::{Path, PathBuf};

use crate::error::CalxResult;

/// File extension of event sources on disk.
pub const SOURCE_EXTENSION: &str = "calx";

/// Which set of sources to enumerate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// The shared source set, visible to everyone.
    Global,
    /// The personal source set of one principal.
    Principal(String),
}

impl Scope {
    pub fn dir_name(&self) -> &str {
        match self {
            Scope::Global => "global",
            Scope::Principal(name) => name,
        }
    }
}

/// External storage collaborator for event source text.
///
/// Durability and write serialization are this collaborator's concern, not
/// the engine's.
pub trait EventStore {
    /// Full text content of a source. A source that does not exist reads as
    /// empty content, not as an error.
    fn read_source(&self, source: &str) -> CalxResult<String>;

    /// Ordered source ids for a scope. A scope with no sources yet lists as
    /// empty.
    fn list_sources(&self, scope: &Scope) -> CalxResult<Vec<String>>;

    /// Idempotent creation of an empty source.
    fn ensure_source_exists(&self, source: &str) -> CalxResult<()>;

    /// Replace a source's full text content.
    fn write_source(&self, source: &str, content: &str) -> CalxResult<()>;
}

/// Directory-backed store: `<root>/<scope>/<name>.calx`.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn source_path(&self, source: &str) -> PathBuf {
        self.root.join(format!("{source}.{SOURCE_EXTENSION}"))
    }
}

impl EventStore for DirStore {
    fn read_source(&self, source: &str) -> CalxResult<String> {
        let path = self.source_path(source);
        if !path.exists() {
            return Ok(String::new());
        }
        Ok(std::fs::read_to_string(path)?)
    }

    fn list_sources(&self, scope: &Scope) -> CalxResult<Vec<String>> {
        let dir = self.root.join(scope.dir_name());

        let Ok(entries) = std::fs::read_dir(&dir) else {
            return Ok(Vec::new());
        };

        let mut sources: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|e| e == SOURCE_EXTENSION))
            .filter_map(|path| {
                path.file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(|stem| format!("{}/{}", scope.dir_name(), stem))
            })
            .collect();

        sources.sort();
        Ok(sources)
    }

    fn ensure_source_exists(&self, source: &str) -> CalxResult<()> {
        let path = self.source_path(source);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        if !path.exists() {
            std::fs::write(&path, "")?;
        }
        Ok(())
    }

    fn write_source(&self, source: &str, content: &str) -> CalxResult<()> {
        let path = self.source_path(source);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        // Replace via rename so a concurrent reader never sees half a file.
        let tmp = path.with_extension(format!("{SOURCE_EXTENSION}.tmp"));
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }
}
