use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use crate::error::{PslErrorKind, Result, TldError};

use super::list::{Section, SuffixList};

/// Default download location of the list
pub const DEFAULT_PSL_URL: &str = "https://publicsuffix.org/list/public_suffix_list.dat";

/// Default file name of the cached list
pub const DEFAULT_PSL_FILENAME: &str = "public_suffix_list.dat";

/// Default update interval: 7 days
pub const DEFAULT_UPDATE_INTERVAL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Trait for loading Public Suffix List rules
pub trait PslLoader: Send + Sync {
    /// Load the current rules
    fn load(&self) -> Result<SuffixList>;

    /// Bring the underlying source up to date before the next `load`.
    ///
    /// Sources that cannot change do nothing.
    fn refresh(&self) -> Result<()> {
        Ok(())
    }
}

/// File-based PslLoader
pub struct FilePslLoader {
    path: Option<PathBuf>,
}

impl FilePslLoader {
    /// Create a new FilePslLoader
    pub fn new() -> Self {
        Self { path: None }
    }

    /// Set the list file path
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Default for FilePslLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl PslLoader for FilePslLoader {
    fn load(&self) -> Result<SuffixList> {
        let path = self.path.as_ref().ok_or_else(|| {
            TldError::psl(PslErrorKind::NotConfigured, "PSL path not configured")
        })?;

        let list = SuffixList::from_file(path)?;
        debug!(path = %path.display(), rules = list.len(), "Loaded suffix list");
        Ok(list)
    }
}

/// Nil PslLoader - returns errors for all operations
pub struct NilPslLoader;

impl PslLoader for NilPslLoader {
    fn load(&self) -> Result<SuffixList> {
        Err(TldError::psl(
            PslErrorKind::NotConfigured,
            "Public Suffix List not available",
        ))
    }

    fn refresh(&self) -> Result<()> {
        Err(TldError::psl(
            PslErrorKind::NotConfigured,
            "Public Suffix List not available",
        ))
    }
}

/// In-memory PslLoader for testing and embedded lists
#[derive(Debug, Clone, Default)]
pub struct MemoryPslLoader {
    list: SuffixList,
}

impl MemoryPslLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse list text in the `public_suffix_list.dat` format.
    pub fn from_text(text: &str) -> Self {
        Self {
            list: SuffixList::parse(text),
        }
    }

    pub fn from_list(list: SuffixList) -> Self {
        Self { list }
    }

    pub fn add_public(&mut self, rule: &str) {
        self.list.push(Section::Public, rule);
    }

    pub fn add_private(&mut self, rule: &str) {
        self.list.push(Section::Private, rule);
    }
}

impl PslLoader for MemoryPslLoader {
    fn load(&self) -> Result<SuffixList> {
        Ok(self.list.clone())
    }
}
