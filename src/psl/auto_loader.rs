use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::error::{PslErrorKind, Result, TldError};

use super::list::SuffixList;
use super::loader::{PslLoader, DEFAULT_PSL_FILENAME, DEFAULT_PSL_URL, DEFAULT_UPDATE_INTERVAL};

/// Logger callback type for logging list updates
type LoggerCallback = Box<dyn Fn(&str) + Send + Sync>;

/// PslLoader that keeps a local copy of the list and downloads a fresh one
/// when it is missing or older than the update interval.
pub struct AutoPslLoader {
    pub path: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub url: String,
    pub update_interval: Duration,
    pub logger: Option<LoggerCallback>,
    download_lock: Mutex<()>,
}

impl AutoPslLoader {
    /// Create a new AutoPslLoader
    pub fn new() -> Self {
        Self {
            path: None,
            data_dir: None,
            url: DEFAULT_PSL_URL.to_string(),
            update_interval: DEFAULT_UPDATE_INTERVAL,
            logger: None,
            download_lock: Mutex::new(()),
        }
    }

    /// Set data directory
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Set an explicit list file path (overrides the data directory)
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set custom download URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set update interval for checking file freshness
    /// Default is 7 days (DEFAULT_UPDATE_INTERVAL)
    pub fn with_update_interval(mut self, interval: Duration) -> Self {
        self.update_interval = interval;
        self
    }

    /// Set logger
    pub fn with_logger<F>(mut self, logger: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.logger = Some(Box::new(logger));
        self
    }

    fn log(&self, msg: &str) {
        if let Some(ref logger) = self.logger {
            logger(msg);
        }
    }

    /// Local list file path
    pub fn list_path(&self) -> PathBuf {
        if let Some(ref path) = self.path {
            return path.clone();
        }

        match self.data_dir {
            Some(ref dir) => dir.join(DEFAULT_PSL_FILENAME),
            None => PathBuf::from(DEFAULT_PSL_FILENAME),
        }
    }

    /// Check if file needs download
    fn should_download(&self, path: &Path) -> bool {
        match fs::metadata(path) {
            Ok(meta) => {
                if meta.len() == 0 {
                    return true;
                }
                match meta.modified() {
                    Ok(mtime) => SystemTime::now()
                        .duration_since(mtime)
                        .map(|d| d > self.update_interval)
                        .unwrap_or(true),
                    Err(_) => true,
                }
            }
            Err(_) => true,
        }
    }

    /// Download the list to `path`. Unless `force` is set, a fresh file is
    /// left alone.
    fn download(&self, path: &Path, force: bool) -> Result<()> {
        let _lock = self.download_lock.lock();

        // Double-check after acquiring lock
        if !force && !self.should_download(path) {
            return Ok(());
        }

        if self.url.is_empty() {
            return Err(TldError::ConfigError("download URL is empty".to_string()));
        }

        info!(path = %path.display(), url = %self.url, "Downloading suffix list");
        self.log(&format!("Downloading {} from {}", path.display(), self.url));

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Download to temporary file
        let tmp_path = path.with_extension("tmp");

        let response = ureq::get(&self.url).call().map_err(|e| {
            TldError::psl(PslErrorKind::DownloadFailed, format!("Download failed: {}", e))
        })?;

        let mut file = fs::File::create(&tmp_path)?;
        let (_, body) = response.into_parts();
        let mut reader = body.into_reader();
        std::io::copy(&mut reader, &mut file)?;
        file.flush()?;
        drop(file);

        // Verify the downloaded file
        if let Err(e) = SuffixList::verify_file(&tmp_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(TldError::psl(
                PslErrorKind::DownloadFailed,
                format!("Verification failed: {}", e),
            ));
        }

        fs::rename(&tmp_path, path)?;

        info!(path = %path.display(), "Downloaded suffix list");
        self.log(&format!("Downloaded {} successfully", path.display()));
        Ok(())
    }

    /// Ensure the list file exists, downloading it when stale.
    ///
    /// A failed download falls back to an existing file.
    fn ensure_downloaded(&self, force: bool) -> Result<PathBuf> {
        let path = self.list_path();
        debug!(path = %path.display(), "Checking suffix list file");

        if force || self.should_download(&path) {
            if let Err(e) = self.download(&path, force) {
                if !path.exists() {
                    return Err(e);
                }
                warn!(error = %e, "Suffix list download failed, using existing file");
                self.log(&format!("Download failed, using existing file: {}", e));
            }
        }

        Ok(path)
    }
}

impl Default for AutoPslLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl PslLoader for AutoPslLoader {
    fn load(&self) -> Result<SuffixList> {
        let path = self.ensure_downloaded(false)?;
        SuffixList::from_file(&path)
    }

    fn refresh(&self) -> Result<()> {
        self.ensure_downloaded(true).map(|_| ())
    }
}
