use crate::error::MirrorError;
use crate::model::{Configuration, DownloadReport, DownloadTarget};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::{Client, Response};
use std::fs::{DirBuilder, File};
use std::io::copy;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Blocking HTTP GET used for the listing page and for every file.
pub struct Fetcher {
    client: Client,
    strict_status: bool,
    progress: bool,
}

impl Fetcher {
    pub fn new(timeout: Option<Duration>, strict_status: bool) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::from_client(client, strict_status))
    }

    pub fn from_client(client: Client, strict_status: bool) -> Self {
        Self {
            client,
            strict_status,
            progress: true,
        }
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// GET `url`. A non-2xx answer is only logged unless `strict_status` is set.
    pub fn get(&self, url: &str) -> Result<Response, MirrorError> {
        debug!(url, "GET");
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|source| MirrorError::Network {
                url: url.to_string(),
                source,
            })?;
        let status = resp.status();
        if !status.is_success() {
            if self.strict_status {
                return Err(MirrorError::Status {
                    url: url.to_string(),
                    status,
                });
            }
            warn!(url, "{status}");
        }
        Ok(resp)
    }

    pub fn get_text(&self, url: &str) -> Result<String, MirrorError> {
        self.get(url)?.text().map_err(|source| MirrorError::Network {
            url: url.to_string(),
            source,
        })
    }

    fn progress_bar(&self, len: Option<u64>) -> ProgressBar {
        if !self.progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(len.unwrap_or(0));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40.cyan/blue} {bytes}/{total_bytes} {msg}")
                .unwrap(),
        );
        pb
    }
}

/// Remote URL of a target: plain concatenation, no separator cleanup.
pub fn target_url(config: &Configuration, href: &str) -> String {
    format!("{}{}", config.segments4_url, href)
}

/// Local path of a target: the href is appended to the root as-is.
pub fn target_path(config: &Configuration, href: &str) -> PathBuf {
    PathBuf::from(format!("{}{}", config.file_path, href))
}

/// rwxr-xr-x, before the umask.
pub const DIR_MODE: u32 = 0o755;

/// Create `dir` and its parents with [`DIR_MODE`].
pub fn ensure_dir(dir: &Path) -> Result<(), MirrorError> {
    create_dir_with_mode(dir, DIR_MODE)
}

fn create_dir_with_mode(dir: &Path, mode: u32) -> Result<(), MirrorError> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;
    builder.create(dir).map_err(|source| MirrorError::Filesystem {
        path: dir.to_path_buf(),
        source,
    })
}

/// Fetch one target and write it under the destination root.
///
/// A failed copy leaves the partial file behind.
pub fn download(
    fetcher: &Fetcher,
    target: &DownloadTarget,
    config: &Configuration,
) -> Result<DownloadReport, MirrorError> {
    let url = target_url(config, &target.href);
    let resp = fetcher.get(&url)?;
    let status = resp.status();

    ensure_dir(Path::new(&config.file_path))?;
    let path = target_path(config, &target.href);
    let mut out = File::create(&path).map_err(|source| MirrorError::Filesystem {
        path: path.clone(),
        source,
    })?;

    let pb = fetcher.progress_bar(resp.content_length());
    pb.set_message(target.href.clone());
    let mut reader = pb.wrap_read(resp);
    let result = copy(&mut reader, &mut out);
    pb.finish_and_clear();
    let bytes = result.map_err(|source| MirrorError::Io {
        path: path.clone(),
        source,
    })?;

    Ok(DownloadReport {
        path,
        bytes,
        status,
    })
}
