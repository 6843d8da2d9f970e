use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while mirroring a listing.
///
/// `Config` and a failed listing fetch end the run; everything else is
/// scoped to a single download target.
#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("config {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("cannot create {path}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("writing {path} failed")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A listing timestamp that did not match `%d-%b-%Y %H:%M`.
///
/// Never fatal: the target is still downloaded.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("cannot parse latest update text {raw:?} for {href}")]
pub struct TimestampError {
    pub href: String,
    pub raw: String,
    #[source]
    pub source: chrono::ParseError,
}
