use crate::error::TimestampError;
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Configuration {
    /// Listing page, also the prefix every href is appended to.
    #[serde(rename = "Segments4URL")]
    pub segments4_url: String,
    /// Destination root; hrefs are appended to it verbatim.
    #[serde(rename = "FilePath")]
    pub file_path: String,
}

/// One `<tr>` of the listing table, reduced to what the filter looks at.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingRow {
    pub cell_count: usize,
    pub timestamp_cell: Option<String>,
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DownloadTarget {
    pub href: String,
    pub timestamp: Result<NaiveDateTime, TimestampError>,
}

impl DownloadTarget {
    pub fn timestamp_or_zero(&self) -> NaiveDateTime {
        self.timestamp.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct DownloadReport {
    pub path: PathBuf,
    pub bytes: u64,
    pub status: reqwest::StatusCode,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub discovered: usize,
    pub downloaded: usize,
    pub failed: usize,
}
