use crate::model::{DownloadTarget, ListingRow};
use crate::utils::parse_listing_timestamp;
use tracing::warn;

/// Href of the "Parent Directory" row on the segments4 listing.
pub const PARENT_DIRECTORY: &str = "/brouter/";

pub fn is_parent_directory(href: &str) -> bool {
    href == PARENT_DIRECTORY
}

/// Decide whether a listing row is a downloadable file.
///
/// Rows without cells, without a third cell, without a link, or linking to
/// the parent directory are dropped. A bad timestamp keeps the row.
pub fn target_from_row(row: &ListingRow) -> Option<DownloadTarget> {
    if row.cell_count == 0 {
        return None;
    }
    let raw_timestamp = row.timestamp_cell.as_deref()?;
    let href = row.href.as_deref()?;
    if href.is_empty() || is_parent_directory(href) {
        return None;
    }

    let timestamp = parse_listing_timestamp(raw_timestamp, href);
    if let Err(e) = &timestamp {
        warn!("{e}");
    }
    Some(DownloadTarget {
        href: href.to_string(),
        timestamp,
    })
}
