use crate::error::TimestampError;
use chrono::NaiveDateTime;

/// Apache "Last modified" column, e.g. `02-Jan-2006 15:04`.
pub const LISTING_TIMESTAMP_FORMAT: &str = "%d-%b-%Y %H:%M";

pub fn parse_listing_timestamp(raw: &str, href: &str) -> Result<NaiveDateTime, TimestampError> {
    let text = raw.trim();
    NaiveDateTime::parse_from_str(text, LISTING_TIMESTAMP_FORMAT).map_err(|source| {
        TimestampError {
            href: href.to_string(),
            raw: text.to_string(),
            source,
        }
    })
}
