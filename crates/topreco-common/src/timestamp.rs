//! Run timestamps of the form `YYYY-MM-DD_HHhMMmSSs`, in local time.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};
use topreco_types::ids;

use crate::error::TimestampError;

const FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]_[hour]h[minute]m[second]s");

/// Format `unix_secs` in the local timezone.
///
/// Falls back to UTC when the platform cannot report the local offset.
pub fn timestamp_to_string(unix_secs: i64) -> Result<String, TimestampError> {
    let utc = OffsetDateTime::from_unix_timestamp(unix_secs)
        .map_err(|_| TimestampError::OutOfRange { secs: unix_secs })?;
    let offset = UtcOffset::local_offset_at(utc).unwrap_or_else(|_| {
        tracing::warn!(secs = unix_secs, "local UTC offset unavailable, using UTC");
        UtcOffset::UTC
    });
    format_datetime(utc, offset, unix_secs)
}

/// Format `unix_secs` at a fixed `offset`.
pub fn format_timestamp_with_offset(
    unix_secs: i64,
    offset: UtcOffset,
) -> Result<String, TimestampError> {
    let utc = OffsetDateTime::from_unix_timestamp(unix_secs)
        .map_err(|_| TimestampError::OutOfRange { secs: unix_secs })?;
    format_datetime(utc, offset, unix_secs)
}

/// The current time, formatted in the local timezone.
pub fn now_timestamp() -> Result<String, TimestampError> {
    timestamp_to_string(OffsetDateTime::now_utc().unix_timestamp())
}

fn format_datetime(
    utc: OffsetDateTime,
    offset: UtcOffset,
    unix_secs: i64,
) -> Result<String, TimestampError> {
    let local = utc
        .checked_to_offset(offset)
        .ok_or(TimestampError::OutOfRange { secs: unix_secs })?;
    let rendered = local.format(FORMAT)?;
    if !is_timestamp_shape(&rendered) {
        return Err(TimestampError::Malformed { rendered });
    }
    Ok(rendered)
}

/// Whether `s` is exactly `DDDD-DD-DD_DDhDDmDDs` (D = ASCII digit).
pub fn is_timestamp_shape(s: &str) -> bool {
    let b = s.as_bytes();
    if b.len() != ids::TIMESTAMP_LEN {
        return false;
    }
    ids::TIMESTAMP_PATTERN
        .bytes()
        .zip(b)
        .all(|(pat, &c)| match pat {
            b'Y' | b'M' | b'D' | b'H' | b'S' => c.is_ascii_digit(),
            // Literal separators; the lowercase unit letters also land here.
            other => c == other,
        })
}
