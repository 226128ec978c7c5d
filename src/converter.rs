//! Frame to timestamp conversion
//!
//! Turns frame numbers into `MM:SS` timestamps using floor division by the
//! frame rate, and renders one `MM:SS label` line per marker.

use std::io::Write;

use crate::error::Result;
use crate::types::{FrameRate, Marker, Timestamp};

/// Whole seconds elapsed at `frame`, rounded down
pub fn total_seconds(frame: u64, rate: FrameRate) -> u64 {
    frame / u64::from(rate.get())
}

/// Convert a frame number to a minutes/seconds timestamp
pub fn to_timestamp(frame: u64, rate: FrameRate) -> Timestamp {
    Timestamp::from_total_seconds(total_seconds(frame, rate))
}

/// Render a single marker as `MM:SS label`
pub fn format_line(marker: &Marker, rate: FrameRate) -> String {
    let timestamp = to_timestamp(marker.frame, rate);
    tracing::debug!(
        frame = marker.frame,
        seconds = timestamp.total_seconds(),
        label = %marker.label,
        "Converted marker"
    );
    format!("{} {}", timestamp, marker.label)
}

/// Lines for every marker, in input order
pub fn timestamp_lines<'a>(
    markers: &'a [Marker],
    rate: FrameRate,
) -> impl Iterator<Item = String> + 'a {
    markers.iter().map(move |marker| format_line(marker, rate))
}

/// Write one newline-terminated line per marker
///
/// Returns the number of lines written.
pub fn write_timestamps<W: Write>(
    out: &mut W,
    markers: &[Marker],
    rate: FrameRate,
) -> Result<usize> {
    let mut written = 0;
    for line in timestamp_lines(markers, rate) {
        writeln!(out, "{}", line)?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}
