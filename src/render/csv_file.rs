use std::io;

use failure::Error;
use serde::Serialize;

use crate::analyzer::MinuteStats;

#[derive(Serialize)]
struct CsvRow {
    minute_start: String,
    total_requests: usize,
    success_count: usize,
    error_count: usize,
    mean_response_time: f64,
    data_sent_mb: f64,
}

/// Writes one header row and one row per minute window. `minute_start` is
/// rendered as RFC 3339 text so the CSV can be re-parsed unambiguously.
pub fn write_windows<W: io::Write>(stats: &[MinuteStats], destination: W) -> Result<(), Error> {
    let mut writer = csv::Writer::from_writer(destination);

    for window in stats {
        writer.serialize(CsvRow {
            minute_start: window.minute_start.to_rfc3339(),
            total_requests: window.total_requests,
            success_count: window.success_count,
            error_count: window.error_count,
            mean_response_time: window.mean_response_time,
            data_sent_mb: window.data_sent_mb,
        })?;
    }

    writer.flush()?;

    Ok(())
}
