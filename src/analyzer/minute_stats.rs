use chrono::prelude::*;

use crate::log_parser::LogEntry;

/// Aggregate statistics for one minute of log time.
#[derive(PartialEq, Clone, Debug)]
pub struct MinuteStats {
    pub minute_start: DateTime<Utc>,
    pub total_requests: usize,
    pub success_count: usize,
    pub error_count: usize,
    /// Mean time to serve a request, in microseconds.
    pub mean_response_time: f64,
    /// Decimal megabytes, bytes / 1 000 000.
    pub data_sent_mb: f64,
}

/// Folds one window of same-minute entries into its statistics.
/// The window must not be empty.
pub fn aggregate(window: &[LogEntry]) -> MinuteStats {
    let mut error_count = 0;
    let mut data_sent: u64 = 0;
    let mut total_response_time: u64 = 0;

    for entry in window {
        if entry.is_error() {
            error_count += 1;
        }

        // Entries without a response body carry no byte count at all
        data_sent += entry.response_bytes.unwrap_or(0);

        total_response_time += entry.latency_micros;
    }

    let total_requests = window.len();

    MinuteStats {
        minute_start: window[0].minute(),
        total_requests,
        success_count: total_requests - error_count,
        error_count,
        mean_response_time: total_response_time as f64 / total_requests as f64,
        data_sent_mb: data_sent as f64 / 1_000_000.0,
    }
}
