use chrono::prelude::*;

/// One parsed access log line in '%a %l %u %t "%r" %>s %b %D' format.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct LogEntry {
    pub received_at: DateTime<Utc>,
    pub status_code: u16,
    pub response_bytes: Option<u64>,
    pub latency_micros: u64,
}

impl LogEntry {
    pub fn from_log_line(log_line: &str) -> Result<LogEntry, &'static str> {
        // The quoted request line contains spaces, so cut the line at the
        // first and last quote before splitting the rest on whitespace.
        let open_quote = match log_line.find('"') {
            Some(index) => index,
            None => return Err("missing quoted request line"),
        };

        let close_quote = match log_line.rfind('"') {
            Some(index) if index > open_quote => index,
            _ => return Err("missing quoted request line"),
        };

        let head: Vec<&str> = log_line[..open_quote].split_whitespace().collect();

        // %a %l %u plus the bracketed timestamp, which splits in two
        if head.len() != 5 {
            return Err("expected client, identity, user and timestamp fields");
        }

        let timestamp = format!("{} {}", head[3], head[4]);

        if !timestamp.starts_with('[') || !timestamp.ends_with(']') {
            return Err("timestamp is not bracketed");
        }

        let received_at = match DateTime::parse_from_str(
            &timestamp[1..timestamp.len() - 1],
            "%d/%b/%Y:%H:%M:%S %z",
        ) {
            Ok(time) => time.with_timezone(&Utc),
            Err(_) => return Err("unparseable timestamp"),
        };

        let tail: Vec<&str> = log_line[close_quote + 1..].split_whitespace().collect();

        if tail.len() != 3 {
            return Err("expected status, response size and latency fields");
        }

        let status_code: u16 = match tail[0].parse() {
            Ok(number) => number,
            Err(_) => return Err("status code is not numeric"),
        };

        // An empty response is logged as '-', not 0
        let response_bytes = match tail[1] {
            "-" => None,
            bytes => match bytes.parse() {
                Ok(number) => Some(number),
                Err(_) => return Err("response size is not numeric"),
            },
        };

        let latency_micros: u64 = match tail[2].parse() {
            Ok(number) => number,
            Err(_) => return Err("latency is not numeric"),
        };

        Ok(LogEntry {
            received_at,
            status_code,
            response_bytes,
            latency_micros,
        })
    }

    /// The minute this entry belongs to: `received_at` with seconds and
    /// sub-second units zeroed. Idempotent.
    pub fn minute(&self) -> DateTime<Utc> {
        self.received_at
            .with_second(0)
            .and_then(|time| time.with_nanosecond(0))
            .unwrap_or(self.received_at)
    }

    /// The source treats 4xx and 5xx as errors and everything else,
    /// including 1xx and 3xx, as successful.
    pub fn is_error(&self) -> bool {
        self.status_code >= 400 && self.status_code < 600
    }
}
