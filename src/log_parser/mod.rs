use std::io;
use std::io::BufRead;

use failure::Error;

use crate::errors::AnalyzerError;

pub mod log_events;
pub use self::log_events::LogEntry;

/// Reads the whole input and parses every line. The first line that does
/// not match the expected format aborts with a ParseError carrying its
/// 1-based line number; there is no per-line recovery.
pub fn parse(reader: &mut dyn io::Read) -> Result<Vec<LogEntry>, Error> {
    let input = io::BufReader::new(reader);

    let mut entries: Vec<LogEntry> = Vec::new();

    for (index, line) in input.lines().enumerate() {
        let line = line?;

        let entry = LogEntry::from_log_line(&line).map_err(|reason| {
            AnalyzerError::ParseError {
                line: index + 1,
                reason,
            }
        })?;

        entries.push(entry);
    }

    debug!("parsed {} log entries", entries.len());

    Ok(entries)
}
