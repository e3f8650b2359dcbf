use std::mem;
use std::vec;

use crate::errors::AnalyzerError;
use crate::log_parser::LogEntry;

/// Single-pass iterator over chronologically sorted entries, yielding
/// maximal runs of entries that fall inside the same minute.
///
/// The input must already be sorted by `received_at`; with unsorted input
/// the same minute can show up in more than one run. Every yielded run
/// contains at least one entry.
pub struct MinuteWindows {
    entries: vec::IntoIter<LogEntry>,
    run: Vec<LogEntry>,
}

impl MinuteWindows {
    pub fn new(sorted_entries: Vec<LogEntry>) -> Result<MinuteWindows, AnalyzerError> {
        if sorted_entries.is_empty() {
            return Err(AnalyzerError::EmptyInput);
        }

        Ok(MinuteWindows {
            entries: sorted_entries.into_iter(),
            run: Vec::new(),
        })
    }
}

impl Iterator for MinuteWindows {
    type Item = Vec<LogEntry>;

    fn next(&mut self) -> Option<Vec<LogEntry>> {
        while let Some(entry) = self.entries.next() {
            let same_minute = match self.run.last() {
                Some(last) => last.minute() == entry.minute(),
                None => true,
            };

            if same_minute {
                self.run.push(entry);
            } else {
                let finished = mem::replace(&mut self.run, vec![entry]);
                return Some(finished);
            }
        }

        // The final run is emitted once the input is exhausted
        if self.run.is_empty() {
            None
        } else {
            Some(mem::replace(&mut self.run, Vec::new()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(line: &str) -> LogEntry {
        LogEntry::from_log_line(line).unwrap()
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let result = MinuteWindows::new(vec![]);

        assert_eq!(result.err(), Some(AnalyzerError::EmptyInput));
    }

    #[test]
    fn test_single_entry_yields_one_window() {
        let entries = vec![entry(
            "10.2.3.4 - - [10/Oct/2000:13:55:36 +0000] \"GET / HTTP/1.0\" 200 100 50",
        )];

        let windows: Vec<Vec<LogEntry>> = MinuteWindows::new(entries).unwrap().collect();

        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].len(), 1);
    }

    #[test]
    fn test_same_minute_entries_stay_in_one_window() {
        let entries = vec![
            entry("10.2.3.4 - - [10/Oct/2000:13:55:01 +0000] \"GET / HTTP/1.0\" 200 100 50"),
            entry("10.2.3.4 - - [10/Oct/2000:13:55:30 +0000] \"GET / HTTP/1.0\" 200 100 50"),
            entry("10.2.3.4 - - [10/Oct/2000:13:55:59 +0000] \"GET / HTTP/1.0\" 200 100 50"),
        ];

        let windows: Vec<Vec<LogEntry>> = MinuteWindows::new(entries).unwrap().collect();

        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].len(), 3);
    }

    #[test]
    fn test_minute_boundary_starts_a_new_window() {
        let entries = vec![
            entry("10.2.3.4 - - [10/Oct/2000:13:55:59 +0000] \"GET / HTTP/1.0\" 200 100 50"),
            entry("10.2.3.4 - - [10/Oct/2000:13:56:00 +0000] \"GET / HTTP/1.0\" 200 100 50"),
        ];

        let windows: Vec<Vec<LogEntry>> = MinuteWindows::new(entries).unwrap().collect();

        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].len(), 1);
        assert_eq!(windows[1].len(), 1);
    }

    #[test]
    fn test_final_window_is_emitted() {
        let entries = vec![
            entry("10.2.3.4 - - [10/Oct/2000:13:55:05 +0000] \"GET / HTTP/1.0\" 200 100 50"),
            entry("10.2.3.4 - - [10/Oct/2000:13:56:05 +0000] \"GET / HTTP/1.0\" 200 100 50"),
            entry("10.2.3.4 - - [10/Oct/2000:13:56:45 +0000] \"GET / HTTP/1.0\" 200 100 50"),
        ];

        let windows: Vec<Vec<LogEntry>> = MinuteWindows::new(entries).unwrap().collect();

        assert_eq!(windows.len(), 2);
        assert_eq!(windows[1].len(), 2);
    }

    #[test]
    fn test_all_windows_share_one_minute() {
        let entries = vec![
            entry("10.2.3.4 - - [10/Oct/2000:13:55:05 +0000] \"GET / HTTP/1.0\" 200 100 50"),
            entry("10.2.3.4 - - [10/Oct/2000:13:55:45 +0000] \"GET / HTTP/1.0\" 404 100 50"),
            entry("10.2.3.4 - - [10/Oct/2000:13:57:05 +0000] \"GET / HTTP/1.0\" 200 100 50"),
        ];

        for window in MinuteWindows::new(entries).unwrap() {
            let first_minute = window[0].minute();

            assert!(window.iter().all(|entry| entry.minute() == first_minute));
        }
    }
}
