use crate::errors::AnalyzerError;
use crate::log_parser::LogEntry;

pub mod minute_stats;
pub mod minute_windows;
pub mod summary;

pub use self::minute_stats::MinuteStats;
use self::minute_windows::MinuteWindows;

/// Progress reporting hooks for the pipeline. The aggregation itself has
/// no side effects; whoever drives it decides how progress is rendered.
pub trait Observer {
    fn stage_start(&mut self, _name: &str) {}
    fn window_processed(&mut self, _stats: &MinuteStats) {}
}

/// Reports progress through the `log` macros.
pub struct LogObserver;

impl Observer for LogObserver {
    fn stage_start(&mut self, name: &str) {
        info!("starting to {}", name);
    }

    fn window_processed(&mut self, stats: &MinuteStats) {
        info!("processed entries starting at {}", stats.minute_start);
    }
}

/// Stable sort by the time the server received the request. Log lines are
/// written when the response completes, so slow requests show up late.
pub fn sort_chronologically(entries: &mut Vec<LogEntry>) {
    entries.sort_by_key(|entry| entry.received_at);
}

/// Runs the whole pipeline over parsed entries: sort chronologically,
/// partition into minute windows, aggregate each window in order.
pub fn analyze(
    mut entries: Vec<LogEntry>,
    observer: &mut dyn Observer,
) -> Result<Vec<MinuteStats>, AnalyzerError> {
    observer.stage_start("sort entries");
    sort_chronologically(&mut entries);

    observer.stage_start("process entries");
    let mut stats = Vec::new();

    for window in MinuteWindows::new(entries)? {
        let window_stats = minute_stats::aggregate(&window);
        observer.window_processed(&window_stats);
        stats.push(window_stats);
    }

    Ok(stats)
}
