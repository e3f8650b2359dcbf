use crate::errors::AnalyzerError;

use super::minute_stats::MinuteStats;

/// Arithmetic means of the per-minute statistics across all minutes.
#[derive(PartialEq, Debug)]
pub struct SummaryAverages {
    pub mean_error_count: f64,
    pub mean_success_count: f64,
    pub mean_response_time: f64,
    pub mean_data_sent_mb: f64,
}

pub fn summarize(stats: &[MinuteStats]) -> Result<SummaryAverages, AnalyzerError> {
    if stats.is_empty() {
        return Err(AnalyzerError::EmptyInput);
    }

    let count = stats.len() as f64;

    let mean =
        |select: fn(&MinuteStats) -> f64| stats.iter().map(select).sum::<f64>() / count;

    Ok(SummaryAverages {
        mean_error_count: mean(|stats| stats.error_count as f64),
        mean_success_count: mean(|stats| stats.success_count as f64),
        mean_response_time: mean(|stats| stats.mean_response_time),
        mean_data_sent_mb: mean(|stats| stats.data_sent_mb),
    })
}
