use std::io::prelude::*;

use crate::analyzer::summary::SummaryAverages;

pub struct SummaryRenderer<'a> {
    stream: &'a mut dyn Write,
}

impl<'a> SummaryRenderer<'a> {
    pub fn new(stream: &'a mut dyn Write) -> SummaryRenderer {
        SummaryRenderer { stream }
    }

    pub fn render(&mut self, averages: &SummaryAverages) {
        let mut write =
            |text: String| { let _ = self.stream.write(format!("{}\n", text).as_bytes()); };

        let separator = "-".repeat(80);

        write(separator.clone());
        write(format!("Mean errors per min: {}", averages.mean_error_count));
        write(format!(
            "Mean successful requests per min: {}",
            averages.mean_success_count
        ));
        write(format!(
            "Mean response time in microseconds per min: {}",
            averages.mean_response_time
        ));
        write(format!("Mean MBs sent per min: {}", averages.mean_data_sent_mb));
        write(separator);
    }
}
