use failure::Fail;

/// Failures of the analysis pipeline itself. I/O problems are passed
/// through as `std::io::Error` and carry their own cause.
#[derive(Debug, Fail, PartialEq)]
pub enum AnalyzerError {
    #[fail(display = "line {} does not match the expected log format: {}", line, reason)]
    ParseError { line: usize, reason: &'static str },
    #[fail(display = "no log entries to analyze")]
    EmptyInput,
}
