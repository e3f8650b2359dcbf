use clap::{App, Arg};
use failure::{err_msg, Error};

#[derive(PartialEq, Debug)]
pub struct Args {
    pub filename: String,
    pub output_csv: Option<String>,
    pub quiet: bool,
}

pub fn parse_args<'a, T>(args: T) -> Result<Args, Error>
where
    T: IntoIterator<Item = String>,
{
    let app = App::new("Access log stats")
        .author(crate_authors!())
        .version(crate_version!())
        .after_help(crate_description!())
        .arg(
            Arg::with_name("log_file")
                .index(1)
                .value_name("LOG_FILE")
                .required(true)
                .help("Access log to process, '.gz' files are read transparently")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("output_csv")
                .value_name("OUTPUT_CSV")
                .short("o")
                .long("output-csv")
                .help("Write the per-minute breakdown to OUTPUT_CSV")
                .takes_value(true),
        )
        .arg(Arg::with_name("quiet").short("q").long("quiet").help(
            "Don't output the summary to stdout",
        ))
        .get_matches_from(args);

    let filename = match app.value_of("log_file") {
        Some(value) => value.to_string(),
        None => return Err(err_msg("a log file argument is required")),
    };

    let output_csv = match app.value_of("output_csv") {
        Some(value) => Some(String::from(value)),
        None => None,
    };

    let quiet = app.is_present("quiet");

    Ok(Args {
        filename: filename,
        output_csv: output_csv,
        quiet: quiet,
    })
}
