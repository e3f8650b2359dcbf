#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use std::env;
use std::fs::File;
use std::io;
use std::process;

use failure::Error;
use flate2::read::GzDecoder;

mod analyzer;
mod args;
mod errors;
mod log_parser;
mod render;

fn open_input(filename: &str) -> Result<Box<dyn io::Read>, Error> {
    let file = File::open(filename)?;

    // Rotated logs usually end up gzipped, read them transparently
    if filename.ends_with(".gz") {
        Ok(Box::new(GzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}

fn run(args: &args::Args) -> Result<(), Error> {
    info!("reading and parsing {}", args.filename);
    let mut input = open_input(&args.filename)?;
    let entries = log_parser::parse(&mut input)?;

    let mut observer = analyzer::LogObserver;
    let stats = analyzer::analyze(entries, &mut observer)?;

    if let Some(ref path) = args.output_csv {
        info!("writing per-minute stats to {}", path);
        let file = File::create(path)?;
        render::csv_file::write_windows(&stats, file)?;
    }

    let averages = analyzer::summary::summarize(&stats)?;

    if !args.quiet {
        let mut stdout = io::stdout();
        let mut renderer = render::terminal::SummaryRenderer::new(&mut stdout);
        renderer.render(&averages);
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let args = match args::parse_args(env::args()) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    if let Err(err) = run(&args) {
        eprintln!("{}", err);
        process::exit(1);
    }
}
