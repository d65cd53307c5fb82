//! Stamp pages in a PDF document with page numbers.
//!
//! Usage:
//!
//!   pdfnumber --output numbered.pdf input.pdf
//!   pdfnumber --first-number 5 --skip-pages 1 2 -o out.pdf input.pdf
//!   pdfnumber input.pdf > numbered.pdf

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use lopdf::Document;

use pdf_numbering::cli::{parse_args, CliCommand, CliOptions, USAGE};
use pdf_numbering::error::{Error, Result};
use pdf_numbering::numberer::PdfNumberer;

fn main() -> ExitCode {
    env_logger::init();

    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("pdfnumber: error: {}", err);
            return ExitCode::from(2);
        }
    };

    let options = match command {
        CliCommand::Version => {
            println!("pdfnumber {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        CliCommand::Help => {
            print!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        CliCommand::Run(options) => options,
    };

    // Refuse to write binary data to a terminal.
    if options.output.is_none() && io::stdout().is_terminal() {
        eprintln!("pdfnumber: error: --output must be specified or stdout redirected");
        return ExitCode::from(2);
    }

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("pdfnumber: error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(options: &CliOptions) -> Result<()> {
    let mut document = Document::load(&options.input)?;
    let numberer = PdfNumberer::new(options.config.clone());
    numberer.stamp_page_numbers(&mut document)?;

    match &options.output {
        Some(path) => {
            document.save(path)?;
        }
        None => {
            let mut buffer = Vec::new();
            document.save_to(&mut buffer)?;
            io::stdout()
                .write_all(&buffer)
                .map_err(Error::from)?;
        }
    }
    Ok(())
}
