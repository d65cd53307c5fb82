//! Command line argument handling for the `pdfnumber` binary.
//!
//! Parsing lives in the library so the argument post-processing contracts
//! stay unit-testable, most importantly the page index convention: users
//! pass 1-based page numbers on the command line, while the engine works
//! with 0-based page indexes. The conversion happens here and nowhere
//! else.

use std::path::PathBuf;

use crate::color::Color;
use crate::config::{Align, NumberingConfig, StampFormat};
use crate::error::{Error, Result};
use crate::fonts::CoreFont;
use crate::geometry::Point;

/// Usage text printed for `--help`.
pub const USAGE: &str = "\
Usage: pdfnumber [OPTIONS] FILE

Stamp pages in a PDF document with page numbers.

Options:
  -v, --version             print version and exit
  -h, --help                print this help and exit
  -o, --output PATH         destination to write output to
                            (required unless stdout is redirected)

Numbering options:
  --first-number N          number to start counting from (default: 1)
  --ignore-pages PAGE...    pages that should not be counted
  --skip-pages PAGE...      pages that should not be stamped
  --stamp-format STRING     format string for stamp text, formatted with
                            page number and page count (default: \"{}\")

Styling options:
  --font-size PT            font size in points (default: 32)
  --font-family NAME        font family name (default: Helvetica)
  --text-color HEX          hexadecimal color code (default: #ff0000)

Placement options:
  --text-align ALIGN        left, center or right (default: left)
  --text-position X Y       position of page numbers, in points (default: 0 0)
  --page-margin X Y         margin at the page edges, in points
                            (default: adapts to font size)
";

/// A parsed command line invocation.
#[derive(Debug)]
pub enum CliCommand {
    /// Stamp a document with the given options.
    Run(CliOptions),
    /// Print the version and exit.
    Version,
    /// Print usage and exit.
    Help,
}

/// Fully processed options for a stamping run.
#[derive(Debug, Clone)]
pub struct CliOptions {
    /// The input PDF file.
    pub input: PathBuf,
    /// Output destination; stdout when absent.
    pub output: Option<PathBuf>,
    /// The validated numbering configuration.
    pub config: NumberingConfig,
}

fn missing_value(argument: &str) -> Error {
    Error::InvalidArgument {
        argument: argument.to_string(),
        reason: "expected a value".to_string(),
    }
}

fn parse_value<T: std::str::FromStr>(argument: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| Error::InvalidArgument {
        argument: argument.to_string(),
        reason: format!("invalid value '{}'", value),
    })
}

/// Convert user-facing 1-based page numbers to 0-based page indexes.
fn to_zero_based(pages: &[i64], argument: &str) -> Result<Vec<usize>> {
    pages
        .iter()
        .map(|&page| {
            if page < 1 {
                Err(Error::InvalidArgument {
                    argument: argument.to_string(),
                    reason: format!("pages are numbered from 1, got {}", page),
                })
            } else {
                Ok((page - 1) as usize)
            }
        })
        .collect()
}

/// Parse command line arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<CliCommand>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();

    let mut input: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut first_number = 1i32;
    let mut ignore_pages: Vec<i64> = Vec::new();
    let mut skip_pages: Vec<i64> = Vec::new();
    let mut stamp_format = "{}".to_string();
    let mut font_size = 32.0f32;
    let mut font_family = "Helvetica".to_string();
    let mut text_color = "#ff0000".to_string();
    let mut text_align = "left".to_string();
    let mut text_position = (0.0f32, 0.0f32);
    let mut page_margin: Option<(f32, f32)> = None;

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        // One positional value following the current flag.
        let value = |i: &mut usize| -> Result<String> {
            *i += 1;
            args.get(*i).cloned().ok_or_else(|| missing_value(arg))
        };
        match arg {
            "-v" | "--version" => return Ok(CliCommand::Version),
            "-h" | "--help" => return Ok(CliCommand::Help),
            "-o" | "--output" => output = Some(PathBuf::from(value(&mut i)?)),
            "--first-number" => {
                let v = value(&mut i)?;
                first_number = parse_value(arg, &v)?;
            }
            "--ignore-pages" | "--skip-pages" => {
                let pages = if arg == "--ignore-pages" {
                    &mut ignore_pages
                } else {
                    &mut skip_pages
                };
                // Greedy: consume integer values until the next flag or
                // positional argument.
                while let Some(next) = args.get(i + 1) {
                    let Ok(page) = next.parse::<i64>() else { break };
                    pages.push(page);
                    i += 1;
                }
            }
            "--stamp-format" => stamp_format = value(&mut i)?,
            "--font-size" => {
                let v = value(&mut i)?;
                font_size = parse_value(arg, &v)?;
            }
            "--font-family" => font_family = value(&mut i)?,
            "--text-color" => text_color = value(&mut i)?,
            "--text-align" => text_align = value(&mut i)?,
            "--text-position" | "--page-margin" => {
                let x = parse_value(arg, &value(&mut i)?)?;
                let y = parse_value(arg, &value(&mut i)?)?;
                if arg == "--text-position" {
                    text_position = (x, y);
                } else {
                    page_margin = Some((x, y));
                }
            }
            _ if arg.starts_with('-') && arg != "-" => {
                return Err(Error::InvalidArgument {
                    argument: arg.to_string(),
                    reason: "unknown argument".to_string(),
                });
            }
            _ => {
                if input.is_some() {
                    return Err(Error::InvalidArgument {
                        argument: arg.to_string(),
                        reason: "only one input file is expected".to_string(),
                    });
                }
                input = Some(PathBuf::from(arg));
            }
        }
        i += 1;
    }

    let Some(input) = input else {
        return Err(Error::InvalidArgument {
            argument: "FILE".to_string(),
            reason: "the input PDF file is required".to_string(),
        });
    };

    let color = Color::from_hex(&text_color).map_err(|err| Error::InvalidArgument {
        argument: "--text-color".to_string(),
        reason: err.to_string(),
    })?;

    // Adapt vertical margins to font size by default.
    let margin = match page_margin {
        Some((x, y)) => Point::new(x, y),
        None => NumberingConfig::default_margin(font_size),
    };

    let config = NumberingConfig::new()
        .with_first_number(first_number)
        .with_ignore_pages(to_zero_based(&ignore_pages, "--ignore-pages")?)
        .with_skip_pages(to_zero_based(&skip_pages, "--skip-pages")?)
        .with_stamp_format(StampFormat::parse(&stamp_format)?)
        .with_color(color)
        .with_font(CoreFont::parse(&font_family)?)
        .with_font_size(font_size)
        .with_align(Align::parse(&text_align)?)
        .with_position(Point::new(text_position.0, text_position.1))
        .with_margin(margin);

    Ok(CliCommand::Run(CliOptions {
        input,
        output,
        config,
    }))
}
