//! # pdf_numbering
//!
//! Stamp pages in an existing PDF document with sequential page numbers.
//!
//! The crate walks the page sequence of a loaded document once, decides
//! for every page whether it receives a number and which one, then merges
//! a rendered stamp onto each numbered page. The numbering policy is
//! driven by two independent page selections:
//!
//! - **ignored** pages are neither counted nor stamped;
//! - **skipped** pages are counted but not stamped.
//!
//! A page in both sets behaves as ignored.
//!
//! ## Quick start
//!
//! ```no_run
//! use lopdf::Document;
//! use pdf_numbering::{NumberingConfig, PdfNumberer};
//!
//! # fn main() -> pdf_numbering::Result<()> {
//! let config = NumberingConfig::new()
//!     .with_first_number(1)
//!     .with_ignore_pages([0]); // don't count the cover page
//!
//! let mut document = Document::load("report.pdf")?;
//! PdfNumberer::new(config).stamp_page_numbers(&mut document)?;
//! document.save("report-numbered.pdf")?;
//! # Ok(())
//! # }
//! ```
//!
//! The numbering policy itself is available standalone through
//! [`engine::renumber`], a pure function from a page sequence and a
//! configuration to per-page labels and a total count.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Value types
pub mod color;
pub mod config;
pub mod fonts;
pub mod geometry;

// The numbering policy engine
pub mod engine;

// Stamp rendering and document merging
pub mod numberer;
pub mod stamp;

// Command line front-end
pub mod cli;

pub use color::Color;
pub use config::{Align, NumberingConfig, StampFormat};
pub use engine::{renumber, NumberingResult, PageLabel};
pub use error::{Error, Result};
pub use fonts::CoreFont;
pub use numberer::PdfNumberer;
