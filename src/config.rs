//! Numbering configuration.
//!
//! [`NumberingConfig`] is the single immutable value object consumed by the
//! renumbering engine (`first_number`, `ignore_pages`, `skip_pages`) and by
//! the stamping orchestrator (everything else). It is constructed once per
//! run, validated up front, and never mutated afterwards.

use std::collections::HashSet;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::fonts::CoreFont;
use crate::geometry::Point;

/// Horizontal alignment of stamp text at its computed x-coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// The computed x-coordinate is the left edge of the text.
    #[default]
    Left,
    /// The computed x-coordinate is the center of the text.
    Center,
    /// The computed x-coordinate is the right edge of the text.
    Right,
}

impl Align {
    /// Resolve an alignment choice from its lowercase name.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(Error::InvalidArgument {
                argument: "--text-align".to_string(),
                reason: format!("expected left, center or right, got '{}'", name),
            }),
        }
    }
}

/// A stamp text template taking the page number and the total page count.
///
/// Templates contain at most two `{}` placeholders: the first receives the
/// assigned page number, the second the total count. All other characters
/// are literal. The default template `"{}"` renders the bare number.
///
/// # Examples
///
/// ```
/// use pdf_numbering::config::StampFormat;
///
/// let format = StampFormat::parse("Page {} of {}").unwrap();
/// assert_eq!(format.render(3, 10), "Page 3 of 10");
///
/// let bare = StampFormat::default();
/// assert_eq!(bare.render(7, 9), "7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampFormat {
    /// Literal fragments surrounding the placeholders; one more fragment
    /// than there are placeholders.
    fragments: Vec<String>,
}

impl StampFormat {
    /// Parse a template string, rejecting more than two placeholders.
    pub fn parse(template: &str) -> Result<Self> {
        let fragments: Vec<String> = template.split("{}").map(str::to_string).collect();
        if fragments.len() > 3 {
            return Err(Error::InvalidFormat {
                template: template.to_string(),
                reason: "at most two {} placeholders are supported".to_string(),
            });
        }
        Ok(Self { fragments })
    }

    /// Render the template with the assigned number and the total count.
    pub fn render(&self, number: i32, total: i32) -> String {
        let values = [number, total];
        let mut text = String::new();
        for (i, fragment) in self.fragments.iter().enumerate() {
            if i > 0 {
                text.push_str(&values[i - 1].to_string());
            }
            text.push_str(fragment);
        }
        text
    }
}

impl Default for StampFormat {
    fn default() -> Self {
        // Infallible: "{}" has exactly one placeholder.
        Self {
            fragments: vec![String::new(), String::new()],
        }
    }
}

/// Configuration for a page numbering run.
///
/// The numbering fields (`first_number`, `ignore_pages`, `skip_pages`,
/// `stamp_format`) drive the renumbering engine; the presentation fields
/// are consumed only when stamps are rendered. Page sets hold zero-based
/// page indexes.
#[derive(Debug, Clone)]
pub struct NumberingConfig {
    /// First number to assign (may be any integer).
    pub first_number: i32,
    /// Zero-based indexes of pages never counted and never stamped.
    pub ignore_pages: HashSet<usize>,
    /// Zero-based indexes of pages counted but never stamped.
    pub skip_pages: HashSet<usize>,
    /// Template for stamp text.
    pub stamp_format: StampFormat,
    /// Stamp text color.
    pub color: Color,
    /// Stamp font family.
    pub font: CoreFont,
    /// Stamp font size in points.
    pub font_size: f32,
    /// Horizontal alignment at the computed x-coordinate.
    pub align: Align,
    /// Stamp position offset in points. Non-negative offsets measure from
    /// the left/top page edge, negative ones from the right/bottom edge.
    pub position: Point,
    /// Page margin in points, added to the position away from zero.
    pub margin: Point,
}

impl NumberingConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        let font_size = 32.0;
        Self {
            first_number: 1,
            ignore_pages: HashSet::new(),
            skip_pages: HashSet::new(),
            stamp_format: StampFormat::default(),
            color: Color::default(),
            font: CoreFont::default(),
            font_size,
            align: Align::default(),
            position: Point::new(0.0, 0.0),
            margin: Self::default_margin(font_size),
        }
    }

    /// The default page margin for a given font size.
    ///
    /// The vertical margin grows with the font size so that larger stamps
    /// keep clear of the page edge; it never decreases as the size grows.
    pub fn default_margin(font_size: f32) -> Point {
        Point::new(28.0, 28.0 + (font_size / 2.0).floor())
    }

    /// Set the first number to assign.
    pub fn with_first_number(mut self, first_number: i32) -> Self {
        self.first_number = first_number;
        self
    }

    /// Set the pages excluded from counting and stamping (zero-based).
    pub fn with_ignore_pages(mut self, pages: impl IntoIterator<Item = usize>) -> Self {
        self.ignore_pages = pages.into_iter().collect();
        self
    }

    /// Set the pages excluded from stamping but still counted (zero-based).
    pub fn with_skip_pages(mut self, pages: impl IntoIterator<Item = usize>) -> Self {
        self.skip_pages = pages.into_iter().collect();
        self
    }

    /// Set the stamp text template.
    pub fn with_stamp_format(mut self, format: StampFormat) -> Self {
        self.stamp_format = format;
        self
    }

    /// Set the stamp text color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the stamp font family.
    pub fn with_font(mut self, font: CoreFont) -> Self {
        self.font = font;
        self
    }

    /// Set the stamp font size in points. The margin is left untouched.
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Set the horizontal alignment.
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set the stamp position offset in points.
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Set the page margin in points.
    pub fn with_margin(mut self, margin: Point) -> Self {
        self.margin = margin;
        self
    }
}

impl Default for NumberingConfig {
    fn default() -> Self {
        Self::new()
    }
}
