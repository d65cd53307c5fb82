//! Built-in font families and width metrics for stamp text measurement.
//!
//! Page number stamps use the standard non-embedded Type1 core fonts, so
//! no font program ever has to be carried in the output document. The AFM
//! advance widths below (thousandths of an em, ASCII range) are needed to
//! anchor center- and right-aligned stamps at the correct x-coordinate.

use crate::error::{Error, Result};

/// Glyph advance widths for Helvetica, ASCII 0x20..=0x7e.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278,
    584, 584, 584, 556, 1015, 667, 667, 722, 722, 667, 611, 778, 722, 278,
    500, 667, 556, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 278, 278, 278, 469, 556, 333, 556, 556, 500, 556, 556,
    278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333, 500,
    278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Glyph advance widths for Times-Roman, ASCII 0x20..=0x7e.
#[rustfmt::skip]
const TIMES_WIDTHS: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333,
    250, 278, 500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278,
    564, 564, 564, 444, 921, 722, 667, 667, 722, 611, 556, 722, 722, 333,
    389, 722, 611, 889, 722, 722, 556, 722, 667, 556, 611, 722, 722, 944,
    722, 722, 611, 333, 278, 333, 469, 500, 333, 444, 500, 444, 500, 444,
    333, 500, 500, 278, 278, 500, 278, 778, 500, 500, 500, 500, 333, 389,
    278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

/// Fixed advance width for the monospaced Courier family.
const COURIER_WIDTH: u16 = 600;

/// One of the built-in Type1 core font families usable for stamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreFont {
    /// Helvetica (the default stamp font)
    Helvetica,
    /// Times-Roman
    TimesRoman,
    /// Courier
    Courier,
}

impl CoreFont {
    /// Resolve a user-supplied font family name, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_numbering::fonts::CoreFont;
    ///
    /// assert_eq!(CoreFont::parse("helvetica").unwrap(), CoreFont::Helvetica);
    /// assert_eq!(CoreFont::parse("Times-Roman").unwrap(), CoreFont::TimesRoman);
    /// assert!(CoreFont::parse("Comic Sans").is_err());
    /// ```
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "helvetica" => Ok(Self::Helvetica),
            "times" | "times-roman" => Ok(Self::TimesRoman),
            "courier" => Ok(Self::Courier),
            _ => Err(Error::UnknownFont(name.to_string())),
        }
    }

    /// The PostScript `BaseFont` name written into the font resource.
    pub fn base_font(self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::TimesRoman => "Times-Roman",
            Self::Courier => "Courier",
        }
    }

    /// Advance width of a single character in thousandths of an em.
    ///
    /// Characters outside the ASCII range fall back to the digit width,
    /// which is close enough for stamp anchoring purposes.
    fn char_width(self, c: char) -> u16 {
        if self == Self::Courier {
            return COURIER_WIDTH;
        }
        let table = match self {
            Self::Helvetica => &HELVETICA_WIDTHS,
            Self::TimesRoman => &TIMES_WIDTHS,
            Self::Courier => unreachable!(),
        };
        match u32::from(c) {
            cp @ 0x20..=0x7e => table[(cp - 0x20) as usize],
            _ => table[(u32::from('0') - 0x20) as usize],
        }
    }

    /// Measure a text run at the given font size, in points.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_numbering::fonts::CoreFont;
    ///
    /// // Helvetica digits are 556/1000 em wide.
    /// let width = CoreFont::Helvetica.text_width("42", 10.0);
    /// assert!((width - 11.12).abs() < 1e-3);
    /// ```
    pub fn text_width(self, text: &str, size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| u32::from(self.char_width(c))).sum();
        units as f32 * size / 1000.0
    }
}

impl Default for CoreFont {
    fn default() -> Self {
        Self::Helvetica
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(CoreFont::parse("HELVETICA").unwrap(), CoreFont::Helvetica);
        assert_eq!(CoreFont::parse("Courier").unwrap(), CoreFont::Courier);
        assert_eq!(CoreFont::parse("times").unwrap(), CoreFont::TimesRoman);
    }

    #[test]
    fn test_parse_unknown_family() {
        let err = CoreFont::parse("Wingdings").unwrap_err();
        assert!(matches!(err, Error::UnknownFont(name) if name == "Wingdings"));
    }

    #[test]
    fn test_base_font_names() {
        assert_eq!(CoreFont::Helvetica.base_font(), "Helvetica");
        assert_eq!(CoreFont::TimesRoman.base_font(), "Times-Roman");
        assert_eq!(CoreFont::Courier.base_font(), "Courier");
    }

    #[test]
    fn test_courier_is_monospaced() {
        let narrow = CoreFont::Courier.text_width("iii", 12.0);
        let wide = CoreFont::Courier.text_width("WWW", 12.0);
        assert_eq!(narrow, wide);
    }

    #[test]
    fn test_helvetica_is_proportional() {
        let narrow = CoreFont::Helvetica.text_width("iii", 12.0);
        let wide = CoreFont::Helvetica.text_width("WWW", 12.0);
        assert!(narrow < wide);
    }

    #[test]
    fn test_empty_text_has_zero_width() {
        assert_eq!(CoreFont::TimesRoman.text_width("", 32.0), 0.0);
    }

    #[test]
    fn test_width_scales_linearly_with_size() {
        let at_10 = CoreFont::Helvetica.text_width("123", 10.0);
        let at_20 = CoreFont::Helvetica.text_width("123", 20.0);
        assert!((at_20 - at_10 * 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_non_ascii_falls_back_to_digit_width() {
        let digit = CoreFont::Helvetica.text_width("1", 10.0);
        let other = CoreFont::Helvetica.text_width("\u{2014}", 10.0);
        assert_eq!(digit, other);
    }
}
