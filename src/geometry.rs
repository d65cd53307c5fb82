//! Geometric primitives for stamp placement.
//!
//! This module provides the basic geometric types used when positioning
//! page number stamps on a page.

/// A 2D point or offset in page space, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_numbering::geometry::Point;
    ///
    /// let point = Point::new(10.0, 20.0);
    /// assert_eq!(point.x, 10.0);
    /// assert_eq!(point.y, 20.0);
    /// ```
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle in page space, typically a page media box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// X coordinate of the lower-left corner
    pub x: f32,
    /// Y coordinate of the lower-left corner
    pub y: f32,
    /// Width of rectangle
    pub width: f32,
    /// Height of rectangle
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from position and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_numbering::geometry::Rect;
    ///
    /// let rect = Rect::new(0.0, 0.0, 612.0, 792.0);
    /// assert_eq!(rect.width, 612.0);
    /// assert_eq!(rect.height, 792.0);
    /// ```
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from two corner points, as stored in a PDF
    /// `MediaBox` array.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_numbering::geometry::Rect;
    ///
    /// let rect = Rect::from_points(0.0, 0.0, 595.0, 842.0);
    /// assert_eq!(rect.width, 595.0);
    /// assert_eq!(rect.height, 842.0);
    /// ```
    pub fn from_points(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        }
    }

    /// Get the left edge x-coordinate.
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Get the right edge x-coordinate.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge y-coordinate.
    pub fn bottom(&self) -> f32 {
        self.y
    }

    /// Get the top edge y-coordinate.
    pub fn top(&self) -> f32 {
        self.y + self.height
    }
}
