//! Stamp overlay rendering.
//!
//! Builds the PDF content stream for a single page number stamp. The
//! stream is self-contained (`q` .. `Q`) so it can be appended to a page's
//! existing content without disturbing its graphics state.
//!
//! # Placement
//!
//! Per axis, the configured margin is added to the position *away from
//! zero*: `position + sign(position) * margin`, with `sign(0)` treated as
//! positive. A non-negative effective offset measures from the left/top
//! page edge; a negative one wraps to the right/bottom edge, inward by the
//! margin. This lets one configuration anchor stamps near either page edge
//! purely by the sign of the position.

use crate::config::{Align, NumberingConfig};
use crate::geometry::Rect;

/// Add a margin to a position offset in the direction away from zero.
///
/// A zero offset counts as positive, so the default `(0, 0)` position
/// anchors exactly at the margin from the top-left page corner.
fn outward(position: f32, margin: f32) -> f32 {
    if position < 0.0 {
        position - margin
    } else {
        position + margin
    }
}

/// Resolve an effective offset against an edge-to-edge extent, wrapping
/// negative offsets to the far edge.
fn resolve(offset: f32, extent: f32) -> f32 {
    if offset < 0.0 {
        extent + offset
    } else {
        offset
    }
}

/// Escape special characters in a PDF literal string.
fn escape_pdf_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '(' => result.push_str("\\("),
            ')' => result.push_str("\\)"),
            '\\' => result.push_str("\\\\"),
            _ => result.push(c),
        }
    }
    result
}

/// Compute the text-space origin of a stamp on a page.
///
/// Returns the `(x, y)` passed to the `Td` operator: the baseline start of
/// the text run in PDF coordinates (origin at the bottom-left corner of
/// the media box).
pub fn stamp_origin(text: &str, media: Rect, config: &NumberingConfig) -> (f32, f32) {
    let effective_x = outward(config.position.x, config.margin.x);
    let effective_y = outward(config.position.y, config.margin.y);

    let anchor_x = media.left() + resolve(effective_x, media.width);
    // The vertical offset measures from the top edge down to the top of
    // the text, so the baseline sits one font size below it.
    let top_offset = resolve(effective_y, media.height);
    let baseline_y = media.top() - top_offset - config.font_size;

    let width = config.font.text_width(text, config.font_size);
    let x = match config.align {
        Align::Left => anchor_x,
        Align::Center => anchor_x - width / 2.0,
        Align::Right => anchor_x - width,
    };
    (x, baseline_y)
}

/// Build the content stream for one stamp.
///
/// `font_key` is the name under which the stamp font is registered in the
/// page's font resources.
pub fn build_stamp(text: &str, media: Rect, config: &NumberingConfig, font_key: &str) -> Vec<u8> {
    let (x, y) = stamp_origin(text, media, config);
    let (r, g, b) = config.color.to_components();

    let mut stream = String::new();
    stream.push_str("q\n");
    stream.push_str("BT\n");
    stream.push_str(&format!("/{} {} Tf\n", font_key, config.font_size));
    stream.push_str(&format!("{:.3} {:.3} {:.3} rg\n", r, g, b));
    stream.push_str(&format!("{:.2} {:.2} Td\n", x, y));
    stream.push_str(&format!("({}) Tj\n", escape_pdf_string(text)));
    stream.push_str("ET\n");
    stream.push_str("Q\n");
    stream.into_bytes()
}
