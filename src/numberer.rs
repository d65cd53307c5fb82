//! The stamping orchestrator.
//!
//! [`PdfNumberer`] ties the renumbering engine to a loaded document: it
//! computes every page's label in one pass, then renders and merges a
//! stamp onto each numbered page. Ignored and skipped pages are left
//! byte-untouched.

use log::{debug, info};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};

use crate::config::NumberingConfig;
use crate::engine::renumber;
use crate::error::{Error, Result};
use crate::fonts::CoreFont;
use crate::geometry::Rect;
use crate::stamp::build_stamp;

/// Upper bound on `Parent` chain walks when resolving inherited page
/// attributes, to guard against cyclic page trees.
const PARENT_DEPTH_LIMIT: usize = 64;

/// Media box used when a page tree carries none at all.
const LETTER: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 612.0,
    height: 792.0,
};

/// Stamps sequential page numbers onto the pages of a document.
#[derive(Debug, Clone, Default)]
pub struct PdfNumberer {
    config: NumberingConfig,
}

impl PdfNumberer {
    /// Create a numberer with the given configuration.
    pub fn new(config: NumberingConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &NumberingConfig {
        &self.config
    }

    /// Add page number stamps to each numbered page of a document.
    ///
    /// Runs the renumbering engine exactly once over the full page
    /// sequence, then merges a rendered stamp onto every page with an
    /// assigned number. The document is mutated in place; it is not
    /// serialized here.
    pub fn stamp_page_numbers(&self, doc: &mut Document) -> Result<()> {
        let pages: Vec<(u32, ObjectId)> = doc.get_pages().into_iter().collect();
        let result = renumber(0..pages.len(), &self.config);

        let mut stamped = 0usize;
        for ((_, page_id), label) in pages.iter().zip(&result.labels) {
            let Some(number) = label.number() else {
                debug!("page {:?} is {:?}, left untouched", page_id, label);
                continue;
            };
            let text = self.config.stamp_format.render(number, result.total);
            let media = page_media_box(doc, *page_id)?;
            let font_key = register_stamp_font(doc, *page_id, self.config.font)?;
            let content = build_stamp(&text, media, &self.config, &font_key);
            append_content_stream(doc, *page_id, content)?;
            debug!("stamped page {:?} with '{}'", page_id, text);
            stamped += 1;
        }

        info!(
            "stamped {} of {} pages (total count {})",
            stamped,
            pages.len(),
            result.total,
        );
        Ok(())
    }
}

/// Follow indirect references until a direct object is reached.
fn resolved<'a>(doc: &'a Document, mut obj: &'a Object) -> Result<&'a Object> {
    let mut depth = 0;
    while let Object::Reference(id) = obj {
        if depth >= PARENT_DEPTH_LIMIT {
            return Err(Error::InvalidPage(id.0, id.1, "reference cycle".to_string()));
        }
        obj = doc.get_object(*id)?;
        depth += 1;
    }
    Ok(obj)
}

/// Look up a page attribute, falling back to inherited values along the
/// `Parent` chain per the PDF page tree rules.
fn find_inherited<'a>(
    doc: &'a Document,
    page_id: ObjectId,
    key: &[u8],
) -> Result<Option<&'a Object>> {
    let mut dict = doc.get_dictionary(page_id)?;
    for _ in 0..PARENT_DEPTH_LIMIT {
        if let Ok(obj) = dict.get(key) {
            return Ok(Some(obj));
        }
        match dict.get(b"Parent") {
            Ok(Object::Reference(parent)) => dict = doc.get_dictionary(*parent)?,
            _ => return Ok(None),
        }
    }
    Ok(None)
}

/// Resolve the effective media box of a page.
fn page_media_box(doc: &Document, page_id: ObjectId) -> Result<Rect> {
    let Some(obj) = find_inherited(doc, page_id, b"MediaBox")? else {
        return Ok(LETTER);
    };
    let array = resolved(doc, obj)?.as_array()?;
    if array.len() != 4 {
        return Err(Error::InvalidPage(
            page_id.0,
            page_id.1,
            format!("MediaBox has {} entries, expected 4", array.len()),
        ));
    }
    let mut corners = [0.0f32; 4];
    for (value, item) in corners.iter_mut().zip(array) {
        *value = match resolved(doc, item)? {
            Object::Integer(i) => *i as f32,
            Object::Real(r) => *r,
            _ => {
                return Err(Error::InvalidPage(
                    page_id.0,
                    page_id.1,
                    "non-numeric MediaBox entry".to_string(),
                ))
            }
        };
    }
    Ok(Rect::from_points(corners[0], corners[1], corners[2], corners[3]))
}

/// Make the stamp font available to a page and return its resource key.
///
/// The page's effective resources (own or inherited) are materialized as
/// a resolved copy on the page itself, so shared resource dictionaries of
/// unstamped pages are never mutated. An existing matching Type1 entry is
/// reused; otherwise a fresh `Fpn<n>` key that collides with nothing is
/// chosen.
fn register_stamp_font(doc: &mut Document, page_id: ObjectId, font: CoreFont) -> Result<String> {
    let mut resources: Dictionary = match find_inherited(doc, page_id, b"Resources")? {
        Some(obj) => resolved(doc, obj)?.as_dict()?.clone(),
        None => Dictionary::new(),
    };
    let mut fonts: Dictionary = match resources.get(b"Font") {
        Ok(obj) => resolved(doc, obj)?.as_dict()?.clone(),
        Err(_) => Dictionary::new(),
    };

    let key = match existing_font_key(doc, &fonts, font) {
        Some(key) => key,
        None => {
            let mut index = 0usize;
            let key = loop {
                let candidate = format!("Fpn{}", index);
                if !fonts.has(candidate.as_bytes()) {
                    break candidate;
                }
                index += 1;
            };
            fonts.set(
                key.clone(),
                Object::Dictionary(dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => font.base_font(),
                    "Encoding" => "WinAnsiEncoding",
                }),
            );
            key
        }
    };

    resources.set("Font", Object::Dictionary(fonts));
    let page = doc.get_object_mut(page_id)?.as_dict_mut()?;
    page.set("Resources", Object::Dictionary(resources));
    Ok(key)
}

/// Find a font resource entry that already names the stamp font.
fn existing_font_key(doc: &Document, fonts: &Dictionary, font: CoreFont) -> Option<String> {
    for (key, obj) in fonts.iter() {
        let Ok(Object::Dictionary(dict)) = resolved(doc, obj) else {
            continue;
        };
        let subtype = dict.get(b"Subtype").ok().and_then(|o| o.as_name().ok());
        let base = dict.get(b"BaseFont").ok().and_then(|o| o.as_name().ok());
        if subtype == Some(b"Type1".as_slice()) && base == Some(font.base_font().as_bytes()) {
            return Some(String::from_utf8_lossy(key).into_owned());
        }
    }
    None
}

/// Append a stamp content stream to a page, on top of its existing
/// content.
fn append_content_stream(doc: &mut Document, page_id: ObjectId, content: Vec<u8>) -> Result<()> {
    let previous = doc
        .get_object_mut(page_id)?
        .as_dict_mut()?
        .remove(b"Contents");

    let mut streams: Vec<Object> = match previous {
        Some(Object::Array(array)) => array,
        Some(reference @ Object::Reference(_)) => vec![reference],
        // Pages occasionally carry their content stream directly in the
        // page dictionary; move it into an indirect object so the stamp
        // can be appended alongside.
        Some(stream @ Object::Stream(_)) => vec![Object::Reference(doc.add_object(stream))],
        _ => Vec::new(),
    };
    let stamp_id = doc.add_object(Stream::new(dictionary! {}, content));
    streams.push(Object::Reference(stamp_id));

    let page = doc.get_object_mut(page_id)?.as_dict_mut()?;
    page.set("Contents", Object::Array(streams));
    Ok(())
}
