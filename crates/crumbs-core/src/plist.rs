//! XML property-list decoding.
//!
//! Safari keeps its bookmarks in a binary property list which `plutil` can
//! re-emit as XML (`plutil -convert xml1 -o - Bookmarks.plist`). This module
//! turns that XML into a [`PlistValue`] tree for the property-list source.
//!
//! ```rust
//! use crumbs_core::plist::{parse_xml, PlistValue};
//!
//! let value = parse_xml(
//!     "<plist version=\"1.0\"><dict><key>Title</key><string>Bar</string></dict></plist>",
//! )?;
//! assert_eq!(value.get("Title").and_then(PlistValue::as_str), Some("Bar"));
//! # Ok::<(), crumbs_core::Error>(())
//! ```

use std::collections::BTreeMap;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::{Error, Result};

/// Deepest `<dict>`/`<array>` nesting accepted by [`parse_xml`].
///
/// Decoded values are consumed recursively, so deeper documents are rejected
/// as malformed.
pub const MAX_NESTING: usize = 512;

/// A decoded property-list value.
#[derive(Debug, Clone, PartialEq)]
pub enum PlistValue {
    /// `<dict>`
    Dict(BTreeMap<String, PlistValue>),
    /// `<array>`
    Array(Vec<PlistValue>),
    /// `<string>`
    String(String),
    /// `<integer>`
    Integer(i64),
    /// `<real>`
    Real(f64),
    /// `<true/>` or `<false/>`
    Boolean(bool),
    /// `<data>`, kept as its base64 text
    Data(String),
    /// `<date>`, kept as its ISO 8601 text
    Date(String),
}

impl PlistValue {
    /// Value stored under `key` when this is a dictionary.
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_dict().and_then(|dict| dict.get(key))
    }

    /// String contents, if this is a `<string>`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Elements, if this is an `<array>`.
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Entries, if this is a `<dict>`.
    pub const fn as_dict(&self) -> Option<&BTreeMap<String, Self>> {
        match self {
            Self::Dict(dict) => Some(dict),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scalar {
    Key,
    String,
    Integer,
    Real,
    Data,
    Date,
}

impl Scalar {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "key" => Some(Self::Key),
            "string" => Some(Self::String),
            "integer" => Some(Self::Integer),
            "real" => Some(Self::Real),
            "data" => Some(Self::Data),
            "date" => Some(Self::Date),
            _ => None,
        }
    }
}

enum Frame {
    Dict {
        entries: BTreeMap<String, PlistValue>,
        pending_key: Option<String>,
    },
    Array(Vec<PlistValue>),
}

#[derive(Default)]
struct Decoder {
    stack: Vec<Frame>,
    scalar: Option<(Scalar, String)>,
    root: Option<PlistValue>,
}

impl Decoder {
    fn open(&mut self, tag: &str) -> Result<()> {
        let frame = match tag {
            "dict" => Frame::Dict {
                entries: BTreeMap::new(),
                pending_key: None,
            },
            "array" => Frame::Array(Vec::new()),
            _ => {
                if let Some(kind) = Scalar::from_tag(tag) {
                    self.scalar = Some((kind, String::new()));
                }
                return Ok(());
            },
        };

        if self.stack.len() == MAX_NESTING {
            return Err(Error::Parse(format!(
                "property list nested deeper than {MAX_NESTING} containers"
            )));
        }
        self.stack.push(frame);
        Ok(())
    }

    fn close(&mut self, tag: &str) -> Result<()> {
        match tag {
            "dict" | "array" => {
                let value = match self.stack.pop() {
                    Some(Frame::Dict { entries, .. }) => PlistValue::Dict(entries),
                    Some(Frame::Array(items)) => PlistValue::Array(items),
                    None => return Err(Error::Parse(format!("unbalanced </{tag}>"))),
                };
                self.emit(value);
            },
            "true" => self.emit(PlistValue::Boolean(true)),
            "false" => self.emit(PlistValue::Boolean(false)),
            _ => {
                if let Some((kind, text)) = self.scalar.take() {
                    self.finish_scalar(kind, text)?;
                }
            },
        }
        Ok(())
    }

    fn text(&mut self, text: &str) {
        if let Some((_, buf)) = self.scalar.as_mut() {
            buf.push_str(text);
        }
    }

    fn finish_scalar(&mut self, kind: Scalar, text: String) -> Result<()> {
        let value = match kind {
            Scalar::Key => {
                if let Some(Frame::Dict { pending_key, .. }) = self.stack.last_mut() {
                    *pending_key = Some(text);
                }
                return Ok(());
            },
            Scalar::String => PlistValue::String(text),
            Scalar::Integer => text
                .trim()
                .parse()
                .map(PlistValue::Integer)
                .map_err(|e| Error::Parse(format!("invalid <integer> '{text}': {e}")))?,
            Scalar::Real => text
                .trim()
                .parse()
                .map(PlistValue::Real)
                .map_err(|e| Error::Parse(format!("invalid <real> '{text}': {e}")))?,
            Scalar::Data => PlistValue::Data(text.split_whitespace().collect()),
            Scalar::Date => PlistValue::Date(text.trim().to_string()),
        };
        self.emit(value);
        Ok(())
    }

    fn emit(&mut self, value: PlistValue) {
        match self.stack.last_mut() {
            Some(Frame::Dict {
                entries,
                pending_key,
            }) => {
                // A value without a preceding <key> has nowhere to go.
                if let Some(key) = pending_key.take() {
                    entries.insert(key, value);
                }
            },
            Some(Frame::Array(items)) => items.push(value),
            None => {
                if self.root.is_none() {
                    self.root = Some(value);
                }
            },
        }
    }
}

fn tag_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).to_string()
}

/// Decode an XML property list into its root value.
///
/// # Errors
///
/// Returns [`Error::Parse`] for malformed XML, unbalanced containers,
/// containers nested deeper than [`MAX_NESTING`], unparseable numbers, or a
/// document that holds no value.
pub fn parse_xml(xml: &str) -> Result<PlistValue> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut decoder = Decoder::default();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => decoder.open(&tag_name(&e))?,
            Ok(Event::Empty(e)) => {
                let name = tag_name(&e);
                decoder.open(&name)?;
                decoder.close(&name)?;
            },
            Ok(Event::End(e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                decoder.close(&name)?;
            },
            Ok(Event::Text(e)) => {
                let text = e.unescape().map_err(|e| Error::Parse(e.to_string()))?;
                decoder.text(&text);
            },
            Ok(Event::CData(e)) => {
                decoder.text(&String::from_utf8_lossy(&e.into_inner()));
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Parse(format!("XML parse error: {e}"))),
            _ => {},
        }
        buf.clear();
    }

    if !decoder.stack.is_empty() {
        return Err(Error::Parse("unterminated property list".into()));
    }

    decoder
        .root
        .ok_or_else(|| Error::Parse("property list holds no value".into()))
}
