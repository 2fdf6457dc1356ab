//! Recursive descent engine for the XML subset

use crate::error::{Error, ErrorKind, Result, Span};
use crate::lexer::Cursor;
use crate::value::{Entry, Value};
use crate::xml::grammar;

/// Longest offending-input snippet attached to an error message
const SNIPPET_LEN: usize = 80;

/// Fail-fast parser for the XML subset
///
/// Consumes a whole in-memory document and produces a [`Value`] tree. The
/// grammar recognizes one leading `<?xml ...?>` declaration, open/close tags,
/// double-quoted attributes, and text runs; anything else is a fatal error.
#[derive(Debug)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new parser over a document
    pub const fn new(input: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    /// Parse the document into its value tree.
    ///
    /// Requires the declaration header first and nothing but whitespace after
    /// the root value.
    pub fn parse(&mut self) -> Result<Value> {
        self.cursor.skip_whitespace();
        match grammar::header(self.cursor.remaining()) {
            Some(len) => self.cursor.advance_by(len),
            None => return Err(self.error_here(ErrorKind::MissingHeader)),
        }
        let value = self.level(Vec::new())?;
        self.cursor.skip_whitespace();
        if !self.cursor.is_eof() {
            return Err(self.error_here(ErrorKind::TrailingInput));
        }
        Ok(value)
    }

    /// Parse one nesting level.
    ///
    /// `entries` seeds the level with the attributes of the tag that opened
    /// it; the root level starts empty. A level that opens no tag and carries
    /// no attributes is a bare text run.
    fn level(&mut self, mut entries: Vec<Entry>) -> Result<Value> {
        self.cursor.skip_whitespace();
        if entries.is_empty() && grammar::open_tag(self.cursor.remaining()).is_none() {
            let start = self.cursor.pos();
            self.cursor.advance_by(grammar::text(self.cursor.remaining()));
            let text = bytes_to_string(self.cursor.slice_from(start))?;
            return Ok(Value::Text(text));
        }

        while let Some(name) = grammar::open_tag(self.cursor.remaining()) {
            let tag = bytes_to_string(name)?;
            self.cursor.advance_by(1 + name.len());
            let attributes = self.attributes()?;
            let child = self.level(attributes)?;
            self.close(&tag)?;
            entries.push(Entry::new(tag, child));
            self.cursor.skip_whitespace();
        }

        Ok(Value::from_entries(entries))
    }

    /// Consume the attribute list of an open tag, up to and including `>`.
    ///
    /// Attributes must be separated from the tag name and from each other by
    /// whitespace.
    fn attributes(&mut self) -> Result<Vec<Entry>> {
        let mut attributes = Vec::new();
        loop {
            if self.cursor.consume(b'>') {
                break;
            }
            let before = self.cursor.pos();
            self.cursor.skip_whitespace();
            if self.cursor.consume(b'>') {
                break;
            }
            if self.cursor.pos() == before {
                return Err(self.error_here(ErrorKind::MalformedAttribute));
            }
            let Some(attr) = grammar::attribute(self.cursor.remaining()) else {
                return Err(self.error_here(ErrorKind::MalformedAttribute));
            };
            let name = bytes_to_string(attr.name)?;
            let value = bytes_to_string(attr.value)?;
            self.cursor.advance_by(attr.len);
            attributes.push(Entry::new(name, Value::Text(value)));
        }
        Ok(attributes)
    }

    /// Require the exact `</tag>` construct at the cursor.
    fn close(&mut self, tag: &str) -> Result<()> {
        self.cursor.skip_whitespace();
        match grammar::close_tag(self.cursor.remaining()) {
            Some((name, len)) if name == tag.as_bytes() => {
                self.cursor.advance_by(len);
                Ok(())
            }
            _ => Err(self.error_here(ErrorKind::MismatchedCloseTag {
                tag: tag.to_owned(),
            })),
        }
    }

    fn error_here(&self, kind: ErrorKind) -> Error {
        let pos = self.cursor.position();
        let message = format!("{kind}: {}", snippet(self.cursor.remaining()));
        Error::with_message(kind, Span::new(pos, pos), message)
    }
}

fn bytes_to_string(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|_| Error::with_message(ErrorKind::InvalidUtf8, Span::empty(), "invalid utf-8"))
}

fn snippet(input: &[u8]) -> String {
    let end = input.len().min(SNIPPET_LEN);
    let head = input.get(..end).unwrap_or(input);
    let mut text = String::from_utf8_lossy(head).into_owned();
    if input.len() > SNIPPET_LEN {
        text.push_str("...");
    }
    text
}
