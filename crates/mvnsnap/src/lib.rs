//! mvnsnap - Maven snapshot metadata parsing and newest-build resolution
//!
//! Parses the XML subset that Maven snapshot repositories publish their
//! `maven-metadata.xml` documents in, and projects version listings and
//! snapshot build records out of the resulting tree.
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), mvnsnap::Error> {
//! let doc = mvnsnap::from_str(
//!     "<?xml version=\"1.0\"?>\n<metadata><groupId>org.jruby</groupId></metadata>",
//! )?;
//! let group = doc.dig(&["metadata", "groupId"]).and_then(|v| v.as_text());
//! assert_eq!(group, Some("org.jruby"));
//! # Ok(())
//! # }
//! ```
//!
//! A nesting level with repeated sibling tags stays an ordered entry list
//! instead of collapsing to a map, so repeated `<version>` children are
//! preserved:
//!
//! ```
//! # fn main() -> Result<(), mvnsnap::Error> {
//! let doc = mvnsnap::from_str("<?xml version=\"1.0\"?>\n<a><b>1</b><b>2</b></a>")?;
//! let entries = doc.get("a").and_then(|v| v.as_list());
//! assert_eq!(entries.map(|e| e.len()), Some(2));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

use tracing::debug;

pub mod error;
pub use error::{Error, ErrorKind, Pos, Result, Span};

pub mod lexer;
pub use lexer::Cursor;

pub mod value;
pub use value::{Entries, Entry, Map, Value};

pub mod xml;
pub use xml::Parser;

pub mod metadata;
pub use metadata::SnapshotArtifact;

pub mod version;
pub use version::Version;

/// Parse a metadata document from a string
pub fn from_str(s: &str) -> Result<Value> {
    from_bytes(s.as_bytes())
}

/// Parse a metadata document from bytes
pub fn from_bytes(bytes: &[u8]) -> Result<Value> {
    debug!(len = bytes.len(), "parsing metadata document");
    let mut parser = Parser::new(bytes);
    parser.parse()
}
