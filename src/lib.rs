//! Phext - a nine-dimensional text format addressed by coordinates.
//!
//! A phext stream is flat text in which reserved control bytes act as
//! dimension separators, encoding a hierarchical document (library, shelf,
//! series / collection, volume, book / chapter, section, scroll) without
//! ever materializing a tree. Every operation here is a pure function over
//! an immutable input stream: malformed addresses normalize to defaults,
//! out-of-range components saturate, and nothing rejects or fails.
//!
//! # Quick Start
//!
//! ```
//! use phext::coordinate::Coordinate;
//! use phext::editor;
//! use phext::locator;
//!
//! // Address the second scroll of the first chapter
//! let coord = Coordinate::from_address("1.1.1/1.1.1/1.1.2");
//!
//! // Insert creates the scroll, synthesizing the separators it needs
//! let doc = editor::insert("first scroll", coord, "second scroll");
//! assert_eq!(doc, "first scroll\x17second scroll");
//!
//! // Fetch reads it back without touching the rest of the stream
//! assert_eq!(locator::fetch(&doc, coord), "second scroll");
//! ```

pub mod breaks;
pub mod combinator;
pub mod coordinate;
pub mod editor;
pub mod indexer;
pub mod locator;
pub mod manifest;
pub mod navmap;
pub mod tokenizer;
