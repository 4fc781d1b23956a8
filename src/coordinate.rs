//! Nine-dimensional coordinates and their arithmetic.
//!
//! A coordinate addresses a single scroll within a phext stream. The nine
//! components split into three triads: the Z triad (`library.shelf.series`)
//! is most significant, the Y triad (`collection.volume.book`) comes next,
//! and the X triad (`chapter.section.scroll`) is least significant, with
//! `scroll` as the leaf index.
//!
//! Coordinates are plain values. Scanning advances a local "walker" copy by
//! applying break mutations; callers that need a fixed address just keep
//! their own copy (the type is `Copy`).

use crate::breaks::Dimension;

/// The smallest value a coordinate component may hold.
pub const COORDINATE_MINIMUM: u32 = 1;
/// The largest value a coordinate component may hold.
pub const COORDINATE_MAXIMUM: u32 = 100;

/// A nine-dimensional address, `library` most significant and `scroll`
/// least. Field order matters: the derived `Ord` is the lexicographic
/// total order the whole engine relies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub library: u32,
    pub shelf: u32,
    pub series: u32,
    pub collection: u32,
    pub volume: u32,
    pub book: u32,
    pub chapter: u32,
    pub section: u32,
    pub scroll: u32,
}

impl Default for Coordinate {
    fn default() -> Coordinate {
        return Coordinate::home();
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(
            f,
            "{}.{}.{}/{}.{}.{}/{}.{}.{}",
            self.library,
            self.shelf,
            self.series,
            self.collection,
            self.volume,
            self.book,
            self.chapter,
            self.section,
            self.scroll
        );
    }
}

impl From<&str> for Coordinate {
    fn from(address: &str) -> Coordinate {
        return Coordinate::from_address(address);
    }
}

/// Saturating increment: a component advances by one but never reaches
/// the maximum, so streams can't walk an address out of range.
fn advance(index: u32) -> u32 {
    let next = index + 1;
    if next < COORDINATE_MAXIMUM {
        return next;
    }
    return index;
}

impl Coordinate {
    /// The canonical "home" address, `1.1.1/1.1.1/1.1.1`.
    pub fn home() -> Coordinate {
        return Coordinate {
            library: 1,
            shelf: 1,
            series: 1,
            collection: 1,
            volume: 1,
            book: 1,
            chapter: 1,
            section: 1,
            scroll: 1,
        };
    }

    /// Parse an address of the form `L.S.E/C.V.B/H.N.R`.
    ///
    /// Splits on `.`, `/`, and the URL-safe `;` into up to nine positional
    /// tokens. A token that is not a non-negative integer, or a missing
    /// trailing token, falls back to `1` for that component, so a fully
    /// non-numeric address parses to [`Coordinate::home`]. Parsing never
    /// fails.
    pub fn from_address(address: &str) -> Coordinate {
        let mut parts = [1u32; 9];
        for (i, token) in address.split(['.', '/', ';']).take(9).enumerate() {
            parts[i] = token.trim().parse().unwrap_or(1);
        }
        return Coordinate {
            library: parts[0],
            shelf: parts[1],
            series: parts[2],
            collection: parts[3],
            volume: parts[4],
            book: parts[5],
            chapter: parts[6],
            section: parts[7],
            scroll: parts[8],
        };
    }

    /// Render the address with `;` in place of `/`, safe for URL paths.
    pub fn to_urlencoded(&self) -> String {
        return self.to_string().replace('/', ";");
    }

    /// Check that every component lies within `[1, 100]`. Out-of-range
    /// coordinates are well-formed and usable; this is the only place
    /// that flags them.
    pub fn validate(&self) -> bool {
        return index_valid(self.library)
            && index_valid(self.shelf)
            && index_valid(self.series)
            && index_valid(self.collection)
            && index_valid(self.volume)
            && index_valid(self.book)
            && index_valid(self.chapter)
            && index_valid(self.section)
            && index_valid(self.scroll);
    }

    /// Apply the break mutation for the given dimension.
    pub fn apply_break(&mut self, dimension: Dimension) {
        match dimension {
            Dimension::Scroll => self.scroll_break(),
            Dimension::Section => self.section_break(),
            Dimension::Chapter => self.chapter_break(),
            Dimension::Book => self.book_break(),
            Dimension::Volume => self.volume_break(),
            Dimension::Collection => self.collection_break(),
            Dimension::Series => self.series_break(),
            Dimension::Shelf => self.shelf_break(),
            Dimension::Library => self.library_break(),
        }
    }

    pub fn library_break(&mut self) {
        self.library = advance(self.library);
        self.shelf = 1;
        self.series = 1;
        self.reset_y();
        self.reset_x();
    }

    pub fn shelf_break(&mut self) {
        self.shelf = advance(self.shelf);
        self.series = 1;
        self.reset_y();
        self.reset_x();
    }

    pub fn series_break(&mut self) {
        self.series = advance(self.series);
        self.reset_y();
        self.reset_x();
    }

    pub fn collection_break(&mut self) {
        self.collection = advance(self.collection);
        self.volume = 1;
        self.book = 1;
        self.reset_x();
    }

    pub fn volume_break(&mut self) {
        self.volume = advance(self.volume);
        self.book = 1;
        self.reset_x();
    }

    pub fn book_break(&mut self) {
        self.book = advance(self.book);
        self.reset_x();
    }

    pub fn chapter_break(&mut self) {
        self.chapter = advance(self.chapter);
        self.section = 1;
        self.scroll = 1;
    }

    pub fn section_break(&mut self) {
        self.section = advance(self.section);
        self.scroll = 1;
    }

    pub fn scroll_break(&mut self) {
        self.scroll = advance(self.scroll);
    }

    fn reset_y(&mut self) {
        self.collection = 1;
        self.volume = 1;
        self.book = 1;
    }

    fn reset_x(&mut self) {
        self.chapter = 1;
        self.section = 1;
        self.scroll = 1;
    }

    /// Emit the minimal break sequence that moves this coordinate forward
    /// to `other`, mutating `self` along the way.
    ///
    /// While `self` trails `other`, the most significant trailing dimension
    /// is broken and its byte emitted. This is the single authority for
    /// separator synthesis; everything that advances a stream position goes
    /// through it. If `other <= self` nothing is emitted: streams cannot
    /// rewind.
    pub fn advance_to(&mut self, other: Coordinate) -> String {
        let mut output = String::new();
        while *self < other {
            let dimension = if self.library < other.library {
                Dimension::Library
            } else if self.shelf < other.shelf {
                Dimension::Shelf
            } else if self.series < other.series {
                Dimension::Series
            } else if self.collection < other.collection {
                Dimension::Collection
            } else if self.volume < other.volume {
                Dimension::Volume
            } else if self.book < other.book {
                Dimension::Book
            } else if self.chapter < other.chapter {
                Dimension::Chapter
            } else if self.section < other.section {
                Dimension::Section
            } else {
                Dimension::Scroll
            };
            let before = *self;
            self.apply_break(dimension);
            // a saturated component can no longer advance; stop rather
            // than spin on an unreachable target
            if *self == before {
                break;
            }
            output.push(dimension.break_byte());
        }
        return output;
    }
}

fn index_valid(index: u32) -> bool {
    return index >= COORDINATE_MINIMUM && index <= COORDINATE_MAXIMUM;
}
