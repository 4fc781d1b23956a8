//! The break-byte alphabet and the dimension classifier.
//!
//! Phext reserves ten control bytes, one per structural level plus a line
//! break kept for plain-text compatibility. The byte values are an interop
//! contract with existing phext documents (they repurpose legacy single-byte
//! control codes), so they are pinned here and nowhere else.

/// 11D break. Replaces start-of-header.
pub const LIBRARY_BREAK: char = '\x01';
/// 10D break. Replaces unit separator.
pub const SHELF_BREAK: char = '\x1F';
/// 9D break. Replaces record separator.
pub const SERIES_BREAK: char = '\x1E';
/// 8D break. Replaces group separator.
pub const COLLECTION_BREAK: char = '\x1D';
/// 7D break. Replaces file separator.
pub const VOLUME_BREAK: char = '\x1C';
/// 6D break. Replaces substitute.
pub const BOOK_BREAK: char = '\x1A';
/// 5D break. Replaces end-of-tape.
pub const CHAPTER_BREAK: char = '\x19';
/// 4D break. Replaces cancel-block.
pub const SECTION_BREAK: char = '\x18';
/// 3D break. Replaces end-transmission-block.
pub const SCROLL_BREAK: char = '\x17';
/// 2D break. Same as plain text.
pub const LINE_BREAK: char = '\n';
/// I've got a fever, and the only prescription is more cowbell.
pub const MORE_COWBELL: char = '\x07';

/// The break alphabet ordered least to most significant. The rank order is
/// itself a core invariant: `expand` and `contract` are rank shifts over
/// this table.
pub const BREAK_ALPHABET: [char; 10] = [
    LINE_BREAK,
    SCROLL_BREAK,
    SECTION_BREAK,
    CHAPTER_BREAK,
    BOOK_BREAK,
    VOLUME_BREAK,
    COLLECTION_BREAK,
    SERIES_BREAK,
    SHELF_BREAK,
    LIBRARY_BREAK,
];

/// The nine coordinate dimensions, least significant first.
///
/// Scanning dispatches on this enum rather than comparing raw bytes at every
/// call site, which keeps the byte-value contract in one place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    Scroll,
    Section,
    Chapter,
    Book,
    Volume,
    Collection,
    Series,
    Shelf,
    Library,
}

impl Dimension {
    /// Map a structural break byte to the dimension it advances.
    ///
    /// `LINE_BREAK` is not a structural break: it separates lines within a
    /// scroll and advances no dimension, so it classifies as `None`.
    pub fn classify(byte: char) -> Option<Dimension> {
        return match byte {
            SCROLL_BREAK => Some(Dimension::Scroll),
            SECTION_BREAK => Some(Dimension::Section),
            CHAPTER_BREAK => Some(Dimension::Chapter),
            BOOK_BREAK => Some(Dimension::Book),
            VOLUME_BREAK => Some(Dimension::Volume),
            COLLECTION_BREAK => Some(Dimension::Collection),
            SERIES_BREAK => Some(Dimension::Series),
            SHELF_BREAK => Some(Dimension::Shelf),
            LIBRARY_BREAK => Some(Dimension::Library),
            _ => None,
        };
    }

    /// The break byte that advances this dimension.
    pub fn break_byte(self) -> char {
        return match self {
            Dimension::Scroll => SCROLL_BREAK,
            Dimension::Section => SECTION_BREAK,
            Dimension::Chapter => CHAPTER_BREAK,
            Dimension::Book => BOOK_BREAK,
            Dimension::Volume => VOLUME_BREAK,
            Dimension::Collection => COLLECTION_BREAK,
            Dimension::Series => SERIES_BREAK,
            Dimension::Shelf => SHELF_BREAK,
            Dimension::Library => LIBRARY_BREAK,
        };
    }
}

/// Check whether a byte is any member of the break alphabet, line break
/// included.
pub fn is_phext_break(byte: char) -> bool {
    return BREAK_ALPHABET.contains(&byte);
}

/// Shift every break byte one dimension up: line breaks become scroll
/// breaks, scroll breaks become section breaks, and so on. Library breaks
/// have no more-significant counterpart and pass through unchanged.
pub fn expand(phext: &str) -> String {
    return phext.chars().map(promote).collect();
}

/// The exact inverse mapping of [`expand`]: every break byte drops one
/// dimension, with line breaks passing through unchanged.
pub fn contract(phext: &str) -> String {
    return phext.chars().map(demote).collect();
}

fn promote(byte: char) -> char {
    return match BREAK_ALPHABET.iter().position(|&b| b == byte) {
        Some(rank) if rank + 1 < BREAK_ALPHABET.len() => BREAK_ALPHABET[rank + 1],
        _ => byte,
    };
}

fn demote(byte: char) -> char {
    return match BREAK_ALPHABET.iter().position(|&b| b == byte) {
        Some(rank) if rank > 0 => BREAK_ALPHABET[rank - 1],
        _ => byte,
    };
}

/// Scan a stream for the cowbell marker.
pub fn check_for_cowbell(phext: &str) -> bool {
    return phext.chars().any(|c| c == MORE_COWBELL);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_covers_the_nine_dimensions() {
        for dimension in [
            Dimension::Scroll,
            Dimension::Section,
            Dimension::Chapter,
            Dimension::Book,
            Dimension::Volume,
            Dimension::Collection,
            Dimension::Series,
            Dimension::Shelf,
            Dimension::Library,
        ] {
            assert_eq!(Dimension::classify(dimension.break_byte()), Some(dimension));
        }
    }

    #[test]
    fn line_break_is_a_break_but_not_a_dimension() {
        assert!(is_phext_break(LINE_BREAK));
        assert_eq!(Dimension::classify(LINE_BREAK), None);
    }

    #[test]
    fn ordinary_text_is_not_a_break() {
        assert!(!is_phext_break('a'));
        assert!(!is_phext_break(MORE_COWBELL));
        assert_eq!(Dimension::classify('a'), None);
    }

    #[test]
    fn expand_promotes_each_break_one_dimension() {
        let doc = "nothing but line breaks\nto test expansion to scrolls\nline 3";
        let update1 = expand(doc);
        assert_eq!(update1, "nothing but line breaks\x17to test expansion to scrolls\x17line 3");

        let update2 = expand(&update1);
        assert_eq!(update2, "nothing but line breaks\x18to test expansion to scrolls\x18line 3");

        let update3 = expand(&update2);
        assert_eq!(update3, "nothing but line breaks\x19to test expansion to scrolls\x19line 3");

        let update4 = expand(&update3);
        assert_eq!(update4, "nothing but line breaks\x1Ato test expansion to scrolls\x1Aline 3");

        let update5 = expand(&update4);
        assert_eq!(update5, "nothing but line breaks\x1Cto test expansion to scrolls\x1Cline 3");

        let update6 = expand(&update5);
        assert_eq!(update6, "nothing but line breaks\x1Dto test expansion to scrolls\x1Dline 3");

        let update7 = expand(&update6);
        assert_eq!(update7, "nothing but line breaks\x1Eto test expansion to scrolls\x1Eline 3");

        let update8 = expand(&update7);
        assert_eq!(update8, "nothing but line breaks\x1Fto test expansion to scrolls\x1Fline 3");

        let update9 = expand(&update8);
        assert_eq!(update9, "nothing but line breaks\x01to test expansion to scrolls\x01line 3");

        // library breaks saturate
        let update10 = expand(&update9);
        assert_eq!(update10, "nothing but line breaks\x01to test expansion to scrolls\x01line 3");
    }

    #[test]
    fn expand_handles_every_dimension_at_once() {
        let doc = "AAA\n222\x17BBB\x18CCC\x19DDD\x1AEEE\x1CFFF\x1DGGG\x1EHHH\x1FIII\x01JJJ";
        let update = expand(doc);
        assert_eq!(update, "AAA\x17222\x18BBB\x19CCC\x1ADDD\x1CEEE\x1DFFF\x1EGGG\x1FHHH\x01III\x01JJJ");
    }

    #[test]
    fn contract_demotes_each_break_one_dimension() {
        let doc = "A more complex example than expand\x01----\x1F++++\x1E____\x1Doooo\x1C====\x1Azzzz\x19gggg\x18....\x17qqqq";
        let update1 = contract(doc);
        assert_eq!(
            update1,
            "A more complex example than expand\x1F----\x1E++++\x1D____\x1Coooo\x1A====\x19zzzz\x18gggg\x17....\x0Aqqqq"
        );

        let update2 = contract(&update1);
        assert_eq!(
            update2,
            "A more complex example than expand\x1E----\x1D++++\x1C____\x1Aoooo\x19====\x18zzzz\x17gggg\x0A....\x0Aqqqq"
        );
    }

    #[test]
    fn cowbell_detection() {
        assert!(check_for_cowbell("Hello\x07"));
        assert!(!check_for_cowbell("nope\x17just more scrolls"));
    }
}
